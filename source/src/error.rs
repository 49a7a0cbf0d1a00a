use std::io;
use std::path::PathBuf;

/// ошибки чтения исходных данных
#[derive(Debug, thiserror::Error)]
pub enum SourceError
{
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("incorrect data format at line {line}, {reason}: '{text}'")]
    MalformedRecord {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("incorrect symbol class {category} for symbol {code} at line {line}")]
    UnknownCategory {
        line: usize,
        category: String,
        code: String,
    },
}

impl SourceError
{
    pub(crate) fn malformed(line: usize, text: &str, reason: impl ToString) -> Self
    {
        Self::MalformedRecord {
            line,
            text: text.to_owned(),
            reason: reason.to_string(),
        }
    }

    /// ошибка ввода-вывода (а не формата данных)
    pub fn is_io(&self) -> bool
    {
        matches!(self, Self::Open { .. } | Self::Read { .. })
    }
}

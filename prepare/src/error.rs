use std::io;
use std::path::PathBuf;

use symbols_source::SourceError;

/// ошибка командной строки (выставляется clap)
pub const EXIT_USAGE: u8 = 2;
/// файл не открывается, не читается или не пишется
pub const EXIT_IO: u8 = 3;
/// строка с неверным количеством колонок или неверным кодом
pub const EXIT_MALFORMED_RECORD: u8 = 4;
/// неизвестная категория символа
pub const EXIT_UNKNOWN_CATEGORY: u8 = 5;

/// ошибки генерации таблиц
#[derive(Debug, thiserror::Error)]
pub enum GenerateError
{
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("cannot write '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError
{
    /// код завершения процесса для данной ошибки
    pub fn exit_code(&self) -> u8
    {
        match self {
            Self::Source(SourceError::MalformedRecord { .. }) => EXIT_MALFORMED_RECORD,
            Self::Source(SourceError::UnknownCategory { .. }) => EXIT_UNKNOWN_CATEGORY,
            Self::Source(SourceError::Open { .. } | SourceError::Read { .. }) => EXIT_IO,
            Self::Output { .. } => EXIT_IO,
        }
    }
}

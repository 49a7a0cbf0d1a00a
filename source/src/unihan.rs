use std::cmp::max;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SourceError;
use crate::properties::parse_code;

/// количество колонок в строке файлов Unihan
pub const FIELD_COUNT: usize = 3;
/// длина префикса перед кодом символа ("U+")
pub const PREFIX_LENGTH: usize = 2;

/// кодпоинты, встретившиеся в файле Unihan
#[derive(Debug, Default, Clone)]
pub struct UnihanData
{
    pub codes: HashSet<u32>,
    /// максимальный встретившийся кодпоинт
    pub max_code: u32,
}

impl UnihanData
{
    /// у иероглифа обычно несколько строк со свойствами, повторная вставка ничего не меняет
    pub fn insert(&mut self, code: u32)
    {
        self.max_code = max(self.max_code, code);
        self.codes.insert(code);
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.codes.contains(&code)
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.codes.is_empty()
    }
}

/// прочитать файл Unihan (например, Unihan_Readings.txt)
pub fn read(path: &Path) -> Result<UnihanData, SourceError>
{
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_owned(),
        source,
    })?;

    let data = parse(BufReader::new(file))?;

    tracing::debug!(
        path = %path.display(),
        ideographs = data.len(),
        max_code = %format!("{:#06X}", data.max_code),
        "unihan data parsed"
    );

    Ok(data)
}

/// строки вида "U+3400<TAB>kDefinition<TAB>...", комментарии (#) и пустые строки пропускаем
pub fn parse<R: BufRead>(reader: R) -> Result<UnihanData, SourceError>
{
    let mut data = UnihanData::default();

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| SourceError::Read {
            line: number,
            source,
        })?;
        let line = line.trim_end();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        data.insert(parse_line(line, number)?);
    }

    Ok(data)
}

/// код символа из строки данных
pub fn parse_line(line: &str, number: usize) -> Result<u32, SourceError>
{
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() != FIELD_COUNT {
        return Err(SourceError::malformed(
            number,
            line,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let digits = match fields[0].get(PREFIX_LENGTH ..) {
        Some(digits) => digits,
        None => return Err(SourceError::malformed(number, line, "code point prefix is missing")),
    };

    parse_code(digits).map_err(|e| SourceError::malformed(number, line, e))
}

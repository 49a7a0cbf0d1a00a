mod simple_case_mapping;
mod symbol_class;

pub use simple_case_mapping::SimpleCaseMapping;
pub use symbol_class::SymbolClass;

/// максимальный допустимый кодпоинт UTF-32
pub const MAX_LEGAL_UTF32: u32 = 0x10FFFF;

/// запись о символе из UnicodeData.txt
/// нас интересуют только колонки 0, 1, 2, 12, 13
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord
{
    /// код символа
    pub code: u32,
    /// название
    pub name: String,
    /// класс символа (general category)
    pub class: SymbolClass,
    /// соответствующая прописная буква
    pub simple_uppercase_mapping: SimpleCaseMapping,
    /// соответствующая строчная буква
    pub simple_lowercase_mapping: SimpleCaseMapping,
}

impl CharacterRecord
{
    #[inline]
    pub fn upper(&self) -> u32
    {
        self.simple_uppercase_mapping.resolve(self.code)
    }

    #[inline]
    pub fn lower(&self) -> u32
    {
        self.simple_lowercase_mapping.resolve(self.code)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PropertiesError
{
    #[error("unknown general category '{0}'")]
    UnknownCategory(String),
    #[error("invalid code point '{0}'")]
    InvalidCodepoint(String),
    #[error("code point {0:#X} is out of the Unicode range")]
    CodepointOutOfRange(u32),
}

/// разбор шестнадцатеричного кодпоинта
pub fn parse_code(value: &str) -> Result<u32, PropertiesError>
{
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PropertiesError::InvalidCodepoint(value.to_owned()));
    }

    let code = u32::from_str_radix(value, 16)
        .map_err(|_| PropertiesError::InvalidCodepoint(value.to_owned()))?;

    match code > MAX_LEGAL_UTF32 {
        true => Err(PropertiesError::CodepointOutOfRange(code)),
        false => Ok(code),
    }
}

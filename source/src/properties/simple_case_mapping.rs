use super::{parse_code, PropertiesError};

/// Simple Uppercase/Lowercase Mapping
/// берется из UCD: 12, 13 колонки UnicodeData.txt
///
/// соответствующая символу прописная/строчная буква, один символ
/// пустое поле - символ отображается сам в себя
///
/// более детально - https://www.unicode.org/reports/tr44/#Casemapping
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum SimpleCaseMapping
{
    #[default]
    None,
    Some(u32),
}

impl SimpleCaseMapping
{
    /// кодпоинт, в который отображается `code`
    #[inline]
    pub fn resolve(self, code: u32) -> u32
    {
        match self {
            Self::None => code,
            Self::Some(mapped) => mapped,
        }
    }

    #[inline]
    pub fn is_some(self) -> bool
    {
        matches!(self, Self::Some(_))
    }
}

impl TryFrom<&str> for SimpleCaseMapping
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value.is_empty() {
            true => Self::None,
            false => Self::Some(parse_code(value)?),
        })
    }
}

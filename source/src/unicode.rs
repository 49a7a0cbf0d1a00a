use std::cmp::max;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SourceError;
use crate::properties::*;

/// количество колонок в строке UnicodeData.txt
pub const FIELD_COUNT: usize = 15;

/// настройки разбора UnicodeData.txt
#[derive(Debug, Default, Clone, Copy)]
pub struct ParseOptions
{
    /// разворачивать диапазоны <..., First> ..= <..., Last> в отдельные кодпоинты
    pub expand_ranges: bool,
}

/// разобранный UnicodeData.txt
#[derive(Debug, Default, Clone)]
pub struct UnicodeData
{
    /// записи о символах
    pub records: HashMap<u32, CharacterRecord>,
    /// максимальный встретившийся кодпоинт
    pub max_code: u32,
}

impl UnicodeData
{
    /// повторная запись о том же кодпоинте заменяет предыдущую
    pub fn insert(&mut self, record: CharacterRecord)
    {
        self.max_code = max(self.max_code, record.code);
        self.records.insert(record.code, record);
    }

    #[inline]
    pub fn get(&self, code: u32) -> Option<&CharacterRecord>
    {
        self.records.get(&code)
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.records.is_empty()
    }
}

/// прочитать UnicodeData.txt, файл закрывается до возврата из функции
pub fn read(path: &Path, options: ParseOptions) -> Result<UnicodeData, SourceError>
{
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_owned(),
        source,
    })?;

    let data = parse(BufReader::new(file), options)?;

    tracing::debug!(
        path = %path.display(),
        records = data.len(),
        max_code = %format!("{:#06X}", data.max_code),
        "unicode data parsed"
    );

    Ok(data)
}

/// разбор UnicodeData.txt из UCD и составление хешмапа записей о символах
pub fn parse<R: BufRead>(reader: R, options: ParseOptions) -> Result<UnicodeData, SourceError>
{
    let mut data = UnicodeData::default();

    // пригодится, когда встретим диапазоны
    let mut range_start: Option<CharacterRecord> = None;

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| SourceError::Read {
            line: number,
            source,
        })?;
        let line = line.trim_end_matches(['\r', '\n']);

        if line.is_empty() {
            continue;
        }

        let record = parse_record(line, number)?;

        if !options.expand_ranges {
            data.insert(record);
            continue;
        }

        if is_range_first(&record.name) {
            // два First подряд - первый остается одиночной записью
            if let Some(dangling) = range_start.replace(record) {
                data.insert(dangling);
            }

            continue;
        }

        if is_range_last(&record.name) {
            if let Some(first) = range_start.take() {
                if range_group(&first.name, ", First>") != range_group(&record.name, ", Last>") {
                    return Err(SourceError::malformed(
                        number,
                        line,
                        format!("range end does not match range start '{}'", first.name),
                    ));
                }

                if record.code < first.code {
                    return Err(SourceError::malformed(
                        number,
                        line,
                        format!("range end precedes range start {:04X}", first.code),
                    ));
                }

                expand_range(&mut data, first, record.code);

                continue;
            }
        }

        data.insert(record);
    }

    if let Some(dangling) = range_start {
        data.insert(dangling);
    }

    Ok(data)
}

/// разбор одной строки UnicodeData.txt
pub fn parse_record(line: &str, number: usize) -> Result<CharacterRecord, SourceError>
{
    let props: Vec<&str> = line.split(';').collect();

    if props.len() != FIELD_COUNT {
        return Err(SourceError::malformed(
            number,
            line,
            format!("expected {} fields, found {}", FIELD_COUNT, props.len()),
        ));
    }

    // код и название
    let code = parse_code(props[0]).map_err(|e| SourceError::malformed(number, line, e))?;
    let name = props[1].to_owned();

    // класс символа
    let class = SymbolClass::try_from(props[2]).map_err(|_| SourceError::UnknownCategory {
        line: number,
        category: props[2].to_owned(),
        code: props[0].to_owned(),
    })?;

    // связанные символы в другом регистре (если есть)
    let simple_uppercase_mapping = SimpleCaseMapping::try_from(props[12])
        .map_err(|e| SourceError::malformed(number, line, format!("uppercase mapping: {e}")))?;
    let simple_lowercase_mapping = SimpleCaseMapping::try_from(props[13])
        .map_err(|e| SourceError::malformed(number, line, format!("lowercase mapping: {e}")))?;

    Ok(CharacterRecord {
        code,
        name,
        class,
        simple_uppercase_mapping,
        simple_lowercase_mapping,
    })
}

fn is_range_first(name: &str) -> bool
{
    name.starts_with('<') && name.ends_with(", First>")
}

fn is_range_last(name: &str) -> bool
{
    name.starts_with('<') && name.ends_with(", Last>")
}

/// название диапазона: "<CJK Ideograph, First>" -> "CJK Ideograph"
fn range_group<'a>(name: &'a str, suffix: &str) -> &'a str
{
    &name[1 .. name.len() - suffix.len()]
}

/// заполнить диапазон свойствами первой записи,
/// названия символов получаем из названия диапазона
fn expand_range(data: &mut UnicodeData, first: CharacterRecord, last: u32)
{
    let group_name = range_group(&first.name, ", First>").to_owned();

    tracing::debug!(
        range = %group_name,
        first = %format!("{:#06X}", first.code),
        last = %format!("{:#06X}", last),
        "expanding range"
    );

    for code in first.code ..= last {
        data.insert(CharacterRecord {
            code,
            name: format!("{}-{:04X}", group_name, code),
            ..first.clone()
        });
    }
}

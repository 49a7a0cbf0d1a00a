use symbols_source::{CharacterRecord, SymbolClass, UnicodeData, UnihanData};

/// подготовленные таблицы символов: класс, прописная и строчная пара
/// каждая таблица содержит max_code + 1 элементов, индекс - кодпоинт
pub struct SymbolTables<'a>
{
    pub classes: Vec<SymbolClass>,
    pub upper: Vec<u32>,
    pub lower: Vec<u32>,
    /// названия символов, None - записи о символе нет
    pub names: Vec<Option<&'a str>>,
}

impl SymbolTables<'_>
{
    #[inline]
    pub fn len(&self) -> usize
    {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.classes.is_empty()
    }
}

/// таблица иероглифов Unihan
pub struct UnihanTable
{
    pub exists: Vec<bool>,
    /// размер таблицы, записываемый в UNIHAN_TABLE_SIZE
    pub size: u32,
}

/// класс символа; символы без записи - UNASSIGNED, отдельного "отсутствующего" значения нет
#[inline]
pub fn class_for(record: Option<&CharacterRecord>) -> SymbolClass
{
    match record {
        Some(record) => record.class,
        None => SymbolClass::Unassigned,
    }
}

/// прописная пара; без записи или без отображения символ переходит сам в себя
#[inline]
pub fn upper_for(code: u32, record: Option<&CharacterRecord>) -> u32
{
    match record {
        Some(record) => record.upper(),
        None => code,
    }
}

/// строчная пара, правила те же, что и для прописной
#[inline]
pub fn lower_for(code: u32, record: Option<&CharacterRecord>) -> u32
{
    match record {
        Some(record) => record.lower(),
        None => code,
    }
}

/// подготавливаем таблицы для всех кодпоинтов 0 ..= max_code
pub fn prepare_symbol_tables(data: &UnicodeData) -> SymbolTables<'_>
{
    let size = data.max_code as usize + 1;

    let mut classes = Vec::with_capacity(size);
    let mut upper = Vec::with_capacity(size);
    let mut lower = Vec::with_capacity(size);
    let mut names = Vec::with_capacity(size);

    for code in 0 ..= data.max_code {
        let record = data.get(code);

        classes.push(class_for(record));
        upper.push(upper_for(code, record));
        lower.push(lower_for(code, record));
        names.push(record.map(|r| r.name.as_str()));
    }

    tracing::debug!(entries = size, "symbol tables prepared");

    SymbolTables {
        classes,
        upper,
        lower,
        names,
    }
}

/// таблица существования иероглифов: для кодпоинтов < max_code - есть ли строка в файле,
/// сам max_code всегда true, размер таблицы - max_code + 1
pub fn prepare_unihan_table(data: &UnihanData) -> UnihanTable
{
    let mut exists: Vec<bool> = (0 .. data.max_code).map(|code| data.contains(code)).collect();

    exists.push(true);

    tracing::debug!(entries = exists.len(), "unihan table prepared");

    UnihanTable {
        exists,
        size: data.max_code + 1,
    }
}

#[cfg(test)]
mod tests
{
    use symbols_source::{unicode, unihan, ParseOptions};

    use super::*;

    #[test]
    fn defaults_differ_per_table()
    {
        assert_eq!(class_for(None), SymbolClass::Unassigned);
        assert_eq!(upper_for(0x42, None), 0x42);
        assert_eq!(lower_for(0x42, None), 0x42);
    }

    #[test]
    fn empty_input()
    {
        let empty = UnicodeData::default();
        let tables = prepare_symbol_tables(&empty);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables.classes, vec![SymbolClass::Unassigned]);
        assert_eq!(tables.upper, vec![0]);
        assert_eq!(tables.lower, vec![0]);
        assert_eq!(tables.names, vec![None]);

        let table = prepare_unihan_table(&UnihanData::default());

        assert_eq!(table.exists, vec![true]);
        assert_eq!(table.size, 1);
    }

    #[test]
    fn explicit_mappings()
    {
        let source = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041
";
        let data = unicode::parse(source.as_bytes(), ParseOptions::default()).unwrap();
        let tables = prepare_symbol_tables(&data);

        assert_eq!(tables.len(), 0x62);
        assert_eq!(tables.upper[0x41], 0x41);
        assert_eq!(tables.lower[0x41], 0x61);
        assert_eq!(tables.upper[0x61], 0x41);
        assert_eq!(tables.lower[0x61], 0x61);
        assert_eq!(tables.names[0x61], Some("LATIN SMALL LETTER A"));
        assert_eq!(tables.names[0x50], None);
    }

    #[test]
    fn boundary_entry_is_forced()
    {
        let data = unihan::parse("U+0002\tkDefinition\tx\nU+0005\tkDefinition\ty\n".as_bytes())
            .unwrap();
        let table = prepare_unihan_table(&data);

        assert_eq!(table.exists, vec![false, false, true, false, false, true]);
        assert_eq!(table.size, 6);
    }
}

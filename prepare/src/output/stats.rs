use std::collections::BTreeMap;

use symbols_source::SymbolClass;

use crate::tables::{SymbolTables, UnihanTable};

/// информация о подготовленных таблицах
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableStats
{
    /// количество элементов в каждой таблице
    pub entries: usize,
    /// кодпоинты, для которых была запись во входном файле
    pub assigned: usize,
    /// количество кодпоинтов каждого класса, включая UNASSIGNED
    pub classes: BTreeMap<SymbolClass, usize>,
    /// кодпоинты, прописная пара которых отличается от них самих
    pub upper_mappings: usize,
    /// кодпоинты, строчная пара которых отличается от них самих
    pub lower_mappings: usize,
}

impl TableStats
{
    pub fn of_symbol_tables(tables: &SymbolTables) -> Self
    {
        let mut stats = Self {
            entries: tables.len(),
            assigned: tables.names.iter().filter(|name| name.is_some()).count(),
            ..Default::default()
        };

        for &class in tables.classes.iter() {
            *stats.classes.entry(class).or_default() += 1;
        }

        for (code, (&upper, &lower)) in tables.upper.iter().zip(tables.lower.iter()).enumerate() {
            if upper as usize != code {
                stats.upper_mappings += 1;
            }
            if lower as usize != code {
                stats.lower_mappings += 1;
            }
        }

        stats
    }

    pub fn of_unihan_table(table: &UnihanTable) -> Self
    {
        Self {
            entries: table.exists.len(),
            assigned: table.exists.iter().filter(|&&exists| exists).count(),
            ..Default::default()
        }
    }
}

/// информация о таблицах в лог
pub fn log(name: &str, stats: &TableStats)
{
    tracing::info!(
        table = name,
        entries = stats.entries,
        assigned = stats.assigned,
        upper_mappings = stats.upper_mappings,
        lower_mappings = stats.lower_mappings,
        "table generated"
    );

    // по убыванию количества
    let mut classes: Vec<(&SymbolClass, &usize)> = stats.classes.iter().collect();
    classes.sort_by(|a, b| b.1.cmp(a.1));

    for (class, count) in classes {
        tracing::debug!(table = name, class = class.name(), count, "class");
    }
}

#[cfg(test)]
mod tests
{
    use symbols_source::{unicode, unihan, ParseOptions};

    use super::*;
    use crate::tables::{prepare_symbol_tables, prepare_unihan_table};

    #[test]
    fn symbol_stats()
    {
        let source = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041
0062;LATIN SMALL LETTER B;Ll;0;L;;;;;N;;;0042;;0042
";
        let data = unicode::parse(source.as_bytes(), ParseOptions::default()).unwrap();
        let stats = TableStats::of_symbol_tables(&prepare_symbol_tables(&data));

        assert_eq!(stats.entries, 0x63);
        assert_eq!(stats.assigned, 3);
        assert_eq!(stats.classes[&SymbolClass::UppercaseLetter], 1);
        assert_eq!(stats.classes[&SymbolClass::LowercaseLetter], 2);
        assert_eq!(stats.classes[&SymbolClass::Unassigned], 0x63 - 3);
        assert_eq!(stats.upper_mappings, 2);
        assert_eq!(stats.lower_mappings, 1);
    }

    #[test]
    fn unihan_stats()
    {
        let data = unihan::parse("U+0001\tkDefinition\tx\nU+0004\tkDefinition\ty\n".as_bytes())
            .unwrap();
        let stats = TableStats::of_unihan_table(&prepare_unihan_table(&data));

        assert_eq!(stats.entries, 5);
        assert_eq!(stats.assigned, 2);
        assert!(stats.classes.is_empty());
    }
}

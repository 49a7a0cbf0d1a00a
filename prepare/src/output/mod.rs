use std::io::{self, Write};

use crate::tables::{SymbolTables, UnihanTable};

use self::format::*;

pub mod format;
pub mod stats;

/// названия и типы таблиц, как они объявлены в symbols.h
pub const CLASS_TABLE: (&str, &str) = ("uint32_t", "SYM_CLASS_TABLE");
pub const UPPER_TABLE: (&str, &str) = ("SymbolCode", "SYM_UPPER_TABLE");
pub const LOWER_TABLE: (&str, &str) = ("SymbolCode", "SYM_LOWER_TABLE");
pub const UNIHAN_TABLE: (&str, &str) = ("bool", "UNIHAN_TABLE");
pub const UNIHAN_TABLE_SIZE: &str = "UNIHAN_TABLE_SIZE";

/// пишем таблицы классов, прописных и строчных пар
pub fn write_symbol_tables<W: Write>(w: &mut W, tables: &SymbolTables) -> io::Result<()>
{
    write_file_prolog(w, 2013, "Automatically generated UNICODE symbol table.")?;

    let (type_name, name) = CLASS_TABLE;
    write_table(
        w,
        type_name,
        name,
        tables.classes.iter().map(|&c| ClassLiteral(c)),
        &tables.names,
    )?;

    let (type_name, name) = UPPER_TABLE;
    write_table(
        w,
        type_name,
        name,
        tables.upper.iter().map(|&c| CodeLiteral(c)),
        &tables.names,
    )?;

    let (type_name, name) = LOWER_TABLE;
    write_table(
        w,
        type_name,
        name,
        tables.lower.iter().map(|&c| CodeLiteral(c)),
        &tables.names,
    )?;

    write_file_epilog(w)
}

/// пишем таблицу иероглифов: запятая после каждого элемента, кроме последнего,
/// после таблицы - её размер
pub fn write_unihan_table<W: Write>(w: &mut W, table: &UnihanTable) -> io::Result<()>
{
    write_file_prolog(w, 2021, "Automatically generated Unihan hierogliph table.")?;

    let (type_name, name) = UNIHAN_TABLE;
    write_table_prolog(w, type_name, name)?;

    let last = table.exists.len().saturating_sub(1);

    for (index, exists) in table.exists.iter().enumerate() {
        match index == last {
            true => writeln!(w, "  {}", exists)?,
            false => writeln!(w, "  {},", exists)?,
        }
    }

    writeln!(w, "}};\n")?;
    writeln!(w, "unsigned {} = {};\n", UNIHAN_TABLE_SIZE, table.size)?;

    write_file_epilog(w)
}

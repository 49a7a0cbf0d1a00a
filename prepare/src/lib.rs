//! генерация таблиц символов для strutext::symbols:
//! UnicodeData.txt -> SYM_CLASS_TABLE, SYM_UPPER_TABLE, SYM_LOWER_TABLE
//! Unihan -> UNIHAN_TABLE

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use symbols_source::{unicode, unihan, ParseOptions};

pub mod error;
pub mod logging;
pub mod output;
pub mod tables;

pub use error::GenerateError;
pub use output::stats::TableStats;
pub use tables::{SymbolTables, UnihanTable};

/// прочитать UnicodeData.txt и записать таблицы классов и регистров
pub fn generate_symbol_table(
    from: &Path,
    to: &Path,
    options: ParseOptions,
) -> Result<TableStats, GenerateError>
{
    let data = unicode::read(from, options)?;
    let tables = tables::prepare_symbol_tables(&data);

    emit(to, |w| output::write_symbol_tables(w, &tables))?;

    let stats = TableStats::of_symbol_tables(&tables);
    output::stats::log("symbols", &stats);

    Ok(stats)
}

/// прочитать файл Unihan и записать таблицу иероглифов
pub fn generate_unihan_table(from: &Path, to: &Path) -> Result<TableStats, GenerateError>
{
    let data = unihan::read(from)?;
    let table = tables::prepare_unihan_table(&data);

    emit(to, |w| output::write_unihan_table(w, &table))?;

    let stats = TableStats::of_unihan_table(&table);
    output::stats::log("unihan", &stats);

    Ok(stats)
}

/// выходной файл создается только после успешного разбора входного
/// и закрывается при выходе из функции, в том числе по ошибке
fn emit<F>(path: &Path, write: F) -> Result<(), GenerateError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let to_error = |source| GenerateError::Output {
        path: path.to_owned(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);

    write(&mut writer).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    tracing::debug!(path = %path.display(), "output written");

    Ok(())
}

use std::collections::BTreeMap;
use std::path::PathBuf;

use symbols_source::{unicode, ParseOptions, SymbolClass};

/// сколько символов каждого класса в UnicodeData.txt?
/// сколько символов имеют пару в другом регистре?
fn main() -> Result<(), Box<dyn std::error::Error>>
{
    let path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from("./../data/ucd/UnicodeData.txt"),
    };

    let data = unicode::read(&path, ParseOptions { expand_ranges: true })?;

    let mut classes: BTreeMap<SymbolClass, usize> = BTreeMap::new();
    let mut upper = 0;
    let mut lower = 0;

    for record in data.records.values() {
        *classes.entry(record.class).or_default() += 1;

        if record.simple_uppercase_mapping.is_some() {
            upper += 1;
        }
        if record.simple_lowercase_mapping.is_some() {
            lower += 1;
        }
    }

    println!("\nзаписей: {}, максимальный кодпоинт: U+{:04X}\n", data.len(), data.max_code);

    for class in SymbolClass::ALL {
        println!(
            "  {} {:<24}{}",
            class.abbr(),
            class.name(),
            classes.get(&class).copied().unwrap_or(0)
        );
    }

    println!("\nс прописной парой: {}, со строчной парой: {}\n", upper, lower);

    Ok(())
}

//! синтетические входные данные для бенчмарков: весь диапазон Unicode,
//! без настоящего UnicodeData.txt под рукой

use std::fmt::Write;

use symbols_source::SymbolClass;

/// шаг между записями
pub const RECORD_STEP: u32 = 3;

/// строки в формате UnicodeData.txt для кодпоинтов 0 ..= max с шагом RECORD_STEP,
/// у каждой второй записи есть пара в другом регистре
pub fn unicode_data(max: u32) -> String
{
    let mut data = String::new();

    for (n, code) in (0 ..= max).step_by(RECORD_STEP as usize).enumerate() {
        let class = SymbolClass::ALL[n % SymbolClass::ALL.len()];
        let mapping = match n % 2 == 0 && code < max {
            true => format!("{:04X}", code + 1),
            false => String::new(),
        };

        writeln!(
            data,
            "{:04X};SYNTHETIC CHARACTER {:04X};{};0;L;;;;;N;;;{};{};",
            code,
            code,
            class.abbr(),
            mapping,
            mapping
        )
        .unwrap();
    }

    data
}

/// строки в формате Unihan: по две строки свойств на иероглиф
pub fn unihan_data(first: u32, last: u32) -> String
{
    let mut data = String::from("# synthetic Unihan data\n\n");

    for code in (first ..= last).step_by(RECORD_STEP as usize) {
        writeln!(data, "U+{:04X}\tkDefinition\tsynthetic", code).unwrap();
        writeln!(data, "U+{:04X}\tkTotalStrokes\t{}", code, code % 30).unwrap();
    }

    data
}

#[cfg(test)]
mod tests
{
    use symbols_source::{unicode, unihan, ParseOptions};

    use super::*;

    #[test]
    fn synthetic_data_parses()
    {
        let data = unicode::parse(unicode_data(0x300).as_bytes(), ParseOptions::default()).unwrap();

        assert_eq!(data.max_code, 0x300);
        assert_eq!(data.len(), 0x100 + 1);
        assert_eq!(data.get(0).unwrap().upper(), 1);
        assert_eq!(data.get(3).unwrap().upper(), 3);

        let data = unihan::parse(unihan_data(0x4E00, 0x4E10).as_bytes()).unwrap();

        assert_eq!(data.len(), 6);
        assert_eq!(data.max_code, 0x4E0F);
    }
}

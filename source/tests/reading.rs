use std::io::Write;

use symbols_source::{unicode, unihan, ParseOptions, SourceError, SymbolClass};
use tempfile::NamedTempFile;

const UNICODE_DATA: &str = "\
0020;SPACE;Zs;0;WS;;;;;N;;;;;
0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041
0410;CYRILLIC CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0430;
0430;CYRILLIC SMALL LETTER A;Ll;0;L;;;;;N;;;0410;;0410
";

fn file(contents: &str) -> NamedTempFile
{
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();

    file
}

#[test]
fn read_unicode_data()
{
    let source = file(UNICODE_DATA);
    let data = unicode::read(source.path(), ParseOptions::default()).unwrap();

    assert_eq!(data.len(), 6);
    assert_eq!(data.max_code, 0x430);

    assert_eq!(data.get(0x20).unwrap().class, SymbolClass::SpaceSeparator);
    assert!(data.get(0x30).unwrap().class.is_number());
    assert_eq!(data.get(0x410).unwrap().lower(), 0x430);
    assert_eq!(data.get(0x430).unwrap().upper(), 0x410);
    assert_eq!(data.get(0x430).unwrap().lower(), 0x430);
}

#[test]
fn malformed_line_stops_reading()
{
    let source = file(&format!("{}0431;BROKEN;Ll;0;L\n", UNICODE_DATA));

    match unicode::read(source.path(), ParseOptions::default()) {
        Err(error @ SourceError::MalformedRecord { line: 7, .. }) => {
            assert!(!error.is_io());
            assert!(error.to_string().contains("0431;BROKEN;Ll;0;L"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn missing_file()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("UnicodeData.txt");

    let error = unicode::read(&path, ParseOptions::default()).unwrap_err();

    assert!(error.is_io());
    assert!(matches!(error, SourceError::Open { .. }));
    assert!(unihan::read(&path).unwrap_err().is_io());
}

#[test]
fn read_unihan()
{
    let source = file(
        "\
# Unihan_IRGSources.txt
#
U+3400\tkIRG_GSource\tGKX-0078.01
U+3400\tkTotalStrokes\t5
U+4E00\tkIRG_GSource\tG0-523B
",
    );
    let data = unihan::read(source.path()).unwrap();

    assert_eq!(data.len(), 2);
    assert_eq!(data.max_code, 0x4E00);
    assert!(data.contains(0x3400));
    assert!(!data.contains(0x3401));
}

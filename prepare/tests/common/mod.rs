#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// каталог с входным и выходным файлом
pub struct Workspace
{
    pub dir: TempDir,
}

impl Workspace
{
    pub fn new() -> Self
    {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn input(&self, name: &str, contents: &str) -> PathBuf
    {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();

        path
    }

    pub fn path(&self, name: &str) -> PathBuf
    {
        self.dir.path().join(name)
    }
}

/// элементы таблицы из сгенерированного файла: без запятых, отступов и комментариев
pub fn table(path: &Path, declaration: &str) -> Vec<String>
{
    let text = fs::read_to_string(path).unwrap();
    let header = format!("{}[] = {{\n", declaration);

    let start = text.find(&header).unwrap() + header.len();
    let end = start + text[start ..].find("};").unwrap();

    text[start .. end]
        .lines()
        .map(|line| {
            let value = line.trim_start().trim_start_matches(',');
            let value = match value.split_once(" // ") {
                Some((value, _)) => value,
                None => value,
            };

            value.trim_end_matches(',').to_owned()
        })
        .collect()
}

pub fn class(name: &str) -> String
{
    format!("static_cast<uint32_t>({})", name)
}

pub fn code(code: u32) -> String
{
    format!("0x{:04X}", code)
}

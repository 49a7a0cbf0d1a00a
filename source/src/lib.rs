//! исходные данные для таблиц символов: UnicodeData.txt и файлы Unihan

pub mod properties;
pub mod unicode;
pub mod unihan;

mod error;

pub use error::SourceError;

pub use properties::CharacterRecord;
pub use properties::SimpleCaseMapping;
pub use properties::SymbolClass;

pub use unicode::ParseOptions;
pub use unicode::UnicodeData;

pub use unihan::UnihanData;

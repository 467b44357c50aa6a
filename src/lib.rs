#[macro_use]
extern crate lazy_static;

#[macro_use]
mod macros;

pub mod encode;
pub mod error;
pub mod interval;
pub mod lookup;
pub mod output;
pub mod source;
pub mod stats;
pub mod tables;

pub use error::BakeError;
pub use interval::{Interval, MAX_CODEPOINT};
pub use lookup::{
    ideographset_lookup, IdeographSet, LookupTable, IDEOGRAPHSET_LIST, UNICODE_VERSION,
};
pub use source::{MemorySource, PropertyMap, PropertySource, Source, UcdDirectory};
pub use tables::IdeographSetTable;

/// каталог с заранее скачанными файлами UCD и Unihan
pub const UCD_DIRECTORY: &str = "./data/ucd/15.1.0";

/// версия UCD в каталоге UCD_DIRECTORY, записывается в запечённую таблицу
pub const UCD_VERSION: (u64, u64, u64) = (15, 1, 0);

lazy_static! {
    /// запечённая таблица с проверенным покрытием пространства кодпоинтов
    pub static ref IDEOGRAPHSET: LookupTable = match LookupTable::from_entries(IDEOGRAPHSET_LIST) {
        Ok(table) => table,
        Err(e) => panic!("запечённая таблица множеств иероглифов: {}", e),
    };
}

/// множество, к которому относится кодпоинт (0 ..= MAX_CODEPOINT)
pub fn classify(code: u32) -> IdeographSet
{
    ideographset_lookup(code)
}

pub trait UnicodeIdeographSet
{
    fn ideograph_set(&self) -> IdeographSet;
}

impl UnicodeIdeographSet for char
{
    fn ideograph_set(&self) -> IdeographSet
    {
        ideographset_lookup(*self as u32)
    }
}

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::BakeError;
use crate::stats::EncodeStats;
use crate::tables::IdeographSetTable;
use crate::UCD_VERSION;

use format::{format_entries, format_entry};

pub mod format;


/// длина строки в файле с подготовленными данными
pub const FORMAT_STRING_LENGTH: usize = 120;

/// создать файл, при необходимости - вместе с каталогом
fn create(filename: &str) -> Result<File, BakeError>
{
    if let Some(parent) = Path::new(filename).parent() {
        fs::create_dir_all(parent)?;
    }

    Ok(File::create(filename)?)
}

/// текст запечённой таблицы - модуль, который кладётся рядом с IdeographSet (src/lookup/data.rs)
pub fn format_ideographset(name: impl AsRef<str>, table: &IdeographSetTable) -> String
{
    let entries: Vec<String> = table.table.iter().map(format_entry).collect();

    format!(
        "// запечено ideographset_bakery по UCD {0}.{1}.{2}\n\n\
        use super::IdeographSet;\n\n\
        pub const UNICODE_VERSION: (u64, u64, u64) = ({0}, {1}, {2});\n\n\
        pub const {3}: &[(u32, u32, IdeographSet)] = &[\n{4}];\n",
        UCD_VERSION.0,
        UCD_VERSION.1,
        UCD_VERSION.2,
        name.as_ref(),
        format_entries(&entries, 4, FORMAT_STRING_LENGTH),
    )
}

/// записать таблицу
pub fn write_ideographset(
    name: impl AsRef<str>,
    filename: impl AsRef<str>,
    table: &IdeographSetTable,
) -> Result<(), BakeError>
{
    let mut file = create(filename.as_ref())?;

    write!(file, "{}", format_ideographset(name, table))?;

    Ok(())
}

/// записать статистику по сегментам таблицы
pub fn write_stats(filename: impl AsRef<str>, stats: &EncodeStats) -> Result<(), BakeError>
{
    let mut file = create(filename.as_ref())?;
    let headers = stats.ordered_keys();

    for &header in headers.iter() {
        let block = &stats.blocks[header];

        writeln!(
            file,
            "{}. {} ({}, кодпоинтов: {})",
            block.order, header, block.count, block.codepoints
        )?;
    }

    writeln!(file)?;

    for &header in headers.iter() {
        let block = &stats.blocks[header];

        write!(file, "{}. {} ({})\n\n", block.order, header, block.count)?;

        let mut codes: Vec<&u32> = block.entries.keys().collect();
        codes.sort();

        for code in codes {
            writeln!(file, "{}", block.entries[code])?;
        }

        writeln!(file)?;
    }

    Ok(())
}

use std::fs;
use std::path::{Path, PathBuf};

use super::{PropertyMap, PropertySource, Source};
use crate::error::BakeError;
use crate::interval::Interval;

/// локальная копия файлов UCD и Unihan нужной версии. файлы должны быть скачаны заранее
pub struct UcdDirectory
{
    path: PathBuf,
}

impl UcdDirectory
{
    pub fn new(path: impl AsRef<Path>) -> Self
    {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read(&self, filename: &str) -> Result<String, BakeError>
    {
        let path = self.path.join(filename);

        fs::read_to_string(&path)
            .map_err(|e| BakeError::Source(format!("{}: {}", path.display(), e)))
    }
}

impl PropertySource for UcdDirectory
{
    fn properties(&self, source: Source) -> Result<PropertyMap, BakeError>
    {
        let filter = |value: &str| source.accepts(value);

        match source {
            Source::Script => parse_ucd_properties("Scripts.txt", &self.read("Scripts.txt")?, filter),
            Source::Ideographic | Source::Radical | Source::UnifiedIdeograph => {
                parse_ucd_properties("PropList.txt", &self.read("PropList.txt")?, filter)
            }
            Source::IICore => parse_unihan_field(
                "Unihan_IRGSources.txt",
                &self.read("Unihan_IRGSources.txt")?,
                "kIICore",
                source.name(),
            ),
            Source::UnihanCore2020 => parse_unihan_field(
                "Unihan_DictionaryLikeData.txt",
                &self.read("Unihan_DictionaryLikeData.txt")?,
                "kUnihanCore2020",
                source.name(),
            ),
        }
    }
}

/// разбор файла формата UCD:
///
/// 3400..4DBF    ; Han # Lo [6592] CJK UNIFIED IDEOGRAPH-3400..CJK UNIFIED IDEOGRAPH-4DBF
/// 3005          ; Han # Lm       IDEOGRAPHIC ITERATION MARK
pub fn parse_ucd_properties(
    filename: &str,
    data: &str,
    filter: impl Fn(&str) -> bool,
) -> Result<PropertyMap, BakeError>
{
    let mut map = PropertyMap::new();

    for (number, line) in data.lines().enumerate() {
        let line = match line.split_once('#') {
            Some((line, _)) => line,
            None => line,
        };

        let Some((codes, value)) = line.split_once(';') else {
            continue;
        };

        let value = value.trim();

        if !filter(value) {
            continue;
        }

        let range = match codes.trim().split_once("..") {
            Some((low, high)) => Interval::new(
                parse_hex(filename, number, low)?,
                parse_hex(filename, number, high)?,
            ),
            None => Interval::single(parse_hex(filename, number, codes)?),
        };

        map.push(value, range);
    }

    Ok(map)
}

/// разбор файла Unihan, значение поля не важно - нужен только факт его наличия:
///
/// U+3400	kIICore	AG
pub fn parse_unihan_field(
    filename: &str,
    data: &str,
    field: &str,
    name: &str,
) -> Result<PropertyMap, BakeError>
{
    let mut map = PropertyMap::new();

    for (number, line) in data.lines().enumerate() {
        if line.starts_with('#') {
            continue;
        }

        let mut parts = line.split('\t');

        let (Some(code), Some(key)) = (parts.next(), parts.next()) else {
            continue;
        };

        if key.trim() != field {
            continue;
        }

        let Some(code) = code.trim().strip_prefix("U+") else {
            return Err(BakeError::Source(format!(
                "{}:{}: ожидался кодпоинт, найдено \"{}\"",
                filename,
                number + 1,
                code
            )));
        };

        map.push_code(name, parse_hex(filename, number, code)?);
    }

    Ok(map)
}

fn parse_hex(filename: &str, number: usize, value: &str) -> Result<u32, BakeError>
{
    u32::from_str_radix(value.trim(), 16).map_err(|_| {
        BakeError::Source(format!(
            "{}:{}: некорректный кодпоинт \"{}\"",
            filename,
            number + 1,
            value.trim()
        ))
    })
}

use std::collections::HashMap;

use crate::error::BakeError;
use crate::interval::Interval;

pub use ucd::UcdDirectory;

mod ucd;


/// письменности, которые нас интересуют в Scripts.txt
pub const SCRIPTS: &[&str] = &["Han", "Tangut", "Nushu", "Khitan_Small_Script"];

/// источники свойств в том порядке, в котором их разбиения передаются при слиянии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source
{
    /// Scripts.txt, только письменности из SCRIPTS
    Script,
    /// PropList.txt: Ideographic
    Ideographic,
    /// PropList.txt: Radical
    Radical,
    /// PropList.txt: Unified_Ideograph
    UnifiedIdeograph,
    /// Unihan_IRGSources.txt: kIICore
    IICore,
    /// Unihan_DictionaryLikeData.txt: kUnihanCore2020
    UnihanCore2020,
}

impl Source
{
    pub const ALL: [Source; 6] = [
        Source::Script,
        Source::Ideographic,
        Source::Radical,
        Source::UnifiedIdeograph,
        Source::IICore,
        Source::UnihanCore2020,
    ];

    /// имя источника, оно же - значение свойства для флагов
    pub fn name(&self) -> &'static str
    {
        match self {
            Source::Script => "Script",
            Source::Ideographic => "Ideographic",
            Source::Radical => "Radical",
            Source::UnifiedIdeograph => "Unified_Ideograph",
            Source::IICore => "IICore",
            Source::UnihanCore2020 => "UnihanCore2020",
        }
    }

    /// входит ли значение свойства в выборку источника
    pub fn accepts(&self, value: &str) -> bool
    {
        match self {
            Source::Script => SCRIPTS.contains(&value),
            _ => value == self.name(),
        }
    }
}

/// значения свойства и их интервалы. порядок значений - порядок первого появления,
/// интервалы каждого значения идут по возрастанию и не пересекаются
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap
{
    properties: Vec<(String, Vec<Interval>)>,
}

impl PropertyMap
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// добавить интервал значения свойства
    pub fn push(&mut self, name: impl AsRef<str>, range: Interval)
    {
        self.intervals_mut(name.as_ref()).push(range);
    }

    /// добавить кодпоинт; если он продолжает последний интервал значения - интервал расширяется
    pub fn push_code(&mut self, name: impl AsRef<str>, code: u32)
    {
        let intervals = self.intervals_mut(name.as_ref());

        match intervals.last_mut() {
            Some(last) if last.high.checked_add(1) == Some(code) => last.high = code,
            _ => intervals.push(Interval::single(code)),
        }
    }

    /// интервалы значения свойства
    pub fn get(&self, name: &str) -> Option<&[Interval]>
    {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, intervals)| intervals.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Interval])>
    {
        self.properties
            .iter()
            .map(|(name, intervals)| (name.as_str(), intervals.as_slice()))
    }

    /// количество значений свойства
    pub fn len(&self) -> usize
    {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.properties.is_empty()
    }

    /// оставить только значения, удовлетворяющие фильтру
    pub fn filtered(&self, filter: impl Fn(&str) -> bool) -> Self
    {
        Self {
            properties: self
                .properties
                .iter()
                .filter(|(name, _)| filter(name))
                .cloned()
                .collect(),
        }
    }

    fn intervals_mut(&mut self, name: &str) -> &mut Vec<Interval>
    {
        let position = match self.properties.iter().position(|(n, _)| n == name) {
            Some(position) => position,
            None => {
                self.properties.push((name.to_string(), vec![]));
                self.properties.len() - 1
            }
        };

        &mut self.properties[position].1
    }
}

/// поставщик данных о свойствах: получение и разбор файлов UCD остаются за ним
pub trait PropertySource
{
    /// значения свойств источника и их интервалы
    fn properties(&self, source: Source) -> Result<PropertyMap, BakeError>;
}

/// данные, заданные напрямую
#[derive(Debug, Clone, Default)]
pub struct MemorySource
{
    maps: HashMap<Source, PropertyMap>,
}

impl MemorySource
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// задать данные источника
    pub fn with(mut self, source: Source, map: PropertyMap) -> Self
    {
        self.maps.insert(source, map);
        self
    }

    /// флаг источника на интервалах
    pub fn with_flag(self, source: Source, ranges: &[(u32, u32)]) -> Self
    {
        let mut map = PropertyMap::new();

        ranges
            .iter()
            .for_each(|&(low, high)| map.push(source.name(), Interval::new(low, high)));

        self.with(source, map)
    }
}

impl PropertySource for MemorySource
{
    fn properties(&self, source: Source) -> Result<PropertyMap, BakeError>
    {
        Ok(match self.maps.get(&source) {
            Some(map) => map.filtered(|name| source.accepts(name)),
            None => PropertyMap::new(),
        })
    }
}

use crate::encode::{EncodeIdeographSet, SegmentProperties};
use crate::error::BakeError;
use crate::interval::{check_partition, Partition};
use crate::lookup::{IdeographSet, LookupTable};
use crate::source::{PropertySource, Source};
use crate::stats::EncodeStats;

pub use flatten::flatten_properties;
pub use merge::merge_partitions;

mod flatten;
mod merge;

#[cfg(test)]
mod tests;

/// метка пропуска - кодпоинт не имеет ни одного значения свойства
pub const GAP_LABEL: &str = "";

/// запечённая таблица множеств иероглифов
pub struct IdeographSetTable
{
    pub table: Partition<IdeographSet>,
    /// количество сегментов в разбиении каждого источника
    pub partitions: Vec<(Source, usize)>,
    pub stats: EncodeStats,
}

impl IdeographSetTable
{
    /// построить таблицу: разбиение по каждому источнику, слияние, классификация сегментов
    pub fn build(source: &dyn PropertySource) -> Result<Self, BakeError>
    {
        let encoder = EncodeIdeographSet::new();
        let mut stats = EncodeStats::new();
        let mut partitions = Vec::with_capacity(Source::ALL.len());

        for s in Source::ALL {
            let props = source.properties(s)?;
            partitions.push(flatten_properties(&props, GAP_LABEL)?);
        }

        let table = merge_partitions(&partitions, |labels, range| {
            encoder.encode(&SegmentProperties::from_labels(labels), range, &mut stats)
        })?;

        check_partition(&table)?;

        Ok(Self {
            table,
            partitions: Source::ALL
                .iter()
                .zip(partitions.iter())
                .map(|(&s, p)| (s, p.len()))
                .collect(),
            stats,
        })
    }

    /// количество записей в таблице
    pub fn len(&self) -> usize
    {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.table.is_empty()
    }

    /// размер запечённой таблицы: (u32, u32, u8) на запись
    pub fn size(&self) -> usize
    {
        self.table.len() * (4 + 4 + 1)
    }

    /// таблица поиска по результату
    pub fn lookup(&self) -> Result<LookupTable, BakeError>
    {
        LookupTable::from_partition(&self.table)
    }
}

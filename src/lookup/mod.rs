use core::cmp::Ordering;

use crate::error::BakeError;
use crate::interval::{check_partition, Interval, Partition, Segment};

pub use data::{IDEOGRAPHSET_LIST, UNICODE_VERSION};

// TODO: перезапечь data.rs при наличии Unihan_IRGSources.txt и Unihan_DictionaryLikeData.txt -
// текущая таблица собрана без kIICore и kUnihanCore2020, иероглифов IICore в ней нет
mod data;


/// отношение кодпоинта к иероглифическим письменностям
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum IdeographSet
{
    /// унифицированный иероглиф CJK из IICore
    IICoreCJKUnifiedIdeograph,
    /// унифицированный иероглиф CJK из UnihanCore2020
    IICoreAndUnihanCoreCJKUnifiedIdeograph,
    /// прочие унифицированные иероглифы CJK
    OtherCJKUnifiedIdeograph,
    /// иероглиф совместимости
    CJKCompatIdeograph,
    /// U+3006, U+3007, суджоуские цифры
    CJKSpecialIdeograph,
    TangutIdeograph,
    NushuIdeograph,
    KhitanSmallScriptIdeograph,
    /// ключи и компоненты CJK
    CJKRadicalAndComponent,
    /// компоненты тангутского письма
    TangutRadicalAndComponent,
    Other,
}

impl IdeographSet
{
    pub const ALL: [IdeographSet; 11] = [
        IdeographSet::IICoreCJKUnifiedIdeograph,
        IdeographSet::IICoreAndUnihanCoreCJKUnifiedIdeograph,
        IdeographSet::OtherCJKUnifiedIdeograph,
        IdeographSet::CJKCompatIdeograph,
        IdeographSet::CJKSpecialIdeograph,
        IdeographSet::TangutIdeograph,
        IdeographSet::NushuIdeograph,
        IdeographSet::KhitanSmallScriptIdeograph,
        IdeographSet::CJKRadicalAndComponent,
        IdeographSet::TangutRadicalAndComponent,
        IdeographSet::Other,
    ];

    /// имя варианта, как оно записывается в запечённую таблицу
    pub fn name(self) -> &'static str
    {
        match self {
            IdeographSet::IICoreCJKUnifiedIdeograph => "IICoreCJKUnifiedIdeograph",
            IdeographSet::IICoreAndUnihanCoreCJKUnifiedIdeograph => {
                "IICoreAndUnihanCoreCJKUnifiedIdeograph"
            }
            IdeographSet::OtherCJKUnifiedIdeograph => "OtherCJKUnifiedIdeograph",
            IdeographSet::CJKCompatIdeograph => "CJKCompatIdeograph",
            IdeographSet::CJKSpecialIdeograph => "CJKSpecialIdeograph",
            IdeographSet::TangutIdeograph => "TangutIdeograph",
            IdeographSet::NushuIdeograph => "NushuIdeograph",
            IdeographSet::KhitanSmallScriptIdeograph => "KhitanSmallScriptIdeograph",
            IdeographSet::CJKRadicalAndComponent => "CJKRadicalAndComponent",
            IdeographSet::TangutRadicalAndComponent => "TangutRadicalAndComponent",
            IdeographSet::Other => "Other",
        }
    }

    pub fn is_cjkui_in_iicore(self) -> bool
    {
        matches!(
            self,
            IdeographSet::IICoreCJKUnifiedIdeograph
                | IdeographSet::IICoreAndUnihanCoreCJKUnifiedIdeograph
        )
    }

    pub fn is_cjkui_in_unihancore(self) -> bool
    {
        matches!(self, IdeographSet::IICoreAndUnihanCoreCJKUnifiedIdeograph)
    }

    pub fn is_cjk_compat_ideograph(self) -> bool
    {
        matches!(self, IdeographSet::CJKCompatIdeograph)
    }

    /// иероглиф любой письменности, не ключ / компонент
    pub fn is_ideograph(self) -> bool
    {
        !matches!(
            self,
            IdeographSet::CJKRadicalAndComponent
                | IdeographSet::TangutRadicalAndComponent
                | IdeographSet::Other
        )
    }
}

/// бинарный поиск по таблице интервалов (low, high, value)
#[inline]
pub fn bsearch_range_value_table<T: Copy>(code: u32, table: &[(u32, u32, T)]) -> Option<T>
{
    match table.binary_search_by(|&(low, high, _)| {
        if high < code {
            Ordering::Less
        } else if low > code {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }) {
        Ok(index) => Some(table[index].2),
        Err(_) => None,
    }
}

/// множество кодпоинта по запечённой таблице. таблица покрывает всё пространство кодпоинтов,
/// промах - кодпоинт за пределами 0 ..= MAX_CODEPOINT
pub fn ideographset_lookup(code: u32) -> IdeographSet
{
    match bsearch_range_value_table(code, IDEOGRAPHSET_LIST) {
        Some(set) => set,
        None => panic!("U+{:04X}: кодпоинт вне таблицы множеств иероглифов", code),
    }
}

/// таблица поиска: отсортированные, непересекающиеся интервалы, покрывающие всё пространство
/// кодпоинтов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable
{
    entries: Vec<(u32, u32, IdeographSet)>,
}

impl LookupTable
{
    /// таблица из разбиения; разрывы и пересечения - ошибка
    pub fn from_partition(partition: &[Segment<IdeographSet>]) -> Result<Self, BakeError>
    {
        check_partition(partition)?;

        Ok(Self {
            entries: partition
                .iter()
                .map(|s| (s.range.low, s.range.high, s.label))
                .collect(),
        })
    }

    /// таблица из готовых записей (например, запечённых)
    pub fn from_entries(entries: &[(u32, u32, IdeographSet)]) -> Result<Self, BakeError>
    {
        let table = Self {
            entries: entries.to_vec(),
        };

        table.check()?;

        Ok(table)
    }

    /// проверить, что таблица покрывает пространство кодпоинтов без разрывов и пересечений
    pub fn check(&self) -> Result<(), BakeError>
    {
        check_partition(&self.partition())
    }

    /// множество, к которому относится кодпоинт
    ///
    /// таблица покрывает всё пространство кодпоинтов, поэтому промах означает поломанную таблицу,
    /// а не отсутствие данных
    pub fn classify(&self, code: u32) -> IdeographSet
    {
        match bsearch_range_value_table(code, &self.entries) {
            Some(set) => set,
            None => panic!(
                "U+{:04X}: нет записи в таблице, нарушено покрытие пространства кодпоинтов",
                code
            ),
        }
    }

    pub fn entries(&self) -> &[(u32, u32, IdeographSet)]
    {
        &self.entries
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// записи таблицы в виде разбиения
    pub fn partition(&self) -> Partition<IdeographSet>
    {
        self.entries
            .iter()
            .map(|&(low, high, set)| Segment::new(Interval::new(low, high), set))
            .collect()
    }
}

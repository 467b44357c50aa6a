use unicode_data::UNICODE;

use crate::interval::Interval;
use crate::lookup::IdeographSet;
use crate::source::Source;
use crate::stats::EncodeStats;

use exceptions::{find_exception, Branch, Exception, EXCEPTIONS};

pub mod exceptions;


/// блок статистики для сегментов с письменностью, которой нет в правилах
pub const STATS_UNKNOWN_SCRIPT: &str = "неизвестная письменность";

/// свойства сегмента объединённого разбиения
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentProperties<'a>
{
    /// письменность, пустая строка - не относится к интересующим нас письменностям
    pub script: &'a str,
    pub ideographic: bool,
    pub radical: bool,
    pub unified_ideograph: bool,
    pub iicore: bool,
    pub unihan_core: bool,
}

impl<'a> SegmentProperties<'a>
{
    /// метки разбиений в порядке Source::ALL; пустая метка - свойство не задано
    pub fn from_labels<S: AsRef<str>>(labels: &[&'a S]) -> Self
    {
        assert_eq!(labels.len(), Source::ALL.len());

        let flag = |source: Source| !labels[source as usize].as_ref().is_empty();

        Self {
            script: <S as AsRef<str>>::as_ref(labels[Source::Script as usize]),
            ideographic: flag(Source::Ideographic),
            radical: flag(Source::Radical),
            unified_ideograph: flag(Source::UnifiedIdeograph),
            iicore: flag(Source::IICore),
            unihan_core: flag(Source::UnihanCore2020),
        }
    }
}

type Rule = fn(
    &EncodeIdeographSet,
    &SegmentProperties,
    Interval,
    &mut EncodeStats,
) -> Option<IdeographSet>;

/// классификация сегментов объединённого разбиения
pub struct EncodeIdeographSet
{
    pub exceptions: &'static [Exception],
}

impl Default for EncodeIdeographSet
{
    fn default() -> Self
    {
        Self {
            exceptions: EXCEPTIONS,
        }
    }
}

impl EncodeIdeographSet
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// множество для сегмента: правила проверяются по порядку, срабатывает первое подходящее
    pub fn encode(
        &self,
        props: &SegmentProperties,
        range: Interval,
        stats: &mut EncodeStats,
    ) -> IdeographSet
    {
        #[rustfmt::skip]
        let variants: &[Rule] = &[
            iicore,             // IICore
            unihan_core,        // UnihanCore2020
            unified_ideograph,  // прочие унифицированные иероглифы
            radical,            // ключи и компоненты
            ideographic,        // исключения, затем - по письменности
        ];

        let set = variants
            .iter()
            .find_map(|f| f(self, props, range, stats))
            .unwrap_or(IdeographSet::Other);

        stats
            .touch(set.name())
            .inc(range.low, range.len(), describe(range));

        set
    }

    fn exception(&self, branch: Branch, range: Interval) -> Option<IdeographSet>
    {
        find_exception(self.exceptions, branch, range).map(|e| e.set)
    }
}

fn iicore(
    _: &EncodeIdeographSet,
    props: &SegmentProperties,
    _: Interval,
    _: &mut EncodeStats,
) -> Option<IdeographSet>
{
    blocking_checks!(!props.iicore);

    Some(IdeographSet::IICoreCJKUnifiedIdeograph)
}

fn unihan_core(
    _: &EncodeIdeographSet,
    props: &SegmentProperties,
    _: Interval,
    _: &mut EncodeStats,
) -> Option<IdeographSet>
{
    blocking_checks!(!props.unihan_core);

    Some(IdeographSet::IICoreAndUnihanCoreCJKUnifiedIdeograph)
}

fn unified_ideograph(
    _: &EncodeIdeographSet,
    props: &SegmentProperties,
    _: Interval,
    _: &mut EncodeStats,
) -> Option<IdeographSet>
{
    blocking_checks!(!props.unified_ideograph);

    Some(IdeographSet::OtherCJKUnifiedIdeograph)
}

fn radical(
    encoder: &EncodeIdeographSet,
    props: &SegmentProperties,
    range: Interval,
    _: &mut EncodeStats,
) -> Option<IdeographSet>
{
    blocking_checks!(!props.radical);

    Some(
        encoder
            .exception(Branch::Radical, range)
            .unwrap_or(IdeographSet::CJKRadicalAndComponent),
    )
}

fn ideographic(
    encoder: &EncodeIdeographSet,
    props: &SegmentProperties,
    range: Interval,
    stats: &mut EncodeStats,
) -> Option<IdeographSet>
{
    blocking_checks!(!props.ideographic);

    if let Some(set) = encoder.exception(Branch::Ideographic, range) {
        return Some(set);
    }

    Some(match props.script {
        "Han" => IdeographSet::CJKCompatIdeograph,
        "Tangut" => IdeographSet::TangutIdeograph,
        "Nushu" => IdeographSet::NushuIdeograph,
        "Khitan_Small_Script" => IdeographSet::KhitanSmallScriptIdeograph,
        script => {
            // не ошибка: сегмент уходит в Other, но попадает в отчёт для ручной проверки
            eprintln!("{}: неизвестная письменность \"{}\"", range, script);

            stats.touch(STATS_UNKNOWN_SCRIPT).inc(
                range.low,
                range.len(),
                format!("{} : \"{}\"", describe(range), script),
            );

            IdeographSet::Other
        }
    })
}

/// описание сегмента для статистики: интервал и имя первого кодпоинта
fn describe(range: Interval) -> String
{
    match UNICODE.get(&range.low) {
        Some(codepoint) => format!("{} - {}", range, codepoint.name),
        None => format!("{}", range),
    }
}

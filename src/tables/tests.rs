use super::*;
use crate::interval::{Interval, Segment, MAX_CODEPOINT};
use crate::source::{MemorySource, PropertyMap};

fn segment(low: u32, high: u32, label: &str) -> Segment<String>
{
    Segment::new(Interval::new(low, high), label.to_string())
}

fn labels(partition: &Partition<String>) -> Vec<(u32, u32, &str)>
{
    partition
        .iter()
        .map(|s| (s.range.low, s.range.high, s.label.as_str()))
        .collect()
}

#[test]
fn flatten_empty()
{
    let table = flatten_properties(&PropertyMap::new(), GAP_LABEL).unwrap();

    assert_eq!(table, vec![segment(0, MAX_CODEPOINT, "")]);
}

#[test]
fn flatten_gaps_and_adjacency()
{
    let mut props = PropertyMap::new();

    props.push("Han", Interval::new(0x2E80, 0x2E99));
    props.push("Han", Interval::new(0x2E9B, 0x2EF3));
    props.push("Han", Interval::new(0x2F00, 0x2FD5));
    props.push("Han", Interval::new(0x2FD6, 0x2FDF));
    props.push("Tangut", Interval::new(0x16FE0, 0x16FE0));
    props.push("Nushu", Interval::new(0x16FE1, 0x16FE1));
    props.push("Tangut", Interval::new(0x17000, 0x187F7));
    props.push("Han", Interval::new(0x10FFFE, MAX_CODEPOINT));

    let table = flatten_properties(&props, "-").unwrap();

    assert_eq!(
        labels(&table),
        vec![
            (0, 0x2E7F, "-"),
            (0x2E80, 0x2E99, "Han"),
            (0x2E9A, 0x2E9A, "-"),
            (0x2E9B, 0x2EF3, "Han"),
            (0x2EF4, 0x2EFF, "-"),
            // соседние интервалы одного значения сливаются
            (0x2F00, 0x2FDF, "Han"),
            (0x2FE0, 0x16FDF, "-"),
            (0x16FE0, 0x16FE0, "Tangut"),
            (0x16FE1, 0x16FE1, "Nushu"),
            (0x16FE2, 0x16FFF, "-"),
            (0x17000, 0x187F7, "Tangut"),
            (0x187F8, 0x10FFFD, "-"),
            (0x10FFFE, MAX_CODEPOINT, "Han"),
        ]
    );

    assert!(crate::interval::check_partition(&table).is_ok());
}

#[test]
fn flatten_starts_at_zero()
{
    let mut props = PropertyMap::new();
    props.push("Ideographic", Interval::new(0, 0x10));

    let table = flatten_properties(&props, GAP_LABEL).unwrap();

    assert_eq!(
        labels(&table),
        vec![(0, 0x10, "Ideographic"), (0x11, MAX_CODEPOINT, "")]
    );
}

#[test]
fn flatten_overlap()
{
    // два значения начинаются с одного кодпоинта
    let mut props = PropertyMap::new();
    props.push("Han", Interval::new(0x3005, 0x3007));
    props.push("Tangut", Interval::new(0x3005, 0x3005));

    assert_eq!(
        flatten_properties(&props, GAP_LABEL),
        Err(BakeError::Overlap {
            code: 0x3005,
            first: String::from("Han"),
            second: String::from("Tangut"),
        })
    );

    // значение начинается внутри интервала другого значения
    let mut props = PropertyMap::new();
    props.push("Han", Interval::new(0x3005, 0x3007));
    props.push("Nushu", Interval::new(0x3006, 0x3010));

    assert_eq!(
        flatten_properties(&props, GAP_LABEL),
        Err(BakeError::Overlap {
            code: 0x3006,
            first: String::from("Han"),
            second: String::from("Nushu"),
        })
    );

    // пересечение внутри одного значения
    let mut props = PropertyMap::new();
    props.push("Han", Interval::new(0x3005, 0x3007));
    props.push("Han", Interval::new(0x3007, 0x3010));

    assert!(matches!(
        flatten_properties(&props, GAP_LABEL),
        Err(BakeError::Overlap { code: 0x3007, .. })
    ));
}

#[test]
fn flatten_invalid_interval()
{
    let mut props = PropertyMap::new();
    props.push("Han", Interval::new(0x3007, 0x3005));

    assert!(matches!(
        flatten_properties(&props, GAP_LABEL),
        Err(BakeError::InvalidInterval { .. })
    ));

    let mut props = PropertyMap::new();
    props.push("Han", Interval::new(0x10FFFF, 0x110000));

    assert!(matches!(
        flatten_properties(&props, GAP_LABEL),
        Err(BakeError::InvalidInterval { .. })
    ));
}

fn sample_partition() -> Partition<String>
{
    vec![
        segment(0, 0x2E7F, ""),
        segment(0x2E80, 0x2E99, "Radical"),
        segment(0x2E9A, 0x2E9A, ""),
        segment(0x2E9B, 0x2EF3, "Radical"),
        segment(0x2EF4, MAX_CODEPOINT, ""),
    ]
}

#[test]
fn merge_boundaries()
{
    let a = sample_partition();
    let b = vec![
        segment(0, 0x2E8F, "x"),
        segment(0x2E90, 0x2EFF, "y"),
        segment(0x2F00, MAX_CODEPOINT, "x"),
    ];

    let merged = merge_partitions(&[a, b], |labels, _| {
        format!("{}{}", labels[0], labels[1])
    })
    .unwrap();

    assert_eq!(
        labels(&merged),
        vec![
            (0, 0x2E7F, "x"),
            (0x2E80, 0x2E8F, "Radicalx"),
            (0x2E90, 0x2E99, "Radicaly"),
            (0x2E9A, 0x2E9A, "y"),
            (0x2E9B, 0x2EF3, "Radicaly"),
            (0x2EF4, 0x2EFF, "y"),
            (0x2F00, MAX_CODEPOINT, "x"),
        ]
    );
}

#[test]
fn merge_passes_range()
{
    let a = sample_partition();
    let mut ranges = vec![];

    merge_partitions(&[a], |_, range| ranges.push(range)).unwrap();

    assert_eq!(ranges.len(), 5);
    assert_eq!(ranges[2], Interval::single(0x2E9A));
}

#[test]
fn merge_idempotent()
{
    let partition = sample_partition();

    for n in 1 ..= 4 {
        let inputs = vec![partition.clone(); n];

        let merged = merge_partitions(&inputs, |labels, _| {
            assert!(labels.iter().all(|l| *l == labels[0]));
            labels[0].clone()
        })
        .unwrap();

        assert_eq!(merged, partition);
    }
}

#[test]
fn merge_nothing()
{
    let inputs: Vec<Partition<String>> = vec![];
    let merged = merge_partitions(&inputs, |labels, _| labels.len()).unwrap();

    assert_eq!(merged, vec![Segment::new(Interval::full(), 0)]);
}

#[test]
fn merge_broken_partitions()
{
    let a = sample_partition();

    // разрыв во втором разбиении
    let b = vec![segment(0, 0x2E8F, "x"), segment(0x2E91, MAX_CODEPOINT, "y")];

    assert_eq!(
        merge_partitions(&[a.clone(), b], |_, _| ()),
        Err(BakeError::Misaligned {
            partition: 1,
            expected: 0x2E90,
            found: 0x2E91
        })
    );

    // второе разбиение закончилось раньше
    let c = vec![segment(0, 0xFFFF, "x")];

    assert_eq!(
        merge_partitions(&[a, c], |_, _| ()),
        Err(BakeError::Exhausted {
            partition: 1,
            code: 0x10000
        })
    );
}

#[test]
fn build_table()
{
    let mut scripts = PropertyMap::new();
    scripts.push("Latin", Interval::new(0x41, 0x5A));
    scripts.push("Han", Interval::new(0x2E80, 0x2E99));
    scripts.push("Han", Interval::new(0x3005, 0x3007));
    scripts.push("Han", Interval::new(0x4E00, 0x9FFF));

    let source = MemorySource::new()
        .with(Source::Script, scripts)
        .with_flag(Source::Ideographic, &[(0x3006, 0x3007), (0x4E00, 0x9FFF)])
        .with_flag(Source::Radical, &[(0x2E80, 0x2E99)])
        .with_flag(Source::UnifiedIdeograph, &[(0x4E00, 0x9FFF)])
        .with_flag(Source::IICore, &[(0x4E00, 0x4E00)])
        .with_flag(Source::UnihanCore2020, &[(0x4E00, 0x4E01)]);

    let table = IdeographSetTable::build(&source).unwrap();

    let entries: Vec<(u32, u32, IdeographSet)> = table
        .table
        .iter()
        .map(|s| (s.range.low, s.range.high, s.label))
        .collect();

    assert_eq!(
        entries,
        vec![
            (0, 0x2E7F, IdeographSet::Other),
            (0x2E80, 0x2E99, IdeographSet::CJKRadicalAndComponent),
            (0x2E9A, 0x3004, IdeographSet::Other),
            (0x3005, 0x3005, IdeographSet::Other),
            (0x3006, 0x3007, IdeographSet::CJKCompatIdeograph),
            (0x3008, 0x4DFF, IdeographSet::Other),
            (0x4E00, 0x4E00, IdeographSet::IICoreCJKUnifiedIdeograph),
            (0x4E01, 0x4E01, IdeographSet::IICoreAndUnihanCoreCJKUnifiedIdeograph),
            (0x4E02, 0x9FFF, IdeographSet::OtherCJKUnifiedIdeograph),
            (0xA000, MAX_CODEPOINT, IdeographSet::Other),
        ]
    );

    assert_eq!(table.partitions[Source::Script as usize], (Source::Script, 7));
    assert_eq!(table.size(), 10 * 9);

    let lookup = table.lookup().unwrap();
    assert_eq!(lookup.classify(0x41), IdeographSet::Other);
    assert_eq!(lookup.classify(0x4E01), IdeographSet::IICoreAndUnihanCoreCJKUnifiedIdeograph);
}

#[test]
fn build_fails_on_overlap()
{
    let mut scripts = PropertyMap::new();
    scripts.push("Han", Interval::new(0x3005, 0x3007));
    scripts.push("Tangut", Interval::new(0x3007, 0x3007));

    let source = MemorySource::new().with(Source::Script, scripts);

    assert!(matches!(
        IdeographSetTable::build(&source),
        Err(BakeError::Overlap { code: 0x3007, .. })
    ));
}

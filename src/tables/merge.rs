use crate::error::BakeError;
use crate::interval::{Interval, Partition, Segment, MAX_CODEPOINT};

/// слияние нескольких разбиений в одно
///
/// у каждого разбиения свой курсор, все они стартуют с U+0000; очередная граница - минимальный
/// конец текущих сегментов. для полученного интервала метки всех разбиений передаются в combine,
/// курсоры разбиений, сегмент которых на этой границе заканчивается, сдвигаются. новых границ
/// не появляется - каждая граница результата является границей хотя бы одного из входных разбиений
pub fn merge_partitions<L, C, F>(partitions: &[Partition<L>], mut combine: F) -> Result<Partition<C>, BakeError>
where
    F: FnMut(&[&L], Interval) -> C,
{
    let mut cursors = vec![0usize; partitions.len()];
    // сегмент стал текущим на этом шаге и должен начинаться с текущего кодпоинта
    let mut fresh = vec![true; partitions.len()];
    let mut labels: Vec<&L> = Vec::with_capacity(partitions.len());
    let mut table = vec![];
    let mut code = 0;

    while code <= MAX_CODEPOINT {
        let mut boundary = MAX_CODEPOINT;

        labels.clear();

        for (id, partition) in partitions.iter().enumerate() {
            let Some(segment) = partition.get(cursors[id]) else {
                return Err(BakeError::Exhausted {
                    partition: id,
                    code,
                });
            };

            if fresh[id] && segment.range.low != code {
                return Err(BakeError::Misaligned {
                    partition: id,
                    expected: code,
                    found: segment.range.low,
                });
            }

            if !segment.range.is_valid() {
                return Err(BakeError::InvalidInterval {
                    property: format!("#{}", id),
                    low: segment.range.low,
                    high: segment.range.high,
                });
            }

            fresh[id] = false;
            boundary = boundary.min(segment.range.high);
            labels.push(&segment.label);
        }

        let range = Interval::new(code, boundary);
        table.push(Segment::new(range, combine(&labels, range)));

        partitions.iter().enumerate().for_each(|(id, partition)| {
            if partition[cursors[id]].range.high == boundary {
                cursors[id] += 1;
                fresh[id] = true;
            }
        });

        code = boundary + 1;
    }

    Ok(table)
}

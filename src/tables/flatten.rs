use crate::error::BakeError;
use crate::interval::{Interval, Partition, Segment, MAX_CODEPOINT};
use crate::source::PropertyMap;

/// разбиение пространства кодпоинтов по значениям свойства
///
/// идём от U+0000 вверх, держа курсор на текущем интервале каждого значения. если с текущего
/// кодпоинта начинается интервал какого-либо значения - он становится сегментом (или продолжает
/// предыдущий сегмент того же значения), иначе до ближайшего начала интервала тянется пропуск
/// с меткой gap.
///
/// два значения, претендующие на один кодпоинт - ошибка данных, сборка прерывается
pub fn flatten_properties(props: &PropertyMap, gap: &str) -> Result<Partition<String>, BakeError>
{
    validate(props)?;

    let properties: Vec<(&str, &[Interval])> = props.iter().collect();
    let mut cursors = vec![0usize; properties.len()];
    let mut table: Partition<String> = vec![];
    let mut previous: Option<usize> = None;
    let mut code = 0;

    while code <= MAX_CODEPOINT {
        let mut current: Option<usize> = None;
        let mut next_start = MAX_CODEPOINT + 1;

        for (id, &(name, intervals)) in properties.iter().enumerate() {
            let Some(range) = intervals.get(cursors[id]) else {
                continue;
            };

            // начало интервала уже покрыто другим значением
            if range.low < code {
                let owner = table
                    .iter()
                    .rev()
                    .find(|segment| segment.range.contains(range.low))
                    .map(|segment| segment.label.clone())
                    .unwrap_or_default();

                return Err(BakeError::Overlap {
                    code: range.low,
                    first: owner,
                    second: name.to_string(),
                });
            }

            if range.low == code {
                if let Some(other) = current {
                    return Err(BakeError::Overlap {
                        code,
                        first: properties[other].0.to_string(),
                        second: name.to_string(),
                    });
                }

                current = Some(id);
                continue;
            }

            next_start = next_start.min(range.low);
        }

        match current {
            // пропуск
            None => {
                table.push(Segment::new(
                    Interval::new(code, next_start - 1),
                    gap.to_string(),
                ));

                previous = None;
                code = next_start;
            }
            Some(id) => {
                let (name, intervals) = properties[id];
                let range = intervals[cursors[id]];

                match table.last_mut() {
                    Some(last) if previous == Some(id) => last.range.high = range.high,
                    _ => table.push(Segment::new(range, name.to_string())),
                }

                previous = Some(id);
                cursors[id] += 1;
                code = range.high + 1;
            }
        }
    }

    Ok(table)
}

/// интервалы корректны, а внутри одного значения - отсортированы и не пересекаются
fn validate(props: &PropertyMap) -> Result<(), BakeError>
{
    for (name, intervals) in props.iter() {
        if let Some(range) = intervals.iter().find(|range| !range.is_valid()) {
            return Err(BakeError::InvalidInterval {
                property: name.to_string(),
                low: range.low,
                high: range.high,
            });
        }

        if let Some(pair) = intervals
            .windows(2)
            .find(|pair| pair[1].low <= pair[0].high)
        {
            return Err(BakeError::Overlap {
                code: pair[1].low,
                first: name.to_string(),
                second: name.to_string(),
            });
        }
    }

    Ok(())
}

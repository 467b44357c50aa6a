use core::fmt;

use crate::error::BakeError;


/// последний кодпоинт Unicode
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// закрытый интервал кодпоинтов [low, high]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval
{
    pub low: u32,
    pub high: u32,
}

impl Interval
{
    pub const fn new(low: u32, high: u32) -> Self
    {
        Self { low, high }
    }

    /// интервал из одного кодпоинта
    pub const fn single(code: u32) -> Self
    {
        Self {
            low: code,
            high: code,
        }
    }

    /// всё пространство кодпоинтов
    pub fn full() -> Self
    {
        Self {
            low: 0,
            high: MAX_CODEPOINT,
        }
    }

    /// low <= high <= MAX_CODEPOINT
    pub fn is_valid(&self) -> bool
    {
        self.low <= self.high && self.high <= MAX_CODEPOINT
    }

    pub fn contains(&self, code: u32) -> bool
    {
        (self.low ..= self.high).contains(&code)
    }

    /// количество кодпоинтов в интервале
    pub fn len(&self) -> u32
    {
        self.high - self.low + 1
    }

    /// следующий интервал начинается сразу за этим
    pub fn is_followed_by(&self, next: &Interval) -> bool
    {
        self.high.checked_add(1) == Some(next.low)
    }
}

impl fmt::Display for Interval
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self.low == self.high {
            true => write!(f, "U+{:04X}", self.low),
            false => write!(f, "U+{:04X}..U+{:04X}", self.low, self.high),
        }
    }
}

/// сегмент разбиения - интервал и метка, действующая на всём интервале
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<L>
{
    pub range: Interval,
    pub label: L,
}

impl<L> Segment<L>
{
    pub fn new(range: Interval, label: L) -> Self
    {
        Self { range, label }
    }
}

/// разбиение пространства кодпоинтов: сегменты отсортированы, не пересекаются, идут без разрывов
/// от U+0000 до MAX_CODEPOINT
pub type Partition<L> = Vec<Segment<L>>;

/// проверить, что сегменты покрывают всё пространство кодпоинтов без разрывов и пересечений
pub fn check_partition<L>(partition: &[Segment<L>]) -> Result<(), BakeError>
{
    let mut expected = 0;

    for segment in partition {
        if segment.range.low != expected {
            return Err(BakeError::Misaligned {
                partition: 0,
                expected,
                found: segment.range.low,
            });
        }

        if !segment.range.is_valid() {
            return Err(BakeError::InvalidInterval {
                property: String::from("<partition>"),
                low: segment.range.low,
                high: segment.range.high,
            });
        }

        expected = segment.range.high + 1;
    }

    match expected > MAX_CODEPOINT {
        true => Ok(()),
        false => Err(BakeError::Exhausted {
            partition: 0,
            code: expected,
        }),
    }
}

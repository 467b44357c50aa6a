use core::fmt;

/// ошибки запекания таблицы. любая из них прерывает сборку - частично корректную таблицу не пишем
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BakeError
{
    /// два свойства одного источника претендуют на один и тот же кодпоинт
    Overlap
    {
        code: u32,
        first: String,
        second: String,
    },
    /// некорректный интервал: low > high, или выход за пределы пространства кодпоинтов
    InvalidInterval
    {
        property: String,
        low: u32,
        high: u32,
    },
    /// текущий сегмент разбиения не начинается с ожидаемого кодпоинта
    Misaligned
    {
        partition: usize,
        expected: u32,
        found: u32,
    },
    /// разбиение закончилось раньше, чем было покрыто всё пространство кодпоинтов
    Exhausted
    {
        partition: usize,
        code: u32,
    },
    /// ошибка источника данных (чтение файла, разбор строки)
    Source(String),
}

impl fmt::Display for BakeError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            BakeError::Overlap {
                code,
                first,
                second,
            } => write!(
                f,
                "U+{:04X}: пересечение свойств \"{}\" и \"{}\"",
                code, first, second
            ),
            BakeError::InvalidInterval {
                property,
                low,
                high,
            } => write!(
                f,
                "\"{}\": некорректный интервал U+{:04X}..U+{:04X}",
                property, low, high
            ),
            BakeError::Misaligned {
                partition,
                expected,
                found,
            } => write!(
                f,
                "разбиение #{}: ожидался сегмент с U+{:04X}, найден U+{:04X}",
                partition, expected, found
            ),
            BakeError::Exhausted { partition, code } => write!(
                f,
                "разбиение #{}: нет сегмента для U+{:04X}",
                partition, code
            ),
            BakeError::Source(message) => write!(f, "источник данных: {}", message),
        }
    }
}

impl std::error::Error for BakeError {}

impl From<std::io::Error> for BakeError
{
    fn from(error: std::io::Error) -> Self
    {
        BakeError::Source(error.to_string())
    }
}

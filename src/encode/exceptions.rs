use crate::interval::Interval;
use crate::lookup::IdeographSet;

/// ветка правил, в которой действует исключение
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch
{
    Radical,
    Ideographic,
}

/// исключение: сегмент, точно совпадающий с интервалом, получает заданное множество
#[derive(Debug, Clone, Copy)]
pub struct Exception
{
    pub branch: Branch,
    pub range: Interval,
    pub set: IdeographSet,
    pub description: &'static str,
}

macro_rules! exception {
    ($branch: ident, $low: expr, $high: expr, $set: ident, $description: expr) => {
        Exception {
            branch: Branch::$branch,
            range: Interval::new($low, $high),
            set: IdeographSet::$set,
            description: $description,
        }
    };
}

/// исторически сложившиеся исключения
#[rustfmt::skip]
pub const EXCEPTIONS: &[Exception] = &[
    exception!(Radical,     0x2E9A,  0x2E9A,  Other,                     "зарезервировано"),
    exception!(Ideographic, 0x3006,  0x3006,  CJKSpecialIdeograph,       "IDEOGRAPHIC CLOSING MARK"),
    exception!(Ideographic, 0x3007,  0x3007,  CJKSpecialIdeograph,       "IDEOGRAPHIC NUMBER ZERO"),
    exception!(Ideographic, 0x3021,  0x3029,  CJKSpecialIdeograph,       "HANGZHOU NUMERAL ONE..NINE"),
    exception!(Ideographic, 0x3038,  0x303A,  CJKSpecialIdeograph,       "HANGZHOU NUMERAL TEN..THIRTY"),
    exception!(Ideographic, 0x16FE4, 0x16FE4, Other,                     "KHITAN SMALL SCRIPT FILLER"),
    exception!(Ideographic, 0x18800, 0x18AFF, TangutRadicalAndComponent, "TANGUT COMPONENTS"),
];

/// исключение для сегмента в заданной ветке правил
pub fn find_exception(exceptions: &[Exception], branch: Branch, range: Interval) -> Option<&Exception>
{
    exceptions
        .iter()
        .find(|e| e.branch == branch && e.range == range)
}

use crate::interval::Segment;
use crate::lookup::IdeographSet;

/// запись таблицы: (0xLOW, 0xHIGH, IdeographSet::Name)
pub fn format_entry(segment: &Segment<IdeographSet>) -> String
{
    format!(
        "(0x{:04X}, 0x{:04X}, IdeographSet::{})",
        segment.range.low,
        segment.range.high,
        segment.label.name()
    )
}

/// записи через запятую, строки не длиннее max_len (если запись сама по себе не длиннее)
pub fn format_entries(entries: &[String], indent: usize, max_len: usize) -> String
{
    let padding = " ".repeat(indent);
    let mut output = String::new();
    let mut line = String::new();

    for entry in entries {
        if !line.is_empty() && padding.len() + line.len() + entry.len() + 2 > max_len {
            output.push_str(&padding);
            output.push_str(line.trim_end());
            output.push('\n');
            line.clear();
        }

        line.push_str(entry);
        line.push_str(", ");
    }

    if !line.is_empty() {
        output.push_str(&padding);
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

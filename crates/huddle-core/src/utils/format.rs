use chrono::NaiveDate;

/// Format a wire date for display
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Format an optional string, returning a default if None
pub fn format_optional(value: &Option<String>, default: &str) -> String {
    value.as_deref().unwrap_or(default).to_string()
}

/// Format a date range for education/work entries; open-ended ranges
/// render as "start - Present".
pub fn format_date_range(start: &NaiveDate, end: &Option<NaiveDate>, current: bool) -> String {
    let start = format_date(start);
    match end {
        Some(end) if !current => format!("{} - {}", start, format_date(end)),
        _ => format!("{} - Present", start),
    }
}

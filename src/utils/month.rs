use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%z",
];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];

/// Year-month shapes, parsed by pinning the day to the first of the month.
const YEAR_MONTH_FORMATS: [(&str, &str, &str); 5] = [
    ("", "-01", "%Y-%m-%d"),
    ("", "/01", "%Y/%m/%d"),
    ("01/", "", "%d/%m/%Y"),
    ("01 ", "", "%d %B %Y"),
    ("01-", "", "%d-%B-%Y"),
];

/// Parse a date-like month label into a month number in 1..=12.
///
/// Accepts full dates and timestamps (with or without a UTC offset), year-month
/// pairs (`2024-05`, `05/2024`, `May 2024`, `Jan-2024`), bare month names and
/// plain month numbers. A bare four-digit year means January of that year.
pub fn parse_month_label(label: &str) -> Option<u32> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    if let Ok(n) = label.parse::<u32>() {
        if label.len() == 4 && n >= 1000 {
            return Some(1);
        }
        return (1..=12).contains(&n).then_some(n);
    }

    if let Some(month) = month_from_name(label) {
        return Some(month);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(label) {
        return Some(dt.month());
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(label, format) {
            return Some(dt.month());
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(label, format) {
            return Some(dt.month());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(label, format) {
            return Some(date.month());
        }
    }

    for (prefix, suffix, format) in YEAR_MONTH_FORMATS {
        let candidate = format!("{prefix}{label}{suffix}");
        if let Ok(date) = NaiveDate::parse_from_str(&candidate, format) {
            return Some(date.month());
        }
    }

    None
}

fn month_from_name(label: &str) -> Option<u32> {
    let lower = label.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| *name == lower || (lower.len() == 3 && name.starts_with(&lower)))
        .map(|idx| idx as u32 + 1)
}

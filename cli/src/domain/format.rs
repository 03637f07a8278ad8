//! Display helpers for app attributes.

use chrono::{DateTime, Utc};

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;

/// Human size in the platform's traditional notation.
///
/// `0` renders as `(empty)`, sizes below 1 KiB as the bare number, and
/// larger sizes as whole `k`, `M` or `G` units (rounded down).
#[must_use]
pub fn format_bytes(amount: u64) -> String {
    match amount {
        0 => "(empty)".to_string(),
        n if n < KB => n.to_string(),
        n if n < MB => format!("{}k", n / KB),
        n if n < GB => format!("{}M", n / MB),
        n => format!("{}G", n / GB),
    }
}

/// `1 table`, `3 tables`.
#[must_use]
pub fn quantify(noun: &str, count: u64) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M %Z").to_string()
}

/// Data size line: `format_bytes(size)`, and when the table count is known,
/// ` in N tables` with an empty database shown as `0K`.
#[must_use]
pub fn format_data_size(size: u64, tables: Option<u32>) -> String {
    let data = format_bytes(size);
    match tables {
        Some(t) => format!(
            "{} in {}",
            data.replace("(empty)", "0K"),
            quantify("table", u64::from(t))
        ),
        None => data,
    }
}

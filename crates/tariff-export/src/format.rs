//! Cell formatting for upload files.

use chrono::NaiveDate;

/// Format a rate value with the given precision, trimming trailing zeros.
/// Blank, unparseable, and zero values all render as "0".
pub fn format_rate(value: &str, decimals: usize) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "0".to_string();
    }
    let Ok(parsed) = trimmed.parse::<f64>() else {
        return "0".to_string();
    };
    if parsed == 0.0 {
        return "0".to_string();
    }
    let formatted = format!("{parsed:.decimals$}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Specific rate divided by its declared multiplier. A blank, unparseable,
/// or zero multiplier divides by 1. Rendered with enough precision that a
/// per-100-units quote survives the division.
pub fn format_unit_rate(rate: &str, multiplier: &str) -> String {
    let Ok(rate) = rate.trim().parse::<f64>() else {
        return "0".to_string();
    };
    let divisor = match multiplier.trim().parse::<f64>() {
        Ok(value) if value != 0.0 => value,
        _ => 1.0,
    };
    format_rate(&(rate / divisor).to_string(), 6)
}

/// Normalize a start date to `YYYYMMDD`, raising anything before January 1st
/// of the processing year to that date. Blank stays blank; non-numeric
/// values pass through compacted.
pub fn format_date_from(value: &str, year: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    let digits = compact_date(value);
    let year_start = format!("{year}0101");
    match (digits.parse::<u64>(), year_start.parse::<u64>()) {
        (Ok(date), Ok(start)) if date < start => year_start,
        _ => digits,
    }
}

/// Normalize an end date to `YYYYMMDD`. The far-future sentinel year 9999
/// always renders as `99991231`, whatever month and day the feed carried.
pub fn format_date_to(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    let digits = compact_date(value);
    if digits.starts_with("9999") {
        return "99991231".to_string();
    }
    digits
}

/// Reformat an ISO `YYYY-MM-DD` source date as `YYYYMMDD`; values chrono
/// cannot parse fall back to digit compaction.
pub fn reformat_date_compact(value: &str) -> String {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%Y%m%d").to_string(),
        Err(_) => compact_date(value),
    }
}

/// The tonne unit arrives as a bare "T" but the master-data system expects
/// "TO". Exact-match substitution; longer codes containing T are untouched.
pub fn normalize_tonne_code(value: &str) -> String {
    if value == "T" {
        "TO".to_string()
    } else {
        value.to_string()
    }
}

fn compact_date(value: &str) -> String {
    value
        .chars()
        .filter(|ch| *ch != '-' && *ch != ' ')
        .take(8)
        .collect()
}

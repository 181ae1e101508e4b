//! String and date utilities shared by filtering, sorting and renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Case-insensitive substring test.
///
/// An empty needle always matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Parse a date-like string.
///
/// Accepted forms:
/// - `2024-03-01`
/// - `2024-03-01T10:30:00` / `2024-03-01 10:30:00`
/// - RFC 3339 (`2024-03-01T10:30:00Z`, `2024-03-01T10:30:00+01:00`), normalized to UTC
pub fn parse_date_like(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.len() < 10 {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Format an amount with thousands separators and two decimals (e.g. `NGN 1,250,000.00`).
pub fn format_amount(currency: &str, amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{currency} {sign}{grouped}.{fraction}")
}

/// Truncate to `max` characters, appending an ellipsis when shortened.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let kept: String = value.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Lagos Office", "lagos"));
        assert!(contains_ignore_case("Lagos Office", "OFF"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Abuja", "lagos"));
    }

    #[test]
    fn test_parse_date_like_forms() {
        let day = parse_date_like("2024-03-01").expect("date");
        assert_eq!(day.to_string(), "2024-03-01 00:00:00");

        let dt = parse_date_like("2024-03-01T10:30:00").expect("datetime");
        assert_eq!(dt.to_string(), "2024-03-01 10:30:00");

        let rfc = parse_date_like("2024-03-01T10:30:00+01:00").expect("rfc3339");
        assert_eq!(rfc.to_string(), "2024-03-01 09:30:00");

        assert!(parse_date_like("Lagos").is_none());
        assert!(parse_date_like("12").is_none());
        assert!(parse_date_like("2024-13-40").is_none());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("NGN", 1_250_000.0), "NGN 1,250,000.00");
        assert_eq!(format_amount("NGN", 999.5), "NGN 999.50");
        assert_eq!(format_amount("NGN", -1234.0), "NGN -1,234.00");
        assert_eq!(format_amount("NGN", 0.0), "NGN 0.00");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 6), "a lon…");
    }
}

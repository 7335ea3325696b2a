//! Timestamp normalisation.
//!
//! History logs carry dates in several shapes depending on which client
//! wrote the transaction:
//!
//! | Input | Output |
//! |---|---|
//! | `M/D/YYYY`, `MM/DD/YYYY` | `YYYY-MM-DD` |
//! | `MM/DD/YYYY,H:MM AM/PM` | `YYYY-MM-DD` (time dropped) |
//! | `YYYYMMDDhhmmss` | `YYYY-MM-DD HH:MM:SS` |
//! | 21-char line header | `YYYY-MM-DD HH:MM:SS` |
//! | anything else | empty string |
//!
//! Already-canonical values pass through unchanged, so normalisation is
//! idempotent. Component values are validated with `chrono`; an impossible
//! date such as `13/45/2023` is treated as unrecognised. No timezone
//! conversion happens anywhere.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

fn slash_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap())
}

fn slash_datetime_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4}),\s?\d{1,2}:\d{2}\s?[AP]M$").unwrap()
    })
}

fn compact_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{14}$").unwrap())
}

fn canonical_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}( \d{2}:\d{2}:\d{2})?$").unwrap())
}

/// Normalise `input` to `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`.
///
/// Shapes are tried in a fixed order; the first structural match wins.
/// Returns an empty string for anything unrecognised or impossible.
pub fn normalize_date(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }
    if canonical_re().is_match(input) {
        return validate_canonical(input);
    }
    if let Some(caps) = slash_date_re().captures(input) {
        return format_ymd(&caps[3], &caps[1], &caps[2]);
    }
    if let Some(caps) = slash_datetime_re().captures(input) {
        return format_ymd(&caps[3], &caps[1], &caps[2]);
    }
    if compact_re().is_match(input) {
        return format_compact(input);
    }
    if let Some(stamp) = header_stamp(input) {
        if is_header(input) {
            return format_compact(stamp);
        }
    }
    String::new()
}

/// Extract the 14-digit timestamp from a raw line or header token.
///
/// Requires only the `E` prefix and the digits, not the full 21-char
/// header, so range gating can work on lines whose tail is damaged.
pub fn header_stamp(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    if bytes.len() < 15 || bytes[0] != b'E' {
        return None;
    }
    if !bytes[1..15].iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(&line[1..15])
}

/// Full header check: `E`, 14 digits, 4 station digits, `R`, one space.
fn is_header(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 21
        && bytes[0] == b'E'
        && bytes[1..19].iter().all(u8::is_ascii_digit)
        && bytes[19] == b'R'
        && bytes[20] == b' '
}

fn validate_canonical(input: &str) -> String {
    let ok = if input.len() == 10 {
        NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok()
    } else {
        NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S").is_ok()
    };
    if ok { input.to_string() } else { String::new() }
}

fn format_ymd(year: &str, month: &str, day: &str) -> String {
    let (Ok(y), Ok(m), Ok(d)) = (year.parse(), month.parse(), day.parse()) else {
        return String::new();
    };
    NaiveDate::from_ymd_opt(y, m, d)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn format_compact(stamp: &str) -> String {
    NaiveDateTime::parse_from_str(stamp, "%Y%m%d%H%M%S")
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_date_zero_padded() {
        assert_eq!(normalize_date("1/2/2023"), "2023-01-02");
        assert_eq!(normalize_date("04/11/2024"), "2024-04-11");
    }

    #[test]
    fn test_slash_datetime_drops_time() {
        assert_eq!(normalize_date("12/25/2023,4:05 PM"), "2023-12-25");
        assert_eq!(normalize_date("1/9/2023,11:59 AM"), "2023-01-09");
    }

    #[test]
    fn test_compact_timestamp() {
        assert_eq!(normalize_date("20231010051008"), "2023-10-10 05:10:08");
    }

    #[test]
    fn test_header_shape() {
        assert_eq!(normalize_date("E202310100510083031R "), "2023-10-10 05:10:08");
    }

    #[test]
    fn test_header_without_trailing_space_rejected() {
        assert_eq!(normalize_date("E202310100510083031R"), "");
    }

    #[test]
    fn test_unrecognised_is_empty() {
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("NEVER"), "");
        assert_eq!(normalize_date("2023/10/10"), "");
    }

    #[test]
    fn test_impossible_dates_are_empty() {
        assert_eq!(normalize_date("13/45/2023"), "");
        assert_eq!(normalize_date("20231345051008"), "");
        assert_eq!(normalize_date("2/30/2023"), "");
    }

    #[test]
    fn test_canonical_passthrough() {
        assert_eq!(normalize_date("2023-10-10"), "2023-10-10");
        assert_eq!(
            normalize_date("2023-10-10 05:10:08"),
            "2023-10-10 05:10:08"
        );
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_date("E202304110001162995R ");
        assert_eq!(normalize_date(&once), once);
        let once = normalize_date("04/11/2024");
        assert_eq!(normalize_date(&once), once);
    }

    #[test]
    fn test_header_stamp_extraction() {
        assert_eq!(
            header_stamp("E202310100510083031R ^S01EV"),
            Some("20231010051008")
        );
        assert_eq!(header_stamp("garbage"), None);
        assert_eq!(header_stamp("E20231010"), None);
    }
}

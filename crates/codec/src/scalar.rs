//! Scalar field interpretation (dates, counts, durations).

use regex::Regex;
use std::sync::OnceLock;

fn iso_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"))
}

fn leading_integer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d+").expect("integer pattern is valid"))
}

/// `YYYY-MM-DD`, or `None` for anything else.
pub fn date(value: Option<String>) -> Option<String> {
    value.filter(|v| iso_date().is_match(v.trim()))
        .map(|v| v.trim().to_string())
}

/// A value made only of digits, e.g. a week number.
pub fn whole_number(value: Option<&str>) -> Option<u32> {
    let value = value?.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// The integer a value starts with: `7/10` is 7, `18 minutes` is 18.
pub fn leading<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
    let value = value?.trim();
    leading_integer().find(value)?.as_str().parse().ok()
}

/// Whether a file stem such as `2025-01-01` is an ISO date.
pub fn is_iso_date(value: &str) -> bool {
    iso_date().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date() {
        assert_eq!(date(Some("2025-12-29".into())).as_deref(), Some("2025-12-29"));
        assert_eq!(date(Some("[YYYY-MM-DD]".into())), None);
        assert_eq!(date(Some("next monday".into())), None);
        assert_eq!(date(None), None);
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(whole_number(Some("1")), Some(1));
        assert_eq!(whole_number(Some(" 52 ")), Some(52));
        assert_eq!(whole_number(Some("[N]")), None);
        assert_eq!(whole_number(Some("1a")), None);
        assert_eq!(whole_number(Some("")), None);
    }

    #[test]
    fn test_leading() {
        assert_eq!(leading::<i32>(Some("7/10")), Some(7));
        assert_eq!(leading::<u32>(Some("18 minutes")), Some(18));
        assert_eq!(leading::<u32>(Some("minutes")), None);
        assert_eq!(leading::<u32>(Some("-3")), None);
        assert_eq!(leading::<i32>(Some("-3")), Some(-3));
    }
}

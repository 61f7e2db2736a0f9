//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::DateError;

/// Turns a raw post date into its display string
pub trait DateFormatter {
    fn format_date(&self, date: &str) -> Result<String, DateError>;
}

impl<F> DateFormatter for F
where
    F: Fn(&str) -> Result<String, DateError>,
{
    fn format_date(&self, date: &str) -> Result<String, DateError> {
        self(date)
    }
}

/// Formats dates with a Moment.js-compatible pattern
///
/// # Examples
/// ```ignore
/// PatternDateFormatter::new("YYYY년 M월 D일").format_date("2019-04-08") // -> "2019년 4월 8일"
/// ```
#[derive(Debug, Clone)]
pub struct PatternDateFormatter {
    chrono_format: String,
}

impl PatternDateFormatter {
    pub fn new(pattern: &str) -> Self {
        Self {
            chrono_format: moment_to_chrono_format(pattern),
        }
    }
}

impl DateFormatter for PatternDateFormatter {
    fn format_date(&self, date: &str) -> Result<String, DateError> {
        let parsed = parse_date(date)?;
        Ok(parsed.format(&self.chrono_format).to_string())
    }
}

/// Parse a date string in the formats content sources commonly emit
///
/// Offsets are dropped after conversion so the wall-clock time written in
/// the source is kept regardless of the machine's timezone.
pub fn parse_date(s: &str) -> Result<NaiveDateTime, DateError> {
    let s = s.trim();

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Some(dt) = NaiveDate::parse_from_str(s, fmt)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(dt);
        }
    }

    Err(DateError::new(s))
}

/// Moment.js tokens, longest first for each letter
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DDDD", "%j"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("HH", "%H"),
    ("H", "%-H"),
    ("hh", "%I"),
    ("h", "%-I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("SSS", "%3f"),
    ("A", "%p"),
];

/// Convert a Moment.js format to a chrono format
///
/// Text inside `[...]` is copied literally, as Moment.js does.
fn moment_to_chrono_format(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    'scan: while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(end) = rest.find(']') {
                push_literal(&mut out, &rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        for (token, replacement) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(replacement);
                rest = tail;
                continue 'scan;
            }
        }

        push_literal(&mut out, &rest[..c.len_utf8()]);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let formatter = PatternDateFormatter::new("YYYY-MM-DD");
        assert_eq!(formatter.format_date("2020-01-01").unwrap(), "2020-01-01");
        assert_eq!(
            formatter.format_date("2024-01-15 10:30:00").unwrap(),
            "2024-01-15"
        );
    }

    #[test]
    fn test_format_date_korean() {
        let formatter = PatternDateFormatter::new("YYYY년 M월 D일");
        assert_eq!(formatter.format_date("2019-04-08").unwrap(), "2019년 4월 8일");
    }

    #[test]
    fn test_format_full_date() {
        let formatter = PatternDateFormatter::new("MMMM D, YYYY");
        assert_eq!(
            formatter.format_date("2024-01-15T10:30:00").unwrap(),
            "January 15, 2024"
        );
    }

    #[test]
    fn test_rfc3339_keeps_source_wall_time() {
        let formatter = PatternDateFormatter::new("YYYY-MM-DD HH:mm");
        assert_eq!(
            formatter.format_date("2019-12-31T23:30:00+09:00").unwrap(),
            "2019-12-31 23:30"
        );
        assert_eq!(
            formatter.format_date("2019-04-08T10:00:00.000Z").unwrap(),
            "2019-04-08 10:00"
        );
    }

    #[test]
    fn test_malformed_date() {
        let formatter = PatternDateFormatter::new("YYYY-MM-DD");
        let err = formatter.format_date("yesterday").unwrap_err();
        assert_eq!(err, DateError::new("yesterday"));
        assert!(formatter.format_date("2020-13-45").is_err());
    }

    #[test]
    fn test_closure_formatter() {
        let fake = |date: &str| -> Result<String, DateError> { Ok(format!("<{}>", date)) };
        assert_eq!(fake.format_date("2020-01-01").unwrap(), "<2020-01-01>");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(moment_to_chrono_format("[Day] D"), "Day %-d");
        assert_eq!(moment_to_chrono_format("100%"), "100%%");
    }
}

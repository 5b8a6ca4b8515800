//! Flat CSV interchange for finished workout sessions.
//!
//! One row per logged set; session columns repeat on every row of the
//! session. Quoting follows RFC 4180: a field containing a comma, quote or
//! newline is wrapped in double quotes with inner quotes doubled.

mod export;
mod import;

use chrono::{DateTime, SecondsFormat, Utc};

pub use export::{export_csv, export_filename, export_to_dir, export_to_file};
pub use import::{import_csv, import_csv_str};

pub const HEADER: &str = "session_id,session_date,session_end_date,template_name,exercise_name,muscle_group,category,set_number,weight,reps,completed";

pub const COLUMN_COUNT: usize = 11;

/// Separator between muscle group names inside the `muscle_group` column.
pub const MUSCLE_GROUP_SEPARATOR: &str = ";";

pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Trims the field and, when it is wrapped in quotes, strips them and
/// collapses doubled inner quotes.
pub fn unescape_field(value: &str) -> String {
    let trimmed = value.trim();
    match trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\"\"", "\""),
        None => trimmed.to_string(),
    }
}

/// Splits one line on commas that are not inside double quotes. Quote
/// characters are kept in the output; use [`unescape_field`] on each field.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Real numbers keep a fractional part, so 100 kg is written as `100.0`.
pub fn format_weight(weight: f64) -> String {
    format!("{weight:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_header_has_eleven_columns() {
        assert_eq!(HEADER.split(',').count(), COLUMN_COUNT);
    }

    #[test]
    fn test_parse_simple_line() {
        assert_eq!(parse_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_quoted_comma() {
        let fields = parse_line("\"hello, world\",b,c");

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], "\"hello, world\"");
    }

    #[test]
    fn test_parse_keeps_empty_fields() {
        assert_eq!(parse_line("a,,c,"), vec!["a", "", "c", ""]);
    }

    #[test]
    fn test_escape_plain_value_untouched() {
        assert_eq!(escape_field("Bench Press"), "Bench Press");
    }

    #[test]
    fn test_escape_quotes_and_commas() {
        assert_eq!(escape_field("Push, Pull"), "\"Push, Pull\"");
        assert_eq!(escape_field("The \"Big\" One"), "\"The \"\"Big\"\" One\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_unescape_reverses_escape() {
        for value in ["plain", "Push, Pull", "The \"Big\" One", "Chest;Triceps"] {
            assert_eq!(unescape_field(&escape_field(value)), value);
        }
    }

    #[test]
    fn test_unescape_lone_quote() {
        assert_eq!(unescape_field("\""), "\"");
        assert_eq!(unescape_field("  padded "), "padded");
    }

    #[test]
    fn test_escaped_field_survives_split() {
        let line = format!("{},x", escape_field("a, \"b\", c"));
        let fields = parse_line(&line);

        assert_eq!(fields.len(), 2);
        assert_eq!(unescape_field(&fields[0]), "a, \"b\", c");
    }

    #[test]
    fn test_date_format() {
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 18, 5, 7).unwrap();

        assert_eq!(format_date(date), "2024-03-09T18:05:07Z");
        assert_eq!(parse_date("2024-03-09T18:05:07Z"), Some(date));
        assert_eq!(parse_date("2024-03-09T20:05:07+02:00"), Some(date));
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(100.0), "100.0");
        assert_eq!(format_weight(62.5), "62.5");
    }
}

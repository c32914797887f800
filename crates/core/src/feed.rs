//! Parsing helpers for external humanitarian-alert feeds.
//!
//! Feeds arrive as loosely formatted CSV: amounts carry currency symbols
//! and thousands separators, dates come in more than one layout, and
//! country names may carry bracketed qualifiers such as `Congo [DRC]`.
//! Every helper here is lenient and returns `None` instead of failing so
//! that one bad row never aborts an ingestion run.

use std::collections::HashMap;

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::NaiveDateTime;

/// Date layouts accepted for alert dates, tried in order.
///
/// The first layout has no minute field; the minute is taken as zero.
pub const ALERT_DATE_FORMATS: &[&str] = &["%d %b %Y - %H:%S", "%m/%d/%Y %H:%M"];

/// Extract an integer amount by dropping every non-digit character.
///
/// `"£ 1,250,000"` parses to `1250000`. Returns `None` when no digit is
/// left or the digits overflow `i64`.
pub fn parse_amount(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Parse an alert date using the first matching [`ALERT_DATE_FORMATS`] entry.
pub fn parse_alert_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    ALERT_DATE_FORMATS
        .iter()
        .find_map(|format| parse_with_format(raw, format))
}

fn parse_with_format(raw: &str, format: &str) -> Option<NaiveDateTime> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, raw, StrftimeItems::new(format)).ok()?;
    if !format.contains("%M") {
        parsed.set_minute(0).ok()?;
    }
    parsed.to_naive_datetime_with_offset(0).ok()
}

/// Strip a bracketed qualifier from a feed country name.
///
/// `"Congo [DRC]"` becomes `"Congo"`; names without brackets are only trimmed.
pub fn normalize_country_name(raw: &str) -> &str {
    raw.split('[').next().unwrap_or(raw).trim()
}

/// A CSV row keyed by header name.
pub type CsvRecord = HashMap<String, String>;

/// Parse CSV text into header-keyed records.
///
/// Rows may be shorter than the header; missing cells read as empty
/// strings. Rows whose cells are all blank are skipped.
pub fn parse_csv_records(text: &str) -> Result<Vec<CsvRecord>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| format!("CSV header: {e}"))?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err("CSV header row is empty".into());
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| format!("CSV row: {e}"))?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        records.push(
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.clone(), row.get(i).unwrap_or_default().to_string()))
                .collect(),
        );
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn amount_strips_currency_and_separators() {
        assert_eq!(parse_amount("£ 1,250,000"), Some(1_250_000));
        assert_eq!(parse_amount("GBP 300000.00"), Some(30_000_000));
        assert_eq!(parse_amount("42"), Some(42));
    }

    #[test]
    fn amount_without_digits_is_none() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("n/a"), None);
    }

    #[test]
    fn alert_date_long_format_without_minutes() {
        let date = parse_alert_date("05 Mar 2019 - 14:30").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2019, 3, 5));
        assert_eq!(date.hour(), 14);
        assert_eq!(date.minute(), 0);
        assert_eq!(date.second(), 30);
    }

    #[test]
    fn alert_date_us_format() {
        let date = parse_alert_date("12/31/2018 09:15").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2018, 12, 31));
        assert_eq!((date.hour(), date.minute()), (9, 15));
    }

    #[test]
    fn alert_date_rejects_unknown_layouts() {
        assert!(parse_alert_date("2019-03-05").is_none());
        assert!(parse_alert_date("").is_none());
    }

    #[test]
    fn country_name_drops_bracketed_suffix() {
        assert_eq!(normalize_country_name("Congo [DRC]"), "Congo");
        assert_eq!(normalize_country_name("  Kenya "), "Kenya");
    }

    #[test]
    fn csv_records_keyed_by_header() {
        let text = "Country,Alert,Amount Awarded\r\nKenya,\"Floods, 2019\",\"£ 1,000\"\r\n\r\nChad,Drought,\n";
        let records = parse_csv_records(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Country"], "Kenya");
        assert_eq!(records[0]["Alert"], "Floods, 2019");
        assert_eq!(records[0]["Amount Awarded"], "£ 1,000");
        assert_eq!(records[1]["Amount Awarded"], "");
    }

    #[test]
    fn csv_quoted_newlines_and_escaped_quotes() {
        let text = "A,B\n\"line one\nline two\",\"say \"\"hi\"\"\"\n";
        let records = parse_csv_records(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["A"], "line one\nline two");
        assert_eq!(records[0]["B"], "say \"hi\"");
    }

    #[test]
    fn csv_short_rows_are_padded() {
        let records = parse_csv_records("A,B,C\n1\n").unwrap();
        assert_eq!(records[0]["A"], "1");
        assert_eq!(records[0]["C"], "");
    }

    #[test]
    fn csv_header_bom_and_blank_rows() {
        let records = parse_csv_records("\u{feff}Country\n  \nKenya\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Country"], "Kenya");
    }

    #[test]
    fn csv_empty_input_is_an_error() {
        assert!(parse_csv_records("").is_err());
    }
}

//! Parsers for the dataset's external encodings.
//!
//! Both helpers fail soft: malformed input yields an absent or default value,
//! never an error. The caller owns any logging of rejected input.

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y%m%d";

/// Parses an 8-digit `YYYYMMDD` calendar date.
///
/// Wrong length, non-numeric text, and impossible dates all yield `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Parses a schedule boolean flag: the literal `"1"` after trimming is true,
/// anything else is false.
pub fn parse_flag(raw: &str) -> bool {
    raw.trim() == "1"
}

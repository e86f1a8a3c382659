//! YYMMDD date fields

use crate::constants::{CENTURY_CUTOFF, DATE_FIELD_LEN};
use crate::error::MrzError;
use chrono::NaiveDate;

/// Map a two-digit year onto a full year.
///
/// Values below [`CENTURY_CUTOFF`] land in the 2000s, the rest in the 1900s.
/// The cutoff is fixed, so a birth year of `39` reads as 2039.
pub const fn expand_year(two_digit: u32) -> i32 {
    if two_digit < CENTURY_CUTOFF {
        2000 + two_digit as i32
    } else {
        1900 + two_digit as i32
    }
}

/// Decode a six-digit `YYMMDD` field into a calendar date
pub fn decode(field: &str) -> Result<NaiveDate, MrzError> {
    let bytes = field.as_bytes();
    if bytes.len() != DATE_FIELD_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(MrzError::InvalidDateField {
            value: field.to_string(),
        });
    }

    let pair = |i: usize| u32::from(bytes[i] - b'0') * 10 + u32::from(bytes[i + 1] - b'0');
    let year = expand_year(pair(0));
    let month = pair(2);
    let day = pair(4);

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(MrzError::InvalidCalendarDate { year, month, day })
}

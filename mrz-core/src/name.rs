//! Name field decomposition

use crate::constants::{FILLER, NAME_SEPARATOR};

/// Collapse every run of fillers into one space and trim trailing spaces.
///
/// A leading run still becomes a leading space.
pub fn collapse_fillers(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;

    for c in raw.chars() {
        if c == char::from(FILLER) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }

    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out
}

/// Split a raw name field into `(surname, given_names)`.
///
/// The first `<<` separates the two parts; without one the whole field is
/// the surname and the given names are empty.
pub fn split(raw: &str) -> (String, String) {
    match raw.find(NAME_SEPARATOR) {
        Some(i) => (
            collapse_fillers(&raw[..i]),
            collapse_fillers(&raw[i + NAME_SEPARATOR.len()..]),
        ),
        None => (collapse_fillers(raw), String::new()),
    }
}

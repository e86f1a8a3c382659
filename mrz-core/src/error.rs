//! Error types for MRZ decoding

use serde::Serialize;
use std::fmt;

/// Fields protected by their own check digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckedField {
    /// Document number
    DocumentNumber,
    /// Date of birth
    BirthDate,
    /// Date of expiry
    ExpiryDate,
    /// Personal number / optional data (TD3 only)
    PersonalNumber,
    /// Composite digit over several concatenated spans
    Composite,
}

impl CheckedField {
    /// Stable display name of the field
    pub const fn name(&self) -> &'static str {
        match self {
            CheckedField::DocumentNumber => "document number",
            CheckedField::BirthDate => "birth date",
            CheckedField::ExpiryDate => "expiry date",
            CheckedField::PersonalNumber => "personal number",
            CheckedField::Composite => "composite",
        }
    }
}

impl fmt::Display for CheckedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while decoding a machine-readable zone
///
/// Every variant is terminal for the decode in progress.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MrzError {
    /// Character outside `[A-Z0-9<]`
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The first offending character.
        character: char,
        /// Zero-based character index.
        position: usize,
    },

    /// Length is neither 88 (TD3) nor 90 (TD1)
    #[error("Unrecognized MRZ length {length}: expected 88 (TD3) or 90 (TD1)")]
    UnrecognizedLength {
        /// The length of the rejected text.
        length: usize,
    },

    /// Check digit does not match its span
    #[error("Check digit mismatch for {field}: found {expected:?}, computed {computed}")]
    CheckDigitMismatch {
        /// The field the check digit protects.
        field: CheckedField,
        /// The character found at the check-digit position.
        expected: char,
        /// The digit computed from the span.
        computed: u8,
    },

    /// Date field is not six ASCII digits
    #[error("Invalid date field {value:?}: expected six digits YYMMDD")]
    InvalidDateField {
        /// The offending field.
        value: String,
    },

    /// Date digits do not form a real calendar date
    #[error("Invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate {
        /// Year after century windowing.
        year: i32,
        /// Month as written in the field.
        month: u32,
        /// Day as written in the field.
        day: u32,
    },
}

impl MrzError {
    /// The checked field, if this is a check-digit failure
    pub fn checked_field(&self) -> Option<CheckedField> {
        match self {
            MrzError::CheckDigitMismatch { field, .. } => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_details() {
        let err = MrzError::InvalidCharacter {
            character: 'a',
            position: 7,
        };
        assert_eq!(err.to_string(), "Invalid character 'a' at position 7");

        let err = MrzError::CheckDigitMismatch {
            field: CheckedField::BirthDate,
            expected: '3',
            computed: 1,
        };
        assert_eq!(
            err.to_string(),
            "Check digit mismatch for birth date: found '3', computed 1"
        );

        let err = MrzError::InvalidCalendarDate {
            year: 1969,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "Invalid calendar date 1969-02-30");
    }

    #[test]
    fn test_checked_field_accessor() {
        let err = MrzError::CheckDigitMismatch {
            field: CheckedField::Composite,
            expected: '<',
            computed: 0,
        };
        assert_eq!(err.checked_field(), Some(CheckedField::Composite));
        assert_eq!(
            MrzError::UnrecognizedLength { length: 3 }.checked_field(),
            None
        );
    }
}

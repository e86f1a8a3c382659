//! Weighted modulo-10 check digits
//!
//! Each character maps to a value (`<` is 0, digits are themselves, letters
//! are 10 for `A` through 35 for `Z`), is multiplied by a weight from the
//! repeating sequence 7, 3, 1, and the sum modulo 10 is the check digit.
//! The weight sequence restarts for every call and carries across the
//! sub-spans of a concatenated input.

use crate::constants::CHECK_WEIGHTS;
use crate::error::{CheckedField, MrzError};
use crate::layout::CheckRule;

#[cfg(feature = "logging")]
use tracing::trace;

/// Numeric value of one MRZ character.
///
/// Letters are case-insensitive. Anything that is neither a digit nor a
/// letter counts like the filler.
pub const fn char_value(byte: u8) -> u32 {
    match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'A'..=b'Z' => (byte - b'A') as u32 + 10,
        b'a'..=b'z' => (byte - b'a') as u32 + 10,
        // Filler and anything else
        _ => 0,
    }
}

/// Compute the check digit of the concatenation of `spans`
pub fn check_digit(spans: &[&str]) -> u8 {
    let sum: u32 = spans
        .iter()
        .flat_map(|span| span.bytes())
        .zip(CHECK_WEIGHTS.iter().cycle())
        .map(|(byte, weight)| char_value(byte) * weight)
        .sum();

    (sum % 10) as u8
}

/// Validate `expected` against the check digit of `spans`.
///
/// The comparison is numeric; a non-digit `expected` never matches.
pub fn validate(field: CheckedField, spans: &[&str], expected: char) -> Result<(), MrzError> {
    let computed = check_digit(spans);

    #[cfg(feature = "logging")]
    trace!("Check digit for {}: found {:?}, computed {}", field, expected, computed);

    if expected.to_digit(10) != Some(u32::from(computed)) {
        return Err(MrzError::CheckDigitMismatch {
            field,
            expected,
            computed,
        });
    }

    Ok(())
}

/// Validate one layout rule against an alphabet-validated record
pub fn validate_rule(rule: &CheckRule, text: &str) -> Result<(), MrzError> {
    let spans: Vec<&str> = rule.spans.iter().map(|span| span.slice(text)).collect();
    let expected = char::from(text.as_bytes()[rule.digit]);
    validate(rule.field, &spans, expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Span, TD3_LAYOUT};

    #[test]
    fn test_char_values() {
        assert_eq!(char_value(b'<'), 0);
        assert_eq!(char_value(b'0'), 0);
        assert_eq!(char_value(b'7'), 7);
        assert_eq!(char_value(b'A'), 10);
        assert_eq!(char_value(b'Z'), 35);
        assert_eq!(char_value(b'z'), 35);
    }

    #[test]
    fn test_known_digits() {
        // ICAO 9303 specimen values
        assert_eq!(check_digit(&["L898902C<"]), 3);
        assert_eq!(check_digit(&["690806"]), 1);
        assert_eq!(check_digit(&["940623"]), 6);
        assert_eq!(check_digit(&["ZE184226B<<<<<"]), 1);
        assert_eq!(check_digit(&["520727"]), 3);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(check_digit(&["l898902c<"]), check_digit(&["L898902C<"]));
    }

    #[test]
    fn test_empty_span_is_zero() {
        assert_eq!(check_digit(&[]), 0);
        assert_eq!(check_digit(&[""]), 0);
        assert_eq!(check_digit(&["<<<<<<"]), 0);
    }

    #[test]
    fn test_weight_carries_across_spans() {
        let whole = check_digit(&["L898902C<3690806194062"]);
        let split = check_digit(&["L898902C<3", "6908061", "94062"]);
        assert_eq!(whole, split);

        // Restarting the weights per span would give a different answer here
        let restarted: u32 = ["AB", "C"]
            .iter()
            .map(|s| u32::from(check_digit(&[*s])))
            .sum::<u32>()
            % 10;
        assert_ne!(u32::from(check_digit(&["AB", "C"])), restarted);
    }

    #[test]
    fn test_validate_mismatch() {
        assert_eq!(validate(CheckedField::BirthDate, &["690806"], '1'), Ok(()));
        assert_eq!(
            validate(CheckedField::BirthDate, &["690806"], '2'),
            Err(MrzError::CheckDigitMismatch {
                field: CheckedField::BirthDate,
                expected: '2',
                computed: 1,
            })
        );
    }

    #[test]
    fn test_filler_digit_never_matches() {
        assert!(validate(CheckedField::PersonalNumber, &["<<<<"], '<').is_err());
        assert!(validate(CheckedField::PersonalNumber, &["<<<<"], '0').is_ok());
    }

    #[test]
    fn test_validate_rule() {
        let text = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<L898902C<3UTO6908061F9406236ZE184226B<<<<<14";
        for rule in TD3_LAYOUT.checks {
            assert_eq!(validate_rule(rule, text), Ok(()), "{}", rule.field);
        }

        // Document number span checked against the nationality's first letter
        const DOCUMENT_NUMBER: &[Span] = &[Span::new(44, 53)];
        let rule = CheckRule {
            field: CheckedField::DocumentNumber,
            spans: DOCUMENT_NUMBER,
            digit: 54,
            guard: None,
        };
        assert!(validate_rule(&rule, text).is_err());
    }
}

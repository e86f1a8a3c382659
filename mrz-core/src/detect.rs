//! Format detection: alphabet and length checks, variant selection

use crate::constants::is_mrz_byte;
use crate::error::MrzError;
use crate::types::DocumentVariant;

#[cfg(feature = "logging")]
use tracing::debug;

/// Validate the alphabet and length of `text` and choose its variant.
///
/// Characters are scanned left to right before the length is looked at, so
/// the first character outside `[A-Z0-9<]` wins over a bad length.
/// Whitespace is not stripped here.
pub fn detect(text: &str) -> Result<DocumentVariant, MrzError> {
    if let Some((position, character)) = text
        .chars()
        .enumerate()
        .find(|&(_, c)| !c.is_ascii() || !is_mrz_byte(c as u8))
    {
        return Err(MrzError::InvalidCharacter {
            character,
            position,
        });
    }

    // All ASCII past this point, so byte length equals character count
    let length = text.len();
    let variant =
        DocumentVariant::from_length(length).ok_or(MrzError::UnrecognizedLength { length })?;

    #[cfg(feature = "logging")]
    debug!("Detected {} record ({} characters)", variant, length);

    Ok(variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler(len: usize) -> String {
        "<".repeat(len)
    }

    #[test]
    fn test_detect_by_length() {
        assert_eq!(detect(&filler(90)), Ok(DocumentVariant::Td1));
        assert_eq!(detect(&filler(88)), Ok(DocumentVariant::Td3));
    }

    #[test]
    fn test_unrecognized_length() {
        for length in [0, 1, 30, 44, 72, 87, 89, 91] {
            assert_eq!(
                detect(&filler(length)),
                Err(MrzError::UnrecognizedLength { length })
            );
        }
    }

    #[test]
    fn test_first_bad_character_reported() {
        let mut text = filler(88);
        text.replace_range(10..11, "a");
        text.replace_range(20..21, "!");
        assert_eq!(
            detect(&text),
            Err(MrzError::InvalidCharacter {
                character: 'a',
                position: 10
            })
        );
    }

    #[test]
    fn test_alphabet_checked_before_length() {
        assert_eq!(
            detect("P<UTO err"),
            Err(MrzError::InvalidCharacter {
                character: ' ',
                position: 5
            })
        );
    }

    #[test]
    fn test_non_ascii_position_is_character_index() {
        let text = format!("P<{}", "É");
        assert_eq!(
            detect(&text),
            Err(MrzError::InvalidCharacter {
                character: 'É',
                position: 2
            })
        );
    }

    #[test]
    fn test_whitespace_not_normalized() {
        let text = format!("{}\n{}", filler(44), filler(44));
        assert_eq!(
            detect(&text),
            Err(MrzError::InvalidCharacter {
                character: '\n',
                position: 44
            })
        );
    }
}

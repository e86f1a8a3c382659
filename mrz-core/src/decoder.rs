//! Document decoding (strict mode)

use crate::checksum::validate_rule;
use crate::constants::FILLER;
use crate::country;
use crate::date;
use crate::detect::detect;
use crate::error::MrzError;
use crate::layout::{FieldLayout, Span};
use crate::name;
use crate::types::{DecodedDocument, Sex};
use std::str::FromStr;

#[cfg(feature = "logging")]
use tracing::debug;

/// Decode a machine-readable zone
///
/// This function performs strict validation:
/// - Validates alphabet and length, selecting TD1 or TD3
/// - Validates every mandatory check digit
/// - Validates the TD3 personal-number check digit if a number is present
/// - Validates both dates against the calendar
///
/// The first failure aborts the decode; no partial record is returned.
pub fn decode(text: &str) -> Result<DecodedDocument, MrzError> {
    let variant = detect(text)?;
    let layout = variant.layout();

    validate_check_digits(layout, text)?;

    let field = |span: Span| trim_filler(span.slice(text));

    let document_type = Some(field(layout.document_type))
        .filter(|code| !code.is_empty())
        .map(str::to_string);

    let issuer_code = field(layout.issuer).to_string();
    let nationality_code = field(layout.nationality).to_string();

    let raw_name = layout.name.slice(text);
    let (surname, given_names) = name::split(raw_name);
    let full_name = name::collapse_fillers(raw_name);

    let birth_date = date::decode(layout.birth_date.slice(text))?;
    let expiry_date = date::decode(layout.expiry_date.slice(text))?;

    let sex = Sex::from_code(text.as_bytes()[layout.sex.start]);

    let document_number = field(layout.document_number).to_string();
    let personal_number = layout
        .personal_number
        .map(|span| field(span).to_string())
        .unwrap_or_default();

    #[cfg(feature = "logging")]
    debug!(
        "Decoded {} document {} issued by {}",
        variant, document_number, issuer_code
    );

    Ok(DecodedDocument {
        variant,
        document_type,
        issuer_name: country::resolve(&issuer_code),
        issuer_code,
        surname,
        given_names,
        full_name,
        document_number,
        nationality_name: country::resolve(&nationality_code),
        nationality_code,
        birth_date,
        sex,
        expiry_date,
        personal_number,
    })
}

/// Run every check digit of `layout` over `text`, in layout order.
///
/// `text` must already have passed [`detect`] for the same variant.
/// Guarded rules are skipped when their guard span holds only filler.
pub fn validate_check_digits(layout: &FieldLayout, text: &str) -> Result<(), MrzError> {
    for rule in layout.checks {
        if let Some(guard) = rule.guard {
            if trim_filler(guard.slice(text)).is_empty() {
                #[cfg(feature = "logging")]
                debug!("Skipping {} check digit: field is empty", rule.field);
                continue;
            }
        }
        validate_rule(rule, text)?;
    }

    Ok(())
}

/// Strip trailing filler from a fixed-width field
pub fn trim_filler(field: &str) -> &str {
    field.trim_end_matches(char::from(FILLER))
}

impl FromStr for DecodedDocument {
    type Err = MrzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

//! Core types for decoded travel documents

use crate::constants::{TD1_LENGTH, TD1_LINE_WIDTH, TD3_LENGTH, TD3_LINE_WIDTH};
use crate::layout::FieldLayout;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// MRZ layout variant, determined solely by record length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentVariant {
    /// 3 x 30 characters (identity cards)
    #[serde(rename = "TD1")]
    Td1,
    /// 2 x 44 characters (passports)
    #[serde(rename = "TD3")]
    Td3,
}

impl DocumentVariant {
    /// Variant for a record length, if it is one of the known lengths
    pub const fn from_length(length: usize) -> Option<Self> {
        match length {
            TD1_LENGTH => Some(DocumentVariant::Td1),
            TD3_LENGTH => Some(DocumentVariant::Td3),
            _ => None,
        }
    }

    /// Total record length in characters
    pub const fn length(&self) -> usize {
        match self {
            DocumentVariant::Td1 => TD1_LENGTH,
            DocumentVariant::Td3 => TD3_LENGTH,
        }
    }

    /// Width of one printed line
    pub const fn line_width(&self) -> usize {
        match self {
            DocumentVariant::Td1 => TD1_LINE_WIDTH,
            DocumentVariant::Td3 => TD3_LINE_WIDTH,
        }
    }

    /// Short label, "TD1" or "TD3"
    pub const fn label(&self) -> &'static str {
        match self {
            DocumentVariant::Td1 => "TD1",
            DocumentVariant::Td3 => "TD3",
        }
    }

    /// Human-readable description of the variant
    pub const fn description(&self) -> &'static str {
        match self {
            DocumentVariant::Td1 => "TD1 identity card (3 lines of 30 characters)",
            DocumentVariant::Td3 => "TD3 passport (2 lines of 44 characters)",
        }
    }

    /// Offset table of this variant
    pub fn layout(&self) -> &'static FieldLayout {
        FieldLayout::for_variant(*self)
    }
}

impl fmt::Display for DocumentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sex category of the holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// 'M'
    Male,
    /// 'F'
    Female,
    /// Filler or any other marker
    Unspecified,
}

impl Sex {
    /// Map the single MRZ sex character
    pub const fn from_code(code: u8) -> Self {
        match code {
            b'M' => Sex::Male,
            b'F' => Sex::Female,
            _ => Sex::Unspecified,
        }
    }

    /// Canonical MRZ character for this category
    pub const fn code(&self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
            Sex::Unspecified => '<',
        }
    }

    /// Display text; empty when unspecified
    pub const fn label(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unspecified => "",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully validated, immutable machine-readable zone
///
/// Only [`crate::decoder::decode`] constructs this type, and only after
/// every structural and check-digit rule has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedDocument {
    pub(crate) variant: DocumentVariant,
    pub(crate) document_type: Option<String>,
    pub(crate) issuer_code: String,
    pub(crate) issuer_name: &'static str,
    pub(crate) surname: String,
    pub(crate) given_names: String,
    pub(crate) full_name: String,
    pub(crate) document_number: String,
    pub(crate) nationality_code: String,
    pub(crate) nationality_name: &'static str,
    pub(crate) birth_date: NaiveDate,
    pub(crate) sex: Sex,
    pub(crate) expiry_date: NaiveDate,
    pub(crate) personal_number: String,
}

impl DecodedDocument {
    /// Layout variant
    pub fn variant(&self) -> DocumentVariant {
        self.variant
    }

    /// Document type code with trailing filler removed; `None` if all filler
    pub fn document_type(&self) -> Option<&str> {
        self.document_type.as_deref()
    }

    /// Issuing state or organization code
    pub fn issuer_code(&self) -> &str {
        &self.issuer_code
    }

    /// Display name of the issuer
    pub fn issuer_name(&self) -> &'static str {
        self.issuer_name
    }

    /// Primary identifier
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Secondary identifier, space separated
    pub fn given_names(&self) -> &str {
        &self.given_names
    }

    /// Whole name field with fillers collapsed to single spaces
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Document number with trailing filler removed
    pub fn document_number(&self) -> &str {
        &self.document_number
    }

    /// Nationality code
    pub fn nationality_code(&self) -> &str {
        &self.nationality_code
    }

    /// Display name of the nationality
    pub fn nationality_name(&self) -> &'static str {
        self.nationality_name
    }

    /// Date of birth
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Sex category
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Date of expiry
    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Personal number; empty for TD1 and when absent
    pub fn personal_number(&self) -> &str {
        &self.personal_number
    }

    /// Returns true if the document has expired before `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }
}

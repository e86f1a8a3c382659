//! Field offset tables for the TD1 and TD3 layouts
//!
//! One constant [`FieldLayout`] per [`DocumentVariant`]. The decoder reads
//! every field through these tables, so both variants share a single
//! extraction routine.

use crate::error::CheckedField;
use crate::types::DocumentVariant;

/// Half-open byte range `[start, end)` inside a raw MRZ record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First byte of the span
    pub start: usize,
    /// One past the last byte of the span
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers nothing
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `offset` lies inside the span
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Borrow the span out of an alphabet-validated record.
    ///
    /// `text` must be ASCII and at least `end` bytes long; the detector
    /// guarantees both before any layout is consulted.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// A check digit together with the spans it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRule {
    /// Field reported on mismatch
    pub field: CheckedField,
    /// Spans concatenated, in order, before evaluation
    pub spans: &'static [Span],
    /// Offset of the check digit itself
    pub digit: usize,
    /// When set, the rule only applies if this span holds more than filler
    pub guard: Option<Span>,
}

impl CheckRule {
    /// Returns true if any covered span contains `offset`
    pub fn covers(&self, offset: usize) -> bool {
        self.spans.iter().any(|span| span.contains(offset))
    }
}

/// Byte offsets of every logical field of one document variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Variant this table describes
    pub variant: DocumentVariant,
    /// Document type code
    pub document_type: Span,
    /// Issuing state or organization
    pub issuer: Span,
    /// Document number
    pub document_number: Span,
    /// Date of birth, YYMMDD
    pub birth_date: Span,
    /// Sex marker
    pub sex: Span,
    /// Date of expiry, YYMMDD
    pub expiry_date: Span,
    /// Nationality code
    pub nationality: Span,
    /// Raw, filler-padded name field
    pub name: Span,
    /// Personal number, if the layout models one
    pub personal_number: Option<Span>,
    /// Check digits in evaluation order
    pub checks: &'static [CheckRule],
}

const TD1_CHECKS: &[CheckRule] = &[
    CheckRule {
        field: CheckedField::DocumentNumber,
        spans: &[Span::new(5, 14)],
        digit: 14,
        guard: None,
    },
    CheckRule {
        field: CheckedField::BirthDate,
        spans: &[Span::new(30, 36)],
        digit: 36,
        guard: None,
    },
    CheckRule {
        field: CheckedField::ExpiryDate,
        spans: &[Span::new(38, 44)],
        digit: 44,
        guard: None,
    },
    CheckRule {
        field: CheckedField::Composite,
        spans: &[
            Span::new(5, 30),
            Span::new(30, 37),
            Span::new(38, 45),
            Span::new(48, 59),
        ],
        digit: 59,
        guard: None,
    },
];

const TD3_CHECKS: &[CheckRule] = &[
    CheckRule {
        field: CheckedField::DocumentNumber,
        spans: &[Span::new(44, 53)],
        digit: 53,
        guard: None,
    },
    CheckRule {
        field: CheckedField::BirthDate,
        spans: &[Span::new(57, 63)],
        digit: 63,
        guard: None,
    },
    CheckRule {
        field: CheckedField::ExpiryDate,
        spans: &[Span::new(65, 71)],
        digit: 71,
        guard: None,
    },
    // Covers the whole optional-data area, not just the extracted number
    CheckRule {
        field: CheckedField::PersonalNumber,
        spans: &[Span::new(72, 86)],
        digit: 86,
        guard: Some(Span::new(72, 82)),
    },
    CheckRule {
        field: CheckedField::Composite,
        spans: &[Span::new(44, 54), Span::new(57, 64), Span::new(65, 87)],
        digit: 87,
        guard: None,
    },
];

/// TD1 layout (identity cards, 90 characters)
///
/// The personal number is not modeled for TD1.
pub const TD1_LAYOUT: FieldLayout = FieldLayout {
    variant: DocumentVariant::Td1,
    document_type: Span::new(0, 2),
    issuer: Span::new(2, 5),
    document_number: Span::new(5, 14),
    birth_date: Span::new(30, 36),
    sex: Span::new(37, 38),
    expiry_date: Span::new(38, 44),
    nationality: Span::new(45, 48),
    name: Span::new(60, 90),
    personal_number: None,
    checks: TD1_CHECKS,
};

/// TD3 layout (passports, 88 characters)
pub const TD3_LAYOUT: FieldLayout = FieldLayout {
    variant: DocumentVariant::Td3,
    document_type: Span::new(0, 2),
    issuer: Span::new(2, 5),
    document_number: Span::new(44, 53),
    birth_date: Span::new(57, 63),
    sex: Span::new(64, 65),
    expiry_date: Span::new(65, 71),
    nationality: Span::new(54, 57),
    name: Span::new(5, 44),
    personal_number: Some(Span::new(72, 82)),
    checks: TD3_CHECKS,
};

impl FieldLayout {
    /// Layout table for a variant
    pub fn for_variant(variant: DocumentVariant) -> &'static FieldLayout {
        match variant {
            DocumentVariant::Td1 => &TD1_LAYOUT,
            DocumentVariant::Td3 => &TD3_LAYOUT,
        }
    }

    /// The rule for a given checked field, if the layout has one
    pub fn check_for(&self, field: CheckedField) -> Option<&'static CheckRule> {
        self.checks.iter().find(|rule| rule.field == field)
    }
}

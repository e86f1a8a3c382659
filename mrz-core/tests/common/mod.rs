//! Shared fixtures and record builders for the integration tests

#![allow(dead_code)]

use mrz_core::checksum::{char_value, check_digit};
use mrz_core::FieldLayout;

/// Belgian identity card specimen (TD1)
pub const FIXTURE_TD1: &str =
    "IDBEL590335801485120100200<<<<8512017F0901015BEL<<<<<<<<<<<7REINARTZ<<ULRIKE<KATIA<E<<<<<<";

/// ICAO 9303 passport specimen (TD3)
pub const FIXTURE_TD3: &str =
    "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<L898902C<3UTO6908061F9406236ZE184226B<<<<<14";

fn pad(field: &str, width: usize) -> String {
    let mut out: String = field.chars().take(width).collect();
    while out.len() < width {
        out.push('<');
    }
    out
}

fn digit(spans: &[&str]) -> char {
    char::from(b'0' + check_digit(spans))
}

/// Fields of a record to build; every check digit is computed
#[derive(Debug, Clone)]
pub struct Record {
    pub document_type: String,
    pub issuer: String,
    pub name: String,
    pub document_number: String,
    pub nationality: String,
    pub birth_date: String,
    pub sex: char,
    pub expiry_date: String,
    pub personal_number: String,
}

impl Record {
    /// Build an 88-character TD3 record
    pub fn td3(&self) -> String {
        let mut line1 = pad(&self.document_type, 2);
        line1.push_str(&pad(&self.issuer, 3));
        line1.push_str(&pad(&self.name, 39));

        let number = pad(&self.document_number, 9);
        let optional = pad(&self.personal_number, 14);
        let optional_digit = if self.personal_number.is_empty() {
            '<'
        } else {
            digit(&[&optional])
        };

        let mut line2 = String::new();
        line2.push_str(&number);
        line2.push(digit(&[&number]));
        line2.push_str(&pad(&self.nationality, 3));
        line2.push_str(&self.birth_date);
        line2.push(digit(&[&self.birth_date]));
        line2.push(self.sex);
        line2.push_str(&self.expiry_date);
        line2.push(digit(&[&self.expiry_date]));
        line2.push_str(&optional);
        line2.push(optional_digit);
        let composite = digit(&[&line2[0..10], &line2[13..20], &line2[21..43]]);
        line2.push(composite);

        line1 + &line2
    }

    /// Build a 90-character TD1 record; the personal number is ignored
    pub fn td1(&self) -> String {
        let number = pad(&self.document_number, 9);

        let mut line1 = pad(&self.document_type, 2);
        line1.push_str(&pad(&self.issuer, 3));
        line1.push_str(&number);
        line1.push(digit(&[&number]));
        line1.push_str(&pad("", 15));

        let mut line2 = String::new();
        line2.push_str(&self.birth_date);
        line2.push(digit(&[&self.birth_date]));
        line2.push(self.sex);
        line2.push_str(&self.expiry_date);
        line2.push(digit(&[&self.expiry_date]));
        line2.push_str(&pad(&self.nationality, 3));
        line2.push_str(&pad("", 11));
        let composite = digit(&[&line1[5..30], &line2[0..7], &line2[8..15], &line2[18..29]]);
        line2.push(composite);

        line1 + &line2 + &pad(&self.name, 30)
    }
}

/// A record that decodes cleanly in both layouts
pub fn sample_record() -> Record {
    Record {
        document_type: "P".to_string(),
        issuer: "NLD".to_string(),
        name: "DE<BRUIJN<<WILLEKE<LISELOTTE".to_string(),
        document_number: "SPECI2014".to_string(),
        nationality: "NLD".to_string(),
        birth_date: "650310".to_string(),
        sex: 'F',
        expiry_date: "240309".to_string(),
        personal_number: "999999990".to_string(),
    }
}

/// Replace the character at `position` with a digit whose check value
/// differs by one, which every weight of the 7-3-1 cycle detects
pub fn corrupt(text: &str, position: usize) -> String {
    let value = char_value(text.as_bytes()[position]);
    let replacement = char::from(b'0' + ((value + 1) % 10) as u8);
    let mut out = text.to_string();
    out.replace_range(position..position + 1, &replacement.to_string());
    out
}

/// Offsets protected by at least one check digit, paired with the field
/// the decoder reports first when that offset is corrupted
pub fn protected_offsets(layout: &FieldLayout) -> Vec<(usize, mrz_core::CheckedField)> {
    (0..layout.variant.length())
        .filter_map(|offset| {
            layout
                .checks
                .iter()
                .find(|rule| rule.covers(offset) || rule.digit == offset)
                .map(|rule| (offset, rule.field))
        })
        .collect()
}

//! Shows how transcription errors surface as structured errors

use mrz_core::{decode, MrzError};

fn main() {
    println!("MRZ Corrupted Input Example\n");

    let clean =
        "IDBEL590335801485120100200<<<<8512017F0901015BEL<<<<<<<<<<<7REINARTZ<<ULRIKE<KATIA<E<<<<<<";

    // A misread 8 -> 3 in the birth date, a lowercase letter, a dropped character
    let mut misread = clean.to_string();
    misread.replace_range(31..32, "3");
    let mut lowercase = clean.to_string();
    lowercase.replace_range(62..63, "i");
    let truncated = &clean[..89];

    for (label, text) in [
        ("clean", clean),
        ("misread digit", misread.as_str()),
        ("lowercase", lowercase.as_str()),
        ("truncated", truncated),
    ] {
        match decode(text) {
            Ok(doc) => println!("{:<14} ✓ {} {}", label, doc.variant(), doc.surname()),
            Err(MrzError::CheckDigitMismatch {
                field,
                expected,
                computed,
            }) => println!(
                "{:<14} ✗ {} check digit is {:?}, data says {}",
                label, field, expected, computed
            ),
            Err(e) => println!("{:<14} ✗ {}", label, e),
        }
    }
}

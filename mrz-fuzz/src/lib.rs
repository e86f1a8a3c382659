//! Fuzzing entry points for mrz-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode

use mrz_core::{checksum::check_digit, decode, name::split};

pub fn fuzz_decode(data: &[u8]) {
    // Try to decode - should never panic
    let text = String::from_utf8_lossy(data);
    let _ = decode(&text);
}

/// Map arbitrary bytes into the MRZ alphabet so that the fuzzer reaches the
/// check-digit and field stages instead of stopping at the alphabet check
pub fn fuzz_decode_alphabet(data: &[u8]) {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789<";

    let text: String = data
        .iter()
        .map(|b| char::from(ALPHABET[*b as usize % ALPHABET.len()]))
        .collect();
    let _ = decode(&text);
}

pub fn fuzz_name(data: &[u8]) {
    let text = String::from_utf8_lossy(data);
    let _ = split(&text);
    let _ = check_digit(&[&text]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_empty() {
        fuzz_decode(&[]);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode(&[0x12, 0x34, 0x56, 0x78]);
        fuzz_decode(&[0xFF; 88]);
    }

    #[test]
    fn test_fuzz_alphabet_lengths() {
        fuzz_decode_alphabet(&[0u8; 88]);
        fuzz_decode_alphabet(&[36u8; 90]);
        for seed in 0..=255u8 {
            fuzz_decode_alphabet(&[seed; 88]);
            fuzz_decode_alphabet(&[seed; 90]);
        }
    }

    #[test]
    fn test_fuzz_name_multibyte() {
        fuzz_name("É<<ß<<".as_bytes());
        fuzz_name(&[0xC3]);
    }
}

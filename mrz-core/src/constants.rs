//! Constants and limits for the machine-readable zone formats

/// Filler character: padding, word separator and (doubled) name separator
pub const FILLER: u8 = b'<';

/// Two consecutive fillers separate the surname from the given names
pub const NAME_SEPARATOR: &str = "<<";

/// Record length of a TD1 document (3 lines of 30 characters)
pub const TD1_LENGTH: usize = 90;

/// Record length of a TD3 document (2 lines of 44 characters)
pub const TD3_LENGTH: usize = 88;

/// Line width of a TD1 record
pub const TD1_LINE_WIDTH: usize = 30;

/// Line width of a TD3 record
pub const TD3_LINE_WIDTH: usize = 44;

/// Weights applied cyclically by the check-digit algorithm
pub const CHECK_WEIGHTS: [u32; 3] = [7, 3, 1];

/// Two-digit years below this value belong to the 2000s, the rest to the 1900s.
///
/// Fixed business rule of the format; there is no runtime override.
pub const CENTURY_CUTOFF: u32 = 40;

/// Width of a YYMMDD date field
pub const DATE_FIELD_LEN: usize = 6;

/// Returns true if `byte` belongs to the MRZ alphabet `[A-Z0-9<]`
pub const fn is_mrz_byte(byte: u8) -> bool {
    byte.is_ascii_uppercase() || byte.is_ascii_digit() || byte == FILLER
}

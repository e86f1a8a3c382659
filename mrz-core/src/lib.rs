//! # MRZ Core
//!
//! Decoding and validation of the machine-readable zone of travel documents
//! in the TD1 (90 characters) and TD3 (88 characters) layouts.
//!
//! ## Modules
//!
//! - `constants`: Alphabet, record lengths and fixed format rules
//! - `types`: Core types (DocumentVariant, Sex, DecodedDocument)
//! - `error`: Structured error taxonomy
//! - `layout`: Per-variant field offset tables
//! - `detect`: Alphabet/length validation and variant selection
//! - `checksum`: Weighted modulo-10 check digits
//! - `date`: YYMMDD decoding with century windowing
//! - `name`: Surname / given-names decomposition
//! - `country`: Static issuer and nationality code table
//! - `decoder`: Strict document decoding
//!
//! ```
//! let doc = mrz_core::decode(
//!     "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<L898902C<3UTO6908061F9406236ZE184226B<<<<<14",
//! )
//! .unwrap();
//! assert_eq!(doc.surname(), "ERIKSSON");
//! assert_eq!(doc.given_names(), "ANNA MARIA");
//! ```

#![warn(missing_docs)]

pub mod checksum;
pub mod constants;
pub mod country;
pub mod date;
pub mod decoder;
pub mod detect;
pub mod error;
pub mod layout;
pub mod name;
pub mod types;

// Re-export commonly used types
pub use decoder::decode;
pub use error::{CheckedField, MrzError};
pub use layout::FieldLayout;
pub use types::{DecodedDocument, DocumentVariant, Sex};

/// Result type alias for MRZ operations
pub type Result<T> = core::result::Result<T, MrzError>;

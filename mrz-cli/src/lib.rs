//! Library entry for mrz-cli used by integration tests and embedding.

pub mod commands;
pub mod input;

// Re-export commands for convenience
pub use commands::*;

/// Rendering used for decoded records and lookups
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable fields
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

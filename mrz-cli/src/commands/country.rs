use crate::OutputFormat;
use anyhow::{Context, Result};
use colored::*;
use mrz_core::country;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CountryEntry {
    pub code: String,
    pub name: &'static str,
    pub known: bool,
}

/// Resolve each code; codes are matched upper-cased
pub fn lookup(codes: &[String]) -> Vec<CountryEntry> {
    codes
        .iter()
        .map(|code| {
            let code = code.trim().to_ascii_uppercase();
            CountryEntry {
                name: country::resolve(&code),
                known: country::is_known(&code),
                code,
            }
        })
        .collect()
}

pub fn execute(codes: &[String], format: OutputFormat) -> Result<()> {
    let entries = lookup(codes);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries)
                .with_context(|| "Failed to serialize country lookups")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for entry in &entries {
                if entry.known {
                    println!("{:<4} {}", entry.code, entry.name);
                } else {
                    println!("{:<4} {} {}", entry.code, entry.name, "(fallback)".yellow());
                }
            }
        }
    }

    Ok(())
}

//! Collecting MRZ text from arguments, files or stdin

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{self, Read};
use tracing::{debug, info};

/// Remove every space, tab and line break.
///
/// Scanned or pasted zones arrive as 2 or 3 printed lines; the core only
/// accepts the joined record.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

/// Gather the MRZ from positional `text` pieces or from `input`
/// (a file path, or `-` for stdin), normalized for decoding
pub fn read_mrz(text: &[String], input: Option<&str>) -> Result<String> {
    let raw = match input {
        Some("-") => {
            info!("Reading MRZ from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read MRZ from stdin")?;
            buf
        }
        Some(path) => {
            info!("Reading MRZ from file: {}", path);
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path))?
        }
        None => text.join(""),
    };

    let normalized = normalize(&raw);
    if normalized.is_empty() {
        bail!("No MRZ text given: pass it as arguments or use --input <FILE|->");
    }

    debug!("Normalized MRZ to {} characters", normalized.len());
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_line_breaks() {
        assert_eq!(normalize("AB<\r\nCD<\n"), "AB<CD<");
        assert_eq!(normalize(" A \t B "), "AB");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_keeps_other_characters() {
        assert_eq!(normalize("ab-<"), "ab-<");
    }

    #[test]
    fn test_read_joins_arguments() {
        let parts = vec!["P<UTO".to_string(), "ERIKSSON".to_string()];
        assert_eq!(read_mrz(&parts, None).unwrap(), "P<UTOERIKSSON");
    }

    #[test]
    fn test_read_rejects_empty() {
        assert!(read_mrz(&[], None).is_err());
        assert!(read_mrz(&[" \n".to_string()], None).is_err());
    }
}

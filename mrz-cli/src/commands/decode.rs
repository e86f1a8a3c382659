use crate::input::read_mrz;
use crate::OutputFormat;
use anyhow::{Context, Result};
use mrz_core::{decode, DecodedDocument};
use std::fs;
use tracing::{info, warn};

pub fn execute(
    text: &[String],
    input: Option<&str>,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<()> {
    let mrz = read_mrz(text, input)?;
    let doc = decode_mrz(&mrz)?;
    let rendered = render(&doc, format)?;

    if let Some(output_path) = output {
        fs::write(output_path, &rendered)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Decoded record written to: {}", output_path);
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

/// Decode normalized MRZ text, logging the failure before handing it up
pub fn decode_mrz(mrz: &str) -> Result<DecodedDocument> {
    match decode(mrz) {
        Ok(doc) => {
            info!("Decoded {} record", doc.variant());
            Ok(doc)
        }
        Err(e) => {
            warn!("Decode failed: {}", e);
            Err(e).context("Invalid MRZ")
        }
    }
}

/// Render a decoded record in the requested format
pub fn render(doc: &DecodedDocument, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(doc)
                .with_context(|| "Failed to serialize decoded record")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(render_text(doc)),
    }
}

fn render_text(doc: &DecodedDocument) -> String {
    let rows = [
        ("Document type", doc.document_type().unwrap_or("").to_string()),
        (
            "Issuer",
            format!("{} ({})", doc.issuer_name(), doc.issuer_code()),
        ),
        ("Surname", doc.surname().to_string()),
        ("Given names", doc.given_names().to_string()),
        ("Document number", doc.document_number().to_string()),
        (
            "Nationality",
            format!("{} ({})", doc.nationality_name(), doc.nationality_code()),
        ),
        ("Birth date", doc.birth_date().to_string()),
        ("Sex", doc.sex().label().to_string()),
        ("Expiry date", doc.expiry_date().to_string()),
        ("Personal number", doc.personal_number().to_string()),
    ];

    let mut out = format!("Valid MRZ: {}\n", doc.variant().description());
    for (label, value) in rows {
        out.push_str(&format!("{:<16} {}\n", format!("{}:", label), value));
    }
    out
}

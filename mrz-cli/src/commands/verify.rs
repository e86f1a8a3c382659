use crate::commands::decode::decode_mrz;
use crate::input::read_mrz;
use anyhow::Result;
use colored::*;
use tracing::info;

pub fn execute(text: &[String], input: Option<&str>) -> Result<()> {
    let mrz = read_mrz(text, input)?;
    info!("Verifying {} characters", mrz.len());

    match decode_mrz(&mrz) {
        Ok(doc) => {
            println!(
                "{} Valid {} ({} {})",
                "✓".green(),
                doc.variant().description(),
                doc.document_type().unwrap_or("-"),
                doc.document_number()
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red(), e.root_cause());
            Err(e)
        }
    }
}

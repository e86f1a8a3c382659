use anyhow::Result;
use clap::{Parser, Subcommand};
use mrz_cli::{commands, OutputFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "mrz")]
#[command(about = "MRZ - Decode and validate travel document machine-readable zones", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an MRZ and print its fields
    Decode {
        /// MRZ text; several pieces (e.g. one per printed line) are joined
        text: Vec<String>,

        /// Read the MRZ from a file instead ("-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the rendered record to a file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check an MRZ and exit non-zero if it is invalid
    Verify {
        /// MRZ text; several pieces are joined
        text: Vec<String>,

        /// Read the MRZ from a file instead ("-" for stdin)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Resolve issuer or nationality codes to display names
    Country {
        /// Codes to resolve
        #[arg(required = true)]
        codes: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Decode {
            text,
            input,
            format,
            output,
        } => commands::decode::execute(&text, input.as_deref(), format, output.as_deref()),

        Commands::Verify { text, input } => commands::verify::execute(&text, input.as_deref()),

        Commands::Country { codes, format } => commands::country::execute(&codes, format),
    }
}

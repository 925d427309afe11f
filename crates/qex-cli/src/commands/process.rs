//! Process command - extract fields from a single quote PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use qex_core::{BatchResult, MappedDocument, QuoteMapper, PdfExtractor, TextExtractor};

use crate::export;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction statistics
    #[arg(long)]
    show_stats: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, _config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    // Decode errors are reported here, unlike the batch path which
    // degrades unreadable documents to empty records.
    let data = fs::read(&args.input)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;
    let text = extractor.extract_text()?;
    debug!("Extracted {} characters from PDF", text.len());

    let filename = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document.pdf");

    let mapped = QuoteMapper::new().map(&text, filename);

    // Format output
    let output = format_record(&mapped, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_stats {
        println!();
        println!(
            "{} Matched fields: {}",
            style("ℹ").blue(),
            mapped.matched_fields
        );
        println!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            mapped.processing_time_ms
        );
        for warning in &mapped.warnings {
            println!("{} {}", style("⚠").yellow(), warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_record(mapped: &MappedDocument, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&mapped.record)?),
        OutputFormat::Csv => {
            let mut result = BatchResult::default();
            result.push(mapped.record.clone());
            let mut buffer = Vec::new();
            export::write_csv(&result, &mut buffer)?;
            Ok(String::from_utf8(buffer)?)
        }
        OutputFormat::Text => {
            let mut output = String::new();
            for (name, value) in mapped.record.iter() {
                if !value.is_empty() {
                    output.push_str(&format!("{name}: {value}\n"));
                }
            }
            if output.is_empty() {
                output.push_str("(no fields extracted)\n");
            }
            Ok(output)
        }
    }
}

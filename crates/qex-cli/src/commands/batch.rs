//! Batch command: process a set of quote PDFs and write exports.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use qex_core::{BatchPipeline, BatchResult, QexConfig, QuoteDocument};

use crate::export;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (PDFs only)
    #[arg(required = true)]
    input: String,

    /// Output directory for exports
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Also build a zip of the PDFs renamed by quote number
    #[arg(long)]
    archive: bool,

    /// Skip the spreadsheet export
    #[arg(long)]
    no_xlsx: bool,

    /// Skip the CSV export
    #[arg(long)]
    no_csv: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        QexConfig::from_file(std::path::Path::new(path))?
    } else {
        QexConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for pattern: {}", args.input);
    }

    // Upload policy cap; the pipeline itself is size-agnostic.
    if files.len() > config.batch.max_documents {
        anyhow::bail!(
            "Too many documents: {} (policy limit is {})",
            files.len(),
            config.batch.max_documents
        );
    }

    println!(
        "{} Found {} PDF(s) to process",
        style("ℹ").blue(),
        files.len()
    );

    fs::create_dir_all(&args.output_dir)?;

    // Read everything up front; the archive export needs original bytes.
    // Unreadable files keep their batch slot as empty documents.
    let documents: Vec<QuoteDocument> = files
        .iter()
        .map(|path| {
            let filename = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("document.pdf")
                .to_string();
            let data = fs::read(path).unwrap_or_else(|e| {
                warn!("Failed to read {}: {}", path.display(), e);
                Vec::new()
            });
            QuoteDocument::new(filename, data)
        })
        .collect();

    // Process in input order
    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let pipeline = BatchPipeline::new();
    let mut result = BatchResult::default();
    let mut empty_documents = 0;

    for document in &documents {
        let mapped = pipeline.process_document(document);
        debug!(
            "{}: {} fields matched",
            document.filename, mapped.matched_fields
        );
        if mapped.matched_fields == 0 {
            empty_documents += 1;
        }
        for warning in &mapped.warnings {
            warn!("{}: {}", document.filename, warning);
        }
        result.push(mapped.record);
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write exports
    let timestamped = config.export.timestamped_names;

    if !args.no_csv {
        let path = args
            .output_dir
            .join(export::output_name("extracted_quotes", "csv", timestamped));
        export::write_csv(&result, fs::File::create(&path)?)?;
        println!("{} CSV written to {}", style("✓").green(), path.display());
    }

    if !args.no_xlsx {
        let path = args
            .output_dir
            .join(export::output_name("extracted_quotes", "xlsx", timestamped));
        export::xlsx::write_workbook(
            &result,
            &config.export.sheet_name,
            fs::File::create(&path)?,
        )?;
        println!(
            "{} Spreadsheet written to {}",
            style("✓").green(),
            path.display()
        );
    }

    if args.archive {
        let path = args
            .output_dir
            .join(export::output_name("renamed_quotes", "zip", timestamped));
        export::archive::write_renamed_zip(&result, &documents, fs::File::create(&path)?)?;
        println!(
            "{} Renamed archive written to {}",
            style("✓").green(),
            path.display()
        );
    }

    // Print summary
    println!();
    println!(
        "{} Processed {} documents in {:?}",
        style("✓").green(),
        result.len(),
        start.elapsed()
    );
    if empty_documents > 0 {
        println!(
            "   {} produced no matched fields",
            style(empty_documents).yellow()
        );
    }

    Ok(())
}

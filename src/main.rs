pub mod app;
pub mod error;
pub mod models;
pub mod parser;
pub mod utils;

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Split a document into overlapping word chunks, one file per chunk.
#[derive(Debug, Parser)]
#[command(
    name = "doc_chunker",
    version,
    after_help = "Example: doc_chunker test_documents/quy_tac_tinh_phep_nam.txt"
)]
struct Cli {
    /// Text file to split (UTF-8)
    input: PathBuf,
}

fn init_logging() {
    // stdout carries the progress lines, diagnostics go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    if !cli.input.exists() {
        eprintln!("Error: {}", error::ChunkError::InputNotFound(cli.input));
        return ExitCode::FAILURE;
    }

    let output_dir = Path::new(app::OUTPUT_DIR);
    println!("Chunking document: {}", cli.input.display());
    println!("Output directory: {}", output_dir.display());
    println!("{}", "-".repeat(50));

    match app::process_document(&cli.input, output_dir, models::ChunkConfig::default()) {
        Ok(report) => {
            println!("\n✅ Successfully created {} chunks", report.total());
            println!("📁 Files saved in: {}/", report.output_dir.display());
            println!("\nYou can now upload these smaller files individually!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "chunking failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

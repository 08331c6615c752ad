// src/main.rs
mod docx;
mod extractors;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use docx::Package;
use extractors::ResourceExtractor;
use storage::{ExtractionSummary, StorageManager};
use utils::AppError;

const DEFAULT_SOURCE: &str = "Head Teacher Information For TAS Faculty - Wagga Wagga High School (1) (1).docx";

/// Command Line Interface for the information pack resource extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the information pack DOCX file
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    input: PathBuf,

    /// Output directory for resources.json
    #[arg(short, long, default_value = "./data")]
    output_dir: PathBuf,

    /// Also write resources_meta.json with extraction counts
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);

    if args.input.is_dir() {
        return Err(AppError::Config(format!(
            "Input {} is a directory, expected a DOCX file",
            args.input.display()
        )));
    }

    // 3. Load the package; all I/O happens before extraction starts
    let package = Package::open(&args.input)?;
    let document = package.document()?;

    // 4. Extract categories and sections
    let categories = ResourceExtractor::new().extract(&document, package.relationships())?;

    // 5. Save output
    let storage = StorageManager::new(&args.output_dir)?;
    let path = storage.save_resources(&categories)?;

    if args.summary {
        let source = args
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let summary = ExtractionSummary::from_categories(&source, &categories);
        storage.save_summary(&summary)?;
    }

    println!("Wrote {} categories to {}", categories.len(), path.display());
    Ok(())
}

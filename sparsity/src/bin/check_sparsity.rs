//! Report the sparsity of Matrix Market files

use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use sparsity::generator::{DENSE_FILE_NAME, SPARSE_FILE_NAME};
use sparsity::{analyze_files, AnalyzeOptions, ReadOptions};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Print the fraction of zero-valued entries of Matrix Market files")]
struct Cli {
    /// Files to analyze
    #[arg(default_values_t = [DENSE_FILE_NAME.to_string(), SPARSE_FILE_NAME.to_string()])]
    files: Vec<String>,

    /// Use the entry count declared by coordinate files instead of reading entries
    #[arg(long)]
    header_only: bool,

    /// Emit one JSON report per line
    #[arg(long)]
    json: bool,

    /// Read files into memory instead of memory mapping them
    #[arg(long)]
    no_mmap: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start_time = Instant::now();

    let options = AnalyzeOptions::default()
        .with_header_only(cli.header_only)
        .with_read_options(ReadOptions::default().with_memory_map(!cli.no_mmap));
    let paths: Vec<PathBuf> = cli.files.iter().map(PathBuf::from).collect();

    let mut failures = 0;
    for (path, result) in paths.iter().zip(analyze_files(&paths, &options)) {
        match result {
            Ok(report) if cli.json => println!("{}", serde_json::to_string(&report)?),
            Ok(report) => println!("{report}"),
            Err(err) => {
                failures += 1;
                eprintln!("Sparsity of {}: error: {err}", path.display());
            }
        }
    }

    info!("checked {} files in {:.2?}", paths.len(), start_time.elapsed());
    if failures > 0 {
        bail!("{failures} of {} files could not be analyzed", paths.len());
    }
    Ok(())
}

//! Generate a dense and a sparse random matrix as Matrix Market files

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use sparsity::{GeneratorConfig, MatrixGenerator, MtxLayout};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Generate dense_matrix.mtx and sparse_matrix.mtx with random contents")]
struct Cli {
    /// JSON configuration file; flags given on the command line take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns
    #[arg(long)]
    cols: Option<usize>,

    /// Fraction of non-zero cells in the sparse matrix
    #[arg(long)]
    density: Option<f64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// How the sparse matrix is stored on disk
    #[arg(long, value_enum)]
    sparse_layout: Option<LayoutArg>,

    /// Directory the files are written to
    #[arg(long, short, default_value = ".")]
    output_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    /// Every cell, zero or not
    Array,
    /// Non-zero entries only
    Coordinate,
}

impl From<LayoutArg> for MtxLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Array => MtxLayout::Array,
            LayoutArg::Coordinate => MtxLayout::Coordinate,
        }
    }
}

impl Cli {
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(layout) = self.sparse_layout {
            config.sparse_layout = layout.into();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start_time = Instant::now();

    let config = cli.generator_config()?;
    info!("generating with {config:?}");

    let mut generator = MatrixGenerator::from_config(config)?;
    let files = generator
        .write_pair(&cli.output_dir)
        .with_context(|| format!("failed to write matrices to {}", cli.output_dir.display()))?;

    println!("Dense matrix written to {}", files.dense.display());
    println!("Sparse matrix written to {}", files.sparse.display());
    info!("finished in {:.2?}", start_time.elapsed());
    Ok(())
}

//! Sparsity reports for Matrix Market files
//!
//! Files are analyzed independently, so a batch is spread over the rayon
//! thread pool; each individual calculation stays single-threaded.

use crate::error::Result;
use crate::mtx::{read_matrix_market_shape, read_matrix_market_with, ReadOptions};
use log::{debug, warn};
use rayon::prelude::*;
use sparsity_core::SparsityReport;
use std::path::{Path, PathBuf};

/// Options for analyzing files
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Take the non-zero count from the size line when the file format allows it
    pub header_only: bool,
    /// How full reads load the file
    pub read: ReadOptions,
}

impl AnalyzeOptions {
    pub fn with_header_only(mut self, header_only: bool) -> Self {
        self.header_only = header_only;
        self
    }

    pub fn with_read_options(mut self, read: ReadOptions) -> Self {
        self.read = read;
        self
    }
}

/// Sparsity report for one file
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileReport {
    pub path: PathBuf,
    /// Whether the count came from the size line instead of the entries
    pub from_header: bool,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub report: SparsityReport,
}

impl std::fmt::Display for FileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sparsity of {}: {:?}",
            self.path.display(),
            self.report.sparsity
        )
    }
}

/// Compute the sparsity report of a single file
pub fn analyze_file<P: AsRef<Path>>(path: P, options: &AnalyzeOptions) -> Result<FileReport> {
    let path = path.as_ref();

    if options.header_only {
        let summary = read_matrix_market_shape(path)?;
        match summary.shape() {
            Some(shape) => {
                debug!("{}: using declared entry count", path.display());
                return Ok(FileReport {
                    path: path.to_path_buf(),
                    from_header: true,
                    report: SparsityReport::from_shape(shape)?,
                });
            }
            None => warn!(
                "{}: {} files do not declare a usable count, reading entries",
                path.display(),
                summary.header
            ),
        }
    }

    let matrix = read_matrix_market_with(path, &options.read)?;
    Ok(FileReport {
        path: path.to_path_buf(),
        from_header: false,
        report: SparsityReport::from_matrix(&matrix)?,
    })
}

/// Analyze several files in parallel; results keep the input order
pub fn analyze_files<P>(paths: &[P], options: &AnalyzeOptions) -> Vec<Result<FileReport>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| analyze_file(path, options))
        .collect()
}

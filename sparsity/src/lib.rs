//! Sparsity - Matrix Market I/O, generation and sparsity reporting
//!
//! This library loads and stores matrices in the Matrix Market text format,
//! generates random dense and sparse matrices, and reports how sparse they
//! are.
//!
//! ## Architecture
//!
//! - **sparsity-core**: Matrix model, format vocabulary, validation and the
//!   sparsity calculator (no I/O)
//! - **sparsity**: File reading and writing, random generation, batch reports
//!   and the `generate-matrices` / `check-sparsity` tools
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ::sparsity::{read_matrix_market, sparsity};
//!
//! fn example() -> ::sparsity::Result<()> {
//!     let matrix = read_matrix_market("sparse_matrix.mtx")?;
//!     println!("sparsity = {}", sparsity(&matrix)?);
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use sparsity_core::{
    // Calculator
    density, sparsity, MatrixShape, SparsityReport,
    // Matrix model
    CompressedMatrix, DenseMatrix, Matrix, MatrixElement, SparseMatrix,
    // Format definitions
    MtxField, MtxHeader, MtxLayout, MtxSymmetry,
    // Core errors
    SparsityError,
};

pub mod error;
pub mod generator;
pub mod mtx;
pub mod report;

pub use error::{Error, Result};
pub use generator::{GeneratorConfig, MatrixGenerator};
pub use mtx::{
    read_matrix_market, read_matrix_market_shape, read_matrix_market_str,
    write_matrix_market, write_matrix_market_file, ReadOptions,
};
pub use report::{analyze_file, analyze_files, AnalyzeOptions, FileReport};

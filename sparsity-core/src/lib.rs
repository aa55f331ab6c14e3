#![no_std]

//! Sparsity Core - matrix model and sparsity calculation
//!
//! This crate provides the matrix representations, the Matrix Market format
//! vocabulary, validation helpers, and the sparsity calculator. It performs
//! no I/O; readers, writers and generators live in the `sparsity` crate.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
#[cfg(feature = "alloc")]
pub mod matrix;
pub mod sparsity;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
#[cfg(feature = "alloc")]
pub use matrix::{CompressedMatrix, DenseMatrix, Matrix};
pub use sparsity::{
    density, density_from_counts, sparsity, sparsity_from_counts, MatrixShape, SparsityReport,
};
pub use traits::*;

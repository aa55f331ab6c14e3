//! Abstract interfaces for matrices and their elements
//!
//! Traits are pure interfaces; concrete storage lives in [`crate::matrix`].

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseMatrix;

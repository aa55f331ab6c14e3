//! Matrix Market file backend
//!
//! This module reads and writes matrices in the Matrix Market text format.
//! `array` files load as dense matrices and `coordinate` files as compressed
//! ones, so a matrix keeps its representation across a write/read cycle.

pub mod reader;
pub mod source;
pub mod writer;

pub use reader::{
    read_matrix_market, read_matrix_market_shape, read_matrix_market_str,
    read_matrix_market_with, MtxSummary, ReadOptions,
};
pub use source::MtxSource;
pub use writer::{
    write_matrix_market, write_matrix_market_as, write_matrix_market_file, MtxValue,
};

//! Matrix Market format definitions
//!
//! This module contains the pure text-format vocabulary used to exchange
//! matrices: banner keywords, the parsed banner, and element data types.
//! No I/O happens here.

pub mod constants;
pub mod header;

pub use header::{DataType, MtxField, MtxHeader, MtxLayout, MtxSymmetry};

//! Validation utilities for matrix shapes and Matrix Market lines
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{buffer_len, cell_count, validate_dimensions, validate_index, validate_nnz};
pub use parsing::{parse_size_line, SizeLine};

//! Format constants for Matrix Market text files

/// Banner that opens every Matrix Market file
pub const BANNER: &str = "%%MatrixMarket";

/// The only object type handled here
pub const OBJECT_MATRIX: &str = "matrix";

/// Lines starting with this marker are comments
pub const COMMENT_MARKER: char = '%';

/// Fractional digits in scientific notation; 17 significant digits round-trip an f64
pub const REAL_PRECISION: usize = 16;

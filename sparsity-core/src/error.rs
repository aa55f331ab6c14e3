//! Error types for matrix validation and sparsity calculation

/// Errors that can occur while validating a matrix or computing its sparsity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparsityError {
    /// The matrix has no cells (`rows * cols == 0`), so sparsity is undefined
    EmptyMatrix { rows: usize, cols: usize },
    /// The declared non-zero count exceeds the number of cells
    InvalidMatrix { nnz: usize, rows: usize, cols: usize },
    /// A buffer length does not match the declared dimensions
    DimensionMismatch { expected: usize, actual: usize },
    /// An entry position lies outside the matrix
    IndexOutOfBounds { row: usize, col: usize },
    /// A compressed matrix stores the same position more than once
    DuplicateEntry { row: usize, col: usize },
    /// A compressed matrix stores a zero value
    StoredZero { row: usize, col: usize },
    /// `rows * cols` does not fit in `usize`, so the cells cannot be materialized
    DimensionOverflow { rows: usize, cols: usize },
    /// Malformed Matrix Market banner line
    InvalidHeader,
    /// Malformed Matrix Market size line
    InvalidSizeLine,
    /// Matrix Market variant this crate does not handle (complex, hermitian, non-matrix objects)
    UnsupportedFormat,
}

impl core::fmt::Display for SparsityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SparsityError::EmptyMatrix { rows, cols } => {
                write!(f, "Empty matrix ({rows}x{cols}): sparsity is undefined")
            }
            SparsityError::InvalidMatrix { nnz, rows, cols } => write!(
                f,
                "Invalid matrix: {nnz} non-zeros declared for a {rows}x{cols} matrix"
            ),
            SparsityError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected} values, got {actual}")
            }
            SparsityError::IndexOutOfBounds { row, col } => {
                write!(f, "Index ({row}, {col}) out of bounds")
            }
            SparsityError::DuplicateEntry { row, col } => {
                write!(f, "Position ({row}, {col}) is stored more than once")
            }
            SparsityError::StoredZero { row, col } => {
                write!(f, "Position ({row}, {col}) stores an explicit zero")
            }
            SparsityError::DimensionOverflow { rows, cols } => {
                write!(f, "{rows}x{cols} matrix does not fit in memory")
            }
            SparsityError::InvalidHeader => write!(f, "Invalid Matrix Market header"),
            SparsityError::InvalidSizeLine => write!(f, "Invalid Matrix Market size line"),
            SparsityError::UnsupportedFormat => write!(f, "Unsupported Matrix Market format"),
        }
    }
}

impl core::error::Error for SparsityError {}

/// Result type for sparsity operations
pub type Result<T> = core::result::Result<T, SparsityError>;

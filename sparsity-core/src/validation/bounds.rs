//! Dimension and count validation
//!
//! Pure arithmetic checks on matrix shapes with no I/O. Cell counts are
//! widened to `u128` so `rows * cols` can never overflow.

use crate::{Result, SparsityError};

/// Total number of cells in a `rows x cols` matrix
pub const fn cell_count(rows: usize, cols: usize) -> u128 {
    rows as u128 * cols as u128
}

/// Number of cells as a buffer length, if it fits in `usize`
pub const fn buffer_len(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(len) => Ok(len),
        None => Err(SparsityError::DimensionOverflow { rows, cols }),
    }
}

/// Validate that a matrix has at least one cell
///
/// Returns the cell count on success.
pub const fn validate_dimensions(rows: usize, cols: usize) -> Result<u128> {
    let cells = cell_count(rows, cols);
    if cells == 0 {
        return Err(SparsityError::EmptyMatrix { rows, cols });
    }
    Ok(cells)
}

/// Validate that a non-zero count fits within the declared dimensions
pub const fn validate_nnz(nnz: usize, rows: usize, cols: usize) -> Result<()> {
    if nnz as u128 > cell_count(rows, cols) {
        return Err(SparsityError::InvalidMatrix { nnz, rows, cols });
    }
    Ok(())
}

/// Validate that a zero-based position lies inside the matrix
pub const fn validate_index(row: usize, col: usize, rows: usize, cols: usize) -> Result<()> {
    if row >= rows || col >= cols {
        return Err(SparsityError::IndexOutOfBounds { row, col });
    }
    Ok(())
}

/// Validate that a dense buffer holds exactly one value per cell
pub const fn validate_buffer_len(len: usize, rows: usize, cols: usize) -> Result<()> {
    let expected = cell_count(rows, cols);
    if len as u128 != expected {
        // Saturate: a buffer larger than usize::MAX cannot exist anyway.
        let expected = if expected > usize::MAX as u128 {
            usize::MAX
        } else {
            expected as usize
        };
        return Err(SparsityError::DimensionMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_count_does_not_overflow() {
        assert_eq!(cell_count(usize::MAX, 2), usize::MAX as u128 * 2);
        assert_eq!(cell_count(0, 10), 0);
    }

    #[test]
    fn test_buffer_len() {
        assert_eq!(buffer_len(3, 4), Ok(12));
        assert_eq!(buffer_len(0, usize::MAX), Ok(0));
        assert_eq!(
            buffer_len(usize::MAX, 2),
            Err(SparsityError::DimensionOverflow {
                rows: usize::MAX,
                cols: 2
            })
        );
    }

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(validate_dimensions(3, 4), Ok(12));
        assert_eq!(
            validate_dimensions(0, 0),
            Err(SparsityError::EmptyMatrix { rows: 0, cols: 0 })
        );
        assert_eq!(
            validate_dimensions(5, 0),
            Err(SparsityError::EmptyMatrix { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn test_validate_nnz() {
        assert_eq!(validate_nnz(4, 2, 2), Ok(()));
        assert_eq!(validate_nnz(0, 2, 2), Ok(()));
        assert_eq!(
            validate_nnz(5, 2, 2),
            Err(SparsityError::InvalidMatrix {
                nnz: 5,
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn test_validate_index() {
        assert_eq!(validate_index(1, 2, 2, 3), Ok(()));
        assert_eq!(
            validate_index(2, 0, 2, 3),
            Err(SparsityError::IndexOutOfBounds { row: 2, col: 0 })
        );
        assert_eq!(
            validate_index(0, 3, 2, 3),
            Err(SparsityError::IndexOutOfBounds { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_validate_buffer_len() {
        assert_eq!(validate_buffer_len(6, 2, 3), Ok(()));
        assert_eq!(
            validate_buffer_len(5, 2, 3),
            Err(SparsityError::DimensionMismatch {
                expected: 6,
                actual: 5
            })
        );
    }
}

//! Matrix Market reader
//!
//! Parses the banner, skips comments, reads the size line and then the
//! entries. Every error carries the 1-based line number it was found on.

use super::source::MtxSource;
use crate::error::{Error, Result};
use log::{debug, warn};
use sparsity_core::validation::parsing::{is_skippable, parse_one_based};
use sparsity_core::{
    validation::{parse_size_line, validate_index, SizeLine},
    CompressedMatrix, DenseMatrix, Matrix, MatrixShape, MtxField, MtxHeader, MtxLayout,
    MtxSymmetry,
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Upper bound on up-front allocation driven by a file's declared size
const MAX_PREALLOCATED_ENTRIES: usize = 1 << 24;

/// Options controlling how files are loaded
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Memory map files instead of reading them into memory
    pub memory_map: bool,
}

impl ReadOptions {
    /// Enable or disable memory mapping
    pub fn with_memory_map(mut self, memory_map: bool) -> Self {
        self.memory_map = memory_map;
        self
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            memory_map: cfg!(feature = "mmap"),
        }
    }
}

/// Banner and size line of a file, read without touching the entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MtxSummary {
    pub header: MtxHeader,
    pub size: SizeLine,
}

impl MtxSummary {
    /// Shape and non-zero count, when the size line alone determines them
    ///
    /// Only `coordinate general` files qualify: array files declare no
    /// count and symmetric files store one triangle. The count assumes the
    /// file lists no explicit zeros or repeated positions.
    pub fn shape(&self) -> Option<MatrixShape> {
        match (self.header.layout, self.header.symmetry, self.size.entries) {
            (MtxLayout::Coordinate, MtxSymmetry::General, Some(entries)) => {
                Some(MatrixShape::new(self.size.rows, self.size.cols, entries))
            }
            _ => None,
        }
    }
}

/// Read a Matrix Market file with default options
pub fn read_matrix_market<P: AsRef<Path>>(path: P) -> Result<Matrix<f64>> {
    read_matrix_market_with(path, &ReadOptions::default())
}

/// Read a Matrix Market file
pub fn read_matrix_market_with<P: AsRef<Path>>(
    path: P,
    options: &ReadOptions,
) -> Result<Matrix<f64>> {
    let path = path.as_ref();
    let source = MtxSource::open(path, options.memory_map)?;
    let matrix = read_matrix_market_str(source.as_str()?)?;
    debug!(
        "loaded {} as {} {}x{} matrix",
        path.display(),
        if matrix.is_dense() { "dense" } else { "compressed" },
        matrix.rows(),
        matrix.cols()
    );
    Ok(matrix)
}

/// Read only the banner and size line of a file
pub fn read_matrix_market_shape<P: AsRef<Path>>(path: P) -> Result<MtxSummary> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    let banner = lines
        .next()
        .ok_or_else(|| Error::parse(1, "empty input"))??;
    let header = MtxHeader::parse(&banner).map_err(|source| Error::Format { line: 1, source })?;

    let mut line_no = 1;
    for line in lines {
        let line = line?;
        line_no += 1;
        if is_skippable(&line) {
            continue;
        }
        let size = parse_size_line(&line, header.layout)
            .map_err(|source| Error::Format { line: line_no, source })?;
        return Ok(MtxSummary { header, size });
    }

    Err(Error::parse(line_no + 1, "missing size line"))
}

/// Parse Matrix Market text already held in memory
pub fn read_matrix_market_str(text: &str) -> Result<Matrix<f64>> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (_, banner) = lines.next().ok_or_else(|| Error::parse(1, "empty input"))?;
    let header = MtxHeader::parse(banner).map_err(|source| Error::Format { line: 1, source })?;
    if !header.is_supported() {
        return Err(Error::Unsupported(header));
    }

    let (size_line_no, size_line) = lines
        .by_ref()
        .find(|(_, line)| !is_skippable(line))
        .ok_or_else(|| Error::parse(text.lines().count() + 1, "missing size line"))?;
    let size = parse_size_line(size_line, header.layout).map_err(|source| Error::Format {
        line: size_line_no,
        source,
    })?;

    let data = lines.filter(|(_, line)| !is_skippable(line));
    match header.layout {
        MtxLayout::Array => read_array(header, size, size_line_no, data).map(Matrix::Dense),
        MtxLayout::Coordinate => {
            read_coordinate(header, size, size_line_no, data).map(Matrix::Compressed)
        }
    }
}

fn parse_value(token: &str, field: MtxField, line: usize) -> Result<f64> {
    match field {
        MtxField::Integer => token
            .parse::<i64>()
            .map(|v| v as f64)
            .map_err(|_| Error::parse(line, format!("invalid integer value '{token}'"))),
        _ => token
            .parse::<f64>()
            .map_err(|_| Error::parse(line, format!("invalid real value '{token}'"))),
    }
}

fn require_square(header: &MtxHeader, size: &SizeLine, line: usize) -> Result<()> {
    if header.symmetry.is_triangular_storage() && size.rows != size.cols {
        return Err(Error::parse(
            line,
            format!(
                "{} matrix must be square, got {}x{}",
                header.symmetry, size.rows, size.cols
            ),
        ));
    }
    Ok(())
}

/// Column-major positions listed by an array file of the given symmetry
fn array_positions(
    rows: usize,
    cols: usize,
    symmetry: MtxSymmetry,
) -> Box<dyn Iterator<Item = (usize, usize)>> {
    match symmetry {
        MtxSymmetry::General | MtxSymmetry::Hermitian => {
            Box::new((0..cols).flat_map(move |col| (0..rows).map(move |row| (row, col))))
        }
        MtxSymmetry::Symmetric => {
            Box::new((0..cols).flat_map(move |col| (col..rows).map(move |row| (row, col))))
        }
        MtxSymmetry::SkewSymmetric => {
            Box::new((0..cols).flat_map(move |col| (col + 1..rows).map(move |row| (row, col))))
        }
    }
}

/// Number of values an array file of the given symmetry lists
fn array_value_count(rows: usize, cols: usize, symmetry: MtxSymmetry) -> Option<usize> {
    match symmetry {
        MtxSymmetry::General | MtxSymmetry::Hermitian => rows.checked_mul(cols),
        MtxSymmetry::Symmetric => rows.checked_mul(rows.checked_add(1)?).map(|n| n / 2),
        MtxSymmetry::SkewSymmetric => rows.checked_mul(rows.saturating_sub(1)).map(|n| n / 2),
    }
}

fn read_array<'a>(
    header: MtxHeader,
    size: SizeLine,
    size_line_no: usize,
    data: impl Iterator<Item = (usize, &'a str)>,
) -> Result<DenseMatrix<f64>> {
    let SizeLine { rows, cols, .. } = size;
    require_square(&header, &size, size_line_no)?;
    let declared = array_value_count(rows, cols, header.symmetry).ok_or_else(|| {
        Error::parse(size_line_no, format!("{rows}x{cols} matrix is too large"))
    })?;

    let mut values = Vec::with_capacity(declared.min(MAX_PREALLOCATED_ENTRIES));
    let mut last_line = size_line_no;

    for (line_no, line) in data {
        last_line = line_no;
        for token in line.split_ascii_whitespace() {
            if values.len() == declared {
                return Err(Error::parse(line_no, "more values than the size line declares"));
            }
            values.push(parse_value(token, header.field, line_no)?);
        }
    }

    if values.len() < declared {
        return Err(Error::parse(
            last_line + 1,
            format!("expected {declared} values, found {}", values.len()),
        ));
    }

    if header.symmetry == MtxSymmetry::General {
        return Ok(DenseMatrix::from_column_major(rows, cols, values)?);
    }

    // All values are present; the mirrored matrix is at most twice their size.
    let mut dense = DenseMatrix::zeros(rows, cols)?;
    for ((row, col), value) in array_positions(rows, cols, header.symmetry).zip(values) {
        dense.set(row, col, value)?;
        match header.symmetry {
            MtxSymmetry::Symmetric if row != col => dense.set(col, row, value)?,
            MtxSymmetry::SkewSymmetric => dense.set(col, row, -value)?,
            _ => {}
        }
    }
    Ok(dense)
}

fn read_coordinate<'a>(
    header: MtxHeader,
    size: SizeLine,
    size_line_no: usize,
    data: impl Iterator<Item = (usize, &'a str)>,
) -> Result<CompressedMatrix<f64>> {
    let SizeLine { rows, cols, .. } = size;
    let declared = size.entries.unwrap_or(0);
    require_square(&header, &size, size_line_no)?;

    let mut triplets = Vec::with_capacity(declared.min(MAX_PREALLOCATED_ENTRIES));
    let mut listed = 0usize;
    let mut explicit_zeros = 0usize;
    let mut zero_triplets = 0usize;
    let mut last_line = size_line_no;

    for (line_no, line) in data {
        last_line = line_no;
        listed += 1;
        if listed > declared {
            return Err(Error::parse(line_no, "more entries than the size line declares"));
        }

        let mut tokens = line.split_ascii_whitespace();
        let row = tokens
            .next()
            .and_then(parse_one_based)
            .ok_or_else(|| Error::parse(line_no, "invalid row index"))?;
        let col = tokens
            .next()
            .and_then(parse_one_based)
            .ok_or_else(|| Error::parse(line_no, "invalid column index"))?;
        validate_index(row, col, rows, cols)
            .map_err(|source| Error::Format { line: line_no, source })?;

        let value = match header.field {
            MtxField::Pattern => 1.0,
            field => {
                let token = tokens
                    .next()
                    .ok_or_else(|| Error::parse(line_no, "missing value"))?;
                parse_value(token, field, line_no)?
            }
        };
        if tokens.next().is_some() {
            return Err(Error::parse(line_no, "unexpected trailing tokens"));
        }

        let before = triplets.len();
        triplets.push((row, col, value));
        match header.symmetry {
            MtxSymmetry::Symmetric if row != col => triplets.push((col, row, value)),
            MtxSymmetry::SkewSymmetric if row != col => triplets.push((col, row, -value)),
            MtxSymmetry::SkewSymmetric => {
                return Err(Error::parse(
                    line_no,
                    "skew-symmetric matrix lists a diagonal entry",
                ))
            }
            _ => {}
        }
        if value == 0.0 {
            explicit_zeros += 1;
            zero_triplets += triplets.len() - before;
        }
    }

    if listed < declared {
        return Err(Error::parse(
            last_line + 1,
            format!("expected {declared} entries, found {listed}"),
        ));
    }
    if explicit_zeros > 0 {
        warn!("dropping {explicit_zeros} explicitly stored zero entries");
    }

    let stored = triplets.len();
    let matrix = CompressedMatrix::try_from_triplets(rows, cols, triplets)?;
    let coalesced = stored - zero_triplets - matrix.nnz();
    if coalesced > 0 {
        debug!("coalesced {coalesced} repeated positions");
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparsity_core::{SparseMatrix, SparsityError};

    #[test]
    fn test_read_array_general() {
        let text = "%%MatrixMarket matrix array real general\n%\n2 3\n1\n2\n0\n4\n5.5e0\n0\n";
        let matrix = read_matrix_market_str(text).unwrap();
        let Matrix::Dense(dense) = matrix else {
            panic!("array files load as dense matrices");
        };
        // column-major: | 1 0 5.5 |
        //               | 2 4 0   |
        assert_eq!(dense.as_slice(), &[1.0, 0.0, 5.5, 2.0, 4.0, 0.0]);
    }

    #[test]
    fn test_read_array_symmetric() {
        let text = "%%MatrixMarket matrix array real symmetric\n2 2\n1.0\n3.0\n2.0\n";
        let dense = read_matrix_market_str(text).unwrap().into_dense().unwrap();
        assert_eq!(dense.as_slice(), &[1.0, 3.0, 3.0, 2.0]);
    }

    #[test]
    fn test_read_array_skew_symmetric() {
        let text = "%%MatrixMarket matrix array integer skew-symmetric\n3 3\n1\n2\n3\n";
        let dense = read_matrix_market_str(text).unwrap().into_dense().unwrap();
        assert_eq!(dense.get(1, 0), Some(1.0));
        assert_eq!(dense.get(0, 1), Some(-1.0));
        assert_eq!(dense.get(2, 1), Some(3.0));
        assert_eq!(dense.get(1, 2), Some(-3.0));
        assert_eq!(dense.get(2, 2), Some(0.0));
    }

    #[test]
    fn test_read_coordinate_general() {
        let text = "%%MatrixMarket matrix coordinate real general\n% comment\n\n3 3 2\n1 1 2.5\n3 2 -1\n";
        let matrix = read_matrix_market_str(text).unwrap();
        assert!(!matrix.is_dense());
        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get_element(0, 0), Some(2.5));
        assert_eq!(matrix.get_element(2, 1), Some(-1.0));
    }

    #[test]
    fn test_read_coordinate_symmetric_pattern() {
        let text = "%%MatrixMarket matrix coordinate pattern symmetric\n3 3 2\n1 1\n3 1\n";
        let matrix = read_matrix_market_str(text).unwrap();
        assert_eq!(matrix.nnz(), 3);
        assert_eq!(matrix.get_element(0, 2), Some(1.0));
        assert_eq!(matrix.get_element(2, 0), Some(1.0));
    }

    #[test]
    fn test_read_coordinate_drops_explicit_zeros() {
        let text = "%%MatrixMarket matrix coordinate real general\n2 2 2\n1 1 0\n2 2 3\n";
        let matrix = read_matrix_market_str(text).unwrap();
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let text = "%%MatrixMarket matrix coordinate real general\n2 2 2\n1 1 1.0\n1 x 1.0\n";
        match read_matrix_market_str(text) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 4),
            other => panic!("unexpected result: {other:?}"),
        }

        let text = "%%MatrixMarket matrix coordinate real general\n2 2 1\n3 1 1.0\n";
        match read_matrix_market_str(text) {
            Err(Error::Format { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source, SparsityError::IndexOutOfBounds { row: 2, col: 0 });
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let text = "%%MatrixMarket matrix array real general\n2 2\n1\n2\n3\n";
        match read_matrix_market_str(text) {
            Err(Error::Parse { line, message }) => {
                assert_eq!(line, 6);
                assert_eq!(message, "expected 4 values, found 3");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_array_size_line_alone_does_not_allocate() {
        let text = "%%MatrixMarket matrix array real general\n1000000 1000000\n1.0\n";
        match read_matrix_market_str(text) {
            Err(Error::Parse { line, message }) => {
                assert_eq!(line, 4);
                assert_eq!(message, "expected 1000000000000 values, found 1");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let symmetric = "%%MatrixMarket matrix array real symmetric\n100000 100000\n1.0\n2.0\n";
        assert!(matches!(
            read_matrix_market_str(symmetric),
            Err(Error::Parse { line: 5, .. })
        ));

        let overflowing = format!(
            "%%MatrixMarket matrix array real general\n{} 2\n1.0\n",
            usize::MAX
        );
        assert!(matches!(
            read_matrix_market_str(&overflowing),
            Err(Error::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_array_rejects_extra_values() {
        let text = "%%MatrixMarket matrix array real symmetric\n2 2\n1.0 3.0\n2.0 4.0\n";
        assert!(matches!(
            read_matrix_market_str(text),
            Err(Error::Parse { line: 4, .. })
        ));
    }

    #[test]
    fn test_mirrored_explicit_zeros_are_not_counted_as_coalesced() {
        let text = "%%MatrixMarket matrix coordinate real symmetric\n3 3 3\n2 1 0\n3 1 4\n3 3 5\n";
        let matrix = read_matrix_market_str(text).unwrap();
        assert_eq!(matrix.nnz(), 3);
        assert_eq!(matrix.get_element(1, 0), None);
        assert_eq!(matrix.get_element(0, 2), Some(4.0));
    }

    #[test]
    fn test_entry_count_mismatch() {
        let too_many = "%%MatrixMarket matrix coordinate real general\n2 2 1\n1 1 1\n2 2 1\n";
        assert!(matches!(
            read_matrix_market_str(too_many),
            Err(Error::Parse { line: 4, .. })
        ));

        let too_few = "%%MatrixMarket matrix coordinate real general\n2 2 3\n1 1 1\n";
        assert!(matches!(
            read_matrix_market_str(too_few),
            Err(Error::Parse { line: 4, .. })
        ));
    }

    #[test]
    fn test_rejects_unsupported_and_malformed_headers() {
        assert!(matches!(
            read_matrix_market_str("%%MatrixMarket matrix coordinate complex general\n1 1 0\n"),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            read_matrix_market_str("not a matrix\n"),
            Err(Error::Format {
                line: 1,
                source: SparsityError::InvalidHeader
            })
        ));
        assert!(matches!(
            read_matrix_market_str(""),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            read_matrix_market_str("%%MatrixMarket matrix array real symmetric\n2 3\n"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_summary_shape() {
        let coordinate = MtxSummary {
            header: MtxHeader::new(MtxLayout::Coordinate, MtxField::Real),
            size: SizeLine {
                rows: 10,
                cols: 10,
                entries: Some(4),
            },
        };
        assert_eq!(coordinate.shape(), Some(MatrixShape::new(10, 10, 4)));

        let array = MtxSummary {
            header: MtxHeader::new(MtxLayout::Array, MtxField::Real),
            size: SizeLine {
                rows: 10,
                cols: 10,
                entries: None,
            },
        };
        assert_eq!(array.shape(), None);
    }
}

//! Matrix Market writer

use crate::error::Result;
use log::debug;
use sparsity_core::format::constants::REAL_PRECISION;
use sparsity_core::{Matrix, MatrixElement, MtxHeader, MtxLayout};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Element types with a Matrix Market text representation
pub trait MtxValue: MatrixElement {
    /// Write the value as a single token
    fn write_value<W: Write>(self, writer: &mut W) -> std::io::Result<()>;
}

impl MtxValue for f64 {
    fn write_value<W: Write>(self, writer: &mut W) -> std::io::Result<()> {
        write!(writer, "{:.*e}", REAL_PRECISION, self)
    }
}

impl MtxValue for f32 {
    fn write_value<W: Write>(self, writer: &mut W) -> std::io::Result<()> {
        write!(writer, "{:.8e}", self)
    }
}

macro_rules! impl_integer_value {
    ($($ty:ty),*) => {
        $(
            impl MtxValue for $ty {
                fn write_value<W: Write>(self, writer: &mut W) -> std::io::Result<()> {
                    write!(writer, "{}", self)
                }
            }
        )*
    };
}

impl_integer_value!(i32, i64, u32, u64);

/// Write a matrix in its natural layout: dense as `array`, compressed as `coordinate`
pub fn write_matrix_market<T: MtxValue, W: Write>(writer: W, matrix: &Matrix<T>) -> Result<()> {
    let layout = match matrix {
        Matrix::Dense(_) => MtxLayout::Array,
        Matrix::Compressed(_) => MtxLayout::Coordinate,
    };
    write_matrix_market_as(writer, matrix, layout)
}

/// Write a matrix in the given layout, converting representation if needed
pub fn write_matrix_market_as<T: MtxValue, W: Write>(
    mut writer: W,
    matrix: &Matrix<T>,
    layout: MtxLayout,
) -> Result<()> {
    let header = MtxHeader::new(layout, T::data_type().field());
    writeln!(writer, "{header}")?;
    writeln!(writer, "%")?;

    match (layout, matrix) {
        (MtxLayout::Array, Matrix::Dense(dense)) => {
            writeln!(writer, "{} {}", dense.rows(), dense.cols())?;
            for value in dense.iter_column_major() {
                value.write_value(&mut writer)?;
                writeln!(writer)?;
            }
        }
        (MtxLayout::Array, Matrix::Compressed(compressed)) => {
            let dense = compressed.to_dense()?;
            writeln!(writer, "{} {}", dense.rows(), dense.cols())?;
            for value in dense.iter_column_major() {
                value.write_value(&mut writer)?;
                writeln!(writer)?;
            }
        }
        (MtxLayout::Coordinate, matrix) => {
            let compressed = match matrix {
                Matrix::Dense(dense) => dense.to_compressed(),
                Matrix::Compressed(compressed) => compressed.clone(),
            };
            compressed.validate()?;

            let mut entries: Vec<_> = compressed.iter().collect();
            entries.sort_unstable_by_key(|&(row, col, _)| (col, row));

            writeln!(
                writer,
                "{} {} {}",
                compressed.rows(),
                compressed.cols(),
                entries.len()
            )?;
            for (row, col, value) in entries {
                write!(writer, "{} {} ", row + 1, col + 1)?;
                value.write_value(&mut writer)?;
                writeln!(writer)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write a matrix to a file in the given layout
pub fn write_matrix_market_file<T: MtxValue, P: AsRef<Path>>(
    path: P,
    matrix: &Matrix<T>,
    layout: MtxLayout,
) -> Result<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    write_matrix_market_as(writer, matrix, layout)?;
    debug!("wrote {} ({layout})", path.display());
    Ok(())
}

//! Random matrix generation
//!
//! Produces the pair of matrices the command-line tools work with: a dense
//! matrix of uniform values and a sparse matrix with a fixed fraction of
//! non-zero cells. Generation is deterministic for a given seed.

use crate::error::{Error, Result};
use crate::mtx::write_matrix_market_file;
use log::info;
use rand::distributions::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparsity_core::{CompressedMatrix, DenseMatrix, Matrix, MtxLayout};
use std::path::{Path, PathBuf};

/// File name of the generated dense matrix
pub const DENSE_FILE_NAME: &str = "dense_matrix.mtx";

/// File name of the generated sparse matrix
pub const SPARSE_FILE_NAME: &str = "sparse_matrix.mtx";

/// Configuration for matrix generation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Rows of both matrices
    pub rows: usize,
    /// Columns of both matrices
    pub cols: usize,
    /// Fraction of non-zero cells in the sparse matrix
    pub density: f64,
    /// Seed for the random number generator
    pub seed: u64,
    /// On-disk layout of the sparse matrix
    ///
    /// `Array` stores it cell by cell like the dense one, `Coordinate`
    /// stores only its non-zero entries.
    pub sparse_layout: MtxLayout,
}

impl GeneratorConfig {
    /// Set matrix dimensions
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the sparse matrix density
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the sparse matrix layout on disk
    pub fn with_sparse_layout(mut self, layout: MtxLayout) -> Self {
        self.sparse_layout = layout;
        self
    }

    /// Check that the configuration describes a generatable pair
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::Config(format!(
                "dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(Error::Config(format!(
                "{}x{} matrix is too large",
                self.rows, self.cols
            )));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::Config(format!(
                "density must be within [0, 1], got {}",
                self.density
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file; missing fields keep their defaults
    #[cfg(feature = "serde")]
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 1000,
            cols: 1000,
            density: 0.01,
            seed: 42,
            sparse_layout: MtxLayout::Array,
        }
    }
}

/// Dense matrix with every value drawn uniformly from `[0, 1)`
pub fn random_dense<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> DenseMatrix<f64> {
    DenseMatrix::from_fn(rows, cols, |_, _| rng.gen::<f64>())
}

/// Compressed matrix with exactly `round(density * rows * cols)` non-zeros
///
/// Positions are sampled without replacement and values are drawn from the
/// open interval `(0, 1)`, so no sampled cell can come out as zero.
pub fn random_sparse<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    density: f64,
) -> Result<CompressedMatrix<f64>> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::Config(format!(
            "density must be within [0, 1], got {density}"
        )));
    }
    let cells = rows
        .checked_mul(cols)
        .ok_or_else(|| Error::Config(format!("{rows}x{cols} matrix is too large")))?;
    let target = ((density * cells as f64).round() as usize).min(cells);

    let positions = rand::seq::index::sample(rng, cells, target);
    let triplets: Vec<_> = positions
        .into_iter()
        .map(|i| (i / cols, i % cols, rng.sample::<f64, _>(Open01)))
        .collect();

    Ok(CompressedMatrix::try_from_triplets(rows, cols, triplets)?)
}

/// Seeded generator producing the dense/sparse pair
pub struct MatrixGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

/// Paths written by [`MatrixGenerator::write_pair`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub dense: PathBuf,
    pub sparse: PathBuf,
}

impl MatrixGenerator {
    /// Create a generator; fails if the configuration is invalid
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Next dense matrix
    pub fn dense(&mut self) -> DenseMatrix<f64> {
        random_dense(&mut self.rng, self.config.rows, self.config.cols)
    }

    /// Next sparse matrix
    pub fn sparse(&mut self) -> Result<CompressedMatrix<f64>> {
        random_sparse(
            &mut self.rng,
            self.config.rows,
            self.config.cols,
            self.config.density,
        )
    }

    /// Generate both matrices and write them into `output_dir`
    pub fn write_pair<P: AsRef<Path>>(&mut self, output_dir: P) -> Result<GeneratedFiles> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        let files = GeneratedFiles {
            dense: output_dir.join(DENSE_FILE_NAME),
            sparse: output_dir.join(SPARSE_FILE_NAME),
        };

        let dense = Matrix::Dense(self.dense());
        write_matrix_market_file(&files.dense, &dense, MtxLayout::Array)?;
        info!(
            "wrote {}x{} dense matrix to {}",
            self.config.rows,
            self.config.cols,
            files.dense.display()
        );

        let sparse = self.sparse()?;
        let nnz = sparse.nnz();
        write_matrix_market_file(
            &files.sparse,
            &Matrix::Compressed(sparse),
            self.config.sparse_layout,
        )?;
        info!(
            "wrote sparse matrix with {nnz} non-zeros to {} ({} layout)",
            files.sparse.display(),
            self.config.sparse_layout
        );

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparsity_core::{sparsity, SparseMatrix};

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!((config.rows, config.cols), (1000, 1000));
        assert_eq!(config.density, 0.01);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let base = GeneratorConfig::default();
        assert!(matches!(
            base.clone().with_dimensions(0, 10).validate(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            base.clone().with_density(1.5).validate(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            base.with_density(f64::NAN).validate(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_random_sparse_has_exact_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let sparse = random_sparse(&mut rng, 1000, 1000, 0.01).unwrap();
        assert_eq!(sparse.nnz(), 10_000);
        assert_eq!(sparsity(&sparse), Ok(0.99));
        assert!(sparse.values().iter().all(|&v| v > 0.0 && v < 1.0));
        assert!(sparse.validate().is_ok());
    }

    #[test]
    fn test_random_sparse_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_sparse(&mut rng, 4, 5, 0.0).unwrap().nnz(), 0);
        assert_eq!(random_sparse(&mut rng, 4, 5, 1.0).unwrap().nnz(), 20);
        assert!(random_sparse(&mut rng, 4, 5, -0.1).is_err());
    }

    #[test]
    fn test_random_dense_values_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(3);
        let dense = random_dense(&mut rng, 20, 30);
        assert_eq!(dense.dimensions(), (20, 30));
        assert!(dense.as_slice().iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_generator_is_deterministic() {
        let config = GeneratorConfig::default()
            .with_dimensions(10, 12)
            .with_density(0.25);
        let mut a = MatrixGenerator::from_config(config.clone()).unwrap();
        let mut b = MatrixGenerator::from_config(config).unwrap();
        assert_eq!(a.dense(), b.dense());
        assert_eq!(a.sparse().unwrap(), b.sparse().unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_partial_json() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "rows": 50, "sparse_layout": "coordinate" }"#).unwrap();
        assert_eq!(config.rows, 50);
        assert_eq!(config.cols, 1000);
        assert_eq!(config.sparse_layout, MtxLayout::Coordinate);
    }
}

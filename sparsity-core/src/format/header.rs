//! Matrix Market banner definitions
//!
//! This module contains the banner line structure (`%%MatrixMarket matrix
//! <layout> <field> <symmetry>`) and the enums it is made of.

use super::constants::{BANNER, OBJECT_MATRIX};
use crate::{Result, SparsityError};

/// Parsed Matrix Market banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MtxHeader {
    /// Coordinate (explicit entries) or array (every cell)
    pub layout: MtxLayout,
    /// Value type of the entries
    pub field: MtxField,
    /// Symmetry structure; non-general files store one triangle only
    pub symmetry: MtxSymmetry,
}

impl MtxHeader {
    /// Create a header for a general (non-symmetric) matrix
    pub const fn new(layout: MtxLayout, field: MtxField) -> Self {
        Self {
            layout,
            field,
            symmetry: MtxSymmetry::General,
        }
    }

    /// Set the symmetry structure
    pub const fn with_symmetry(mut self, symmetry: MtxSymmetry) -> Self {
        self.symmetry = symmetry;
        self
    }

    /// Parse the banner line of a Matrix Market file
    ///
    /// Keywords are matched case-insensitively. Objects other than `matrix`
    /// are rejected as unsupported.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_ascii_whitespace();

        let banner = tokens.next().ok_or(SparsityError::InvalidHeader)?;
        if !banner.eq_ignore_ascii_case(BANNER) {
            return Err(SparsityError::InvalidHeader);
        }

        let object = tokens.next().ok_or(SparsityError::InvalidHeader)?;
        if !object.eq_ignore_ascii_case(OBJECT_MATRIX) {
            return Err(SparsityError::UnsupportedFormat);
        }

        let layout = MtxLayout::parse(tokens.next().ok_or(SparsityError::InvalidHeader)?)?;
        let field = MtxField::parse(tokens.next().ok_or(SparsityError::InvalidHeader)?)?;
        let symmetry = MtxSymmetry::parse(tokens.next().ok_or(SparsityError::InvalidHeader)?)?;

        if tokens.next().is_some() {
            return Err(SparsityError::InvalidHeader);
        }

        // Skew-symmetric pattern matrices cannot exist: there are no values to negate.
        if field == MtxField::Pattern && symmetry == MtxSymmetry::SkewSymmetric {
            return Err(SparsityError::InvalidHeader);
        }
        if layout == MtxLayout::Array && field == MtxField::Pattern {
            return Err(SparsityError::InvalidHeader);
        }

        Ok(Self {
            layout,
            field,
            symmetry,
        })
    }

    /// Whether readers of this crate can load the file's values
    pub const fn is_supported(&self) -> bool {
        !matches!(self.field, MtxField::Complex) && !matches!(self.symmetry, MtxSymmetry::Hermitian)
    }
}

impl core::fmt::Display for MtxHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{BANNER} {OBJECT_MATRIX} {} {} {}",
            self.layout, self.field, self.symmetry
        )
    }
}

/// Storage layouts defined by Matrix Market
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MtxLayout {
    /// Explicit `row col value` triples, 1-based
    Coordinate,
    /// Every cell listed in column-major order
    Array,
}

impl MtxLayout {
    /// Parse a layout keyword
    pub fn parse(token: &str) -> Result<Self> {
        if token.eq_ignore_ascii_case("coordinate") {
            Ok(MtxLayout::Coordinate)
        } else if token.eq_ignore_ascii_case("array") {
            Ok(MtxLayout::Array)
        } else {
            Err(SparsityError::InvalidHeader)
        }
    }
}

impl core::fmt::Display for MtxLayout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MtxLayout::Coordinate => write!(f, "coordinate"),
            MtxLayout::Array => write!(f, "array"),
        }
    }
}

/// Value fields defined by Matrix Market
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MtxField {
    Real,
    Integer,
    /// Positions only; every listed entry is non-zero
    Pattern,
    Complex,
}

impl MtxField {
    /// Parse a field keyword (`double` is accepted as an alias of `real`)
    pub fn parse(token: &str) -> Result<Self> {
        if token.eq_ignore_ascii_case("real") || token.eq_ignore_ascii_case("double") {
            Ok(MtxField::Real)
        } else if token.eq_ignore_ascii_case("integer") {
            Ok(MtxField::Integer)
        } else if token.eq_ignore_ascii_case("pattern") {
            Ok(MtxField::Pattern)
        } else if token.eq_ignore_ascii_case("complex") {
            Ok(MtxField::Complex)
        } else {
            Err(SparsityError::InvalidHeader)
        }
    }
}

impl core::fmt::Display for MtxField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MtxField::Real => write!(f, "real"),
            MtxField::Integer => write!(f, "integer"),
            MtxField::Pattern => write!(f, "pattern"),
            MtxField::Complex => write!(f, "complex"),
        }
    }
}

/// Symmetry structures defined by Matrix Market
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MtxSymmetry {
    General,
    Symmetric,
    SkewSymmetric,
    Hermitian,
}

impl MtxSymmetry {
    /// Parse a symmetry keyword
    pub fn parse(token: &str) -> Result<Self> {
        if token.eq_ignore_ascii_case("general") {
            Ok(MtxSymmetry::General)
        } else if token.eq_ignore_ascii_case("symmetric") {
            Ok(MtxSymmetry::Symmetric)
        } else if token.eq_ignore_ascii_case("skew-symmetric") {
            Ok(MtxSymmetry::SkewSymmetric)
        } else if token.eq_ignore_ascii_case("hermitian") {
            Ok(MtxSymmetry::Hermitian)
        } else {
            Err(SparsityError::InvalidHeader)
        }
    }

    /// Whether only one triangle is stored in the file
    pub const fn is_triangular_storage(self) -> bool {
        !matches!(self, MtxSymmetry::General)
    }
}

impl core::fmt::Display for MtxSymmetry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MtxSymmetry::General => write!(f, "general"),
            MtxSymmetry::Symmetric => write!(f, "symmetric"),
            MtxSymmetry::SkewSymmetric => write!(f, "skew-symmetric"),
            MtxSymmetry::Hermitian => write!(f, "hermitian"),
        }
    }
}

/// Element data types that can be stored in a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataType {
    /// 32-bit floating point
    F32 = 0,
    /// 64-bit floating point
    F64 = 1,
    /// 32-bit signed integer
    I32 = 2,
    /// 64-bit signed integer
    I64 = 3,
    /// 32-bit unsigned integer
    U32 = 4,
    /// 64-bit unsigned integer
    U64 = 5,
}

impl DataType {
    /// Matrix Market field used when writing this type
    pub const fn field(self) -> MtxField {
        match self {
            DataType::F32 | DataType::F64 => MtxField::Real,
            DataType::I32 | DataType::I64 | DataType::U32 | DataType::U64 => MtxField::Integer,
        }
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::DipError;

/// How the tensor elements of a pixel map onto a vector or matrix layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TensorShape {
    #[default]
    ColumnVector,
    RowVector,
    ColumnMajorMatrix,
    RowMajorMatrix,
    DiagonalMatrix,
    SymmetricMatrix,
    UpperTriangularMatrix,
    LowerTriangularMatrix,
}

static CANONICAL_NAMES: &[(&str, TensorShape)] = &[
    ("column vector", TensorShape::ColumnVector),
    ("row vector", TensorShape::RowVector),
    ("column-major matrix", TensorShape::ColumnMajorMatrix),
    ("row-major matrix", TensorShape::RowMajorMatrix),
    ("diagonal matrix", TensorShape::DiagonalMatrix),
    ("symmetric matrix", TensorShape::SymmetricMatrix),
    ("upper triangular matrix", TensorShape::UpperTriangularMatrix),
    ("lower triangular matrix", TensorShape::LowerTriangularMatrix),
];

static ALIAS_NAMES: &[(&str, TensorShape)] = &[
    ("vector", TensorShape::ColumnVector),
    ("matrix", TensorShape::ColumnMajorMatrix),
    ("diagonal", TensorShape::DiagonalMatrix),
    ("symmetric", TensorShape::SymmetricMatrix),
    ("upper triangular", TensorShape::UpperTriangularMatrix),
    ("lower triangular", TensorShape::LowerTriangularMatrix),
];

impl TensorShape {
    pub fn all() -> impl Iterator<Item = TensorShape> {
        CANONICAL_NAMES.iter().map(|&(_, shape)| shape)
    }

    /// Exact, case-sensitive lookup; canonical names first, then aliases.
    pub fn from_name(name: &str) -> Result<Self, DipError> {
        CANONICAL_NAMES
            .iter()
            .chain(ALIAS_NAMES.iter())
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, shape)| shape)
            .ok_or_else(|| DipError::UnrecognizedTensorShape(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            TensorShape::ColumnVector => "column vector",
            TensorShape::RowVector => "row vector",
            TensorShape::ColumnMajorMatrix => "column-major matrix",
            TensorShape::RowMajorMatrix => "row-major matrix",
            TensorShape::DiagonalMatrix => "diagonal matrix",
            TensorShape::SymmetricMatrix => "symmetric matrix",
            TensorShape::UpperTriangularMatrix => "upper triangular matrix",
            TensorShape::LowerTriangularMatrix => "lower triangular matrix",
        }
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, TensorShape::ColumnVector | TensorShape::RowVector)
    }

    pub fn is_matrix(&self) -> bool {
        !self.is_vector()
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TensorShape {
    type Err = DipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TensorShape::from_name(s)
    }
}

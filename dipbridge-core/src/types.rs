use std::fmt;
use std::str::FromStr;

use crate::error::DipError;

/// Defines the possible data types for image samples.
///
/// Every image, pixel and sample carries one of these tags at runtime, so
/// code that crosses into the library can dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Binary, stored as one byte per sample.
    Bin,
    UInt8,
    SInt8,
    UInt16,
    SInt16,
    UInt32,
    SInt32,
    UInt64,
    SInt64,
    /// 32-bit floating-point type.
    SFloat,
    /// 64-bit floating-point type.
    DFloat,
    /// Complex value made of two 32-bit floats.
    SComplex,
    /// Complex value made of two 64-bit floats.
    DComplex,
}

/// Canonical names, in the order of `DataType::all()`.
static CANONICAL_NAMES: &[(&str, DataType)] = &[
    ("BIN", DataType::Bin),
    ("UINT8", DataType::UInt8),
    ("SINT8", DataType::SInt8),
    ("UINT16", DataType::UInt16),
    ("SINT16", DataType::SInt16),
    ("UINT32", DataType::UInt32),
    ("SINT32", DataType::SInt32),
    ("UINT64", DataType::UInt64),
    ("SINT64", DataType::SInt64),
    ("SFLOAT", DataType::SFloat),
    ("DFLOAT", DataType::DFloat),
    ("SCOMPLEX", DataType::SComplex),
    ("DCOMPLEX", DataType::DComplex),
];

/// Accepted on input, never produced by `name()`.
static ALIAS_NAMES: &[(&str, DataType)] = &[
    ("bool", DataType::Bin),
    ("uint8", DataType::UInt8),
    ("int8", DataType::SInt8),
    ("uint16", DataType::UInt16),
    ("int16", DataType::SInt16),
    ("uint32", DataType::UInt32),
    ("int32", DataType::SInt32),
    ("uint64", DataType::UInt64),
    ("int64", DataType::SInt64),
    ("float32", DataType::SFloat),
    ("float64", DataType::DFloat),
    ("complex64", DataType::SComplex),
    ("complex128", DataType::DComplex),
    ("SINGLE", DataType::SFloat),
    ("DOUBLE", DataType::DFloat),
];

impl DataType {
    /// All data types, in canonical table order.
    pub fn all() -> impl Iterator<Item = DataType> {
        CANONICAL_NAMES.iter().map(|&(_, dt)| dt)
    }

    /// Looks up a data type by name.
    ///
    /// Matching is exact and case-sensitive. The canonical table is searched
    /// before the aliases; the first match wins.
    pub fn from_name(name: &str) -> Result<Self, DipError> {
        CANONICAL_NAMES
            .iter()
            .chain(ALIAS_NAMES.iter())
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, dt)| dt)
            .ok_or_else(|| DipError::UnrecognizedDataType(name.to_string()))
    }

    /// The canonical name. `DataType::from_name(dt.name())` always yields `dt`.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Bin => "BIN",
            DataType::UInt8 => "UINT8",
            DataType::SInt8 => "SINT8",
            DataType::UInt16 => "UINT16",
            DataType::SInt16 => "SINT16",
            DataType::UInt32 => "UINT32",
            DataType::SInt32 => "SINT32",
            DataType::UInt64 => "UINT64",
            DataType::SInt64 => "SINT64",
            DataType::SFloat => "SFLOAT",
            DataType::DFloat => "DFLOAT",
            DataType::SComplex => "SCOMPLEX",
            DataType::DComplex => "DCOMPLEX",
        }
    }

    /// Size in bytes of one sample of this type.
    pub fn size_of(&self) -> usize {
        match self {
            DataType::Bin | DataType::UInt8 | DataType::SInt8 => 1,
            DataType::UInt16 | DataType::SInt16 => 2,
            DataType::UInt32 | DataType::SInt32 | DataType::SFloat => 4,
            DataType::UInt64 | DataType::SInt64 | DataType::DFloat | DataType::SComplex => 8,
            DataType::DComplex => 16,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, DataType::Bin)
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64
        )
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            DataType::SInt8 | DataType::SInt16 | DataType::SInt32 | DataType::SInt64
        ) || self.is_float()
            || self.is_complex()
    }

    pub fn is_integer(&self) -> bool {
        self.is_unsigned()
            || matches!(
                self,
                DataType::SInt8 | DataType::SInt16 | DataType::SInt32 | DataType::SInt64
            )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DataType::SFloat | DataType::DFloat)
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, DataType::SComplex | DataType::DComplex)
    }

    /// Integer or float: everything except binary and complex.
    pub fn is_real(&self) -> bool {
        self.is_integer() || self.is_float()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = DipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::from_name(s)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use std::fmt;

use num_complex::{Complex32, Complex64};
use num_traits::{AsPrimitive, Bounded, Zero};

use crate::types::DataType;

/// A single scalar value tagged with its `DataType`.
///
/// The variant is the tag: a `Sample` can never hold a value that disagrees
/// with its data type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Bin(bool),
    UInt8(u8),
    SInt8(i8),
    UInt16(u16),
    SInt16(i16),
    UInt32(u32),
    SInt32(i32),
    UInt64(u64),
    SInt64(i64),
    SFloat(f32),
    DFloat(f64),
    SComplex(Complex32),
    DComplex(Complex64),
}

/// Clamps to the representable range of `T` before narrowing.
fn saturate<T>(value: i128) -> T
where
    T: Bounded + AsPrimitive<i128>,
    i128: AsPrimitive<T>,
{
    value
        .clamp(T::min_value().as_(), T::max_value().as_())
        .as_()
}

impl Sample {
    /// A zero sample of the given type (`false` for binary).
    pub fn zero(data_type: DataType) -> Self {
        Sample::SInt64(0).convert_to(data_type)
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Sample::Bin(_) => DataType::Bin,
            Sample::UInt8(_) => DataType::UInt8,
            Sample::SInt8(_) => DataType::SInt8,
            Sample::UInt16(_) => DataType::UInt16,
            Sample::SInt16(_) => DataType::SInt16,
            Sample::UInt32(_) => DataType::UInt32,
            Sample::SInt32(_) => DataType::SInt32,
            Sample::UInt64(_) => DataType::UInt64,
            Sample::SInt64(_) => DataType::SInt64,
            Sample::SFloat(_) => DataType::SFloat,
            Sample::DFloat(_) => DataType::DFloat,
            Sample::SComplex(_) => DataType::SComplex,
            Sample::DComplex(_) => DataType::DComplex,
        }
    }

    /// True for any non-zero value.
    pub fn as_bool(&self) -> bool {
        match *self {
            Sample::Bin(v) => v,
            Sample::SComplex(v) => !v.is_zero(),
            Sample::DComplex(v) => !v.is_zero(),
            _ => self.real_value() != 0.0,
        }
    }

    /// The value as a signed 64-bit integer.
    ///
    /// Floats are truncated toward zero and complex values contribute their
    /// modulus. A `UInt64` value above `i64::MAX` wraps around to a negative
    /// number; this is the documented loss of the host-facing integer.
    pub fn as_sint(&self) -> i64 {
        match *self {
            Sample::Bin(v) => v as i64,
            Sample::UInt8(v) => v as i64,
            Sample::SInt8(v) => v as i64,
            Sample::UInt16(v) => v as i64,
            Sample::SInt16(v) => v as i64,
            Sample::UInt32(v) => v as i64,
            Sample::SInt32(v) => v as i64,
            Sample::UInt64(v) => v as i64,
            Sample::SInt64(v) => v,
            _ => self.real_value() as i64,
        }
    }

    /// The value as a double. Complex values contribute their modulus.
    pub fn as_dfloat(&self) -> f64 {
        self.real_value()
    }

    pub fn as_dcomplex(&self) -> Complex64 {
        match *self {
            Sample::SComplex(v) => Complex64::new(v.re as f64, v.im as f64),
            Sample::DComplex(v) => v,
            _ => Complex64::new(self.real_value(), 0.0),
        }
    }

    fn real_value(&self) -> f64 {
        match *self {
            Sample::Bin(v) => {
                if v {
                    1.0
                } else {
                    0.0
                }
            }
            Sample::UInt8(v) => v as f64,
            Sample::SInt8(v) => v as f64,
            Sample::UInt16(v) => v as f64,
            Sample::SInt16(v) => v as f64,
            Sample::UInt32(v) => v as f64,
            Sample::SInt32(v) => v as f64,
            Sample::UInt64(v) => v as f64,
            Sample::SInt64(v) => v as f64,
            Sample::SFloat(v) => v as f64,
            Sample::DFloat(v) => v,
            Sample::SComplex(v) => v.norm() as f64,
            Sample::DComplex(v) => v.norm(),
        }
    }

    fn integral_value(&self) -> i128 {
        match *self {
            Sample::Bin(v) => v as i128,
            Sample::UInt8(v) => v as i128,
            Sample::SInt8(v) => v as i128,
            Sample::UInt16(v) => v as i128,
            Sample::SInt16(v) => v as i128,
            Sample::UInt32(v) => v as i128,
            Sample::SInt32(v) => v as i128,
            Sample::UInt64(v) => v as i128,
            Sample::SInt64(v) => v as i128,
            // `as` truncates toward zero and maps NaN to 0
            _ => self.real_value() as i128,
        }
    }

    /// Converts the value to another data type.
    ///
    /// Integer targets truncate toward zero and saturate at their bounds,
    /// complex sources contribute their modulus to real targets, and a binary
    /// target receives "non-zero".
    pub fn convert_to(&self, data_type: DataType) -> Sample {
        if self.data_type() == data_type {
            return *self;
        }
        match data_type {
            DataType::Bin => Sample::Bin(self.as_bool()),
            DataType::UInt8 => Sample::UInt8(saturate(self.integral_value())),
            DataType::SInt8 => Sample::SInt8(saturate(self.integral_value())),
            DataType::UInt16 => Sample::UInt16(saturate(self.integral_value())),
            DataType::SInt16 => Sample::SInt16(saturate(self.integral_value())),
            DataType::UInt32 => Sample::UInt32(saturate(self.integral_value())),
            DataType::SInt32 => Sample::SInt32(saturate(self.integral_value())),
            DataType::UInt64 => Sample::UInt64(saturate(self.integral_value())),
            DataType::SInt64 => Sample::SInt64(saturate(self.integral_value())),
            DataType::SFloat => Sample::SFloat(self.real_value() as f32),
            DataType::DFloat => Sample::DFloat(self.real_value()),
            DataType::SComplex => {
                let v = self.as_dcomplex();
                Sample::SComplex(Complex32::new(v.re as f32, v.im as f32))
            }
            DataType::DComplex => Sample::DComplex(self.as_dcomplex()),
        }
    }
}

macro_rules! impl_from_native {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$native> for Sample {
                fn from(value: $native) -> Self {
                    Sample::$variant(value)
                }
            }
        )*
    };
}

impl_from_native!(
    bool => Bin,
    u8 => UInt8,
    i8 => SInt8,
    u16 => UInt16,
    i16 => SInt16,
    u32 => UInt32,
    i32 => SInt32,
    u64 => UInt64,
    i64 => SInt64,
    f32 => SFloat,
    f64 => DFloat,
    Complex32 => SComplex,
    Complex64 => DComplex,
);

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Bin(v) => write!(f, "{}", v),
            Sample::SComplex(v) => write!(f, "{}", v),
            Sample::DComplex(v) => write!(f, "{}", v),
            Sample::SFloat(v) => write!(f, "{}", v),
            Sample::DFloat(v) => write!(f, "{}", v),
            Sample::UInt64(v) => write!(f, "{}", v),
            _ => write!(f, "{}", self.as_sint()),
        }
    }
}

#[cfg(test)]
#[path = "sample_test.rs"]
mod tests;

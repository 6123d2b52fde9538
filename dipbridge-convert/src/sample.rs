use dipbridge_core::{DataType, Sample};
use log::trace;

use crate::caster::{FromHost, IntoHost};
use crate::error::ConversionError;
use crate::host::HostValue;

impl FromHost for Sample {
    const TYPE_NAME: &'static str = "Sample";

    /// The data type follows the host kind: bool → BIN, int → SINT64,
    /// float → DFLOAT, complex → DCOMPLEX.
    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        // Bool is matched before Int: some hosts treat booleans as integers,
        // and a boolean must never become an integer sample.
        let sample = match src {
            HostValue::Bool(b) => Sample::Bin(*b),
            HostValue::Int(v) => Sample::SInt64(*v),
            HostValue::Float(v) => Sample::DFloat(*v),
            HostValue::Complex(v) => Sample::DComplex(*v),
            other => {
                trace!("Sample::load: input is not a scalar type ({})", other.kind());
                return Err(ConversionError::mismatch(Self::TYPE_NAME, other.kind()));
            }
        };
        trace!("Sample::load: input is {} -> {}", src.kind(), sample.data_type());
        Ok(sample)
    }
}

/// Host scalar for one sample, chosen by the data type (not the value).
pub(crate) fn cast_sample_as(sample: &Sample, data_type: DataType) -> HostValue {
    if data_type.is_binary() {
        HostValue::Bool(sample.as_bool())
    } else if data_type.is_complex() {
        HostValue::Complex(sample.as_dcomplex())
    } else if data_type.is_float() {
        HostValue::Float(sample.as_dfloat())
    } else {
        HostValue::Int(sample.as_sint())
    }
}

impl IntoHost for Sample {
    /// A `UInt64` sample above `i64::MAX` becomes a negative host integer.
    fn cast(&self) -> HostValue {
        cast_sample_as(self, self.data_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostKind;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn test_bool_is_binary_not_integer() -> Result<(), ConversionError> {
        for b in [true, false] {
            let s = Sample::load(&HostValue::Bool(b))?;
            assert_eq!(s.data_type(), DataType::Bin);
            assert_eq!(s.cast(), HostValue::Bool(b));
        }
        Ok(())
    }

    #[test]
    fn test_kind_decides_data_type() -> Result<(), ConversionError> {
        assert_eq!(Sample::load(&HostValue::Int(-9))?, Sample::SInt64(-9));
        assert_eq!(Sample::load(&HostValue::Float(0.25))?, Sample::DFloat(0.25));
        let c = Complex64::new(1.0, -2.0);
        assert_eq!(Sample::load(&HostValue::Complex(c))?, Sample::DComplex(c));
        Ok(())
    }

    #[test]
    fn test_non_scalars_rejected() {
        for value in [
            HostValue::None,
            HostValue::from("1"),
            HostValue::from(vec![1i64]),
            HostValue::Dict(vec![]),
        ] {
            let kind = value.kind();
            assert_eq!(
                Sample::load(&value),
                Err(ConversionError::TypeMismatch { target: "Sample", kind })
            );
        }
        assert_eq!(
            Sample::load(&HostValue::Tuple(vec![])).err(),
            Some(ConversionError::TypeMismatch { target: "Sample", kind: HostKind::Tuple })
        );
    }

    #[test]
    fn test_cast_by_data_type() {
        assert_eq!(Sample::UInt8(200).cast(), HostValue::Int(200));
        assert_eq!(Sample::SFloat(1.5).cast(), HostValue::Float(1.5));
        assert_eq!(
            Sample::SComplex(Complex32::new(1.0, 2.0)).cast(),
            HostValue::Complex(Complex64::new(1.0, 2.0))
        );
        // A whole-valued float stays a float on the host.
        assert_eq!(Sample::DFloat(3.0).cast(), HostValue::Float(3.0));
    }

    #[test]
    fn test_cast_large_unsigned_wraps() {
        assert_eq!(Sample::UInt64(u64::MAX).cast(), HostValue::Int(-1));
    }
}

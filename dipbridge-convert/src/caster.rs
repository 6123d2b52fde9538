//! The two halves of every converter, and the scalar element converters the
//! array converter is built from.

use log::trace;

use crate::error::ConversionError;
use crate::host::HostValue;

/// Host → native.
pub trait FromHost: Sized {
    /// Native type name reported in conversion errors.
    const TYPE_NAME: &'static str;

    /// Converts `src`, or fails without producing a partial value.
    fn load(src: &HostValue) -> Result<Self, ConversionError>;
}

/// Native → host.
pub trait IntoHost {
    fn cast(&self) -> HostValue;
}

impl FromHost for bool {
    const TYPE_NAME: &'static str = "bool";

    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        match src {
            HostValue::Bool(b) => Ok(*b),
            other => Err(ConversionError::mismatch(Self::TYPE_NAME, other.kind())),
        }
    }
}

impl IntoHost for bool {
    fn cast(&self) -> HostValue {
        HostValue::Bool(*self)
    }
}

impl FromHost for i64 {
    const TYPE_NAME: &'static str = "sint";

    /// Booleans are integers on the host, so they are accepted as 0 and 1.
    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        match src {
            HostValue::Int(v) => Ok(*v),
            HostValue::Bool(b) => Ok(*b as i64),
            other => Err(ConversionError::mismatch(Self::TYPE_NAME, other.kind())),
        }
    }
}

impl IntoHost for i64 {
    fn cast(&self) -> HostValue {
        HostValue::Int(*self)
    }
}

impl FromHost for isize {
    const TYPE_NAME: &'static str = "sint";

    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        let value = i64::load(src)?;
        isize::try_from(value).map_err(|_| ConversionError::OutOfRange {
            target: Self::TYPE_NAME,
            value,
        })
    }
}

impl IntoHost for isize {
    fn cast(&self) -> HostValue {
        HostValue::Int(*self as i64)
    }
}

impl FromHost for usize {
    const TYPE_NAME: &'static str = "uint";

    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        let value =
            i64::load(src).map_err(|_| ConversionError::mismatch(Self::TYPE_NAME, src.kind()))?;
        usize::try_from(value).map_err(|_| ConversionError::OutOfRange {
            target: Self::TYPE_NAME,
            value,
        })
    }
}

impl IntoHost for usize {
    /// Sizes above `i64::MAX` wrap; no image gets that large.
    fn cast(&self) -> HostValue {
        HostValue::Int(*self as i64)
    }
}

impl FromHost for f64 {
    const TYPE_NAME: &'static str = "dfloat";

    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        match src {
            HostValue::Float(v) => Ok(*v),
            HostValue::Int(v) => Ok(*v as f64),
            HostValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            other => Err(ConversionError::mismatch(Self::TYPE_NAME, other.kind())),
        }
    }
}

impl IntoHost for f64 {
    fn cast(&self) -> HostValue {
        HostValue::Float(*self)
    }
}

impl FromHost for String {
    const TYPE_NAME: &'static str = "String";

    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        trace!("String::load: input is {}", src.kind());
        src.as_text()
            .map(str::to_string)
            .ok_or_else(|| ConversionError::mismatch(Self::TYPE_NAME, src.kind()))
    }
}

impl IntoHost for String {
    fn cast(&self) -> HostValue {
        HostValue::Str(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostKind;

    #[test]
    fn test_bool_accepts_only_bool() {
        assert_eq!(bool::load(&HostValue::Bool(false)), Ok(false));
        assert_eq!(
            bool::load(&HostValue::Int(1)),
            Err(ConversionError::TypeMismatch { target: "bool", kind: HostKind::Int })
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(i64::load(&HostValue::Int(-3)), Ok(-3));
        assert_eq!(i64::load(&HostValue::Bool(true)), Ok(1));
        assert!(i64::load(&HostValue::Float(1.0)).is_err());
        assert_eq!(isize::load(&HostValue::Int(-3)), Ok(-3));
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        assert_eq!(usize::load(&HostValue::Int(4)), Ok(4));
        assert_eq!(
            usize::load(&HostValue::Int(-1)),
            Err(ConversionError::OutOfRange { target: "uint", value: -1 })
        );
        assert_eq!(
            usize::load(&HostValue::from("4")),
            Err(ConversionError::TypeMismatch { target: "uint", kind: HostKind::Str })
        );
    }

    #[test]
    fn test_float_accepts_int() {
        assert_eq!(f64::load(&HostValue::Int(2)), Ok(2.0));
        assert_eq!(f64::load(&HostValue::Float(0.5)), Ok(0.5));
        assert!(f64::load(&HostValue::None).is_err());
    }

    #[test]
    fn test_string_from_bytes() {
        assert_eq!(String::load(&HostValue::Bytes(b"abc".to_vec())), Ok("abc".to_string()));
        assert_eq!("x".to_string().cast(), HostValue::Str("x".to_string()));
    }
}

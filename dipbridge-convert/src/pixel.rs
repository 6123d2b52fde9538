use dipbridge_core::{DataType, Pixel, Sample};
use log::{debug, trace};
use num_complex::Complex64;

use crate::caster::{FromHost, IntoHost};
use crate::error::ConversionError;
use crate::host::HostValue;
use crate::sample::cast_sample_as;

/// The pixel data type implied by the first element of a sequence.
fn data_type_of_first(first: &HostValue) -> Result<DataType, ConversionError> {
    // Same order as the sample converter: bool before int.
    match first {
        HostValue::Bool(_) => Ok(DataType::Bin),
        HostValue::Int(_) => Ok(DataType::SInt64),
        HostValue::Float(_) => Ok(DataType::DFloat),
        HostValue::Complex(_) => Ok(DataType::DComplex),
        other => Err(ConversionError::mismatch(Pixel::TYPE_NAME, other.kind())),
    }
}

/// Converts one element to the pixel's data type, the way the host would
/// convert it to that native scalar.
fn coerce_element(value: &HostValue, data_type: DataType) -> Result<Sample, ConversionError> {
    let mismatch = || ConversionError::mismatch(Pixel::TYPE_NAME, value.kind());
    match (data_type, value) {
        (DataType::Bin, HostValue::Bool(b)) => Ok(Sample::Bin(*b)),
        (DataType::Bin, HostValue::Int(v)) => Ok(Sample::Bin(*v != 0)),
        (DataType::Bin, HostValue::Float(v)) => Ok(Sample::Bin(*v != 0.0)),
        (DataType::Bin, HostValue::Complex(v)) => Ok(Sample::Bin(v.re != 0.0 || v.im != 0.0)),

        (DataType::SInt64, HostValue::Bool(b)) => Ok(Sample::SInt64(*b as i64)),
        (DataType::SInt64, HostValue::Int(v)) => Ok(Sample::SInt64(*v)),
        // Truncates toward zero, saturating at the i64 bounds: NaN becomes 0,
        // +inf i64::MAX and -inf i64::MIN.
        (DataType::SInt64, HostValue::Float(v)) => Ok(Sample::SInt64(*v as i64)),

        (DataType::DFloat, HostValue::Bool(b)) => Ok(Sample::DFloat(if *b { 1.0 } else { 0.0 })),
        (DataType::DFloat, HostValue::Int(v)) => Ok(Sample::DFloat(*v as f64)),
        (DataType::DFloat, HostValue::Float(v)) => Ok(Sample::DFloat(*v)),

        (DataType::DComplex, HostValue::Complex(v)) => Ok(Sample::DComplex(*v)),
        (DataType::DComplex, HostValue::Bool(_) | HostValue::Int(_) | HostValue::Float(_)) => {
            let real = f64::load(value)?;
            Ok(Sample::DComplex(Complex64::new(real, 0.0)))
        }

        _ => Err(mismatch()),
    }
}

impl FromHost for Pixel {
    const TYPE_NAME: &'static str = "Pixel";

    /// A sequence becomes a multi-channel pixel whose data type is decided by
    /// the first element alone; later elements are converted to that type, so
    /// `[1, 2.5]` gives the integer pixel `[1, 2]`. Any other value is loaded
    /// as a sample and becomes a one-channel pixel.
    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        let items = match src.as_sequence() {
            Some(items) => items,
            None => {
                let sample = Sample::load(src)
                    .map_err(|_| ConversionError::mismatch(Self::TYPE_NAME, src.kind()))?;
                return Ok(Pixel::from_sample(sample));
            }
        };
        let first = items.first().ok_or(ConversionError::EmptyInput {
            target: Self::TYPE_NAME,
        })?;
        let data_type = data_type_of_first(first)?;
        trace!("Pixel::load: {} channels of {}", items.len(), data_type);
        // Every element is checked before the pixel exists.
        let samples = items
            .iter()
            .map(|item| coerce_element(item, data_type))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                debug!("Pixel::load: element not convertible to {}: {}", data_type, e);
                e
            })?;
        Ok(Pixel::from_samples(samples)?)
    }
}

impl IntoHost for Pixel {
    fn cast(&self) -> HostValue {
        let data_type = self.data_type();
        trace!("Pixel::cast: {} channels as {}", self.len(), data_type);
        HostValue::List(self.iter().map(|s| cast_sample_as(s, data_type)).collect())
    }
}

#[cfg(test)]
#[path = "pixel_test.rs"]
mod tests;

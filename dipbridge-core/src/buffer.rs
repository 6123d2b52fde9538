use std::fmt::Debug;

use num_complex::{Complex32, Complex64};

use crate::error::DipError;
use crate::sample::Sample;
use crate::types::DataType;

/// Typed sample storage, one variant per `DataType`.
///
/// Images share a buffer through an `Arc`; writers clone it on demand.
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    /// Binary samples, one byte each.
    Bin(Vec<bool>),
    UInt8(Vec<u8>),
    SInt8(Vec<i8>),
    UInt16(Vec<u16>),
    SInt16(Vec<i16>),
    UInt32(Vec<u32>),
    SInt32(Vec<i32>),
    UInt64(Vec<u64>),
    SInt64(Vec<i64>),
    SFloat(Vec<f32>),
    DFloat(Vec<f64>),
    SComplex(Vec<Complex32>),
    DComplex(Vec<Complex64>),
}

/// Expands `$body` once per variant with `$v` bound to the inner vector.
macro_rules! for_each_variant {
    ($buffer:expr, $v:ident => $body:expr) => {
        match $buffer {
            Buffer::Bin($v) => $body,
            Buffer::UInt8($v) => $body,
            Buffer::SInt8($v) => $body,
            Buffer::UInt16($v) => $body,
            Buffer::SInt16($v) => $body,
            Buffer::UInt32($v) => $body,
            Buffer::SInt32($v) => $body,
            Buffer::UInt64($v) => $body,
            Buffer::SInt64($v) => $body,
            Buffer::SFloat($v) => $body,
            Buffer::DFloat($v) => $body,
            Buffer::SComplex($v) => $body,
            Buffer::DComplex($v) => $body,
        }
    };
}

impl Buffer {
    /// Allocates `len` zero samples of `data_type`.
    pub fn zeros(data_type: DataType, len: usize) -> Self {
        match data_type {
            DataType::Bin => Buffer::Bin(vec![false; len]),
            DataType::UInt8 => Buffer::UInt8(vec![0; len]),
            DataType::SInt8 => Buffer::SInt8(vec![0; len]),
            DataType::UInt16 => Buffer::UInt16(vec![0; len]),
            DataType::SInt16 => Buffer::SInt16(vec![0; len]),
            DataType::UInt32 => Buffer::UInt32(vec![0; len]),
            DataType::SInt32 => Buffer::SInt32(vec![0; len]),
            DataType::UInt64 => Buffer::UInt64(vec![0; len]),
            DataType::SInt64 => Buffer::SInt64(vec![0; len]),
            DataType::SFloat => Buffer::SFloat(vec![0.0; len]),
            DataType::DFloat => Buffer::DFloat(vec![0.0; len]),
            DataType::SComplex => Buffer::SComplex(vec![Complex32::new(0.0, 0.0); len]),
            DataType::DComplex => Buffer::DComplex(vec![Complex64::new(0.0, 0.0); len]),
        }
    }

    /// Builds a buffer of `data_type` from samples, converting each one.
    pub fn from_samples(data_type: DataType, samples: &[Sample]) -> Self {
        let mut buffer = Buffer::zeros(data_type, samples.len());
        for (index, sample) in samples.iter().enumerate() {
            buffer.write(index, *sample);
        }
        buffer
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Buffer::Bin(_) => DataType::Bin,
            Buffer::UInt8(_) => DataType::UInt8,
            Buffer::SInt8(_) => DataType::SInt8,
            Buffer::UInt16(_) => DataType::UInt16,
            Buffer::SInt16(_) => DataType::SInt16,
            Buffer::UInt32(_) => DataType::UInt32,
            Buffer::SInt32(_) => DataType::SInt32,
            Buffer::UInt64(_) => DataType::UInt64,
            Buffer::SInt64(_) => DataType::SInt64,
            Buffer::SFloat(_) => DataType::SFloat,
            Buffer::DFloat(_) => DataType::DFloat,
            Buffer::SComplex(_) => DataType::SComplex,
            Buffer::DComplex(_) => DataType::DComplex,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        for_each_variant!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn size_in_bytes(&self) -> usize {
        self.len() * self.data_type().size_of()
    }

    /// Reads the sample at `index`.
    ///
    /// # Errors
    /// `DipError::IndexOutOfRange` past the end of the buffer.
    pub fn get(&self, index: usize) -> Result<Sample, DipError> {
        let out_of_range = || DipError::IndexOutOfRange {
            index: index as isize,
            extent: self.len(),
        };
        for_each_variant!(self, v => {
            v.get(index).map(|&x| Sample::from(x)).ok_or_else(out_of_range)
        })
    }

    /// Writes `sample` at `index`, converted to the buffer's type.
    ///
    /// # Errors
    /// `DipError::IndexOutOfRange` past the end of the buffer.
    pub fn set(&mut self, index: usize, sample: Sample) -> Result<(), DipError> {
        if index >= self.len() {
            return Err(DipError::IndexOutOfRange {
                index: index as isize,
                extent: self.len(),
            });
        }
        self.write(index, sample);
        Ok(())
    }

    // Caller guarantees `index < len()`.
    fn write(&mut self, index: usize, sample: Sample) {
        let converted = sample.convert_to(self.data_type());
        match (self, converted) {
            (Buffer::Bin(v), Sample::Bin(x)) => v[index] = x,
            (Buffer::UInt8(v), Sample::UInt8(x)) => v[index] = x,
            (Buffer::SInt8(v), Sample::SInt8(x)) => v[index] = x,
            (Buffer::UInt16(v), Sample::UInt16(x)) => v[index] = x,
            (Buffer::SInt16(v), Sample::SInt16(x)) => v[index] = x,
            (Buffer::UInt32(v), Sample::UInt32(x)) => v[index] = x,
            (Buffer::SInt32(v), Sample::SInt32(x)) => v[index] = x,
            (Buffer::UInt64(v), Sample::UInt64(x)) => v[index] = x,
            (Buffer::SInt64(v), Sample::SInt64(x)) => v[index] = x,
            (Buffer::SFloat(v), Sample::SFloat(x)) => v[index] = x,
            (Buffer::DFloat(v), Sample::DFloat(x)) => v[index] = x,
            (Buffer::SComplex(v), Sample::SComplex(x)) => v[index] = x,
            (Buffer::DComplex(v), Sample::DComplex(x)) => v[index] = x,
            // convert_to always returns the buffer's own type
            _ => unreachable!("sample converted to a different data type"),
        }
    }
}

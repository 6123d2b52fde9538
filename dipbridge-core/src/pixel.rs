use crate::error::DipError;
use crate::sample::Sample;
use crate::tensor_shape::TensorShape;
use crate::types::DataType;

/// The value of one pixel: an ordered set of channels sharing one data type.
///
/// A pixel has at least one channel and its length never changes after
/// construction. Samples written into it are converted to its data type.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixel {
    data_type: DataType,
    tensor_shape: TensorShape,
    samples: Vec<Sample>,
}

impl Pixel {
    /// A zero-filled pixel with `channels` channels, shaped as a column vector.
    ///
    /// # Errors
    /// `DipError::EmptyPixel` when `channels` is 0.
    pub fn new(data_type: DataType, channels: usize) -> Result<Self, DipError> {
        if channels == 0 {
            return Err(DipError::EmptyPixel);
        }
        Ok(Pixel {
            data_type,
            tensor_shape: TensorShape::ColumnVector,
            samples: vec![Sample::zero(data_type); channels],
        })
    }

    /// A one-channel pixel holding `sample`, with the sample's data type.
    pub fn from_sample(sample: Sample) -> Self {
        Pixel {
            data_type: sample.data_type(),
            tensor_shape: TensorShape::ColumnVector,
            samples: vec![sample],
        }
    }

    /// Builds a pixel from samples that must already share one data type.
    ///
    /// # Errors
    /// `DipError::EmptyPixel` for an empty list, `DipError::DataTypeMismatch`
    /// if any sample has a different type than the first.
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self, DipError> {
        let data_type = samples.first().ok_or(DipError::EmptyPixel)?.data_type();
        if let Some(other) = samples.iter().find(|s| s.data_type() != data_type) {
            return Err(DipError::DataTypeMismatch {
                expected: data_type,
                actual: other.data_type(),
                operation: "Pixel::from_samples".to_string(),
            });
        }
        Ok(Pixel {
            data_type,
            tensor_shape: TensorShape::ColumnVector,
            samples,
        })
    }

    pub fn with_tensor_shape(mut self, tensor_shape: TensorShape) -> Self {
        self.tensor_shape = tensor_shape;
        self
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn tensor_shape(&self) -> TensorShape {
        self.tensor_shape
    }

    /// Number of channels, always at least 1.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    /// Writes channel `index`, converting `sample` to the pixel's data type.
    ///
    /// # Errors
    /// `DipError::IndexOutOfRange` for an index past the last channel.
    pub fn set(&mut self, index: usize, sample: Sample) -> Result<(), DipError> {
        let extent = self.samples.len();
        let slot = self
            .samples
            .get_mut(index)
            .ok_or(DipError::IndexOutOfRange {
                index: index as isize,
                extent,
            })?;
        *slot = sample.convert_to(self.data_type);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

impl From<Sample> for Pixel {
    fn from(sample: Sample) -> Self {
        Pixel::from_sample(sample)
    }
}

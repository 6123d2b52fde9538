use std::sync::Arc;

use log::{debug, trace};

use crate::buffer::Buffer;
use crate::dimension_array::UnsignedArray;
use crate::error::DipError;
use crate::pixel::Pixel;
use crate::sample::Sample;
use crate::tensor_shape::TensorShape;
use crate::types::DataType;

/// An N-dimensional image whose pixels are tensors of samples of one
/// runtime-selected `DataType`.
///
/// Sizes are listed fastest-first: dimension 0 is the one whose neighbouring
/// pixels are adjacent in memory for a freshly allocated image. Tensor
/// elements of a pixel are interleaved (`tensor_stride == 1`).
///
/// Clones are cheap and share the sample buffer. A write through a shared
/// image copies the buffer first, so clones never observe each other's writes.
#[derive(Debug, Clone)]
pub struct Image {
    /// Shared storage; its variant determines the image's data type.
    buffer: Arc<Buffer>,
    sizes: UnsignedArray,
    /// Strides in samples, one per dimension.
    strides: UnsignedArray,
    tensor_elements: usize,
    tensor_stride: usize,
    tensor_shape: TensorShape,
    /// Index of the first sample of the first pixel within the buffer.
    offset: usize,
}

/// Strides of a contiguous, fastest-first image with interleaved tensor elements.
pub fn calculate_contiguous_strides(sizes: &[usize], tensor_elements: usize) -> UnsignedArray {
    let mut strides = UnsignedArray::with_capacity(sizes.len());
    let mut stride = tensor_elements;
    for &size in sizes {
        strides.push(stride);
        // Saturation only happens for images without samples.
        stride = stride.saturating_mul(size);
    }
    strides
}

/// Number of samples needed for an image of these sizes.
fn sample_count(sizes: &UnsignedArray, tensor_elements: usize) -> Result<usize, DipError> {
    sizes
        .checked_product()
        .and_then(|n| n.checked_mul(tensor_elements))
        .ok_or_else(|| DipError::SizeOverflow {
            sizes: sizes.to_vec(),
            tensor_elements,
        })
}

impl Image {
    /// Allocates a zero-filled image.
    ///
    /// # Errors
    /// `DipError::EmptyPixel` when `tensor_elements` is 0 and
    /// `DipError::SizeOverflow` when the sample count does not fit in a `usize`.
    pub fn new(
        sizes: UnsignedArray,
        tensor_elements: usize,
        data_type: DataType,
    ) -> Result<Self, DipError> {
        let len = sample_count(&sizes, tensor_elements)?;
        Image::from_buffer(Buffer::zeros(data_type, len), sizes, tensor_elements)
    }

    /// Wraps an existing buffer laid out contiguously, fastest-first.
    ///
    /// # Errors
    /// `DipError::EmptyPixel` when `tensor_elements` is 0 and
    /// `DipError::BufferSizeMismatch` when the buffer length does not match
    /// the sizes, and `DipError::SizeOverflow` as for `new`.
    pub fn from_buffer(
        buffer: Buffer,
        sizes: UnsignedArray,
        tensor_elements: usize,
    ) -> Result<Self, DipError> {
        if tensor_elements == 0 {
            return Err(DipError::EmptyPixel);
        }
        let expected_len = sample_count(&sizes, tensor_elements)?;
        if buffer.len() != expected_len {
            return Err(DipError::BufferSizeMismatch {
                data_len: buffer.len(),
                sizes: sizes.into_vec(),
                tensor_elements,
            });
        }
        let strides = calculate_contiguous_strides(&sizes, tensor_elements);
        trace!(
            "Image::from_buffer: {} sizes {:?}, {} tensor elements",
            buffer.data_type(),
            sizes,
            tensor_elements
        );
        Ok(Image {
            buffer: Arc::new(buffer),
            sizes,
            strides,
            tensor_elements,
            tensor_stride: 1,
            tensor_shape: TensorShape::ColumnVector,
            offset: 0,
        })
    }

    /// Fills a new image from samples given in storage order, converting each
    /// sample to `data_type`.
    pub fn from_samples(
        sizes: UnsignedArray,
        tensor_elements: usize,
        data_type: DataType,
        samples: &[Sample],
    ) -> Result<Self, DipError> {
        Image::from_buffer(Buffer::from_samples(data_type, samples), sizes, tensor_elements)
    }

    /// A 0-D image holding a single pixel, whose tensor is a column vector
    /// with one element per channel.
    pub fn from_pixel(pixel: &Pixel) -> Self {
        Image {
            buffer: Arc::new(Buffer::from_samples(pixel.data_type(), pixel.samples())),
            sizes: UnsignedArray::new(),
            strides: UnsignedArray::new(),
            tensor_elements: pixel.len(),
            tensor_stride: 1,
            tensor_shape: TensorShape::ColumnVector,
            offset: 0,
        }
    }

    pub fn with_tensor_shape(mut self, tensor_shape: TensorShape) -> Self {
        self.tensor_shape = tensor_shape;
        self
    }

    pub fn data_type(&self) -> DataType {
        self.buffer.data_type()
    }

    pub fn sizes(&self) -> &UnsignedArray {
        &self.sizes
    }

    pub fn strides(&self) -> &UnsignedArray {
        &self.strides
    }

    pub fn dimensionality(&self) -> usize {
        self.sizes.len()
    }

    /// Product of the sizes; a 0-D image has one pixel.
    pub fn number_of_pixels(&self) -> usize {
        self.sizes.product()
    }

    pub fn tensor_elements(&self) -> usize {
        self.tensor_elements
    }

    pub fn tensor_shape(&self) -> TensorShape {
        self.tensor_shape
    }

    /// Bytes occupied by the image's samples.
    pub fn size_in_bytes(&self) -> usize {
        self.number_of_pixels() * self.tensor_elements * self.data_type().size_of()
    }

    /// True if samples are laid out fastest-first with no gaps.
    pub fn is_contiguous(&self) -> bool {
        self.tensor_stride == 1
            && self.strides == calculate_contiguous_strides(&self.sizes, self.tensor_elements)
    }

    /// Reverses the order of the dimensions. Only sizes and strides change;
    /// the samples are not moved.
    pub fn reverse_dimensions(&mut self) {
        self.sizes.reverse();
        self.strides.reverse();
    }

    fn pixel_offset(&self, coords: &[usize]) -> Result<usize, DipError> {
        if coords.len() != self.sizes.len() {
            return Err(DipError::DimensionalityMismatch {
                expected: self.sizes.len(),
                actual: coords.len(),
            });
        }
        let mut offset = self.offset;
        let dims = self.sizes.iter().zip(self.strides.iter());
        for (&coord, (&size, &stride)) in coords.iter().zip(dims) {
            if coord >= size {
                return Err(DipError::IndexOutOfRange {
                    index: coord as isize,
                    extent: size,
                });
            }
            offset += coord * stride;
        }
        Ok(offset)
    }

    fn pixel_at_offset(&self, offset: usize) -> Result<Pixel, DipError> {
        let samples = (0..self.tensor_elements)
            .map(|t| self.buffer.get(offset + t * self.tensor_stride))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Pixel::from_samples(samples)?.with_tensor_shape(self.tensor_shape))
    }

    /// Reads the pixel at `coords` (one coordinate per dimension).
    pub fn at(&self, coords: &[usize]) -> Result<Pixel, DipError> {
        let offset = self.pixel_offset(coords)?;
        self.pixel_at_offset(offset)
    }

    /// Writes `pixel` at `coords`, converting its samples to the image's type.
    ///
    /// # Errors
    /// `DipError::TensorElementsMismatch` if the pixel's channel count differs
    /// from the image's tensor elements, plus the errors of `at`.
    pub fn set_at(&mut self, coords: &[usize], pixel: &Pixel) -> Result<(), DipError> {
        if pixel.len() != self.tensor_elements {
            return Err(DipError::TensorElementsMismatch {
                expected: self.tensor_elements,
                actual: pixel.len(),
            });
        }
        let offset = self.pixel_offset(coords)?;
        if Arc::strong_count(&self.buffer) > 1 {
            debug!("Image::set_at: buffer is shared, copying before write");
        }
        let tensor_stride = self.tensor_stride;
        let buffer = Arc::make_mut(&mut self.buffer);
        for (t, sample) in pixel.iter().enumerate() {
            buffer.set(offset + t * tensor_stride, *sample)?;
        }
        Ok(())
    }

    /// All pixels, with dimension 0 varying fastest.
    pub fn pixels(&self) -> Result<Vec<Pixel>, DipError> {
        let mut out = Vec::with_capacity(self.number_of_pixels());
        let mut coords = vec![0usize; self.sizes.len()];
        for _ in 0..self.number_of_pixels() {
            out.push(self.at(&coords)?);
            for (coord, &size) in coords.iter_mut().zip(self.sizes.iter()) {
                *coord += 1;
                if *coord < size {
                    break;
                }
                *coord = 0;
            }
        }
        Ok(out)
    }
}

impl PartialEq for Image {
    /// Images are equal when they have the same data type, sizes, tensor
    /// layout and pixel values, regardless of strides or buffer sharing.
    fn eq(&self, other: &Self) -> bool {
        if self.data_type() != other.data_type()
            || self.sizes != other.sizes
            || self.tensor_elements != other.tensor_elements
            || self.tensor_shape != other.tensor_shape
        {
            return false;
        }
        match (self.pixels(), other.pixels()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;

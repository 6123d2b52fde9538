use dipbridge_core::{Image, Pixel, UnsignedArray};
use log::{debug, trace};

use crate::caster::FromHost;
use crate::dimensions::reverse_dimension_order;
use crate::error::ConversionError;
use crate::host::{HostBuffer, HostValue};
use crate::options::ConversionOptions;

const IMAGE_TYPE_NAME: &str = "Image";

fn image_from_host_buffer(
    buffer: &HostBuffer,
    options: &ConversionOptions,
) -> Result<Image, ConversionError> {
    // A C-ordered buffer is fastest-first once its shape is reversed.
    let sizes = UnsignedArray::from(reverse_dimension_order(&buffer.shape));
    let mut image = Image::from_buffer(buffer.data.clone(), sizes, 1)?;
    if !options.reverse_dimensions {
        // Keep the host's order; only the strides change.
        image.reverse_dimensions();
    }
    trace!(
        "load_image: buffer of shape {:?} -> {} image of sizes {:?}",
        buffer.shape,
        image.data_type(),
        image.sizes()
    );
    Ok(image)
}

/// Converts a wrapped image (shared, not copied) or a host buffer to an image.
///
/// # Errors
/// `ConversionError::TypeMismatch` for any other host value and
/// `ConversionError::Library` when a buffer's data does not match its shape.
pub fn load_image(src: &HostValue, options: &ConversionOptions) -> Result<Image, ConversionError> {
    match src {
        HostValue::Image(image) => Ok(image.clone()),
        HostValue::Buffer(buffer) => image_from_host_buffer(buffer, options),
        other => Err(ConversionError::mismatch(IMAGE_TYPE_NAME, other.kind())),
    }
}

/// Wraps an image for the host. The host's value shares the pixel data.
pub fn cast_image(image: &Image) -> HostValue {
    HostValue::Image(image.clone())
}

/// Converts an argument that may be either an image or a constant.
///
/// An image converts as by `load_image`. Otherwise the value is loaded as a
/// pixel and becomes a 0-D image holding that one pixel.
///
/// # Errors
/// `ConversionError::AmbiguousFallback` when the value is neither; the two
/// underlying errors are only logged.
pub fn image_or_pixel(
    src: &HostValue,
    options: &ConversionOptions,
) -> Result<Image, ConversionError> {
    let image_error = match load_image(src, options) {
        Ok(image) => return Ok(image),
        Err(e) => e,
    };
    debug!("image_or_pixel: not an image ({}), trying pixel", image_error);
    match Pixel::load(src) {
        Ok(pixel) => Ok(Image::from_pixel(&pixel)),
        Err(pixel_error) => {
            debug!("image_or_pixel: not a pixel either ({})", pixel_error);
            Err(ConversionError::AmbiguousFallback { kind: src.kind() })
        }
    }
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;

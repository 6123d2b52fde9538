//! Dimension-order reversal between the library's fastest-first order and
//! the host's slowest-first order.

use dipbridge_core::{FileInformation, Image};
use log::trace;

use crate::options::ConversionOptions;

/// A copy of `values` in reverse order. Applying it twice gives back the input.
pub fn reverse_dimension_order<T: Clone>(values: &[T]) -> Vec<T> {
    values.iter().rev().cloned().collect()
}

/// Reverses the image's dimensions if the options ask for it. The same call
/// converts in both directions.
pub fn optionally_reverse_dimensions(image: &mut Image, options: &ConversionOptions) {
    if options.reverse_dimensions {
        trace!("Reversing dimensions of image with sizes {:?}", image.sizes());
        image.reverse_dimensions();
    }
}

/// Reverses the per-dimension fields of file metadata if the options ask for it.
pub fn optionally_reverse_file_information(
    info: &mut FileInformation,
    options: &ConversionOptions,
) {
    if options.reverse_dimensions {
        trace!("Reversing dimensions of file information for {:?}", info.name);
        info.reverse_dimensions();
    }
}

use dipbridge_core::DimensionArray;
use log::trace;

use crate::caster::{FromHost, IntoHost};
use crate::error::ConversionError;
use crate::host::HostValue;

impl<T: FromHost> FromHost for DimensionArray<T> {
    const TYPE_NAME: &'static str = "DimensionArray";

    /// Converts a sequence element by element. Any other value, strings
    /// included, becomes a one-element array, so a single index can be passed
    /// where a list of indices is expected. Empty sequences are accepted.
    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        match src.as_sequence() {
            Some(items) => {
                trace!("DimensionArray::load: sequence of {} elements", items.len());
                items.iter().map(T::load).collect()
            }
            None => {
                trace!("DimensionArray::load: promoting {} to a single element", src.kind());
                Ok(DimensionArray::from(vec![T::load(src)?]))
            }
        }
    }
}

impl<T: IntoHost> IntoHost for DimensionArray<T> {
    fn cast(&self) -> HostValue {
        HostValue::List(self.iter().map(IntoHost::cast).collect())
    }
}

/// Like `DimensionArray::load`, for arguments that need at least one element.
///
/// # Errors
/// `ConversionError::EmptyInput` for an empty sequence, plus the errors of
/// `DimensionArray::load`.
pub fn load_non_empty<T: FromHost>(src: &HostValue) -> Result<DimensionArray<T>, ConversionError> {
    let array = DimensionArray::<T>::load(src)?;
    if array.is_empty() {
        return Err(ConversionError::EmptyInput {
            target: DimensionArray::<T>::TYPE_NAME,
        });
    }
    Ok(array)
}

#[cfg(test)]
#[path = "dimension_array_test.rs"]
mod tests;

use crate::dimension_array::{FloatArray, StringArray, UnsignedArray};
use crate::types::DataType;

/// Metadata reported by the file readers, which are outside this crate.
///
/// `sizes`, `pixel_size` and `origin` are per-dimension and share the image's
/// fastest-first order.
#[derive(Debug, Clone, PartialEq)]
pub struct FileInformation {
    pub name: String,
    pub file_type: String,
    pub data_type: DataType,
    pub significant_bits: usize,
    pub sizes: UnsignedArray,
    pub tensor_elements: usize,
    pub color_space: String,
    pub pixel_size: FloatArray,
    pub origin: FloatArray,
    pub number_of_images: usize,
    pub history: StringArray,
}

impl Default for FileInformation {
    fn default() -> Self {
        FileInformation {
            name: String::new(),
            file_type: String::new(),
            data_type: DataType::UInt8,
            significant_bits: 0,
            sizes: UnsignedArray::new(),
            tensor_elements: 1,
            color_space: String::new(),
            pixel_size: FloatArray::new(),
            origin: FloatArray::new(),
            number_of_images: 1,
            history: StringArray::new(),
        }
    }
}

impl FileInformation {
    /// Reverses every per-dimension field.
    pub fn reverse_dimensions(&mut self) {
        self.sizes.reverse();
        self.pixel_size.reverse();
        self.origin.reverse();
    }
}

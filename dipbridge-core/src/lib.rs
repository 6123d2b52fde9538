//! Runtime-typed image types: the statically typed side of the dipbridge
//! boundary.
//!
//! Every value here carries its element type as a runtime [`DataType`] tag,
//! so code receiving values from a dynamically typed host can dispatch on it.

pub mod buffer;
pub mod dimension_array;
pub mod error;
pub mod file_info;
pub mod image;
pub mod pixel;
pub mod random;
pub mod range;
pub mod sample;
pub mod tensor_shape;
pub mod types;

// Re-export the main types so they are reachable as `dipbridge_core::Image` etc.
pub use buffer::Buffer;
pub use dimension_array::{
    BooleanArray, DimensionArray, FloatArray, IntegerArray, StringArray, UnsignedArray,
};
pub use error::DipError;
pub use file_info::FileInformation;
pub use image::Image;
pub use pixel::Pixel;
pub use random::{seed_random_number_generator, with_random_number_generator, Random};
pub use range::Range;
pub use sample::Sample;
pub use tensor_shape::TensorShape;
pub use types::DataType;

pub use num_complex;

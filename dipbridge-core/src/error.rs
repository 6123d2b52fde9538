use crate::types::DataType;
use thiserror::Error;

/// Error type for the image library surface.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum DipError {
    #[error("Unrecognized data type name: {0:?}")]
    UnrecognizedDataType(String),

    #[error("Unrecognized tensor shape name: {0:?}")]
    UnrecognizedTensorShape(String),

    #[error("A pixel must have at least one channel")]
    EmptyPixel,

    #[error("Data type mismatch: expected {expected}, got {actual} during operation {operation}")]
    DataTypeMismatch {
        expected: DataType,
        actual: DataType,
        operation: String,
    },

    #[error("Index {index} out of range for extent {extent}")]
    IndexOutOfRange { index: isize, extent: usize },

    #[error("Dimensionality mismatch: expected {expected}, got {actual}")]
    DimensionalityMismatch { expected: usize, actual: usize },

    #[error("Number of tensor elements mismatch: expected {expected}, got {actual}")]
    TensorElementsMismatch { expected: usize, actual: usize },

    #[error(
        "Buffer size mismatch: data length {data_len} does not match sizes {sizes:?} \
         with {tensor_elements} tensor elements"
    )]
    BufferSizeMismatch {
        data_len: usize,
        sizes: Vec<usize>,
        tensor_elements: usize,
    },

    #[error("Image of sizes {sizes:?} with {tensor_elements} tensor elements has too many samples")]
    SizeOverflow {
        sizes: Vec<usize>,
        tensor_elements: usize,
    },

    #[error("Invalid range: {0}")]
    InvalidRange(String),
}

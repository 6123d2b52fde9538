//! Converters between dynamically typed host values and the runtime-typed
//! values of `dipbridge-core`.
//!
//! Each native type has a `load` (host → native) through [`FromHost`] and a
//! `cast` (native → host) through [`IntoHost`]. Converters hold no state and
//! either produce a complete value or a [`ConversionError`].

pub mod caster;
pub mod dimension_array;
pub mod dimensions;
pub mod error;
pub mod host;
pub mod image;
pub mod names;
pub mod options;
pub mod pixel;
pub mod range;
pub mod sample;

// Re-export main components
pub use caster::{FromHost, IntoHost};
pub use dimension_array::load_non_empty;
pub use dimensions::{
    optionally_reverse_dimensions, optionally_reverse_file_information, reverse_dimension_order,
};
pub use error::ConversionError;
pub use host::{HostBuffer, HostKind, HostSlice, HostValue};
pub use image::{cast_image, image_or_pixel, load_image};
pub use options::ConversionOptions;

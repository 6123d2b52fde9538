//! The dynamically typed host value model.

use std::fmt;

use dipbridge_core::{Buffer, Image};
use num_complex::Complex64;

/// A slice expression as written by the host, `start:stop:step`.
///
/// Each component is an arbitrary host value; omitted components are
/// `HostValue::None`.
#[derive(Debug, Clone, PartialEq)]
pub struct HostSlice {
    pub start: Box<HostValue>,
    pub stop: Box<HostValue>,
    pub step: Box<HostValue>,
}

impl HostSlice {
    pub fn new(start: HostValue, stop: HostValue, step: HostValue) -> Self {
        HostSlice {
            start: Box::new(start),
            stop: Box::new(stop),
            step: Box::new(step),
        }
    }
}

/// A dense array exported by the host: a C-ordered flat buffer plus its shape,
/// listed slowest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct HostBuffer {
    pub shape: Vec<usize>,
    pub data: Buffer,
}

/// A value arriving from, or returned to, the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex(Complex64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<HostValue>),
    Tuple(Vec<HostValue>),
    Slice(HostSlice),
    Dict(Vec<(HostValue, HostValue)>),
    /// A library image wrapped for the host; clones share pixel data.
    Image(Image),
    Buffer(HostBuffer),
}

/// The host-visible kind of a value, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    None,
    Bool,
    Int,
    Float,
    Complex,
    Str,
    Bytes,
    List,
    Tuple,
    Slice,
    Dict,
    Image,
    Buffer,
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HostKind::None => "NoneType",
            HostKind::Bool => "bool",
            HostKind::Int => "int",
            HostKind::Float => "float",
            HostKind::Complex => "complex",
            HostKind::Str => "str",
            HostKind::Bytes => "bytes",
            HostKind::List => "list",
            HostKind::Tuple => "tuple",
            HostKind::Slice => "slice",
            HostKind::Dict => "dict",
            HostKind::Image => "Image",
            HostKind::Buffer => "buffer",
        })
    }
}

impl HostValue {
    pub fn kind(&self) -> HostKind {
        match self {
            HostValue::None => HostKind::None,
            HostValue::Bool(_) => HostKind::Bool,
            HostValue::Int(_) => HostKind::Int,
            HostValue::Float(_) => HostKind::Float,
            HostValue::Complex(_) => HostKind::Complex,
            HostValue::Str(_) => HostKind::Str,
            HostValue::Bytes(_) => HostKind::Bytes,
            HostValue::List(_) => HostKind::List,
            HostValue::Tuple(_) => HostKind::Tuple,
            HostValue::Slice(_) => HostKind::Slice,
            HostValue::Dict(_) => HostKind::Dict,
            HostValue::Image(_) => HostKind::Image,
            HostValue::Buffer(_) => HostKind::Buffer,
        }
    }

    /// The elements of an ordered sequence. Strings and bytes are atomic and
    /// never count as sequences.
    pub fn as_sequence(&self) -> Option<&[HostValue]> {
        match self {
            HostValue::List(items) | HostValue::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_sequence(&self) -> bool {
        self.as_sequence().is_some()
    }

    /// Text of a `Str`, or of `Bytes` holding valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HostValue::Str(s) => Some(s),
            HostValue::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    pub fn slice(start: HostValue, stop: HostValue, step: HostValue) -> Self {
        HostValue::Slice(HostSlice::new(start, stop, step))
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        HostValue::Bool(value)
    }
}

impl From<i64> for HostValue {
    fn from(value: i64) -> Self {
        HostValue::Int(value)
    }
}

impl From<f64> for HostValue {
    fn from(value: f64) -> Self {
        HostValue::Float(value)
    }
}

impl From<Complex64> for HostValue {
    fn from(value: Complex64) -> Self {
        HostValue::Complex(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        HostValue::Str(value.to_string())
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        HostValue::Str(value)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(values: Vec<T>) -> Self {
        HostValue::List(values.into_iter().map(Into::into).collect())
    }
}

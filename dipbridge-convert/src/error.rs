use dipbridge_core::DipError;
use thiserror::Error;

use crate::host::HostKind;

/// Why a host value could not be converted. Every variant names the native
/// type the conversion was aiming for.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ConversionError {
    #[error("Cannot convert {kind} to {target}")]
    TypeMismatch { target: &'static str, kind: HostKind },

    #[error("Cannot convert an empty sequence to {target}")]
    EmptyInput { target: &'static str },

    #[error("Unrecognized {target} name: {name:?}")]
    UnrecognizedName { target: &'static str, name: String },

    #[error("Cannot convert {kind} to Image: it is neither an image nor a pixel")]
    AmbiguousFallback { kind: HostKind },

    #[error("Value {value} is out of range for {target}")]
    OutOfRange { target: &'static str, value: i64 },

    #[error(transparent)]
    Library(#[from] DipError),
}

impl ConversionError {
    pub(crate) fn mismatch(target: &'static str, kind: HostKind) -> Self {
        ConversionError::TypeMismatch { target, kind }
    }
}

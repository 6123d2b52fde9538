//! Converters for the enumerations that travel as strings: `DataType` and
//! `TensorShape`.

use dipbridge_core::{DataType, TensorShape};
use log::trace;

use crate::caster::{FromHost, IntoHost};
use crate::error::ConversionError;
use crate::host::HostValue;

fn load_name<'a>(src: &'a HostValue, target: &'static str) -> Result<&'a str, ConversionError> {
    src.as_text()
        .ok_or_else(|| ConversionError::mismatch(target, src.kind()))
}

impl FromHost for DataType {
    const TYPE_NAME: &'static str = "DataType";

    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        let name = load_name(src, Self::TYPE_NAME)?;
        let data_type = DataType::from_name(name).map_err(|_| ConversionError::UnrecognizedName {
            target: Self::TYPE_NAME,
            name: name.to_string(),
        })?;
        trace!("DataType::load: {:?} -> {}", name, data_type);
        Ok(data_type)
    }
}

impl IntoHost for DataType {
    fn cast(&self) -> HostValue {
        HostValue::Str(self.name().to_string())
    }
}

impl FromHost for TensorShape {
    const TYPE_NAME: &'static str = "TensorShape";

    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        let name = load_name(src, Self::TYPE_NAME)?;
        TensorShape::from_name(name).map_err(|_| ConversionError::UnrecognizedName {
            target: Self::TYPE_NAME,
            name: name.to_string(),
        })
    }
}

impl IntoHost for TensorShape {
    fn cast(&self) -> HostValue {
        HostValue::Str(self.name().to_string())
    }
}

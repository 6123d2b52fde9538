use dipbridge_core::Range;
use log::trace;

use crate::caster::{FromHost, IntoHost};
use crate::error::ConversionError;
use crate::host::{HostSlice, HostValue};

/// `None` or an integer; anything else rejects the whole slice.
fn slice_component(value: &HostValue) -> Result<Option<isize>, ConversionError> {
    match value {
        HostValue::None => Ok(None),
        HostValue::Int(v) => isize::try_from(*v)
            .map(Some)
            .map_err(|_| ConversionError::OutOfRange {
                target: Range::TYPE_NAME,
                value: *v,
            }),
        other => Err(ConversionError::mismatch(Range::TYPE_NAME, other.kind())),
    }
}

fn load_slice(slice: &HostSlice) -> Result<Range, ConversionError> {
    let step = slice_component(&slice.step)?.unwrap_or(1);
    if step == 0 {
        return Err(ConversionError::OutOfRange {
            target: Range::TYPE_NAME,
            value: 0,
        });
    }
    let reversed = step < 0;
    // An omitted end defaults to the far end in the direction of travel.
    let start = slice_component(&slice.start)?.unwrap_or(if reversed { -1 } else { 0 });
    let stop = slice_component(&slice.stop)?.unwrap_or(if reversed { 0 } else { -1 });
    let range = Range {
        start,
        stop,
        step: step.unsigned_abs(),
    };
    trace!("Range::load: slice -> {}", range);
    Ok(range)
}

impl FromHost for Range {
    const TYPE_NAME: &'static str = "Range";

    /// Accepts an integer (a single index) or a slice. The stored step is
    /// always positive: a negative host step only changes which ends the
    /// omitted start and stop default to.
    fn load(src: &HostValue) -> Result<Self, ConversionError> {
        match src {
            HostValue::Slice(slice) => load_slice(slice),
            HostValue::Int(_) => match slice_component(src)? {
                Some(index) => Ok(Range::single(index)),
                None => Err(ConversionError::mismatch(Self::TYPE_NAME, src.kind())),
            },
            other => Err(ConversionError::mismatch(Self::TYPE_NAME, other.kind())),
        }
    }
}

impl IntoHost for Range {
    /// The original sign of the step is not recoverable; the slice always
    /// carries the positive stored step.
    fn cast(&self) -> HostValue {
        HostValue::slice(
            HostValue::Int(self.start as i64),
            HostValue::Int(self.stop as i64),
            HostValue::Int(self.step as i64),
        )
    }
}

#[cfg(test)]
#[path = "range_test.rs"]
mod tests;

use super::*;
use crate::host::HostKind;

fn slice(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> HostValue {
    let component = |v: Option<i64>| v.map_or(HostValue::None, HostValue::Int);
    HostValue::slice(component(start), component(stop), component(step))
}

#[test]
fn test_integer_is_single_index() -> Result<(), ConversionError> {
    for n in [-5i64, -1, 0, 3, 1000] {
        let r = Range::load(&HostValue::Int(n))?;
        assert_eq!(r, Range { start: n as isize, stop: n as isize, step: 1 });
    }
    Ok(())
}

#[test]
fn test_full_slice_defaults() -> Result<(), ConversionError> {
    assert_eq!(Range::load(&slice(None, None, None))?, Range::new());
    assert_eq!(
        Range::load(&slice(None, None, Some(1)))?,
        Range { start: 0, stop: -1, step: 1 }
    );
    Ok(())
}

#[test]
fn test_negative_step_swaps_defaults() -> Result<(), ConversionError> {
    assert_eq!(
        Range::load(&slice(None, None, Some(-1)))?,
        Range { start: -1, stop: 0, step: 1 }
    );
    assert_eq!(
        Range::load(&slice(None, None, Some(-3)))?,
        Range { start: -1, stop: 0, step: 3 }
    );
    Ok(())
}

#[test]
fn test_positive_step_keeps_defaults() -> Result<(), ConversionError> {
    assert_eq!(
        Range::load(&slice(None, None, Some(3)))?,
        Range { start: 0, stop: -1, step: 3 }
    );
    Ok(())
}

#[test]
fn test_one_end_omitted() -> Result<(), ConversionError> {
    // [5::-2] runs from 5 down to the first index.
    assert_eq!(
        Range::load(&slice(Some(5), None, Some(-2)))?,
        Range { start: 5, stop: 0, step: 2 }
    );
    // [:4:-1] runs from the last index down to 4.
    assert_eq!(
        Range::load(&slice(None, Some(4), Some(-1)))?,
        Range { start: -1, stop: 4, step: 1 }
    );
    // [2:] runs to the last index.
    assert_eq!(
        Range::load(&slice(Some(2), None, None))?,
        Range { start: 2, stop: -1, step: 1 }
    );
    Ok(())
}

#[test]
fn test_explicit_bounds_kept_step_normalised() -> Result<(), ConversionError> {
    assert_eq!(
        Range::load(&slice(Some(7), Some(1), Some(-2)))?,
        Range { start: 7, stop: 1, step: 2 }
    );
    Ok(())
}

#[test]
fn test_rejections() {
    assert_eq!(
        Range::load(&slice(None, None, Some(0))),
        Err(ConversionError::OutOfRange { target: "Range", value: 0 })
    );
    assert_eq!(
        Range::load(&HostValue::slice(HostValue::Float(1.0), HostValue::None, HostValue::None)),
        Err(ConversionError::TypeMismatch { target: "Range", kind: HostKind::Float })
    );
    assert_eq!(
        Range::load(&HostValue::Bool(true)),
        Err(ConversionError::TypeMismatch { target: "Range", kind: HostKind::Bool })
    );
    assert!(Range::load(&HostValue::from(vec![1i64, 2])).is_err());
}

#[test]
fn test_cast_positive_step() -> Result<(), ConversionError> {
    let r = Range::load(&slice(None, None, Some(-2)))?;
    assert_eq!(r.cast(), slice(Some(-1), Some(0), Some(2)));
    // Both ends are explicit in the cast slice, so it loads back unchanged.
    assert_eq!(Range::load(&r.cast())?, r);
    Ok(())
}

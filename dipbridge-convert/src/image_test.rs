use super::*;
use crate::host::HostKind;
use dipbridge_core::{Buffer, DataType, DipError, Sample, TensorShape};
use num_complex::Complex64;

fn host_buffer(shape: Vec<usize>, data: Buffer) -> HostValue {
    HostValue::Buffer(HostBuffer { shape, data })
}

#[test]
fn test_wrapped_image_passes_through() -> Result<(), ConversionError> {
    let image = Image::new(vec![4, 5].into(), 3, DataType::SFloat)?;
    let loaded = load_image(&cast_image(&image), &ConversionOptions::default())?;
    assert_eq!(loaded, image);
    assert_eq!(loaded.sizes().as_slice(), &[4, 5]);
    Ok(())
}

#[test]
fn test_buffer_reversed_to_fastest_first() -> Result<(), ConversionError> {
    // Host array with 2 rows and 3 columns, row-major.
    let src = host_buffer(vec![2, 3], Buffer::UInt8(vec![0, 1, 2, 10, 11, 12]));
    let image = load_image(&src, &ConversionOptions::default())?;
    assert_eq!(image.sizes().as_slice(), &[3, 2]);
    assert_eq!(image.data_type(), DataType::UInt8);
    assert!(image.is_contiguous());
    // x = column, y = row
    assert_eq!(image.at(&[2, 1])?.get(0), Some(Sample::UInt8(12)));
    assert_eq!(image.at(&[1, 0])?.get(0), Some(Sample::UInt8(1)));
    Ok(())
}

#[test]
fn test_buffer_in_host_order() -> Result<(), ConversionError> {
    let src = host_buffer(vec![2, 3], Buffer::UInt8(vec![0, 1, 2, 10, 11, 12]));
    let options = ConversionOptions::new().with_reverse_dimensions(false);
    let image = load_image(&src, &options)?;
    assert_eq!(image.sizes().as_slice(), &[2, 3]);
    assert_eq!(image.strides().as_slice(), &[3, 1]);
    // Same element, host-ordered coordinates (row, column).
    assert_eq!(image.at(&[1, 2])?.get(0), Some(Sample::UInt8(12)));
    Ok(())
}

#[test]
fn test_buffer_shape_mismatch() {
    let src = host_buffer(vec![2, 2], Buffer::DFloat(vec![1.0, 2.0, 3.0]));
    assert_eq!(
        load_image(&src, &ConversionOptions::default()),
        Err(ConversionError::Library(DipError::BufferSizeMismatch {
            data_len: 3,
            sizes: vec![2, 2],
            tensor_elements: 1,
        }))
    );
}

#[test]
fn test_buffer_shape_overflow_is_an_error() {
    let src = host_buffer(vec![usize::MAX, 2], Buffer::UInt8(vec![0]));
    assert_eq!(
        load_image(&src, &ConversionOptions::default()),
        Err(ConversionError::Library(DipError::SizeOverflow {
            sizes: vec![2, usize::MAX],
            tensor_elements: 1,
        }))
    );

    // Would wrap to 0 samples and match the empty buffer.
    let src = host_buffer(vec![1 << 63, 2], Buffer::UInt8(vec![]));
    let options = ConversionOptions::default();
    assert!(matches!(
        load_image(&src, &options),
        Err(ConversionError::Library(DipError::SizeOverflow { .. }))
    ));
    assert_eq!(
        image_or_pixel(&src, &options),
        Err(ConversionError::AmbiguousFallback { kind: HostKind::Buffer })
    );
}

#[test]
fn test_load_image_rejects_scalars() {
    assert_eq!(
        load_image(&HostValue::Int(5), &ConversionOptions::default()),
        Err(ConversionError::TypeMismatch { target: "Image", kind: HostKind::Int })
    );
}

#[test]
fn test_adapter_prefers_image() -> Result<(), ConversionError> {
    let image = Image::new(vec![2].into(), 1, DataType::Bin)?;
    let src = HostValue::Image(image.clone());
    let converted = image_or_pixel(&src, &ConversionOptions::default())?;
    assert_eq!(converted, image);
    Ok(())
}

#[test]
fn test_adapter_scalar_becomes_single_pixel_image() -> Result<(), ConversionError> {
    let image = image_or_pixel(&HostValue::Int(5), &ConversionOptions::default())?;
    assert_eq!(image.dimensionality(), 0);
    assert_eq!(image.number_of_pixels(), 1);
    assert_eq!(image.tensor_elements(), 1);
    assert_eq!(image.data_type(), DataType::SInt64);
    assert_eq!(image.at(&[])?.get(0), Some(Sample::SInt64(5)));
    Ok(())
}

#[test]
fn test_adapter_sequence_becomes_tensor_pixel() -> Result<(), ConversionError> {
    let value = HostValue::List(vec![
        HostValue::Complex(Complex64::new(1.0, 0.0)),
        HostValue::Float(2.0),
        HostValue::Int(3),
    ]);
    let image = image_or_pixel(&value, &ConversionOptions::default())?;
    assert_eq!(image.tensor_elements(), 3);
    assert_eq!(image.tensor_shape(), TensorShape::ColumnVector);
    assert_eq!(image.data_type(), DataType::DComplex);
    Ok(())
}

#[test]
fn test_adapter_fails_with_combined_error() {
    let dict = HostValue::Dict(vec![(HostValue::from("a"), HostValue::Int(1))]);
    assert_eq!(
        image_or_pixel(&dict, &ConversionOptions::default()),
        Err(ConversionError::AmbiguousFallback { kind: HostKind::Dict })
    );
    assert_eq!(
        image_or_pixel(&HostValue::List(vec![]), &ConversionOptions::default()),
        Err(ConversionError::AmbiguousFallback { kind: HostKind::List })
    );
}

use super::*;

#[test]
fn test_new_image_layout() -> Result<(), DipError> {
    let img = Image::new(vec![4, 3].into(), 2, DataType::SFloat)?;
    assert_eq!(img.dimensionality(), 2);
    assert_eq!(img.number_of_pixels(), 12);
    assert_eq!(img.strides().as_slice(), &[2, 8]);
    assert_eq!(img.size_in_bytes(), 12 * 2 * 4);
    assert!(img.is_contiguous());
    assert_eq!(img.at(&[3, 2])?.samples(), &[Sample::SFloat(0.0), Sample::SFloat(0.0)]);
    Ok(())
}

#[test]
fn test_zero_tensor_elements_rejected() {
    assert_eq!(
        Image::new(vec![2].into(), 0, DataType::UInt8).err(),
        Some(DipError::EmptyPixel)
    );
}

#[test]
fn test_from_buffer_size_mismatch() {
    let result = Image::from_buffer(Buffer::zeros(DataType::UInt8, 5), vec![2, 2].into(), 1);
    assert_eq!(
        result.err(),
        Some(DipError::BufferSizeMismatch {
            data_len: 5,
            sizes: vec![2, 2],
            tensor_elements: 1,
        })
    );
}

#[test]
fn test_sample_count_overflow() {
    assert_eq!(
        Image::new(vec![usize::MAX, 2].into(), 1, DataType::UInt8).err(),
        Some(DipError::SizeOverflow {
            sizes: vec![usize::MAX, 2],
            tensor_elements: 1,
        })
    );
    let result = Image::from_buffer(Buffer::zeros(DataType::UInt8, 0), vec![1 << 62, 2].into(), 2);
    assert_eq!(
        result.err(),
        Some(DipError::SizeOverflow {
            sizes: vec![1 << 62, 2],
            tensor_elements: 2,
        })
    );
}

#[test]
fn test_empty_image_with_huge_sizes() -> Result<(), DipError> {
    let sizes = vec![2, usize::MAX, 0].into();
    let img = Image::from_buffer(Buffer::zeros(DataType::UInt8, 0), sizes, 1)?;
    assert_eq!(img.number_of_pixels(), 0);
    assert!(img.pixels()?.is_empty());
    Ok(())
}

#[test]
fn test_from_pixel_is_zero_dimensional() -> Result<(), DipError> {
    let pixel = Pixel::from_samples(vec![Sample::from(1.0f64), Sample::from(2.0f64)])?;
    let img = Image::from_pixel(&pixel);
    assert_eq!(img.dimensionality(), 0);
    assert_eq!(img.number_of_pixels(), 1);
    assert_eq!(img.tensor_elements(), 2);
    assert_eq!(img.tensor_shape(), TensorShape::ColumnVector);
    assert_eq!(img.at(&[])?, pixel);
    Ok(())
}

#[test]
fn test_set_at_and_read_back() -> Result<(), DipError> {
    let mut img = Image::new(vec![3, 2].into(), 1, DataType::UInt16)?;
    img.set_at(&[2, 1], &Pixel::from_sample(Sample::from(7i64)))?;
    assert_eq!(img.at(&[2, 1])?.get(0), Some(Sample::UInt16(7)));
    assert_eq!(img.at(&[1, 1])?.get(0), Some(Sample::UInt16(0)));
    Ok(())
}

#[test]
fn test_set_at_errors() -> Result<(), DipError> {
    let mut img = Image::new(vec![3].into(), 2, DataType::SInt32)?;
    let one_channel = Pixel::from_sample(Sample::from(1i32));
    assert_eq!(
        img.set_at(&[0], &one_channel),
        Err(DipError::TensorElementsMismatch { expected: 2, actual: 1 })
    );
    let two_channels = Pixel::new(DataType::SInt32, 2)?;
    assert!(matches!(
        img.set_at(&[3], &two_channels),
        Err(DipError::IndexOutOfRange { index: 3, extent: 3 })
    ));
    assert!(matches!(
        img.at(&[0, 0]),
        Err(DipError::DimensionalityMismatch { expected: 1, actual: 2 })
    ));
    Ok(())
}

#[test]
fn test_clone_is_copy_on_write() -> Result<(), DipError> {
    let original = Image::new(vec![2].into(), 1, DataType::DFloat)?;
    let mut copy = original.clone();
    copy.set_at(&[0], &Pixel::from_sample(Sample::from(5.0f64)))?;
    assert_eq!(original.at(&[0])?.get(0), Some(Sample::DFloat(0.0)));
    assert_eq!(copy.at(&[0])?.get(0), Some(Sample::DFloat(5.0)));
    assert_ne!(original, copy);
    Ok(())
}

#[test]
fn test_reverse_dimensions_is_a_view() -> Result<(), DipError> {
    let samples: Vec<Sample> = (0..6).map(|v| Sample::from(v as i64)).collect();
    let img = Image::from_samples(vec![3, 2].into(), 1, DataType::SInt64, &samples)?;
    let mut reversed = img.clone();
    reversed.reverse_dimensions();
    assert_eq!(reversed.sizes().as_slice(), &[2, 3]);
    assert!(!reversed.is_contiguous());
    // (x, y) in the original is (y, x) in the reversed view.
    assert_eq!(reversed.at(&[1, 2])?, img.at(&[2, 1])?);
    assert_eq!(img.at(&[2, 1])?.get(0), Some(Sample::SInt64(5)));

    reversed.reverse_dimensions();
    assert_eq!(reversed, img);
    assert!(reversed.is_contiguous());
    Ok(())
}

#[test]
fn test_pixels_order_is_fastest_first() -> Result<(), DipError> {
    let samples: Vec<Sample> = (0..4).map(|v| Sample::from(v as u8)).collect();
    let img = Image::from_samples(vec![2, 2].into(), 1, DataType::UInt8, &samples)?;
    let values: Vec<Option<Sample>> = img.pixels()?.iter().map(|p| p.get(0)).collect();
    assert_eq!(
        values,
        vec![
            Some(Sample::UInt8(0)),
            Some(Sample::UInt8(1)),
            Some(Sample::UInt8(2)),
            Some(Sample::UInt8(3)),
        ]
    );
    Ok(())
}

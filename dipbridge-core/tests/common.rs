use dipbridge_core::{DataType, Image, Sample};

// Initialize the logger once per test binary; later calls are no-ops.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Builds a single-channel image whose samples count up from 0 in storage order.
#[allow(dead_code)]
pub(crate) fn create_ramp_image(sizes: Vec<usize>, data_type: DataType) -> Image {
    let count: usize = sizes.iter().product();
    let samples: Vec<Sample> = (0..count).map(|i| Sample::from(i as f64)).collect();
    Image::from_samples(sizes.into(), 1, data_type, &samples).expect("Test image creation failed")
}

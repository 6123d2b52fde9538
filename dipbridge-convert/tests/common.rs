use dipbridge_convert::HostValue;

// Initialize the logger once per test binary; later calls are no-ops.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn host_list<T: Into<HostValue>>(values: Vec<T>) -> HostValue {
    HostValue::List(values.into_iter().map(Into::into).collect())
}

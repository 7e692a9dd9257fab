//! Once-per-binary logging initialization for integration tests.

#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}

use tracing_subscriber::EnvFilter;

mod loader_tests;

/// Install a test-writer subscriber once so load logs show under --nocapture
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

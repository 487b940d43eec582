use qstate_core::{MemoryNavigator, QueryStateStore};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Store over an in-memory history starting at `href`, plus a handle to that history
#[allow(dead_code)]
pub fn store_at(href: &str) -> (QueryStateStore<MemoryNavigator>, MemoryNavigator) {
    tracing_init();
    let nav = MemoryNavigator::from_href(href);
    (QueryStateStore::with_defaults(nav.clone()), nav)
}

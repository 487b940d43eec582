//! Re-render components when the address changes

use dioxus::prelude::*;
use qstate_core::{Address, NavigateOptions, Navigator, QueryMap};

/// Wraps a navigator with a revision signal.
///
/// Reading the current address subscribes the calling component to the
/// revision, and every navigation request bumps it, so components that read
/// query state re-render after a mutation.
#[derive(Clone)]
pub struct ReactiveNavigator<N> {
    inner: N,
    revision: Signal<u64>,
}

impl<N> ReactiveNavigator<N> {
    pub fn new(inner: N, revision: Signal<u64>) -> Self {
        Self { inner, revision }
    }

    /// Mark the address as changed from outside (e.g. back/forward buttons).
    pub fn notify(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }
}

impl<N: Navigator> Navigator for ReactiveNavigator<N> {
    fn current_address(&self) -> Address {
        let _ = *self.revision.read();
        self.inner.current_address()
    }

    fn navigate_push(&self, path: &str, query: QueryMap, options: NavigateOptions) {
        self.inner.navigate_push(path, query, options);
        self.notify();
    }

    fn navigate_replace(&self, path: &str, query: QueryMap, options: NavigateOptions) {
        self.inner.navigate_replace(path, query, options);
        self.notify();
    }
}

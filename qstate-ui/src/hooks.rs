//! Hooks sharing one query-state store per component tree

use std::rc::Rc;

use dioxus::prelude::*;
use qstate_core::{QueryStateStore, StoreConfig};
use tracing::debug;

use crate::browser::BrowserNavigator;
use crate::reactive::ReactiveNavigator;
use crate::wasm_utils::EventListener;

/// Store handle used by the components in this crate
pub type QueryState = QueryStateStore<ReactiveNavigator<BrowserNavigator>>;

/// Create the store for this subtree and provide it as context.
///
/// Also listens for `popstate` so back/forward navigation re-renders every
/// component that reads query state.
pub fn use_query_state_provider(config: StoreConfig) -> QueryState {
    let revision = use_signal(|| 0u64);

    let store = use_context_provider(move || {
        QueryStateStore::new(ReactiveNavigator::new(BrowserNavigator, revision), config)
    });

    use_hook(move || {
        let listener = EventListener::on_window("popstate", move |_| {
            debug!("popstate, refreshing query state");
            let mut revision = revision;
            *revision.write() += 1;
        });
        Rc::new(listener)
    });

    store
}

/// The store provided by the nearest `use_query_state_provider`.
pub fn use_query_state() -> QueryState {
    use_context::<QueryState>()
}

//! qstate-ui - Dioxus bindings for URL query state
//!
//! Provides a browser-backed navigator, a hook that shares one store per
//! component tree, and a filter dropdown that reads and writes its selection
//! through the query string.

pub mod browser;
pub mod components;
pub mod hooks;
pub mod reactive;
pub mod wasm_utils;

pub use browser::BrowserNavigator;
pub use components::*;
pub use hooks::{use_query_state, use_query_state_provider, QueryState};
pub use reactive::ReactiveNavigator;

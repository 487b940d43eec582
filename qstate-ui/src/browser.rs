//! Navigator backed by the browser's History and Location APIs

use qstate_core::{query_string, Address, NavigateOptions, NavigationKind, Navigator, QueryMap};
use tracing::warn;
use wasm_bindgen::JsValue;

/// Reads `location` and writes through `history.pushState` / `replaceState`,
/// or through `location.assign` / `location.replace` when a full reload is
/// acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_address(&self) -> Address {
        let Some(window) = web_sys::window() else {
            return Address::default();
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        Address::new(path, query_string::parse(&search))
    }

    fn navigate_push(&self, path: &str, query: QueryMap, options: NavigateOptions) {
        navigate(NavigationKind::Push, path, query, options);
    }

    fn navigate_replace(&self, path: &str, query: QueryMap, options: NavigateOptions) {
        navigate(NavigationKind::Replace, path, query, options);
    }
}

fn navigate(kind: NavigationKind, path: &str, query: QueryMap, options: NavigateOptions) {
    let href = Address::new(path, query).to_string();
    let Some(window) = web_sys::window() else {
        warn!("No window, dropping navigation to {}", href);
        return;
    };

    let result = if options.no_full_reload {
        match window.history() {
            Ok(history) => match kind {
                NavigationKind::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&href)),
                NavigationKind::Replace => {
                    history.replace_state_with_url(&JsValue::NULL, "", Some(&href))
                }
            },
            Err(e) => Err(e),
        }
    } else {
        let location = window.location();
        match kind {
            NavigationKind::Push => location.assign(&href),
            NavigationKind::Replace => location.replace(&href),
        }
    };

    if let Err(e) = result {
        warn!("Failed to navigate ({:?}) to {}: {:?}", kind, href, e);
    }
}

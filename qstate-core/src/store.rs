//! Query-string backed selection state
//!
//! `QueryStateStore` keeps no state of its own. Every operation reads the
//! navigator's current address, builds a complete replacement query mapping,
//! and submits it as a single navigation request. The path and every other
//! parameter are carried over untouched.
//!
//! Per parameter the stored shape moves `Absent -> Single -> Multiple`:
//! toggling a second distinct value turns a single value into a two element
//! list, and removing elements never collapses a list back to a single value
//! (a list may shrink to one element or to none and stays a list).

use tracing::{debug, trace};

use crate::address::{EncodedValue, QueryMap};
use crate::codec;
use crate::config::{NavigationMode, StoreConfig};
use crate::navigator::{NavigateOptions, Navigator};
use crate::value::{ParamValue, Scalar};

#[derive(Clone)]
pub struct QueryStateStore<N: Navigator> {
    navigator: N,
    config: StoreConfig,
}

impl<N: Navigator> QueryStateStore<N> {
    pub fn new(navigator: N, config: StoreConfig) -> Self {
        Self { navigator, config }
    }

    pub fn with_defaults(navigator: N) -> Self {
        Self::new(navigator, StoreConfig::default())
    }

    /// Decoded value(s) for `name` in the current address.
    pub fn get_param_value(&self, name: &str) -> ParamValue {
        let address = self.navigator.current_address();
        match address.query.get(name) {
            None => ParamValue::Absent,
            Some(EncodedValue::Single(s)) => ParamValue::Single(Scalar::Str(codec::decode(s))),
            Some(EncodedValue::Multiple(items)) => ParamValue::Multiple(
                items
                    .iter()
                    .map(|s| Scalar::Str(codec::decode(s)))
                    .collect(),
            ),
        }
    }

    /// Replace `name` with `value`, moving it to the end of the mapping.
    ///
    /// A falsy value (absent, `""`, `0`, `false`, empty list) removes the
    /// parameter instead of storing an empty value.
    pub fn set_param(&self, name: &str, value: impl Into<ParamValue>) {
        let value: ParamValue = value.into();
        let encoded = match &value {
            _ if value.is_falsy() => None,
            ParamValue::Single(scalar) => Some(EncodedValue::Single(codec::encode(scalar))),
            ParamValue::Multiple(items) => Some(EncodedValue::Multiple(
                items.iter().map(codec::encode).collect(),
            )),
            ParamValue::Absent => None,
        };
        let Some(encoded) = encoded else {
            self.remove_param(name, ParamValue::Absent);
            return;
        };

        let address = self.navigator.current_address();
        let mut query = address.query.without(name);
        query.insert(name, encoded);
        self.request("set", name, &address.path, query);
    }

    /// Remove `name`, or a single element of it.
    ///
    /// With a scalar `value` and a list currently stored, only the elements
    /// equal to the encoded `value` are dropped. In every other case the whole
    /// entry goes. Nothing is requested when `name` is not present.
    pub fn remove_param(&self, name: &str, value: impl Into<ParamValue>) {
        let value: ParamValue = value.into();
        let address = self.navigator.current_address();
        let Some(current) = address.query.get(name) else {
            trace!("remove '{}': not present, nothing to do", name);
            return;
        };

        let query = match (current, value) {
            (EncodedValue::Multiple(items), ParamValue::Single(scalar)) => {
                let target = codec::encode(&scalar);
                let kept: Vec<String> = items.iter().filter(|s| **s != target).cloned().collect();
                let mut query = address.query.clone();
                query.insert(name, EncodedValue::Multiple(kept));
                query
            }
            _ => address.query.without(name),
        };
        self.request("remove", name, &address.path, query);
    }

    /// Drop the listed parameters, or every parameter when `names` is empty.
    ///
    /// Always requests a navigation, even if nothing changed.
    pub fn clear_params(&self, names: &[&str]) {
        let address = self.navigator.current_address();
        let query = if names.is_empty() {
            QueryMap::new()
        } else {
            address.query.without_all(names)
        };
        self.request("clear", &names.join(","), &address.path, query);
    }

    /// Flip the presence of `value` under `name`.
    pub fn toggle_param(&self, name: &str, value: impl Into<Scalar>) {
        let value: Scalar = value.into();
        let encoded = codec::encode(&value);
        let address = self.navigator.current_address();
        let mut query = address.query.clone();

        match address.query.get(name) {
            None => {
                query.insert(name, EncodedValue::Single(encoded));
            }
            Some(current) if current.contains(&encoded) => match current {
                EncodedValue::Multiple(items) => {
                    let kept = items.iter().filter(|s| **s != encoded).cloned().collect();
                    query.insert(name, EncodedValue::Multiple(kept));
                }
                EncodedValue::Single(_) => {
                    query.remove(name);
                }
            },
            Some(EncodedValue::Multiple(items)) => {
                let mut items = items.clone();
                items.push(encoded);
                query.insert(name, EncodedValue::Multiple(items));
            }
            Some(EncodedValue::Single(existing)) => {
                query.insert(name, EncodedValue::Multiple(vec![existing.clone(), encoded]));
            }
        }
        self.request("toggle", name, &address.path, query);
    }

    fn request(&self, op: &str, name: &str, path: &str, query: QueryMap) {
        let options = NavigateOptions {
            no_full_reload: self.config.preserve_aside_update,
        };
        debug!(
            "{} '{}': {:?} navigation to {} ({} params)",
            op,
            name,
            self.config.navigation_mode,
            path,
            query.len()
        );
        match self.config.navigation_mode {
            NavigationMode::Push => self.navigator.navigate_push(path, query, options),
            NavigationMode::Replace => self.navigator.navigate_replace(path, query, options),
        }
    }
}

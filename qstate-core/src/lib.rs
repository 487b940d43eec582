//! qstate-core - Selection state kept in the URL query string
//!
//! Reads and mutates query parameters that may hold a single value or a list
//! of values, leaving the path and every other parameter untouched. Address
//! changes go through an injected `Navigator`.

pub mod address;
pub mod codec;
pub mod config;
pub mod navigator;
pub mod query_string;
pub mod store;
pub mod value;

pub use address::{Address, EncodedValue, QueryMap};
pub use config::{ConfigError, NavigationMode, StoreConfig};
pub use navigator::{
    MemoryNavigator, NavigateOptions, NavigationKind, NavigationRequest, Navigator,
};
pub use store::QueryStateStore;
pub use value::{ParamValue, Scalar};

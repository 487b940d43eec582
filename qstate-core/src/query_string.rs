//! Conversion between a raw `?a=1&b=2&b=3` search string and a `QueryMap`
//!
//! Keys and values are unescaped once when parsing and escaped once when
//! serializing, so the mapping's stored (already encoded) values survive a
//! trip through a real URL unchanged.

use tracing::{debug, warn};

use crate::address::{EncodedValue, QueryMap};

/// Parse a search string. Repeated keys fold into a multi value in order of
/// appearance; pairs with an empty key are dropped.
pub fn parse(search: &str) -> QueryMap {
    let search = search.strip_prefix('?').unwrap_or(search);
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(search) {
        Ok(pairs) => pairs,
        Err(e) => {
            debug!("Unparsable search string '{}': {}", search, e);
            return QueryMap::new();
        }
    };

    let mut map = QueryMap::new();
    for (key, value) in pairs {
        if key.is_empty() {
            continue;
        }
        let merged = match map.get(&key) {
            None => EncodedValue::Single(value),
            Some(EncodedValue::Single(existing)) => {
                EncodedValue::Multiple(vec![existing.clone(), value])
            }
            Some(EncodedValue::Multiple(existing)) => {
                let mut items = existing.clone();
                items.push(value);
                EncodedValue::Multiple(items)
            }
        };
        map.insert(key, merged);
    }

    map
}

/// Serialize a mapping without the leading `?`. An empty multi value writes
/// no pairs at all.
pub fn serialize(query: &QueryMap) -> String {
    let pairs: Vec<(&str, &str)> = query
        .iter()
        .flat_map(|(key, value)| {
            let items: Vec<&str> = match value {
                EncodedValue::Single(v) => vec![v.as_str()],
                EncodedValue::Multiple(items) => items.iter().map(String::as_str).collect(),
            };
            items.into_iter().map(move |v| (key, v))
        })
        .collect();

    match serde_urlencoded::to_string(&pairs) {
        Ok(search) => search,
        Err(e) => {
            warn!("Failed to serialize query ({} pairs): {}", pairs.len(), e);
            String::new()
        }
    }
}

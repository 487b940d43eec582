//! Addresses and their query mappings
//!
//! The mapping holds values exactly as they are stored in the address, i.e.
//! already percent-encoded. Keys are unique and keep insertion order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::query_string;

/// A stored (encoded) parameter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EncodedValue {
    Single(String),
    Multiple(Vec<String>),
}

impl EncodedValue {
    /// Whether `encoded` is this value or one of its elements.
    pub fn contains(&self, encoded: &str) -> bool {
        match self {
            EncodedValue::Single(s) => s == encoded,
            EncodedValue::Multiple(items) => items.iter().any(|s| s == encoded),
        }
    }
}

impl From<&str> for EncodedValue {
    fn from(value: &str) -> Self {
        EncodedValue::Single(value.to_string())
    }
}

impl From<String> for EncodedValue {
    fn from(value: String) -> Self {
        EncodedValue::Single(value)
    }
}

impl From<Vec<String>> for EncodedValue {
    fn from(values: Vec<String>) -> Self {
        EncodedValue::Multiple(values)
    }
}

impl From<Vec<&str>> for EncodedValue {
    fn from(values: Vec<&str>) -> Self {
        EncodedValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Ordered key to value mapping with unique keys
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryMap {
    entries: Vec<(String, EncodedValue)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&EncodedValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Insert a value. An existing key keeps its position; a new key goes last.
    /// Returns the previous value, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<EncodedValue>,
    ) -> Option<EncodedValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<EncodedValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Copy of this mapping with every entry except `name`, order preserved.
    pub fn without(&self, name: &str) -> QueryMap {
        self.entries
            .iter()
            .filter(|(key, _)| key != name)
            .cloned()
            .collect()
    }

    /// Copy of this mapping keeping only keys not listed in `names`.
    pub fn without_all<S: AsRef<str>>(&self, names: &[S]) -> QueryMap {
        self.entries
            .iter()
            .filter(|(key, _)| !names.iter().any(|n| n.as_ref() == key))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EncodedValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<EncodedValue>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for QueryMap {
    type Item = (String, EncodedValue);
    type IntoIter = std::vec::IntoIter<(String, EncodedValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for QueryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct QueryMapVisitor;

impl<'de> Visitor<'de> for QueryMapVisitor {
    type Value = QueryMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of strings or string lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<QueryMap, A::Error> {
        let mut map = QueryMap::new();
        while let Some((key, value)) = access.next_entry::<String, EncodedValue>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for QueryMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(QueryMapVisitor)
    }
}

/// A navigable location: a path plus its query mapping
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub path: String,
    #[serde(default)]
    pub query: QueryMap,
}

impl Address {
    pub fn new(path: impl Into<String>, query: QueryMap) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Split `"/path?a=1&b=2"` into path and query. A fragment is dropped.
    pub fn parse(href: &str) -> Self {
        let without_fragment = href.split('#').next().unwrap_or_default();
        match without_fragment.split_once('?') {
            Some((path, search)) => Self::new(path, query_string::parse(search)),
            None => Self::new(without_fragment, QueryMap::new()),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let search = query_string::serialize(&self.query);
        if search.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, search)
        }
    }
}

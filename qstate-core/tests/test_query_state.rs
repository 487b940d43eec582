//! Integration tests for QueryStateStore driven through an in-memory history.
//!
//! Covers:
//! - read access and decoding
//! - set/remove/clear/toggle mutation semantics
//! - non-interference with the path and other parameters
mod support;
use crate::support::store_at;
use qstate_core::{
    codec, Address, EncodedValue, MemoryNavigator, NavigateOptions, NavigationMode, Navigator,
    ParamValue, QueryMap, QueryStateStore, Scalar, StoreConfig,
};

fn query_of(nav: &MemoryNavigator) -> QueryMap {
    nav.current_address().query
}

#[test]
fn test_encode_decode_round_trip() {
    let samples: Vec<Scalar> = vec![
        "hello".into(),
        "a b c".into(),
        "?&=#/%".into(),
        "naïve café".into(),
        "-_.~".into(),
        42.into(),
        (-7.25).into(),
        true.into(),
        false.into(),
    ];
    for scalar in samples {
        assert_eq!(codec::decode(&codec::encode(&scalar)), scalar.to_text());
    }
}

#[test]
fn test_set_then_get_returns_value() {
    let (store, _nav) = store_at("/search");
    store.set_param("q", "rust & friends");
    assert_eq!(store.get_param_value("q"), ParamValue::from("rust & friends"));
}

#[test]
fn test_set_stores_encoded_value() {
    let (store, nav) = store_at("/search");
    store.set_param("q", "a b");
    assert_eq!(query_of(&nav).get("q"), Some(&EncodedValue::from("a%20b")));
}

#[test]
fn test_set_number_and_bool_read_back_as_text() {
    let (store, _nav) = store_at("/search");
    store.set_param("page", 3);
    store.set_param("exact", true);
    assert_eq!(store.get_param_value("page"), ParamValue::from("3"));
    assert_eq!(store.get_param_value("exact"), ParamValue::from("true"));
}

#[test]
fn test_set_list_encodes_each_element() {
    let (store, nav) = store_at("/search");
    store.set_param("tag", ["x y", "z"]);
    assert_eq!(
        query_of(&nav).get("tag"),
        Some(&EncodedValue::from(vec!["x%20y", "z"]))
    );
    assert_eq!(store.get_param_value("tag"), ParamValue::from(["x y", "z"]));
}

#[test]
fn test_set_falsy_equals_remove() {
    for falsy in [
        ParamValue::Absent,
        ParamValue::from(""),
        ParamValue::from(0),
        ParamValue::from(false),
        ParamValue::from(Vec::<String>::new()),
    ] {
        let (store, nav) = store_at("/p?a=1&b=2");
        store.set_param("a", falsy.clone());
        let query = query_of(&nav);
        assert!(!query.contains_key("a"), "{falsy:?} should remove 'a'");
        assert_eq!(query.get("b"), Some(&EncodedValue::from("2")));
        assert_eq!(nav.request_count(), 1);
    }
}

#[test]
fn test_set_zero_cannot_be_stored() {
    // A filter for the literal value 0 is indistinguishable from "no value".
    let (store, nav) = store_at("/p?n=5");
    store.set_param("n", 0);
    assert_eq!(store.get_param_value("n"), ParamValue::Absent);
    assert_eq!(nav.request_count(), 1);
}

#[test]
fn test_toggle_on_then_off() {
    let (store, nav) = store_at("/p");
    store.toggle_param("color", "a");
    assert_eq!(query_of(&nav).get("color"), Some(&EncodedValue::from("a")));

    store.toggle_param("color", "a");
    assert!(!query_of(&nav).contains_key("color"));
    assert_eq!(nav.request_count(), 2);
}

#[test]
fn test_toggle_accumulates_without_collapsing() {
    let (store, nav) = store_at("/p");
    store.toggle_param("color", "a");
    store.toggle_param("color", "b");
    assert_eq!(
        query_of(&nav).get("color"),
        Some(&EncodedValue::from(vec!["a", "b"]))
    );

    store.toggle_param("color", "a");
    assert_eq!(
        query_of(&nav).get("color"),
        Some(&EncodedValue::from(vec!["b"]))
    );
    assert_eq!(store.get_param_value("color"), ParamValue::from(["b"]));

    // shrinking to nothing leaves an empty list in the mapping
    store.toggle_param("color", "b");
    assert_eq!(
        query_of(&nav).get("color"),
        Some(&EncodedValue::from(Vec::<String>::new()))
    );

    // and toggling again grows the list
    store.toggle_param("color", "c");
    assert_eq!(
        query_of(&nav).get("color"),
        Some(&EncodedValue::from(vec!["c"]))
    );
}

#[test]
fn test_toggle_appends_at_end() {
    let (store, nav) = store_at("/p?t=a&t=b");
    store.toggle_param("t", "c");
    assert_eq!(
        query_of(&nav).get("t"),
        Some(&EncodedValue::from(vec!["a", "b", "c"]))
    );
}

#[test]
fn test_toggle_compares_encoded_values() {
    let (store, nav) = store_at("/p");
    store.toggle_param("q", "a b");
    store.toggle_param("q", "a b");
    assert!(!query_of(&nav).contains_key("q"));
}

#[test]
fn test_remove_element_from_list() {
    let (store, nav) = store_at("/p?name=a&name=b");
    store.remove_param("name", "a");
    assert_eq!(
        query_of(&nav).get("name"),
        Some(&EncodedValue::from(vec!["b"]))
    );
}

#[test]
fn test_remove_drops_every_equal_element() {
    let (store, nav) = store_at("/p?t=a&t=b&t=a");
    store.remove_param("t", "a");
    assert_eq!(query_of(&nav).get("t"), Some(&EncodedValue::from(vec!["b"])));
    assert_eq!(store.get_param_value("t"), ParamValue::from(["b"]));
}

#[test]
fn test_remove_from_empty_list_keeps_empty_list() {
    let nav = MemoryNavigator::new(Address::new(
        "/p",
        QueryMap::from_iter([("t", EncodedValue::from(Vec::<String>::new()))]),
    ));
    let store = QueryStateStore::with_defaults(nav.clone());
    store.remove_param("t", "x");
    assert_eq!(
        query_of(&nav).get("t"),
        Some(&EncodedValue::from(Vec::<String>::new()))
    );
    assert_eq!(nav.request_count(), 1);
}

#[test]
fn test_remove_scalar_ignores_value() {
    let (store, nav) = store_at("/p?name=a&other=1");
    store.remove_param("name", "zzz");
    let query = query_of(&nav);
    assert!(!query.contains_key("name"));
    assert!(query.contains_key("other"));
}

#[test]
fn test_remove_list_with_list_value_drops_entry() {
    let (store, nav) = store_at("/p?name=a&name=b");
    store.remove_param("name", ["a"]);
    assert!(!query_of(&nav).contains_key("name"));
}

#[test]
fn test_remove_without_value_drops_entry() {
    let (store, nav) = store_at("/p?name=a&name=b");
    store.remove_param("name", ParamValue::Absent);
    assert!(!query_of(&nav).contains_key("name"));
}

#[test]
fn test_remove_absent_is_noop() {
    let (store, nav) = store_at("/p?a=1");
    store.remove_param("missing", ParamValue::Absent);
    store.remove_param("missing", "x");
    assert_eq!(nav.request_count(), 0);
    assert_eq!(nav.history_len(), 1);
}

#[test]
fn test_clear_all() {
    let (store, nav) = store_at("/p?a=1&b=2");
    store.clear_params(&[]);
    let address = nav.current_address();
    assert_eq!(address.path, "/p");
    assert!(address.query.is_empty());
}

#[test]
fn test_clear_named_preserves_order() {
    let (store, nav) = store_at("/p?a=1&b=2&c=3&d=4");
    store.clear_params(&["a", "c"]);
    let query = query_of(&nav);
    assert_eq!(query.keys().collect::<Vec<_>>(), vec!["b", "d"]);
}

#[test]
fn test_clear_missing_is_identity_but_navigates() {
    let (store, nav) = store_at("/p?a=1&b=2");
    let before = query_of(&nav);
    store.clear_params(&["x"]);
    assert_eq!(query_of(&nav), before);
    assert_eq!(nav.request_count(), 1);
}

#[test]
fn test_mutations_do_not_touch_other_keys() {
    let (store, nav) = store_at("/shop/items?keep=a%20b&list=x&list=y&target=1");
    let keep_before = query_of(&nav).get("keep").cloned();
    let list_before = query_of(&nav).get("list").cloned();

    store.set_param("target", "2");
    store.toggle_param("target", "3");
    store.remove_param("target", "2");
    store.toggle_param("target", "4");
    store.clear_params(&["target"]);

    let address = nav.current_address();
    assert_eq!(address.path, "/shop/items");
    assert_eq!(address.query.get("keep").cloned(), keep_before);
    assert_eq!(address.query.get("list").cloned(), list_before);
    assert!(!address.query.contains_key("target"));
}

#[test]
fn test_reads_fresh_snapshot_each_call() {
    let (store, nav) = store_at("/p?a=1");
    let next = Address::parse("/p?a=2");
    nav.navigate_replace(&next.path, next.query, NavigateOptions::default());
    assert_eq!(store.get_param_value("a"), ParamValue::from("2"));
}

#[test]
fn test_push_history_supports_back() {
    let (store, nav) = store_at("/p");
    store.toggle_param("t", "a");
    store.toggle_param("t", "b");
    assert_eq!(nav.history_len(), 3);

    assert!(nav.back());
    assert_eq!(store.get_param_value("t"), ParamValue::from("a"));
    assert!(nav.back());
    assert_eq!(store.get_param_value("t"), ParamValue::Absent);
}

#[test]
fn test_replace_mode_keeps_single_entry() {
    let nav = MemoryNavigator::new(Address::parse("/p"));
    let config = StoreConfig {
        navigation_mode: NavigationMode::Replace,
        ..StoreConfig::default()
    };
    let store = QueryStateStore::new(nav.clone(), config);
    store.toggle_param("t", "a");
    store.toggle_param("t", "b");
    store.clear_params(&[]);
    assert_eq!(nav.history_len(), 1);
    assert_eq!(nav.request_count(), 3);
    assert!(nav.current_address().query.is_empty());
}

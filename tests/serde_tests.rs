#![cfg(feature = "serde")]

//! Integration tests for serde support in fpmap.
//!
//! Maps round-trip through JSON with their entry order intact.

use fpmap::OrderedMap;
use rstest::rstest;

#[rstest]
fn test_serialize_writes_insertion_order() {
    let map = OrderedMap::from([("zeta", 1), ("alpha", 2), ("mid", 3)]);
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"zeta":1,"alpha":2,"mid":3}"#);
}

#[rstest]
fn test_json_roundtrip_preserves_order() {
    let map: OrderedMap<String, Vec<bool>> = [
        ("c".to_string(), vec![true]),
        ("a".to_string(), vec![]),
        ("b".to_string(), vec![false, true]),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&map).unwrap();
    let restored: OrderedMap<String, Vec<bool>> = serde_json::from_str(&json).unwrap();

    let keys: Vec<_> = restored.keys().iter().cloned().collect();
    assert_eq!(keys, ["c", "a", "b"]);
    assert_eq!(restored, map);
}

#[rstest]
fn test_deserialize_repeated_key_keeps_first_position_and_last_value() {
    let restored: OrderedMap<String, i32> =
        serde_json::from_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();
    let entries: Vec<_> = restored.into_iter().collect();
    assert_eq!(entries, [("a".to_string(), 3), ("b".to_string(), 2)]);
}

#[rstest]
fn test_empty_map_roundtrip() {
    let map: OrderedMap<String, i32> = OrderedMap::new();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, "{}");
    let restored: OrderedMap<String, i32> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
#[case("[1, 2]")]
#[case("42")]
#[case(r#"{"a": "not a number"}"#)]
fn test_deserialize_rejects_mismatched_input(#[case] json: &str) {
    let result: Result<OrderedMap<String, i32>, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[rstest]
fn test_derived_map_serializes_in_derived_order() {
    let flags = OrderedMap::from([("A", true), ("B", false), ("C", true)]);
    let selected = flags.select(|value, _, _| *value);
    assert_eq!(serde_json::to_string(&selected).unwrap(), r#"{"A":true,"C":true}"#);
}

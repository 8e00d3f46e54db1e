// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Optional and defaulted accessor tests.
//!
//! Tests cover:
//! - Primitive accessors on present, absent and mistyped slots
//! - Nested objects with and without a new key vocabulary
//! - Atomic and lenient array materialization
//! - Enum cases and enum arrays

mod common;

use common::{fixture, Animal, DictionaryKeys, TestKeys};
use keyjson::{ArrayPolicy, Document, ObjectNode, RawValue};

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn test_raw_value() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    assert_eq!(
        root.get(TestKeys::Integer).raw_value(),
        Some(&RawValue::from(7u64))
    );
    assert!(root.get(TestKeys::InvalidKey).raw_value().is_none());
}

#[test]
fn test_scalars() {
    let document = fixture();
    let root = document.object::<TestKeys>();

    assert_eq!(root.get(TestKeys::Integer).int(), Some(7));
    assert_eq!(root.get(TestKeys::Decimal).double(), Some(12.345));
    assert_eq!(root.get(TestKeys::Decimal).float(), Some(12.345f32));
    assert_eq!(root.get(TestKeys::String).string(), Some("Hello World"));
    assert_eq!(root.get(TestKeys::Bool).bool(), Some(true));
}

#[test]
fn test_bool_reads_as_number() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    assert_eq!(root.get(TestKeys::Bool).int(), Some(1));
    assert_eq!(root.get(TestKeys::Integer).bool(), Some(true));
}

#[test]
fn test_string_does_not_coerce() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    assert_eq!(root.get(TestKeys::Integer).string(), None);
    assert_eq!(root.get(TestKeys::String).int(), None);
    assert_eq!(root.get(TestKeys::Nothing).string(), None);
}

#[test]
fn test_dictionary() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    let dictionary = root.get(TestKeys::Dictionary).dictionary().unwrap();
    assert_eq!(dictionary.get("food"), Some(&RawValue::from("pizza")));
    assert!(root.get(TestKeys::Numbers).dictionary().is_none());
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn test_raw_object() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    let raw_object = root.get(TestKeys::Dictionary).raw_object().unwrap();
    assert_eq!(raw_object.get(TestKeys::Food).string(), Some("pizza"));
}

#[test]
fn test_object_with_new_vocabulary() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    let object: ObjectNode<'_, DictionaryKeys> = root.get(TestKeys::Dictionary).object().unwrap();
    assert_eq!(object.get(DictionaryKeys::Food).string(), Some("pizza"));
    assert_eq!(object.get(DictionaryKeys::Count).number::<u32>(), Some(3));
}

#[test]
fn test_object_on_non_object() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    assert!(root
        .get(TestKeys::Numbers)
        .object::<DictionaryKeys>()
        .is_none());
    assert!(root
        .get(TestKeys::InvalidKey)
        .object::<DictionaryKeys>()
        .is_none());
}

#[test]
fn test_array_of_objects() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    let subjects: Vec<ObjectNode<'_, DictionaryKeys>> = root.get(TestKeys::Subjects).array().unwrap();
    let foods: Vec<&str> = subjects
        .iter()
        .filter_map(|subject| subject.get(DictionaryKeys::Food).string())
        .collect();
    assert_eq!(foods, vec!["soup", "salad"]);
}

#[test]
fn test_index_into_array() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    let strings = root.get(TestKeys::Strings);
    assert_eq!(strings.index(2).string(), Some("bacon"));
    assert!(strings.index(3).is_missing());
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn test_int_array() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    assert_eq!(root.get(TestKeys::Numbers).array::<i64>(), Some(vec![5, 10, 15]));
}

#[test]
fn test_int_array_from_strings_fails() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    assert_eq!(root.get(TestKeys::Strings).array::<i64>(), None);
}

#[test]
fn test_float_and_double_arrays() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    assert_eq!(
        root.get(TestKeys::Decimals).array::<f32>(),
        Some(vec![1.23f32, 5.55, 9.0])
    );
    assert_eq!(
        root.get(TestKeys::Decimals).array::<f64>(),
        Some(vec![1.23, 5.55, 9.0])
    );
}

#[test]
fn test_string_array() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    assert_eq!(
        root.get(TestKeys::Strings).array::<String>(),
        Some(vec!["foo".to_string(), "bar".to_string(), "bacon".to_string()])
    );
    let borrowed: Vec<&str> = root.get(TestKeys::Strings).array().unwrap();
    assert_eq!(borrowed, vec!["foo", "bar", "bacon"]);
}

#[test]
fn test_defaulted_arrays_are_empty() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    assert!(root
        .get(TestKeys::Numbers)
        .array_or_empty::<String>(ArrayPolicy::Atomic)
        .is_empty());
    assert!(root
        .get(TestKeys::Strings)
        .array_or_empty::<i64>(ArrayPolicy::Atomic)
        .is_empty());
    assert!(root
        .get(TestKeys::InvalidKey)
        .array_or_empty::<i64>(ArrayPolicy::Lenient)
        .is_empty());
}

#[test]
fn test_mixed_array_policies() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    let mixed = root.get(TestKeys::Mixed);

    assert_eq!(mixed.array::<i64>(), None);
    assert_eq!(mixed.array_with::<i64>(ArrayPolicy::Lenient), Some(vec![1, 3]));
    assert_eq!(
        mixed.array_or_empty::<String>(ArrayPolicy::Lenient),
        vec!["x".to_string()]
    );
}

#[test]
fn test_nested_arrays() {
    let document: Document = r#"{"numbers": [[1, 2], [3]]}"#.parse().unwrap();
    let root = document.object::<TestKeys>();
    assert_eq!(
        root.get(TestKeys::Numbers).array::<Vec<u8>>(),
        Some(vec![vec![1, 2], vec![3]])
    );
}

// ============================================================================
// Enums
// ============================================================================

#[test]
fn test_enum_case() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    assert_eq!(root.get(TestKeys::Animal).enum_case::<Animal>(), Some(Animal::Dog));
    assert_eq!(root.get(TestKeys::String).enum_case::<Animal>(), None);
    assert_eq!(root.get(TestKeys::InvalidKey).enum_case::<Animal>(), None);
}

#[test]
fn test_enum_array() {
    let document = fixture();
    let root = document.object::<TestKeys>();
    assert_eq!(
        root.get(TestKeys::Animals).enum_array::<Animal>(),
        Some(vec![Animal::Cat, Animal::Fish, Animal::Dog])
    );
}

#[test]
fn test_enum_array_out_of_range() {
    let document: Document = r#"{"animals": [0, 9, 2]}"#.parse().unwrap();
    let root = document.object::<TestKeys>();
    let animals = root.get(TestKeys::Animals);
    assert_eq!(animals.enum_array::<Animal>(), None);
    assert_eq!(
        animals.enum_array_or_empty::<Animal>(ArrayPolicy::Lenient),
        vec![Animal::Cat, Animal::Fish]
    );
}

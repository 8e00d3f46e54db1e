// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Key-indexed object views.
//!
//! An [`ObjectNode`] borrows a raw object map and hands out [`ValueNode`]s
//! for keys from its vocabulary `K`. Lookups never fail; a missing key just
//! produces a node with an absent slot, and the accessor decides what that
//! means.

use std::fmt;
use std::marker::PhantomData;

use super::node::ValueNode;
use crate::convert::FromJson;
use crate::core::{Context, Converter, DefaultConverter, KeySource, RawMap, RawValue};

/// View over a raw object, indexed by the key vocabulary `K`.
pub struct ObjectNode<'a, K, C = DefaultConverter> {
    map: &'a RawMap,
    converter: C,
    keys: PhantomData<fn() -> K>,
}

impl<'a, K: KeySource, C: Converter + Default> ObjectNode<'a, K, C> {
    /// Create a view with the default instance of the converter tag.
    pub fn new(map: &'a RawMap) -> Self {
        Self::with_converter(map, C::default())
    }

    /// Create a view over `value` if it is an object.
    pub fn from_value(value: &'a RawValue) -> Option<Self> {
        value.as_object().map(Self::new)
    }
}

impl<'a, K: KeySource, C: Converter> ObjectNode<'a, K, C> {
    /// Create a view with an explicit converter tag.
    pub fn with_converter(map: &'a RawMap, converter: C) -> Self {
        Self {
            map,
            converter,
            keys: PhantomData,
        }
    }

    /// Look up `key`.
    ///
    /// The returned node's slot is absent when the key is not present.
    pub fn get(&self, key: K) -> ValueNode<'a, K, C> {
        let name = key.key_value();
        ValueNode::new(self.map.get(name), Some(name), self.converter.clone())
    }

    /// Check if `key` is present (including present-but-null).
    pub fn contains(&self, key: K) -> bool {
        self.map.contains_key(key.key_value())
    }

    /// The backing map.
    pub fn map(&self) -> &'a RawMap {
        self.map
    }

    /// The converter tag.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// View the same map through another key vocabulary.
    pub fn rekey<K2: KeySource>(&self) -> ObjectNode<'a, K2, C> {
        ObjectNode::with_converter(self.map, self.converter.clone())
    }

    /// View the same map under another converter tag.
    pub fn retag<C2: Converter>(&self, converter: C2) -> ObjectNode<'a, K, C2> {
        ObjectNode::with_converter(self.map, converter)
    }
}

impl<K, C: Clone> Clone for ObjectNode<'_, K, C> {
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            converter: self.converter.clone(),
            keys: PhantomData,
        }
    }
}

impl<K, C: fmt::Debug> fmt::Debug for ObjectNode<'_, K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectNode")
            .field("fields", &self.map.len())
            .field("converter", &self.converter)
            .finish()
    }
}

/// Objects nested in arrays decode to views sharing the caller's tag.
impl<'a, K: KeySource, C: Converter> FromJson<'a, C> for ObjectNode<'a, K, C> {
    fn from_json(raw: &'a RawValue, cx: &Context<'_, C>) -> Option<Self> {
        raw.as_object()
            .map(|map| ObjectNode::with_converter(map, cx.converter().clone()))
    }
}

impl<'a, K: KeySource, C: Converter> ValueNode<'a, K, C> {
    /// View this value as an object with key vocabulary `K2`.
    pub fn object<K2: KeySource>(&self) -> Option<ObjectNode<'a, K2, C>> {
        self.dictionary()
            .map(|map| ObjectNode::with_converter(map, self.converter().clone()))
    }

    /// View this value as an object with the same key vocabulary.
    ///
    /// Convenient for ad-hoc access without declaring a new vocabulary.
    pub fn raw_object(&self) -> Option<ObjectNode<'a, K, C>> {
        self.object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::key_source! {
        enum Keys {
            Food => "food",
            Drink => "drink",
            Nested => "nested",
        }
    }

    crate::key_source! {
        enum InnerKeys {
            Depth => "depth",
        }
    }

    fn fixture() -> RawValue {
        let mut inner = RawMap::new();
        inner.insert("depth".to_string(), RawValue::from(2i64));
        inner.insert("food".to_string(), RawValue::from("soup"));

        let mut map = RawMap::new();
        map.insert("food".to_string(), RawValue::from("pizza"));
        map.insert("drink".to_string(), RawValue::Null);
        map.insert("nested".to_string(), RawValue::from(inner));
        RawValue::from(map)
    }

    #[test]
    fn test_get_present_and_missing() {
        let root = fixture();
        let object: ObjectNode<'_, Keys> = ObjectNode::from_value(&root).unwrap();

        let food = object.get(Keys::Food);
        assert_eq!(food.string(), Some("pizza"));
        assert_eq!(food.key(), Some("food"));

        let mut sparse = RawMap::new();
        sparse.insert("food".to_string(), RawValue::from(1i64));
        let sparse: ObjectNode<'_, Keys> = ObjectNode::new(&sparse);
        assert!(sparse.get(Keys::Drink).is_missing());
        assert!(!sparse.contains(Keys::Drink));
    }

    #[test]
    fn test_null_is_present() {
        let root = fixture();
        let object: ObjectNode<'_, Keys> = ObjectNode::from_value(&root).unwrap();
        assert!(object.contains(Keys::Drink));
        assert!(object.get(Keys::Drink).is_null());
    }

    #[test]
    fn test_from_value_requires_object() {
        let root = RawValue::from(vec![RawValue::from(1i64)]);
        assert!(ObjectNode::<Keys>::from_value(&root).is_none());
    }

    #[test]
    fn test_object_with_new_keys() {
        let root = fixture();
        let object: ObjectNode<'_, Keys> = ObjectNode::from_value(&root).unwrap();
        let nested = object.get(Keys::Nested).object::<InnerKeys>().unwrap();
        assert_eq!(nested.get(InnerKeys::Depth).int(), Some(2));

        assert!(object.get(Keys::Food).object::<InnerKeys>().is_none());
    }

    #[test]
    fn test_raw_object_keeps_keys() {
        let root = fixture();
        let object: ObjectNode<'_, Keys> = ObjectNode::from_value(&root).unwrap();
        let nested = object.get(Keys::Nested).raw_object().unwrap();
        assert_eq!(nested.get(Keys::Food).string(), Some("soup"));
    }

    #[test]
    fn test_rekey_shares_map() {
        let root = fixture();
        let object: ObjectNode<'_, Keys> = ObjectNode::from_value(&root).unwrap();
        let rekeyed = object.rekey::<InnerKeys>();
        assert!(std::ptr::eq(object.map(), rekeyed.map()));
    }
}

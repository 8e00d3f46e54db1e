// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Value views and primitive accessors.
//!
//! A [`ValueNode`] is what an object lookup returns: the raw slot (possibly
//! absent), the key used to reach it, and the converter tag inherited from
//! the object. Accessors here never fail loudly; they report `None` when the
//! slot is absent, null, or the wrong shape.

use std::fmt;
use std::marker::PhantomData;

use crate::convert::FromJson;
use crate::core::{Context, Converter, DefaultConverter, JsonNumber, Number, RawMap, RawValue};

/// View over one raw value plus the key it was retrieved by.
///
/// `K` is the key vocabulary of the object this value came from, and is
/// reused by [`ValueNode::raw_object`]. `C` is the converter tag.
pub struct ValueNode<'a, K, C = DefaultConverter> {
    raw: Option<&'a RawValue>,
    key: Option<&'a str>,
    converter: C,
    keys: PhantomData<fn() -> K>,
}

impl<'a, K, C: Converter> ValueNode<'a, K, C> {
    /// Create a node over an optional raw value.
    pub fn new(raw: Option<&'a RawValue>, key: Option<&'a str>, converter: C) -> Self {
        Self {
            raw,
            key,
            converter,
            keys: PhantomData,
        }
    }

    /// The raw value, or `None` if the slot is absent.
    pub fn raw_value(&self) -> Option<&'a RawValue> {
        self.raw
    }

    /// The key this node was retrieved by; `None` for array elements.
    pub fn key(&self) -> Option<&'a str> {
        self.key
    }

    /// The converter tag of this node.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Conversion context describing this node.
    pub fn context(&self) -> Context<'_, C> {
        Context::new(self.key, &self.converter)
    }

    /// Check if the slot is absent.
    pub fn is_missing(&self) -> bool {
        self.raw.is_none()
    }

    /// Check if the slot holds a JSON null.
    pub fn is_null(&self) -> bool {
        matches!(self.raw, Some(RawValue::Null))
    }

    // ========================================================================
    // Primitive Accessors
    // ========================================================================

    /// Read a boolean. Numbers are `true` when non-zero.
    pub fn bool(&self) -> Option<bool> {
        self.number()
    }

    /// Read an integer.
    pub fn int(&self) -> Option<i64> {
        self.number()
    }

    /// Read a double.
    pub fn double(&self) -> Option<f64> {
        self.number()
    }

    /// Read a float.
    pub fn float(&self) -> Option<f32> {
        self.number()
    }

    /// Read a string. Succeeds only for JSON strings.
    pub fn string(&self) -> Option<&'a str> {
        self.raw?.as_str()
    }

    /// Read the raw object map.
    pub fn dictionary(&self) -> Option<&'a RawMap> {
        self.raw?.as_object()
    }

    /// Read the raw array.
    pub fn raw_array(&self) -> Option<&'a [RawValue]> {
        self.raw?.as_array()
    }

    /// Read the canonical number.
    pub fn raw_number(&self) -> Option<Number> {
        self.raw?.as_number()
    }

    // ========================================================================
    // Generic Numbers
    // ========================================================================

    /// Convert the canonical number to `T`.
    pub fn number<T: JsonNumber>(&self) -> Option<T> {
        self.raw_number().map(T::from_number)
    }

    /// Convert the canonical number to `T`, or return `T`'s zero.
    ///
    /// This is a lossy fallback: a missing key and a wrong shape both read
    /// as zero. Use [`ValueNode::get_number`] to tell them apart.
    pub fn number_or_zero<T: JsonNumber>(&self) -> T {
        self.number().unwrap_or_else(T::zero)
    }

    // ========================================================================
    // Custom Conversion
    // ========================================================================

    /// Decode this value through `T`'s [`FromJson`] implementation for
    /// this node's converter tag.
    pub fn decode<T: FromJson<'a, C>>(&self) -> Option<T> {
        T::from_json(self.raw?, &self.context())
    }

    /// Access an element of an array value.
    ///
    /// The returned node has no key. It is absent when this value is not an
    /// array or the index is out of range.
    pub fn index(&self, index: usize) -> ValueNode<'a, K, C> {
        let raw = self.raw_array().and_then(|items| items.get(index));
        ValueNode::new(raw, None, self.converter.clone())
    }
}

impl<K, C: Clone> Clone for ValueNode<'_, K, C> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw,
            key: self.key,
            converter: self.converter.clone(),
            keys: PhantomData,
        }
    }
}

impl<K, C: fmt::Debug> fmt::Debug for ValueNode<'_, K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueNode")
            .field("raw", &self.raw)
            .field("key", &self.key)
            .field("converter", &self.converter)
            .finish()
    }
}

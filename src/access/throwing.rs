// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Throwing accessors.
//!
//! Each `get_*` method is an unwrap-or-raise over its optional counterpart.
//! An absent slot raises [`ConversionError::MissingKey`]; a present slot
//! that fails to convert (including JSON null) raises
//! [`ConversionError::InvalidCast`]. Nodes without a key report `"unknown"`.

use super::array::ArrayPolicy;
use super::enums::JsonEnum;
use super::node::ValueNode;
use super::object::ObjectNode;
use crate::convert::FromJson;
use crate::core::{ConversionError, Converter, JsonNumber, KeySource, Result, UNKNOWN_KEY};

impl<'a, K, C: Converter> ValueNode<'a, K, C> {
    /// The error describing why this node has no value.
    pub fn error(&self) -> ConversionError {
        let key = self.key().unwrap_or(UNKNOWN_KEY);
        if self.is_missing() {
            ConversionError::missing_key(key)
        } else {
            ConversionError::invalid_cast(key)
        }
    }

    /// Unwrap `value`, or raise this node's error.
    pub fn require<T>(&self, value: Option<T>) -> Result<T> {
        value.ok_or_else(|| self.error())
    }

    /// Read a boolean or raise.
    pub fn get_bool(&self) -> Result<bool> {
        self.require(self.bool())
    }

    /// Read an integer or raise.
    pub fn get_int(&self) -> Result<i64> {
        self.require(self.int())
    }

    /// Read a float or raise.
    pub fn get_float(&self) -> Result<f32> {
        self.require(self.float())
    }

    /// Read a double or raise.
    pub fn get_double(&self) -> Result<f64> {
        self.require(self.double())
    }

    /// Read a string or raise.
    pub fn get_string(&self) -> Result<&'a str> {
        self.require(self.string())
    }

    /// Convert the canonical number to `T` or raise.
    pub fn get_number<T: JsonNumber>(&self) -> Result<T> {
        self.require(self.number())
    }

    /// Decode through the custom conversion hook or raise.
    pub fn get_decoded<T: FromJson<'a, C>>(&self) -> Result<T> {
        self.require(self.decode())
    }

    /// Decode an array of `T` (all-or-nothing) or raise.
    pub fn get_array<T: FromJson<'a, C>>(&self) -> Result<Vec<T>> {
        self.require(self.array_with(ArrayPolicy::Atomic))
    }

    /// Decode an enum case or raise.
    pub fn get_enum_case<T>(&self) -> Result<T>
    where
        T: JsonEnum,
        T::Raw: FromJson<'a, C>,
    {
        self.require(self.enum_case())
    }

    /// Decode an array of enum cases (all-or-nothing) or raise.
    pub fn get_enum_array<T>(&self) -> Result<Vec<T>>
    where
        T: JsonEnum,
        T::Raw: FromJson<'a, C>,
    {
        self.require(self.enum_array())
    }
}

impl<'a, K: KeySource, C: Converter> ValueNode<'a, K, C> {
    /// View this value as an object with key vocabulary `K2` or raise.
    pub fn get_object<K2: KeySource>(&self) -> Result<ObjectNode<'a, K2, C>> {
        self.require(self.object())
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Untyped JSON value model.
//!
//! [`RawValue`] is the tree every accessor reads from. It is produced once by
//! the parser boundary ([`crate::encoding::json`]) and never mutated by the
//! access layer.

use std::collections::HashMap;
use std::fmt;

/// Type alias for a JSON object as key -> value mapping.
pub type RawMap = HashMap<String, RawValue>;

/// Untyped JSON value.
///
/// Every variant is owned; views over the tree borrow from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    // Null literal
    #[default]
    Null,

    // true / false
    Bool(bool),

    // Any JSON number, in canonical form
    Number(Number),

    // String (UTF-8)
    String(String),

    // Ordered array of values
    Array(Vec<RawValue>),

    // String-keyed object
    Object(RawMap),
}

/// Canonical numeric form of a JSON number.
///
/// Integers are kept exact when they fit in 64 bits; everything else is a
/// double. Non-negative integers are always stored as `PosInt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Non-negative integer
    PosInt(u64),
    /// Negative integer
    NegInt(i64),
    /// Floating point
    Float(f64),
}

impl Number {
    /// The canonical zero.
    pub const ZERO: Number = Number::PosInt(0);

    /// Build a number from a signed integer.
    pub fn from_i64(value: i64) -> Self {
        if value < 0 {
            Number::NegInt(value)
        } else {
            Number::PosInt(value as u64)
        }
    }

    /// Build a number from a double.
    pub fn from_f64(value: f64) -> Self {
        Number::Float(value)
    }

    /// Check if this number is an integer.
    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::Float(_))
    }

    /// Check if this number is zero.
    pub fn is_zero(&self) -> bool {
        match *self {
            Number::PosInt(v) => v == 0,
            Number::NegInt(_) => false,
            Number::Float(v) => v == 0.0,
        }
    }

    /// Convert to f64 (may lose precision for large integers).
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Convert to i64 if the value is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::PosInt(v) => i64::try_from(v).ok(),
            Number::NegInt(v) => Some(v),
            Number::Float(_) => None,
        }
    }

    /// Convert to u64 if the value is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::PosInt(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Number {
    fn from(value: bool) -> Self {
        Number::PosInt(u64::from(value))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::PosInt(v) => write!(f, "{v}"),
            Number::NegInt(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

impl RawValue {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Check if this value is numeric.
    ///
    /// Booleans count as numeric (0 or 1), matching how [`RawValue::as_number`]
    /// reads them.
    pub fn is_numeric(&self) -> bool {
        matches!(self, RawValue::Number(_) | RawValue::Bool(_))
    }

    /// Check if this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, RawValue::Object(_))
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, RawValue::Array(_))
    }

    // ========================================================================
    // Shape Accessors
    // ========================================================================

    /// Get the canonical number, if this value is numeric.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Bool(b) => Some(Number::from(*b)),
            _ => None,
        }
    }

    /// Try to get the inner string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner array.
    pub fn as_array(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get the inner object.
    pub fn as_object(&self) -> Option<&RawMap> {
        match self {
            RawValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Number(_) => "number",
            RawValue::String(_) => "string",
            RawValue::Array(_) => "array",
            RawValue::Object(_) => "object",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "null"),
            RawValue::Bool(v) => write!(f, "{v}"),
            RawValue::Number(v) => write!(f, "{v}"),
            RawValue::String(v) => write!(f, "\"{v}\""),
            RawValue::Array(v) => write!(f, "[{} elements]", v.len()),
            RawValue::Object(v) => write!(f, "{{{} fields}}", v.len()),
        }
    }
}

// =============================================================================
// Conversions from Rust literals
// =============================================================================

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(Number::from_i64(value))
    }
}

impl From<u64> for RawValue {
    fn from(value: u64) -> Self {
        RawValue::Number(Number::PosInt(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(Number::Float(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(value: Vec<RawValue>) -> Self {
        RawValue::Array(value)
    }
}

impl From<RawMap> for RawValue {
    fn from(value: RawMap) -> Self {
        RawValue::Object(value)
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # keyjson JSON Decoder
//!
//! Turns JSON text into the untyped [`RawValue`] tree. Parsing is delegated
//! to `serde_json`; this module only maps its values onto the canonical
//! model.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use keyjson::encoding::json::JsonDecoder;
//!
//! let decoder = JsonDecoder::new();
//! let value = decoder.decode(r#"{"x": 1, "y": [2, 3]}"#)?;
//! assert!(value.is_object());
//! # Ok(())
//! # }
//! ```

use crate::core::{DocumentError, Number, RawMap, RawValue};

/// JSON decoder producing [`RawValue`] trees.
pub struct JsonDecoder {
    _private: (),
}

impl JsonDecoder {
    /// Create a new JSON decoder.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Decode a JSON string.
    pub fn decode(&self, json: &str) -> Result<RawValue, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Ok(self.json_value_to_raw(value))
    }

    /// Decode JSON bytes.
    pub fn decode_bytes(&self, data: &[u8]) -> Result<RawValue, DocumentError> {
        let value: serde_json::Value = serde_json::from_slice(data)?;
        Ok(self.json_value_to_raw(value))
    }

    /// Convert a parsed JSON value into the canonical model.
    #[allow(clippy::only_used_in_recursion)]
    pub fn json_value_to_raw(&self, value: serde_json::Value) -> RawValue {
        match value {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(b) => RawValue::Bool(b),
            serde_json::Value::Number(n) => RawValue::Number(canonical_number(&n)),
            serde_json::Value::String(s) => RawValue::String(s),
            serde_json::Value::Array(arr) => RawValue::Array(
                arr.into_iter()
                    .map(|item| self.json_value_to_raw(item))
                    .collect(),
            ),
            serde_json::Value::Object(obj) => {
                let mut map = RawMap::with_capacity(obj.len());
                for (key, val) in obj {
                    map.insert(key, self.json_value_to_raw(val));
                }
                RawValue::Object(map)
            }
        }
    }
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn canonical_number(n: &serde_json::Number) -> Number {
    if let Some(u) = n.as_u64() {
        Number::PosInt(u)
    } else if let Some(i) = n.as_i64() {
        Number::NegInt(i)
    } else {
        Number::from_f64(n.as_f64().unwrap_or_default())
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        JsonDecoder::new().json_value_to_raw(value)
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # keyjson
//!
//! Type-safe, key-indexed access into parsed untyped JSON.
//!
//! Each object's keys are declared once as a closed vocabulary
//! ([`KeySource`]), so a misspelled key is a compile error rather than a
//! silent `None`. Values are read through typed accessors in three flavors:
//! optional (`Option<T>`), defaulted (zero or empty), and throwing
//! (`Result<T, ConversionError>` naming the offending key).
//!
//! ## Architecture
//!
//! - `core/` - raw value model, number model, key vocabularies, converter tags, errors
//! - `convert/` - the [`FromJson`] conversion hook, dates, format cache
//! - `access/` - [`ObjectNode`] and [`ValueNode`] accessor families
//! - `encoding/` - JSON text to [`RawValue`]
//! - [`document`] - owned root objects
//! - [`config`] - TOML settings for array policy and date formats
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use keyjson::{key_source, json_enum, ArrayPolicy, Document};
//!
//! key_source! {
//!     enum Keys {
//!         Name => "name",
//!         Count => "count",
//!         Tags => "tags",
//!         Animal => "animal",
//!     }
//! }
//!
//! json_enum! {
//!     enum Animal: i64 {
//!         Cat = 0,
//!         Dog = 1,
//!     }
//! }
//!
//! let document: Document = r#"{
//!     "name": "Fido",
//!     "count": 3,
//!     "tags": ["good", 1, "boy"],
//!     "animal": 1
//! }"#
//! .parse()?;
//! let root = document.object::<Keys>();
//!
//! assert_eq!(root.get(Keys::Name).string(), Some("Fido"));
//! assert_eq!(root.get(Keys::Count).number_or_zero::<u8>(), 3);
//! assert_eq!(root.get(Keys::Tags).array::<String>(), None);
//! assert_eq!(
//!     root.get(Keys::Tags).array_or_empty::<String>(ArrayPolicy::Lenient),
//!     vec!["good".to_string(), "boy".to_string()]
//! );
//! assert_eq!(root.get(Keys::Animal).get_enum_case::<Animal>()?, Animal::Dog);
//! assert!(root.get(Keys::Count).get_string().is_err());
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use core::{
    ConversionError, Context, Converter, DefaultConverter, DocumentError, JsonNumber, KeySource,
    Number, RawMap, RawValue, Result, UNKNOWN_KEY,
};

// Conversion hook and built-in conversions
pub mod convert;

pub use convert::{FormatCache, FormattedDateConverter, FromJson, RFC3339_FORMAT};

// Typed accessors
pub mod access;

pub use access::{ArrayPolicy, JsonEnum, ObjectNode, ValueNode};

// Decoding
pub mod encoding;

pub use encoding::JsonDecoder;

pub mod config;
pub mod document;

pub use config::{AccessConfig, ConfigError, DateConfig};
pub use document::Document;

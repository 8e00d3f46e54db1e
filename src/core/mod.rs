// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout keyjson.
//!
//! This module provides the foundational types for the library:
//! - [`ConversionError`] - the two failures of key access
//! - [`RawValue`] - untyped JSON value model
//! - [`JsonNumber`] - canonical number to fixed-width type conversion
//! - [`KeySource`] - closed key vocabularies
//! - [`Converter`] - converter tags selecting decode strategies

pub mod converter;
pub mod error;
pub mod key;
pub mod number;
pub mod value;

pub use converter::{Context, Converter, DefaultConverter};
pub use error::{ConversionError, DocumentError, Result, UNKNOWN_KEY};
pub use key::KeySource;
pub use number::JsonNumber;
pub use value::{Number, RawMap, RawValue};

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Input decoding.
//!
//! - [`json`] - JSON text to [`crate::RawValue`]

pub mod json;

pub use json::JsonDecoder;

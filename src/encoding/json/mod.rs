// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON decoder module.
//!
//! The parser boundary: JSON text in, [`crate::RawValue`] out.

pub mod decoder;

pub use decoder::JsonDecoder;

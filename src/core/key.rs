// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Closed key vocabularies.
//!
//! Objects are indexed by a [`KeySource`] rather than free-form strings, so
//! the set of keys a view can ask for is fixed at compile time.

/// A closed set of tokens, each mapping to one JSON object key.
pub trait KeySource {
    /// The JSON key this token stands for.
    fn key_value(&self) -> &'static str;
}

/// Declares an enum implementing [`KeySource`].
///
/// Each variant maps to the string literal after `=>`.
///
/// ```
/// keyjson::key_source! {
///     pub enum ProfileKeys {
///         Name => "name",
///         CreatedAt => "created_at",
///     }
/// }
///
/// use keyjson::KeySource;
/// assert_eq!(ProfileKeys::CreatedAt.key_value(), "created_at");
/// ```
#[macro_export]
macro_rules! key_source {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $key:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),*
        }

        impl $crate::KeySource for $name {
            fn key_value(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),*
                }
            }
        }
    };
}

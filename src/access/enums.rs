// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Enum decoding via an underlying raw value.

use super::array::{collect_with_policy, ArrayPolicy};
use super::node::ValueNode;
use crate::convert::FromJson;
use crate::core::Converter;

/// An enum whose cases are identified by a raw value.
pub trait JsonEnum: Sized {
    /// The underlying raw type (an integer, `String`, ...).
    type Raw;

    /// The case whose raw value equals `raw`, if any.
    fn from_raw(raw: &Self::Raw) -> Option<Self>;
}

/// Declares an enum implementing [`JsonEnum`].
///
/// ```
/// keyjson::json_enum! {
///     pub enum Animal: i64 {
///         Cat = 0,
///         Dog = 1,
///         Fish = 2,
///     }
/// }
///
/// use keyjson::JsonEnum;
/// assert_eq!(Animal::from_raw(&1), Some(Animal::Dog));
/// assert_eq!(Animal::from_raw(&7), None);
/// ```
#[macro_export]
macro_rules! json_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $raw:ty {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),*
        }

        impl $crate::JsonEnum for $name {
            type Raw = $raw;

            fn from_raw(raw: &Self::Raw) -> ::core::option::Option<Self> {
                $(
                    if *raw == $value {
                        return ::core::option::Option::Some($name::$variant);
                    }
                )*
                ::core::option::Option::None
            }
        }
    };
}

impl<'a, K, C: Converter> ValueNode<'a, K, C> {
    /// Decode an enum case from its raw value.
    ///
    /// `None` if the raw value does not convert to `T::Raw` or matches no
    /// case. There is no implicit default case.
    pub fn enum_case<T>(&self) -> Option<T>
    where
        T: JsonEnum,
        T::Raw: FromJson<'a, C>,
    {
        let raw: T::Raw = self.decode()?;
        T::from_raw(&raw)
    }

    /// Decode an array of enum cases, all-or-nothing.
    pub fn enum_array<T>(&self) -> Option<Vec<T>>
    where
        T: JsonEnum,
        T::Raw: FromJson<'a, C>,
    {
        self.enum_array_with(ArrayPolicy::Atomic)
    }

    /// Decode an array of enum cases under `policy`.
    ///
    /// The policy applies twice: first when converting elements to
    /// `T::Raw`, then when matching raw values to cases.
    pub fn enum_array_with<T>(&self, policy: ArrayPolicy) -> Option<Vec<T>>
    where
        T: JsonEnum,
        T::Raw: FromJson<'a, C>,
    {
        let raws: Vec<T::Raw> = self.array_with(policy)?;
        collect_with_policy(raws.iter(), policy, self.key(), T::from_raw)
    }

    /// Decode an array of enum cases under `policy`, or an empty list when
    /// that fails.
    pub fn enum_array_or_empty<T>(&self, policy: ArrayPolicy) -> Vec<T>
    where
        T: JsonEnum,
        T::Raw: FromJson<'a, C>,
    {
        self.enum_array_with(policy).unwrap_or_default()
    }
}

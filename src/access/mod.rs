// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Typed access into raw JSON.
//!
//! Flow: [`ObjectNode::get`] produces a [`ValueNode`], and one accessor family
//! turns that node into a typed result:
//!
//! | Family    | Optional            | Defaulted              | Throwing          |
//! |-----------|---------------------|------------------------|-------------------|
//! | primitive | `int`, `string`, .. | -                      | `get_int`, ..     |
//! | number    | `number`            | `number_or_zero`       | `get_number`      |
//! | array     | `array_with`        | `array_or_empty`       | `get_array`       |
//! | enum      | `enum_case`         | `enum_array_or_empty`  | `get_enum_case`   |
//! | object    | `object`            | -                      | `get_object`      |
//! | custom    | `decode`            | -                      | `get_decoded`     |

pub mod array;
pub mod enums;
pub mod node;
pub mod object;
pub mod throwing;

pub use array::ArrayPolicy;
pub use enums::JsonEnum;
pub use node::ValueNode;
pub use object::ObjectNode;

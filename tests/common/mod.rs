// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use keyjson::{json_enum, key_source, Document};

// ============================================================================
// Fixture
// ============================================================================

/// Document shared by the access, number, converter and throwing tests.
pub const FIXTURE: &str = r#"{
    "integer": 7,
    "decimal": 12.345,
    "dates": [1472722906, 1472722907],
    "string": "Hello World",
    "bool": true,
    "dictionary": {"food": "pizza", "count": 3},
    "numbers": [5, 10, 15],
    "strings": ["foo", "bar", "bacon"],
    "animals": [0, 2, 1],
    "animal": 1,
    "decimals": [1.23, 5.55, 9.0],
    "subjects": [
        {"food": "soup", "count": 1},
        {"food": "salad", "count": 2}
    ],
    "timelineDate": ["2016-09-02T02:09:01+00:00"],
    "mixed": [1, "x", 3],
    "nothing": null
}"#;

/// Parse [`FIXTURE`].
pub fn fixture() -> Document {
    FIXTURE.parse().expect("fixture is a JSON object")
}

// ============================================================================
// Vocabularies
// ============================================================================

key_source! {
    pub enum TestKeys {
        Integer => "integer",
        Decimal => "decimal",
        Dates => "dates",
        String => "string",
        Bool => "bool",
        Dictionary => "dictionary",
        Numbers => "numbers",
        Strings => "strings",
        Animals => "animals",
        Animal => "animal",
        Decimals => "decimals",
        Subjects => "subjects",
        TimelineDate => "timelineDate",
        Mixed => "mixed",
        Nothing => "nothing",
        InvalidKey => "invalidKey",
        Food => "food",
    }
}

key_source! {
    pub enum DictionaryKeys {
        Food => "food",
        Count => "count",
    }
}

json_enum! {
    pub enum Animal: i64 {
        Cat = 0,
        Dog = 1,
        Fish = 2,
    }
}

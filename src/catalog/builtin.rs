// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in catalog: the language-picker names added to the app's five
//! localized maps.
//!
//! ## Adding a language
//!
//! 1. Create a `const XX: &[(&str, &str)]` table below with the same keys
//!    as `EN`, in the same order
//! 2. Add `("xx", XX)` to `LANGUAGES`

use super::Catalog;

const EN: &[(&str, &str)] = &[
    ("russian", "Russian"),
    ("portuguese", "Portuguese"),
    ("chinese", "Chinese"),
];

const IT: &[(&str, &str)] = &[
    ("russian", "Russo"),
    ("portuguese", "Portoghese"),
    ("chinese", "Cinese"),
];

const ES: &[(&str, &str)] = &[
    ("russian", "Ruso"),
    ("portuguese", "Portugués"),
    ("chinese", "Chino"),
];

const FR: &[(&str, &str)] = &[
    ("russian", "Russe"),
    ("portuguese", "Portugais"),
    ("chinese", "Chinois"),
];

const DE: &[(&str, &str)] = &[
    ("russian", "Russisch"),
    ("portuguese", "Portugiesisch"),
    ("chinese", "Chinesisch"),
];

/// Run order of the built-in languages.
const LANGUAGES: &[(&str, &[(&str, &str)])] = &[
    ("en", EN),
    ("it", IT),
    ("es", ES),
    ("fr", FR),
    ("de", DE),
];

pub(super) fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for &(code, table) in LANGUAGES {
        for &(key, value) in table {
            catalog.insert(code, key, value);
        }
    }
    catalog
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog: language code -> (entry key -> display string).
//!
//! Both levels are ordered. Language order is the order files are processed
//! in; key order is the order new lines appear in the insertion block. The
//! serde impls read and write plain nested maps and keep document order, so
//! a YAML or JSON catalog round-trips without reshuffling.
//!
//! Redefining a key keeps its original position and takes the new value.

mod builtin;
mod iso639;

pub use iso639::{is_known_locale, is_valid_iso639_1, language_name};

use anyhow::{bail, Result};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single key/value pair to inject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// All entries destined for one localization file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntries {
    pub code: String,
    pub entries: Vec<Entry>,
}

impl LanguageEntries {
    fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            entries: Vec::new(),
        }
    }

    fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => existing.value = value.to_string(),
            None => self.entries.push(Entry {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    languages: Vec<LanguageEntries>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five-language catalog used when no catalog file is given.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Add or overwrite `key` for language `code`, appending the language
    /// if it is new.
    pub fn insert(&mut self, code: &str, key: &str, value: &str) {
        let index = match self.languages.iter().position(|l| l.code == code) {
            Some(index) => index,
            None => {
                self.languages.push(LanguageEntries::new(code));
                self.languages.len() - 1
            }
        };
        self.languages[index].insert(key, value);
    }

    pub fn languages(&self) -> &[LanguageEntries] {
        &self.languages
    }

    pub fn get(&self, code: &str) -> Option<&LanguageEntries> {
        self.languages.iter().find(|l| l.code == code)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Restrict the catalog to `codes`, keeping catalog order.
    ///
    /// Every requested code must exist in the catalog.
    pub fn select(&self, codes: &[String]) -> Result<Catalog> {
        for code in codes {
            if self.get(code).is_none() {
                bail!("language '{}' is not in the catalog", code);
            }
        }
        let languages = self
            .languages
            .iter()
            .filter(|l| codes.contains(&l.code))
            .cloned()
            .collect();
        Ok(Catalog { languages })
    }

    /// Problems worth telling the operator about before a run.
    ///
    /// None of these stop a run: the injector handles every entry the same
    /// way regardless, but a quote or newline in a key or value produces a
    /// line the target file cannot parse.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for lang in &self.languages {
            if !is_known_locale(&lang.code) {
                warnings.push(format!(
                    "'{}' is not an ISO 639-1 language code",
                    lang.code
                ));
            }
            if lang.entries.is_empty() {
                warnings.push(format!("language '{}' has no entries", lang.code));
            }
            for entry in &lang.entries {
                if has_unsafe_chars(&entry.key) {
                    warnings.push(format!(
                        "{}: key {:?} contains a quote or newline",
                        lang.code, entry.key
                    ));
                }
                if has_unsafe_chars(&entry.value) {
                    warnings.push(format!(
                        "{}: value for '{}' contains a quote or newline",
                        lang.code, entry.key
                    ));
                }
            }
        }
        warnings
    }
}

fn has_unsafe_chars(text: &str) -> bool {
    text.contains(['\'', '\n', '\r'])
}

// ─── Ordered serde ──────────────────────────────────────────────────

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.languages.len()))?;
        for lang in &self.languages {
            map.serialize_entry(&lang.code, &EntriesRef(&lang.entries))?;
        }
        map.end()
    }
}

struct EntriesRef<'a>(&'a [Entry]);

impl Serialize for EntriesRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.key, &entry.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of language code to a map of entry key to string")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
        let mut catalog = Catalog::new();
        while let Some((code, entries)) = access.next_entry::<String, OrderedEntries>()? {
            if catalog.get(&code).is_none() {
                catalog.languages.push(LanguageEntries::new(&code));
            }
            for (key, value) in entries.0 {
                catalog.insert(&code, &key, &value);
            }
        }
        Ok(catalog)
    }
}

struct OrderedEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of entry key to string")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<OrderedEntries, A::Error> {
                let mut entries = Vec::new();
                while let Some(pair) = access.next_entry::<String, String>()? {
                    entries.push(pair);
                }
                Ok(OrderedEntries(entries))
            }

            // `en: ~` or `en: {}` in YAML both mean "no entries".
            fn visit_unit<E: serde::de::Error>(self) -> Result<OrderedEntries, E> {
                Ok(OrderedEntries(Vec::new()))
            }
        }

        deserializer.deserialize_any(EntriesVisitor)
    }
}

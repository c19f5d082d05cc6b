// SPDX-License-Identifier: PMPL-1.0-or-later

//! l10n-inject: add missing translation entries to localization files.
//!
//! Given a catalog of `language -> key -> display string`, the injector
//! visits `<base_dir>/<lang>.<ext>` for every language, works out which
//! keys the file does not mention yet, and inserts them right after an
//! anchor line such as `'german': 'German',`.
//!
//! MODULES:
//! 1. **catalog**: the ordered catalog, its built-in default and validation.
//! 2. **config**: JSON/YAML config files and CLI precedence.
//! 3. **inject**: anchor matching, missing-key scan and file patching.
//! 4. **report**: terminal summary and JSON/YAML report export.

pub mod catalog;
pub mod config;
pub mod inject;
pub mod report;
pub mod types;

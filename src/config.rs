// SPDX-License-Identifier: PMPL-1.0-or-later

//! Injector config file loading.
//!
//! A config file may set any of the run settings and replace the built-in
//! catalog:
//!
//! ```yaml
//! base_dir: lib/l10n
//! extension: dart
//! anchor: german
//! languages:
//!   en:
//!     russian: Russian
//! ```
//!
//! Precedence is CLI flag, then config file, then built-in default.

use crate::catalog::Catalog;
use crate::inject::InjectOptions;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InjectorFile {
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub anchor: Option<String>,
    #[serde(default)]
    pub languages: Option<Catalog>,
}

impl InjectorFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading injector config {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json injector config {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml injector config {}", path.display())),
            _ => Err(anyhow!(
                "unsupported injector config extension for {}",
                path.display()
            )),
        }
    }

    /// Load `path` if given, otherwise an empty config.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The file's catalog, or the built-in one.
    pub fn catalog(&self) -> Catalog {
        self.languages.clone().unwrap_or_else(Catalog::builtin)
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub anchor: Option<String>,
    pub dry_run: bool,
    pub parallel: bool,
}

/// Merge CLI overrides, config file values and defaults into run options.
pub fn resolve_options(file: &InjectorFile, overrides: Overrides) -> InjectOptions {
    let defaults = InjectOptions::default();
    InjectOptions {
        base_dir: overrides
            .base_dir
            .or_else(|| file.base_dir.clone())
            .unwrap_or(defaults.base_dir),
        extension: overrides
            .extension
            .or_else(|| file.extension.clone())
            .unwrap_or(defaults.extension),
        anchor: overrides
            .anchor
            .or_else(|| file.anchor.clone())
            .unwrap_or(defaults.anchor),
        dry_run: overrides.dry_run,
        parallel: overrides.parallel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_beats_file_beats_default() {
        let file = InjectorFile {
            base_dir: Some(PathBuf::from("from-file")),
            anchor: Some("italian".to_string()),
            ..InjectorFile::default()
        };
        let options = resolve_options(
            &file,
            Overrides {
                anchor: Some("french".to_string()),
                ..Overrides::default()
            },
        );
        assert_eq!(options.base_dir, PathBuf::from("from-file"));
        assert_eq!(options.anchor, "french");
        assert_eq!(options.extension, "dart");
    }

    #[test]
    fn missing_languages_fall_back_to_builtin() {
        assert_eq!(InjectorFile::default().catalog(), Catalog::builtin());
    }
}

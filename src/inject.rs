// SPDX-License-Identifier: PMPL-1.0-or-later

//! Entry injection into localization files.
//!
//! For each catalog language the injector opens `<base_dir>/<code>.<ext>`,
//! finds the catalog keys whose single-quoted form (`'russian'`) does not
//! occur anywhere in the file, and inserts them as
//!
//! ```text
//!   'russian': 'Russian',
//! ```
//!
//! lines directly after the first anchor line (`'german': 'German',` by
//! default). Presence is a plain substring test: a key mentioned in a
//! comment or inside another value counts as present and is never inserted.
//!
//! Every language is handled in isolation. A missing file, a file without
//! an anchor, or an I/O failure is recorded in that language's [`Outcome`]
//! and the run moves on.

use crate::catalog::{Catalog, Entry, LanguageEntries};
use crate::types::{InjectReport, LanguageResult, Outcome};
use anyhow::{anyhow, bail, Context, Result};
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_DIR: &str = "lib/l10n";
pub const DEFAULT_EXTENSION: &str = "dart";
pub const DEFAULT_ANCHOR: &str = "german";

/// Settings for an injection run
#[derive(Debug, Clone)]
pub struct InjectOptions {
    /// Directory holding the `<code>.<ext>` files
    pub base_dir: PathBuf,
    /// File extension, with or without the leading dot
    pub extension: String,
    /// Key of the line new entries are inserted after
    pub anchor: String,
    /// Compute outcomes without writing anything
    pub dry_run: bool,
    /// Process languages on the rayon pool
    pub parallel: bool,
}

impl Default for InjectOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            anchor: DEFAULT_ANCHOR.to_string(),
            dry_run: false,
            parallel: false,
        }
    }
}

/// Result of patching one file's content in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    NothingMissing,
    AnchorMissing,
    Applied {
        content: String,
        inserted: Vec<String>,
    },
}

pub struct Injector {
    options: InjectOptions,
    anchor: Regex,
}

impl Injector {
    pub fn new(options: InjectOptions) -> Result<Self> {
        if options.anchor.is_empty() {
            bail!("anchor key must not be empty");
        }
        let anchor = anchor_pattern(&options.anchor)?;
        Ok(Self { options, anchor })
    }

    /// `<base_dir>/<code>.<ext>`
    pub fn file_path(&self, code: &str) -> PathBuf {
        let extension = self.options.extension.trim_start_matches('.');
        let file_name = if extension.is_empty() {
            code.to_string()
        } else {
            format!("{}.{}", code, extension)
        };
        self.options.base_dir.join(file_name)
    }

    /// Process every catalog language and collect the outcomes in catalog
    /// order.
    pub fn run(&self, catalog: &Catalog) -> Result<InjectReport> {
        if catalog.is_empty() {
            bail!("catalog contains no languages");
        }

        let results: Vec<LanguageResult> = if self.options.parallel {
            catalog
                .languages()
                .par_iter()
                .map(|lang| self.process(lang))
                .collect()
        } else {
            catalog
                .languages()
                .iter()
                .map(|lang| self.process(lang))
                .collect()
        };

        Ok(InjectReport {
            created_at: chrono::Utc::now().to_rfc3339(),
            base_dir: self.options.base_dir.clone(),
            dry_run: self.options.dry_run,
            results,
        })
    }

    /// Process a single language. Never fails: errors become
    /// [`Outcome::Failed`].
    pub fn process(&self, lang: &LanguageEntries) -> LanguageResult {
        let path = self.file_path(&lang.code);
        let outcome = match self.process_file(&path, &lang.entries) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Failed {
                error: format!("{:#}", e),
            },
        };
        LanguageResult {
            lang: lang.code.clone(),
            path,
            outcome,
        }
    }

    fn process_file(&self, path: &Path, entries: &[Entry]) -> Result<Outcome> {
        let exists = path
            .try_exists()
            .with_context(|| format!("checking {}", path.display()))?;
        if !exists {
            return Ok(Outcome::NotFound);
        }

        let content = read_text(path)?;
        match patch_content(&content, entries, &self.anchor) {
            Patch::NothingMissing => Ok(Outcome::NoChangesNeeded),
            Patch::AnchorMissing => Ok(Outcome::AnchorNotFound),
            Patch::Applied { content, inserted } => {
                if !self.options.dry_run {
                    fs::write(path, content.as_bytes())
                        .with_context(|| format!("writing {}", path.display()))?;
                }
                Ok(Outcome::Updated { inserted })
            }
        }
    }
}

/// Anchor line matcher for `key`: optional leading whitespace, the quoted
/// key, a colon, a quoted value (shortest match, single line) and a comma.
pub fn anchor_pattern(key: &str) -> Result<Regex> {
    let pattern = format!(r"(\s*'{}'\s*:\s*'.*?'\s*,)", regex::escape(key));
    Regex::new(&pattern).map_err(|e| anyhow!("invalid anchor pattern for '{}': {}", key, e))
}

/// Entries whose `'key'` does not occur anywhere in `content`, in catalog
/// order.
pub fn missing_entries<'a>(content: &str, entries: &'a [Entry]) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| !content.contains(&format!("'{}'", entry.key)))
        .collect()
}

/// Line ending used by `content`: CRLF if any line ends with one.
pub fn line_ending(content: &str) -> &'static str {
    if content.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// One `  'key': 'value',` line per entry, joined by `newline`, no trailing
/// newline. Values are written verbatim.
pub fn insertion_block(entries: &[&Entry], newline: &str) -> String {
    entries
        .iter()
        .map(|entry| format!("  '{}': '{}',", entry.key, entry.value))
        .collect::<Vec<_>>()
        .join(newline)
}

/// Insert the missing `entries` after the first `anchor` match, keeping the
/// file's line ending.
pub fn patch_content(content: &str, entries: &[Entry], anchor: &Regex) -> Patch {
    let missing = missing_entries(content, entries);
    if missing.is_empty() {
        return Patch::NothingMissing;
    }

    let Some(found) = anchor.find(content) else {
        return Patch::AnchorMissing;
    };

    let newline = line_ending(content);
    let block = insertion_block(&missing, newline);
    let mut patched = String::with_capacity(content.len() + block.len() + newline.len());
    patched.push_str(&content[..found.end()]);
    patched.push_str(newline);
    patched.push_str(&block);
    patched.push_str(&content[found.end()..]);

    Patch::Applied {
        content: patched,
        inserted: missing.iter().map(|entry| entry.key.clone()).collect(),
    }
}

/// Read `path` as strict UTF-8. A byte-order mark is kept as U+FEFF so it is
/// written back unchanged.
fn read_text(path: &Path) -> Result<String> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    encoding_rs::UTF_8
        .decode_without_bom_handling_and_without_replacement(&raw)
        .map(|text| text.into_owned())
        .ok_or_else(|| anyhow!("{} is not valid UTF-8", path.display()))
}

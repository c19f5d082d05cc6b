// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core types for l10n-inject

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to one language's file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The localization file does not exist. Nothing was created.
    NotFound,
    /// Every catalog key already occurs in the file.
    NoChangesNeeded,
    /// Keys are missing but the file has no anchor line. Not modified.
    AnchorNotFound,
    /// Missing keys were inserted after the anchor (or would have been, in
    /// a dry run).
    Updated { inserted: Vec<String> },
    /// Reading, decoding or writing the file failed.
    Failed { error: String },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::NotFound => "not found",
            Outcome::NoChangesNeeded => "no changes needed",
            Outcome::AnchorNotFound => "anchor not found",
            Outcome::Updated { .. } => "updated",
            Outcome::Failed { .. } => "failed",
        }
    }
}

/// Result for a single catalog language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageResult {
    pub lang: String,
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Complete run report, one result per catalog language in catalog order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectReport {
    pub created_at: String,
    pub base_dir: PathBuf,
    pub dry_run: bool,
    pub results: Vec<LanguageResult>,
}

impl InjectReport {
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_failure()).count()
    }

    /// Process exit status for this run: 1 if any language failed.
    pub fn exit_status(&self) -> u8 {
        if self.failure_count() > 0 {
            1
        } else {
            0
        }
    }

    pub fn updated_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Updated { .. }))
            .count()
    }

    pub fn inserted_count(&self) -> usize {
        self.results
            .iter()
            .map(|r| match &r.outcome {
                Outcome::Updated { inserted } => inserted.len(),
                _ => 0,
            })
            .sum()
    }

    pub fn outcome_for(&self, lang: &str) -> Option<&Outcome> {
        self.results
            .iter()
            .find(|r| r.lang == lang)
            .map(|r| &r.outcome)
    }
}

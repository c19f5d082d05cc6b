// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for exported run reports

use crate::types::InjectReport;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    /// Format implied by a file name, JSON when the extension says nothing.
    pub fn for_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
            .unwrap_or(ReportOutputFormat::Json)
    }

    pub fn serialize(&self, report: &InjectReport) -> Result<String> {
        self.serialize_value(report)
    }

    /// Serialize anything in this format (the `catalog` subcommand prints
    /// the effective catalog through here).
    pub fn serialize_value<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

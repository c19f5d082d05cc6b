// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run report printing and export

pub mod formatter;
pub mod output;

use crate::types::InjectReport;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// Print report to console
pub fn print_report(report: &InjectReport, quiet: bool) {
    ReportFormatter::new(quiet).print(report);
}

/// Write the report to `path`, creating parent directories as needed
pub fn save_report(report: &InjectReport, path: &Path, format: ReportOutputFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let content = format.serialize(report)?;
    fs::write(path, content).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}

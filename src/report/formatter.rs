// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal output for injection runs

use crate::catalog::language_name;
use crate::types::*;
use colored::*;

pub struct ReportFormatter {
    quiet: bool,
}

impl ReportFormatter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn print(&self, report: &InjectReport) {
        if !self.quiet {
            let title = if report.dry_run {
                "=== L10N-INJECT PLAN (dry run) ==="
            } else {
                "=== L10N-INJECT ==="
            };
            println!("\n{}", title.bold().cyan());
            println!("  Directory: {}", report.base_dir.display());
            println!();

            for result in &report.results {
                self.print_result(result, report.dry_run);
            }
            println!();
        }

        self.print_totals(report);
    }

    fn print_result(&self, result: &LanguageResult, dry_run: bool) {
        let file_name = result
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| result.path.display().to_string());
        let lang = match language_name(&result.lang) {
            Some(name) => format!("{} ({})", result.lang, name),
            None => result.lang.clone(),
        };

        match &result.outcome {
            Outcome::Updated { inserted } => {
                let verb = if dry_run { "would add" } else { "added" };
                println!(
                    "  {:<16} {:<18} {}: {}",
                    lang,
                    file_name,
                    verb.green().bold(),
                    inserted.join(", ")
                );
            }
            Outcome::NoChangesNeeded => {
                println!("  {:<16} {:<18} {}", lang, file_name, result.outcome.label().dimmed());
            }
            Outcome::NotFound => {
                println!(
                    "  {:<16} {:<18} {}",
                    lang,
                    file_name,
                    "skipped: not found".dimmed()
                );
            }
            Outcome::AnchorNotFound => {
                println!("  {:<16} {:<18} {}", lang, file_name, result.outcome.label().yellow());
            }
            Outcome::Failed { error } => {
                println!("  {:<16} {:<18} {} {}", lang, file_name, "FAILED".red().bold(), error);
            }
        }
    }

    fn print_totals(&self, report: &InjectReport) {
        let failures = report.failure_count();
        let failures_text = if failures > 0 {
            failures.to_string().red().bold()
        } else {
            failures.to_string().normal()
        };
        println!(
            "Languages: {}  |  Updated: {}  |  Keys inserted: {}  |  Failed: {}",
            report.results.len(),
            report.updated_count(),
            report.inserted_count(),
            failures_text
        );
    }
}

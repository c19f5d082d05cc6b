// SPDX-License-Identifier: PMPL-1.0-or-later

//! l10n-inject: add missing translation entries to per-language
//! localization files, right after a known anchor line.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use l10n_inject::catalog::Catalog;
use l10n_inject::config::{self, InjectorFile, Overrides};
use l10n_inject::inject::Injector;
use l10n_inject::report::{self, ReportOutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "l10n-inject")]
#[command(version)]
#[command(about = "Inject missing translation entries into localization files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert missing entries and write the files back
    Inject {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Show which entries would be inserted without writing anything
    Plan {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Print the effective catalog
    Catalog {
        /// Injector config file (JSON or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: ReportOutputFormat,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Injector config file (JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing the localization files
    #[arg(short, long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Localization file extension (default: dart)
    #[arg(short, long)]
    extension: Option<String>,

    /// Key of the line new entries go after (default: german)
    #[arg(short, long)]
    anchor: Option<String>,

    /// Only process these languages
    #[arg(short, long, value_delimiter = ',')]
    lang: Option<Vec<String>>,

    /// Process languages in parallel
    #[arg(long)]
    parallel: bool,

    /// Save the run report to a file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report file format (default: from the output extension)
    #[arg(short, long, value_enum)]
    format: Option<ReportOutputFormat>,

    /// Only print the totals line
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inject { run } => execute(run, false),
        Commands::Plan { run } => execute(run, true),
        Commands::Catalog { config, format } => {
            let file = InjectorFile::load_optional(config.as_deref())?;
            let catalog = file.catalog();
            warn_catalog(&catalog);
            print!("{}", format.serialize_value(&catalog)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn execute(args: RunArgs, dry_run: bool) -> Result<ExitCode> {
    let file = InjectorFile::load_optional(args.config.as_deref())?;
    let mut catalog = file.catalog();
    if let Some(codes) = &args.lang {
        catalog = catalog.select(codes)?;
    }
    warn_catalog(&catalog);

    let options = config::resolve_options(
        &file,
        Overrides {
            base_dir: args.base_dir,
            extension: args.extension,
            anchor: args.anchor,
            dry_run,
            parallel: args.parallel,
        },
    );
    let injector = Injector::new(options)?;
    let inject_report = injector.run(&catalog)?;

    report::print_report(&inject_report, args.quiet);

    if let Some(output_path) = args.output {
        let format = args
            .format
            .unwrap_or_else(|| ReportOutputFormat::for_path(&output_path));
        report::save_report(&inject_report, &output_path, format)?;
        println!("Report saved to: {}", output_path.display());
    }

    Ok(ExitCode::from(inject_report.exit_status()))
}

fn warn_catalog(catalog: &Catalog) {
    for warning in catalog.validate() {
        eprintln!("warning: {}", warning);
    }
}

//! CLI Adapter.

mod args;

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::app::api;
use crate::app::commands::build::BuildReport;
use crate::app::config::{DEFAULT_LOG_FILTER, LOG_ENV};
use crate::domain::{AppError, BuildOptions};

pub use args::retain_known_args;

#[derive(Parser, Debug)]
#[command(name = "polgen")]
#[command(version)]
#[command(
    about = "Build legal and policy pages for a site from placeholder templates",
    long_about = None
)]
struct Cli {
    /// Template directory; generated pages are written here
    #[arg(long, value_name = "DIR", value_parser = trimmed_path)]
    dir: PathBuf,
    /// JSON manifest listing defaults, placeholders and files
    #[arg(long, value_name = "FILE")]
    manifest: PathBuf,
    /// Root of the target site
    #[arg(long, value_name = "DIR", value_parser = trimmed_path)]
    site_root: PathBuf,
    /// Effective date printed in the pages (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    effective_date: Option<String>,
    /// Court district for jurisdiction clauses
    #[arg(long, value_name = "NAME")]
    court_district: Option<String>,
    /// Robots directive sent with every page (defaults to index,follow)
    #[arg(long, value_name = "POLICY")]
    index_policy: Option<String>,
    /// Render pages without writing them
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn into_options(self) -> BuildOptions {
        BuildOptions {
            template_dir: self.dir,
            manifest_path: self.manifest,
            site_root: self.site_root,
            effective_date: self.effective_date,
            court_district: self.court_district,
            index_policy: self.index_policy,
            dry_run: self.dry_run,
        }
    }
}

fn trimmed_path(value: &str) -> Result<PathBuf, String> {
    let trimmed = value.trim_end_matches('/');
    if trimmed.is_empty() && !value.is_empty() {
        return Ok(PathBuf::from("/"));
    }
    if trimmed.is_empty() {
        return Err("path must not be empty".to_string());
    }
    Ok(PathBuf::from(trimmed))
}

/// Parse raw arguments into build options.
///
/// Help and version requests print and exit immediately.
pub fn parse_args<I>(raw: I) -> Result<BuildOptions, AppError>
where
    I: IntoIterator<Item = String>,
{
    let args = retain_known_args(raw, &Cli::command());
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli.into_options()),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let rendered = err.render().to_string();
            let message = rendered.trim_end();
            Err(AppError::usage_error(message.strip_prefix("error: ").unwrap_or(message)))
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();

    let result = parse_args(std::env::args()).and_then(|options| {
        let report = api::build(&options)?;
        print_report(&options, &report);
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if matches!(e, AppError::Usage(_)) && !e.to_string().contains("Usage:") {
            eprintln!("\n{}", Cli::command().render_usage());
        }
        std::process::exit(e.exit_code());
    }
}

fn print_report(options: &BuildOptions, report: &BuildReport) {
    let dir = options.template_dir.display();
    if report.dry_run {
        println!("Injected placeholders in {} files under {}", report.processed(), dir);
    } else {
        println!("Built {} files under {}", report.processed(), dir);
    }
    for page in &report.pages {
        println!("  • {} → {}", page.slug, page.path.display());
    }
    let missing = report.missing_templates().count();
    if missing > 0 {
        println!("⚠️  {} template(s) missing", missing);
    }
}

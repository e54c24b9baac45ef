//! polgen: build legal and policy pages for a site from placeholder templates.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::commands::build::{BuildReport, BuiltPage, SkipReason, SkippedEntry};
pub use app::config::RuntimeConfig;
pub use domain::{AppError, BuildOptions};

/// Build every page listed in the manifest, reading `POLGEN_WP_CLI` from the environment.
///
/// Returns a `BuildReport` describing written (or, in dry-run mode, rendered) pages
/// and skipped entries.
pub fn build(options: &BuildOptions) -> Result<BuildReport, AppError> {
    app::api::build(options)
}

/// Build with explicit runtime configuration instead of the process environment.
pub fn build_with_config(
    options: &BuildOptions,
    config: &RuntimeConfig,
) -> Result<BuildReport, AppError> {
    app::api::build_with_config(options, config)
}

//! Library entry points wiring the filesystem and site CLI adapters.

use chrono::Local;

use crate::adapters::{FilesystemPageStore, WpCliSiteConfig};
use crate::app::AppContext;
use crate::app::commands::build::{self, BuildReport};
use crate::app::config::RuntimeConfig;
use crate::domain::overrides::load_overrides;
use crate::domain::site::override_file;
use crate::domain::{
    AppError, BuildOptions, Manifest, PlaceholderMap, PlaceholderSources, SiteContext,
};
use crate::ports::{SiteConfig, UnavailableSiteConfig};

/// Build every page listed in the manifest named by `options`.
pub fn build(options: &BuildOptions) -> Result<BuildReport, AppError> {
    build_with_config(options, &RuntimeConfig::from_env())
}

/// Build with explicit runtime configuration.
pub fn build_with_config(
    options: &BuildOptions,
    config: &RuntimeConfig,
) -> Result<BuildReport, AppError> {
    validate_paths(options)?;
    let manifest = Manifest::load(&options.manifest_path)?;

    let site = SiteContext::probe(&options.site_root);
    tracing::info!(
        site_root = %site.site_root.display(),
        live = site.is_live(),
        commerce = site.commerce,
        "probed site"
    );

    let site_config: Box<dyn SiteConfig> = match &site.live_root {
        Some(live_root) => Box::new(WpCliSiteConfig::new(config.wp_cli.clone(), live_root.clone())),
        None => Box::new(UnavailableSiteConfig),
    };

    let ctx = AppContext::new(FilesystemPageStore::new(options.template_dir.clone()), site_config);

    let overrides = load_overrides(&override_file(&options.site_root));
    let cli = options.cli_values(&manifest, Local::now().date_naive());
    let placeholders = PlaceholderMap::build(&PlaceholderSources {
        manifest: &manifest,
        cli: &cli,
        site: &site,
        site_config: ctx.site_config(),
        overrides: overrides.as_ref(),
    });
    tracing::debug!(
        keys = placeholders.substitution_keys().len(),
        overrides = overrides.is_some(),
        "resolved placeholders"
    );

    build::execute(&ctx, &manifest, &site, &placeholders, options.dry_run)
}

fn validate_paths(options: &BuildOptions) -> Result<(), AppError> {
    if !options.template_dir.is_dir() {
        return Err(AppError::usage_error(format!(
            "--dir is not a directory: {}",
            options.template_dir.display()
        )));
    }
    if !options.site_root.is_dir() {
        return Err(AppError::usage_error(format!(
            "--site-root is not a directory: {}",
            options.site_root.display()
        )));
    }
    Ok(())
}

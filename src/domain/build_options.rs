use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::manifest::Manifest;
use crate::domain::placeholders::{CliValues, INDEX_POLICY};

pub const DEFAULT_INDEX_POLICY: &str = "index,follow";
pub const DEFAULT_COURT_DISTRICT: &str = "ת״א";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Options for one build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Template source directory; generated pages are written here too.
    pub template_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub site_root: PathBuf,
    pub effective_date: Option<String>,
    pub court_district: Option<String>,
    pub index_policy: Option<String>,
    /// Render everything but write nothing.
    pub dry_run: bool,
}

impl BuildOptions {
    pub fn new(template_dir: PathBuf, manifest_path: PathBuf, site_root: PathBuf) -> Self {
        Self {
            template_dir,
            manifest_path,
            site_root,
            effective_date: None,
            court_district: None,
            index_policy: None,
            dry_run: false,
        }
    }

    /// Resolve the CLI-level placeholder values.
    ///
    /// The index policy falls back to the manifest's `INDEX_POLICY` default before
    /// the built-in value.
    pub fn cli_values(&self, manifest: &Manifest, today: NaiveDate) -> CliValues {
        let effective_date =
            explicit(&self.effective_date).unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
        let index_policy = explicit(&self.index_policy)
            .or_else(|| manifest.default_for(INDEX_POLICY).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_INDEX_POLICY.to_string());
        let court_district =
            explicit(&self.court_district).unwrap_or_else(|| DEFAULT_COURT_DISTRICT.to_string());
        CliValues { effective_date, index_policy, court_district }
    }
}

fn explicit(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

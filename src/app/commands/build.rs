//! Build command: render every manifest entry into a page under the template directory.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::placeholders::INDEX_POLICY;
use crate::domain::substitution::render_body;
use crate::domain::{
    AppError, FileEntry, Manifest, PageShell, PlaceholderMap, Requirement, SiteContext,
};
use crate::ports::{PageStore, SiteConfig};

/// Prefix of every generated page file name.
pub const OUTPUT_PREFIX: &str = "__build_";
pub const OUTPUT_EXTENSION: &str = "php";

/// `__build_<slug>.php`
pub fn output_file_name(slug: &str) -> String {
    format!("{}{}.{}", OUTPUT_PREFIX, slug, OUTPUT_EXTENSION)
}

/// A page rendered by this run. In dry-run mode `path` was not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPage {
    pub src: String,
    pub slug: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Entry requires the commerce extension, which is not installed.
    CommerceMissing,
    /// Source template does not exist.
    MissingTemplate(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub src: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildReport {
    pub pages: Vec<BuiltPage>,
    pub skipped: Vec<SkippedEntry>,
    pub dry_run: bool,
}

impl BuildReport {
    /// Number of entries rendered, whether or not they were written.
    pub fn processed(&self) -> usize {
        self.pages.len()
    }

    pub fn missing_templates(&self) -> impl Iterator<Item = &PathBuf> {
        self.skipped.iter().filter_map(|entry| match &entry.reason {
            SkipReason::MissingTemplate(path) => Some(path),
            SkipReason::CommerceMissing => None,
        })
    }
}

/// Render and write every entry of `manifest`, in order.
///
/// Missing templates and unmet requirements skip their entry. A write failure
/// aborts the run; pages already written stay on disk.
pub fn execute<S: PageStore, C: SiteConfig>(
    ctx: &AppContext<S, C>,
    manifest: &Manifest,
    site: &SiteContext,
    placeholders: &PlaceholderMap,
    dry_run: bool,
) -> Result<BuildReport, AppError> {
    let mut report = BuildReport { dry_run, ..BuildReport::default() };
    tracing::debug!(
        dir = %ctx.pages().root().display(),
        entries = manifest.files.len(),
        dry_run,
        "building pages"
    );

    for entry in &manifest.files {
        if let Some(reason) = gate(entry, site) {
            tracing::info!(src = %entry.src, "skipping entry: commerce extension not installed");
            report.skipped.push(SkippedEntry { src: entry.src.clone(), reason });
            continue;
        }

        if !ctx.pages().template_exists(&entry.src) {
            let path = ctx.pages().resolve_path(&entry.src);
            let err = AppError::MissingTemplate { path: path.clone() };
            tracing::warn!("{}", err);
            report
                .skipped
                .push(SkippedEntry { src: entry.src.clone(), reason: SkipReason::MissingTemplate(path) });
            continue;
        }

        let page = render_entry(ctx.pages(), entry, placeholders)?;
        report.pages.push(page_output(ctx.pages(), entry, &page, dry_run)?);
    }

    Ok(report)
}

fn gate(entry: &FileEntry, site: &SiteContext) -> Option<SkipReason> {
    match entry.requirement() {
        Some(Requirement::Commerce) if !site.commerce => Some(SkipReason::CommerceMissing),
        Some(Requirement::Other(tag)) => {
            tracing::warn!(src = %entry.src, requires = %tag, "unknown requirement; building anyway");
            None
        }
        _ => None,
    }
}

fn render_entry<S: PageStore>(
    pages: &S,
    entry: &FileEntry,
    placeholders: &PlaceholderMap,
) -> Result<String, AppError> {
    let template = pages.read_template(&entry.src)?;
    let body = render_body(&template, placeholders);
    let slug = entry.slug();

    PageShell { slug: &slug, index_policy: placeholders.get(INDEX_POLICY), body: &body }
        .render()
        .map_err(|err| AppError::Render { slug: slug.clone(), reason: err.to_string() })
}

fn page_output<S: PageStore>(
    pages: &S,
    entry: &FileEntry,
    page: &str,
    dry_run: bool,
) -> Result<BuiltPage, AppError> {
    let slug = entry.slug();
    let name = output_file_name(&slug);
    let path = if dry_run {
        pages.resolve_path(&name)
    } else {
        let path = pages.write_page(&name, page)?;
        tracing::debug!(path = %path.display(), "wrote page");
        path
    };
    Ok(BuiltPage { src: entry.src.clone(), slug, path })
}

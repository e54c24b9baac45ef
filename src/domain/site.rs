//! Target site layout: bootstrap detection, commerce detection and fallback identity.

use std::path::{Path, PathBuf};

/// Bootstrap file marking a live site installation.
pub const BOOTSTRAP_FILE: &str = "wp-config.php";

/// Loader the page shell requires at runtime.
pub const LOADER_FILE: &str = "wp-load.php";

/// Site-local override file name, relative to the site root.
pub const OVERRIDE_FILE: &str = "policy-overrides.json";

const NESTED_ROOT: &str = "public_html";
const COMMERCE_PLUGIN_DIR: &str = "wp-content/plugins/woocommerce";

/// `<site-root>/policy-overrides.json`
pub fn override_file(site_root: &Path) -> PathBuf {
    site_root.join(OVERRIDE_FILE)
}

/// Locate the live installation under `site_root`, checking the root and then `public_html/`.
pub fn find_live_root(site_root: &Path) -> Option<PathBuf> {
    [site_root.to_path_buf(), site_root.join(NESTED_ROOT)]
        .into_iter()
        .find(|candidate| candidate.join(BOOTSTRAP_FILE).is_file())
}

/// Whether the commerce plugin is installed below `root`.
pub fn has_commerce(root: &Path) -> bool {
    root.join(COMMERCE_PLUGIN_DIR).is_dir()
}

/// Result of probing a site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    pub site_root: PathBuf,
    /// Directory holding the bootstrap file, when a live installation was found.
    pub live_root: Option<PathBuf>,
    pub commerce: bool,
}

impl SiteContext {
    /// Probe `site_root`. Never fails; absent markers only disable features.
    pub fn probe(site_root: &Path) -> Self {
        let live_root = find_live_root(site_root);
        let commerce_root = live_root.as_deref().unwrap_or(site_root);
        let commerce = has_commerce(commerce_root);
        Self { site_root: site_root.to_path_buf(), live_root, commerce }
    }

    pub fn is_live(&self) -> bool {
        self.live_root.is_some()
    }

    pub fn identity(&self) -> SiteIdentity {
        SiteIdentity::from_site_root(&self.site_root)
    }
}

/// Business identity synthesized from the site root's directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    pub business_name: String,
    pub site_url: String,
    pub email: String,
}

impl SiteIdentity {
    pub fn from_site_root(site_root: &Path) -> Self {
        let domain =
            site_root.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
        Self::from_domain(&domain)
    }

    pub fn from_domain(domain: &str) -> Self {
        let label = domain.split('.').find(|part| !part.is_empty()).unwrap_or("");
        let business_name = label.replace(['-', '_'], " ");
        let site_url = if domain.is_empty() { String::new() } else { format!("https://{}", domain) };
        Self { business_name, site_url, email: String::new() }
    }
}

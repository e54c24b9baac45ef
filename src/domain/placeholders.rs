//! Resolved placeholder values and the layered precedence that produces them.
//!
//! Layers, lowest first:
//!
//! 1. built-in defaults and the identity synthesized from the site root,
//! 2. manifest `defaults`,
//! 3. live site options (only when a live installation was detected),
//! 4. CLI-level fields (`EFFECTIVE_DATE`, `INDEX_POLICY`, `COURT_DISTRICT`),
//! 5. the site-local override file.
//!
//! Every key listed in the manifest resolves to a string, possibly empty.

use std::collections::BTreeMap;

use crate::domain::manifest::Manifest;
use crate::domain::overrides::Overrides;
use crate::domain::site::SiteContext;
use crate::ports::SiteConfig;

pub const BUSINESS_NAME: &str = "BUSINESS_NAME";
pub const SITE_URL: &str = "SITE_URL";
pub const EMAIL: &str = "EMAIL";
pub const EFFECTIVE_DATE: &str = "EFFECTIVE_DATE";
pub const INDEX_POLICY: &str = "INDEX_POLICY";
pub const COURT_DISTRICT: &str = "COURT_DISTRICT";

/// Fallback values for the standard policy terms.
const BUILTIN_DEFAULTS: &[(&str, &str)] = &[
    ("PHONE", ""),
    ("ADDRESS", ""),
    ("DELIVERY_HANDLE_DAYS", "2"),
    ("DELIVERY_PRICE_HOME", "35"),
    ("DELIVERY_DAYS_HOME", "3-5"),
    ("DELIVERY_PRICE_REGISTERED", "20"),
    ("DELIVERY_DAYS_REGISTERED", "5-7"),
    ("CANCEL_WITHIN_DAYS", "14"),
    ("REFUND_DAYS", "7"),
];

/// Placeholder key and the live site option it is read from.
const LIVE_OPTIONS: &[(&str, &str)] =
    &[(BUSINESS_NAME, "blogname"), (SITE_URL, "home"), (EMAIL, "admin_email")];

/// Placeholder values resolved from command-line flags and their fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliValues {
    pub effective_date: String,
    pub index_policy: String,
    pub court_district: String,
}

/// Inputs for one placeholder map.
pub struct PlaceholderSources<'a> {
    pub manifest: &'a Manifest,
    pub cli: &'a CliValues,
    pub site: &'a SiteContext,
    pub site_config: &'a dyn SiteConfig,
    pub overrides: Option<&'a Overrides>,
}

/// Immutable key to value mapping used for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMap {
    values: BTreeMap<String, String>,
    order: Vec<String>,
}

impl PlaceholderMap {
    pub fn build(sources: &PlaceholderSources<'_>) -> Self {
        let mut values: BTreeMap<String, String> = BUILTIN_DEFAULTS
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        let identity = sources.site.identity();
        values.insert(BUSINESS_NAME.to_string(), identity.business_name);
        values.insert(SITE_URL.to_string(), identity.site_url);
        values.insert(EMAIL.to_string(), identity.email);

        for key in &sources.manifest.placeholders {
            values.entry(key.clone()).or_default();
        }
        values.extend(sources.manifest.defaults.iter().map(|(k, v)| (k.clone(), v.clone())));

        if sources.site.is_live() {
            for (key, option) in LIVE_OPTIONS {
                let current = values.get(*key).cloned().unwrap_or_default();
                let mut probed = sources.site_config.option(option, &current);
                if *key == SITE_URL {
                    probed.truncate(probed.trim_end_matches('/').len());
                }
                let probed = probed.trim();
                if !probed.is_empty() {
                    values.insert(key.to_string(), probed.to_string());
                }
            }
        }

        values.insert(EFFECTIVE_DATE.to_string(), sources.cli.effective_date.clone());
        values.insert(INDEX_POLICY.to_string(), sources.cli.index_policy.clone());
        values.insert(COURT_DISTRICT.to_string(), sources.cli.court_district.clone());

        let mut order: Vec<String> = Vec::new();
        for key in &sources.manifest.placeholders {
            if !order.contains(key) {
                order.push(key.clone());
            }
        }

        if let Some(overrides) = sources.overrides {
            for (key, value) in overrides {
                values.insert(key.clone(), value.clone());
                if !order.contains(key) {
                    order.push(key.clone());
                }
            }
        }

        Self { values, order }
    }

    /// Resolved value for `key`; unknown keys resolve to the empty string.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Keys to substitute, in substitution order.
    pub fn substitution_keys(&self) -> &[String] {
        &self.order
    }

    /// `(key, value)` pairs in substitution order.
    pub fn substitutions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().map(|key| (key.as_str(), self.get(key)))
    }
}

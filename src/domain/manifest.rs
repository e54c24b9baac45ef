//! Page manifest: placeholder defaults, placeholder keys and the template file list.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::AppError;

/// Capability tag for commerce-only pages.
pub const COMMERCE_TAG: &str = "commerce";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "scalar_map")]
    pub defaults: BTreeMap<String, String>,
    #[serde(default)]
    pub placeholders: Vec<String>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    pub src: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    requires: Option<String>,
}

/// What a site must provide before an entry is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Commerce,
    Other(String),
}

impl FileEntry {
    pub fn new(src: &str, slug: Option<&str>, requires: Option<&str>) -> Self {
        Self {
            src: src.to_string(),
            slug: slug.map(str::to_string),
            requires: requires.map(str::to_string),
        }
    }

    /// Output base name; falls back to the stem of `src`.
    pub fn slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => Path::new(&self.src)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.src.clone()),
        }
    }

    pub fn requirement(&self) -> Option<Requirement> {
        let tag = self.requires.as_deref()?.trim();
        if tag.is_empty() {
            return None;
        }
        if tag == COMMERCE_TAG {
            Some(Requirement::Commerce)
        } else {
            Some(Requirement::Other(tag.to_string()))
        }
    }
}

impl Manifest {
    /// Parse and validate manifest JSON.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let manifest: Manifest = serde_json::from_str(content)
            .map_err(|e| AppError::config_error(format!("Invalid manifest: {}", e)))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read a manifest from disk. The path must be a regular file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.is_file() {
            return Err(AppError::config_error(format!(
                "Manifest not found or not a regular file: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!("Failed to read manifest {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Manifest default for `key`, if present.
    pub fn default_for(&self, key: &str) -> Option<&str> {
        self.defaults.get(key).map(String::as_str)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.placeholders.is_empty() {
            return Err(AppError::config_error("Manifest 'placeholders' is missing or empty"));
        }
        if self.files.is_empty() {
            return Err(AppError::config_error("Manifest 'files' is missing or empty"));
        }
        if let Some(key) = self.placeholders.iter().find(|key| key.trim().is_empty()) {
            return Err(AppError::config_error(format!("Invalid placeholder key '{}'", key)));
        }
        for (index, entry) in self.files.iter().enumerate() {
            if entry.src.trim().is_empty() {
                return Err(AppError::config_error(format!(
                    "Manifest file entry #{} has an empty 'src'",
                    index + 1
                )));
            }
            let slug = entry.slug();
            if slug.contains('/') || slug.contains('\\') || slug.contains("..") {
                return Err(AppError::config_error(format!(
                    "Invalid slug '{}' for '{}': must not contain path separators",
                    slug, entry.src
                )));
            }
        }
        Ok(())
    }
}

fn scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, value)| match scalar_to_string(&value) {
            Some(text) => Ok((key, text)),
            None => Err(serde::de::Error::custom(format!(
                "default '{}' must be a string, number or boolean",
                key
            ))),
        })
        .collect()
}

/// Render a JSON scalar as placeholder text.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

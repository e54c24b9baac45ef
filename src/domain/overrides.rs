//! Site-local placeholder overrides.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::domain::manifest::scalar_to_string;

/// Values from the override file, keyed by placeholder.
pub type Overrides = BTreeMap<String, String>;

/// Load the override file at `path`.
///
/// Returns `None` when the file is absent, unreadable, not JSON or not an object.
/// Non-scalar values inside the object are dropped.
pub fn load_overrides(path: &Path) -> Option<Overrides> {
    if !path.is_file() {
        return None;
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable override file");
            return None;
        }
    };
    parse_overrides(&content).or_else(|| {
        tracing::warn!(path = %path.display(), "ignoring override file: expected a JSON object");
        None
    })
}

/// Parse override JSON. `None` unless the document is an object.
pub fn parse_overrides(content: &str) -> Option<Overrides> {
    let Value::Object(object) = serde_json::from_str::<Value>(content).ok()? else {
        return None;
    };

    let mut overrides = Overrides::new();
    for (key, value) in object {
        match scalar_to_string(&value) {
            Some(text) => {
                overrides.insert(key, text);
            }
            None => tracing::warn!(key = %key, "skipping non-scalar override value"),
        }
    }
    Some(overrides)
}

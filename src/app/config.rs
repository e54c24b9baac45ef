//! Process-level configuration read from the environment.

use std::env;

/// Names the site-management CLI binary.
pub const WP_CLI_ENV: &str = "POLGEN_WP_CLI";

/// Log filter directive for diagnostics on stderr.
pub const LOG_ENV: &str = "POLGEN_LOG";

pub const DEFAULT_WP_CLI: &str = "wp";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub wp_cli: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { wp_cli: DEFAULT_WP_CLI.to_string() }
    }
}

impl RuntimeConfig {
    /// Resolve configuration: env > default.
    pub fn from_env() -> Self {
        let wp_cli = env::var(WP_CLI_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_WP_CLI.to_string());
        Self { wp_cli }
    }
}

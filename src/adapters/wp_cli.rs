use std::path::PathBuf;
use std::process::Command;

use crate::ports::SiteConfig;

/// Reads site options through the site-management CLI (`wp option get`).
#[derive(Debug, Clone)]
pub struct WpCliSiteConfig {
    program: String,
    live_root: PathBuf,
}

impl WpCliSiteConfig {
    pub fn new(program: impl Into<String>, live_root: PathBuf) -> Self {
        Self { program: program.into(), live_root }
    }

    fn run(&self, args: &[&str]) -> Option<String> {
        let mut command = Command::new(&self.program);
        command.arg(format!("--path={}", self.live_root.display())).args(args);

        let output = match command.output() {
            Ok(output) => output,
            Err(err) => {
                tracing::debug!(program = %self.program, error = %err, "site CLI unavailable");
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(
                program = %self.program,
                args = %args.join(" "),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "site CLI returned non-zero status"
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl SiteConfig for WpCliSiteConfig {
    fn option(&self, name: &str, fallback: &str) -> String {
        match self.run(&["option", "get", name]) {
            Some(value) if !value.is_empty() => value,
            _ => fallback.to_string(),
        }
    }
}

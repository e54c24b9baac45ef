use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// A stand-in for the site-management CLI answering `option get <name>`.
pub(crate) struct FakeWp {
    pub root: TempDir,
    pub program: PathBuf,
    pub log_file: PathBuf,
}

impl FakeWp {
    /// `options` are `(name, value)` pairs; values must not contain single quotes.
    pub(crate) fn new(options: &[(&str, &str)]) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake wp");
        let program = root.path().join("wp");
        let log_file = root.path().join("wp.log");

        let cases: String = options
            .iter()
            .map(|(name, value)| format!("    {}) echo '{}' ;;\n", name, value))
            .collect();

        let script_content = format!(
            r#"#!/bin/sh
echo "$@" >> "{}"

# Expected shape: --path=<root> option get <name>
[ "$2" = "option" ] && [ "$3" = "get" ] || exit 1

case "$4" in
{}    *) exit 1 ;;
esac

exit 0
"#,
            log_file.to_string_lossy(),
            cases
        );

        fs::write(&program, script_content).expect("Failed to write wp script");

        let mut perms = fs::metadata(&program).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&program, perms).expect("Failed to set permissions");

        Self { root, program, log_file }
    }

    pub(crate) fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}

use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_required_flags_exit_with_usage() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--dir")
        .arg(ctx.templates_dir())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--manifest"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn nonexistent_template_dir_is_usage_error() {
    let ctx = TestContext::new();
    ctx.write_manifest(r#"{"placeholders": ["A"], "files": [{"src": "terms.html"}]}"#);

    ctx.cli()
        .arg("--dir")
        .arg(ctx.path().join("missing"))
        .arg("--manifest")
        .arg(ctx.manifest_path())
        .arg("--site-root")
        .arg(ctx.site_root())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--dir is not a directory"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn malformed_manifest_exits_before_writing() {
    let ctx = TestContext::new();
    ctx.write_manifest(r#"{"placeholders": ["A"], "files": []}"#);
    ctx.write_template("terms.html", "terms");

    ctx.build_cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'files' is missing or empty"));

    assert!(ctx.generated_files().is_empty());
}

#[test]
fn manifest_that_is_not_a_file_exits_with_config_error() {
    let ctx = TestContext::new();
    std::fs::create_dir_all(ctx.manifest_path()).unwrap();

    ctx.build_cmd().assert().code(2).stderr(predicate::str::contains("not a regular file"));
}

#[test]
fn unwritable_output_exits_with_write_error() {
    let ctx = TestContext::new();
    ctx.write_manifest(r#"{"placeholders": ["A"], "files": [{"src": "terms.html"}]}"#);
    ctx.write_template("terms.html", "terms");
    // A directory occupying the output path fails the write even when running as root.
    std::fs::create_dir_all(ctx.output("terms").path()).unwrap();

    ctx.build_cmd()
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to write"));
}

use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn dry_run_counts_pages_without_writing() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        r#"{
            "placeholders": ["A"],
            "files": [{"src": "terms.html"}, {"src": "refund.html"}]
        }"#,
    );
    ctx.write_template("terms.html", "terms");
    ctx.write_template("refund.html", "refund");

    ctx.build_cmd()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Injected placeholders in 2 files under"))
        .stdout(predicate::str::contains("dry run").not());

    assert!(ctx.generated_files().is_empty());

    ctx.build_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Built 2 files"));

    assert_eq!(ctx.generated_files().len(), 2);
}

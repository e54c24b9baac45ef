use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn build_renders_refund_policy_example() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        r#"{
            "defaults": {"CANCEL_WITHIN_DAYS": "14"},
            "placeholders": ["CANCEL_WITHIN_DAYS"],
            "files": [{"src": "refund.html", "slug": "refund-policy"}]
        }"#,
    );
    ctx.write_template("refund.html", "Cancel within {{CANCEL_WITHIN_DAYS}} days");

    ctx.build_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Built 1 files under"));

    ctx.output("refund-policy").assert(predicate::path::is_file());
    ctx.output("refund-policy").assert(predicate::str::contains("Cancel within 14 days"));
}

#[test]
fn every_placeholder_syntax_resolves_to_same_value() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        r#"{
            "defaults": {"REFUND_DAYS": "9"},
            "placeholders": ["REFUND_DAYS"],
            "files": [{"src": "refund.html"}]
        }"#,
    );
    ctx.write_template(
        "refund.html",
        "<li>{{REFUND_DAYS}}</li><li>%%REFUND_DAYS%%</li><li>__REFUND_DAYS__</li><li>REFUND_DAYS</li>",
    );

    ctx.build_cmd().assert().success();

    assert!(
        ctx.read_output("refund")
            .contains("<li>9</li><li>9</li><li>9</li><li>9</li>")
    );
}

#[test]
fn cli_values_and_site_identity_are_substituted() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        r#"{
            "placeholders": ["BUSINESS_NAME", "SITE_URL", "EFFECTIVE_DATE", "COURT_DISTRICT"],
            "files": [{"src": "terms.html"}]
        }"#,
    );
    ctx.write_template(
        "terms.html",
        "{{BUSINESS_NAME}} | {{SITE_URL}} | {{EFFECTIVE_DATE}} | {{COURT_DISTRICT}}",
    );

    ctx.build_cmd().args(["--court-district", "Haifa", "--index-policy=noindex"]).assert().success();

    let page = ctx.read_output("terms");
    assert!(page.contains("amira clinic | https://amira-clinic.co.il | 2025-08-25 | Haifa"));
    assert!(page.contains("header('X-Robots-Tag: noindex');"));
}

#[test]
fn repeated_builds_are_byte_identical() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        r#"{"placeholders": ["BUSINESS_NAME"], "files": [{"src": "terms.html"}]}"#,
    );
    ctx.write_template("terms.html", "Terms of {{BUSINESS_NAME}}");

    ctx.build_cmd().assert().success();
    let first = ctx.read_output("terms");
    ctx.build_cmd().assert().success();
    let second = ctx.read_output("terms");

    assert_eq!(first, second);
}

#[test]
fn unknown_flags_are_ignored() {
    let ctx = TestContext::new();
    ctx.write_manifest(r#"{"placeholders": ["A"], "files": [{"src": "terms.html"}]}"#);
    ctx.write_template("terms.html", "terms");

    ctx.build_cmd().args(["--verbose", "--theme", "dark"]).assert().success();

    ctx.output("terms").assert(predicate::path::exists());
}

#[test]
fn repeated_flag_uses_first_value() {
    let ctx = TestContext::new();
    ctx.write_manifest(r#"{"placeholders": ["A"], "files": [{"src": "terms.html"}]}"#);
    ctx.write_template("terms.html", "terms");

    ctx.build_cmd()
        .args(["--index-policy", "noindex", "--index-policy=nofollow"])
        .assert()
        .success();

    assert!(ctx.read_output("terms").contains("header('X-Robots-Tag: noindex');"));
}

use crate::harness::{EFFECTIVE_DATE, TestContext};
use polgen::{AppError, BuildOptions, RuntimeConfig, SkipReason, build_with_config};

fn options(ctx: &TestContext) -> BuildOptions {
    let mut options =
        BuildOptions::new(ctx.templates_dir(), ctx.manifest_path(), ctx.site_root());
    options.effective_date = Some(EFFECTIVE_DATE.to_string());
    options
}

#[test]
fn public_api_build_happy_path_contract() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        r#"{
            "defaults": {"CANCEL_WITHIN_DAYS": 14},
            "placeholders": ["CANCEL_WITHIN_DAYS", "EFFECTIVE_DATE"],
            "files": [
                {"src": "refund.html", "slug": "refund-policy"},
                {"src": "shipping.html", "requires": "commerce"},
                {"src": "missing.html"}
            ]
        }"#,
    );
    ctx.write_template("refund.html", "Cancel within {{CANCEL_WITHIN_DAYS}} days ({{EFFECTIVE_DATE}})");
    ctx.write_template("shipping.html", "shipping");

    let report = build_with_config(&options(&ctx), &RuntimeConfig::default()).expect("build failed");

    assert!(!report.dry_run);
    assert_eq!(report.processed(), 1);
    assert_eq!(report.pages[0].slug, "refund-policy");
    assert_eq!(report.pages[0].path, ctx.output("refund-policy").path());
    assert!(ctx.read_output("refund-policy").contains("Cancel within 14 days (2025-08-25)"));

    let reasons: Vec<_> = report.skipped.iter().map(|entry| &entry.reason).collect();
    assert_eq!(reasons.len(), 2);
    assert_eq!(reasons[0], &SkipReason::CommerceMissing);
    assert_eq!(
        reasons[1],
        &SkipReason::MissingTemplate(ctx.templates_dir().join("missing.html"))
    );
}

#[test]
fn public_api_dry_run_contract() {
    let ctx = TestContext::new();
    ctx.write_manifest(r#"{"placeholders": ["A"], "files": [{"src": "terms.html"}]}"#);
    ctx.write_template("terms.html", "terms");
    let mut options = options(&ctx);
    options.dry_run = true;

    let report = build_with_config(&options, &RuntimeConfig::default()).expect("build failed");

    assert!(report.dry_run);
    assert_eq!(report.processed(), 1);
    assert!(ctx.generated_files().is_empty());
}

#[test]
fn public_api_reports_usage_and_config_errors() {
    let ctx = TestContext::new();
    ctx.write_manifest("{not json");

    let mut bad_dir = options(&ctx);
    bad_dir.template_dir = ctx.path().join("nowhere");
    let err = build_with_config(&bad_dir, &RuntimeConfig::default()).unwrap_err();
    assert!(matches!(err, AppError::Usage(_)));

    let err = build_with_config(&options(&ctx), &RuntimeConfig::default()).unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
    assert_eq!(err.exit_code(), 2);
}

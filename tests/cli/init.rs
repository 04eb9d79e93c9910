use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["includes"], serde_json::json!(["android.*"]));
    assert_eq!(parsed["excludes"], serde_json::json!(["android.icu.*"]));
    assert_eq!(parsed["modelRoot"], "./api");
    assert_eq!(parsed["reportFile"], "metalava.json");
    assert_eq!(parsed["permissionAnnotation"], "RequiresPermission");
    assert_eq!(parsed["permissionPrefix"], "android.permission.");
    assert_eq!(parsed["docCacheSize"], 1);

    assert!(
        content.contains("\n  \"includes\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    insta::assert_snapshot!(output.stdout.trim_end(), @"✓ Created .apicheckrc.json");

    assert!(test.root().join(".apicheckrc.json").exists());
    let content = test.read_file(".apicheckrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".apicheckrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(output.stderr, "error: .apicheckrc.json already exists\n");
    assert_eq!(test.read_file(".apicheckrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_loadable() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    run(cmd)?;

    test.write_file(
        "api/activity.json",
        r#"{"classes": [{"qualifiedName": "android.app.Activity", "package": "android.app"}]}"#,
    )?;
    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 class - no issues found"));

    Ok(())
}

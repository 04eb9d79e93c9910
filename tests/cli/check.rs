use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

const CLEAN_MODEL: &str = r#"{
  "classes": [{
    "qualifiedName": "android.app.Activity",
    "package": "android.app",
    "file": "android/app/Activity.java",
    "documentation": "An activity.",
    "methods": [{"name": "finish", "line": 12, "returnType": "void", "documentation": "Finishes."}]
  }]
}"#;

const TODO_MODEL: &str = r#"{
  "classes": [
    {
      "qualifiedName": "android.icu.text.Collator",
      "package": "android.icu.text",
      "methods": [{"name": "compare", "line": 3, "returnType": "int", "documentation": "TODO: remove"}]
    },
    {
      "qualifiedName": "android.app.Activity",
      "package": "android.app",
      "file": "android/app/Activity.java",
      "methods": [{"name": "finish", "line": 12, "returnType": "void", "documentation": "Finishes. TODO: explain"}]
    }
  ]
}"#;

const PERMISSION_MODEL: &str = r#"{
  "classes": [
    {
      "qualifiedName": "android.hardware.Camera",
      "package": "android.hardware",
      "imports": ["android.os.Handler"],
      "methods": [{
        "name": "open",
        "line": 20,
        "returnType": "Camera",
        "annotations": [{
          "name": "android.annotation.RequiresPermission",
          "attributes": [{"name": "anyOf", "values": ["\"A\"", "\"B\""]}]
        }],
        "parameters": [
          {"name": "id", "type": "int"},
          {"name": "handler", "type": "Handler"}
        ]
      }]
    },
    {
      "qualifiedName": "android.content.Intent",
      "package": "android.content",
      "fields": [{
        "name": "ACTION_CALL",
        "type": "String",
        "value": "android.intent.action.CALL",
        "annotations": [{
          "name": "android.annotation.RequiresPermission",
          "attributes": [{"name": "value", "values": ["Manifest.permission.CALL_PHONE"]}]
        }]
      }]
    }
  ]
}"#;

const DOC_MODEL: &str = r#"{
  "classes": [{
    "qualifiedName": "android.media.Player",
    "package": "android.media",
    "file": "android/media/Player.java",
    "methods": [{
      "name": "setMode",
      "line": 30,
      "returnType": "int",
      "documentation": "Sets the mode.\n@param mode one of MODE_FAST or MODE_SLOW\n@param tag a tag, or null\n@return the previous mode",
      "parameters": [
        {"name": "mode", "type": "int"},
        {"name": "tag", "type": "String", "annotations": [{"name": "androidx.annotation.Nullable"}]}
      ]
    }],
    "fields": [{"name": "mName", "type": "String", "line": 8, "documentation": "The name, or null"}]
  }]
}"#;

#[test]
fn test_clean_model() -> Result<()> {
    let test = CliTest::with_file("api/activity.json", CLEAN_MODEL)?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    let first_line = output.stdout.lines().next().unwrap_or_default();
    insta::assert_snapshot!(first_line, @"✓ Checked 1 class - no issues found");
    assert!(
        output
            .stdout
            .contains("Wrote permission report to metalava.json (0 method, 0 field records)")
    );

    let report: Value = serde_json::from_str(&test.read_file("metalava.json")?)?;
    assert_eq!(report, json!({"method": [], "field": []}));

    Ok(())
}

#[test]
fn test_todo_reported_only_in_checked_namespace() -> Result<()> {
    let test = CliTest::with_file("api/todo.json", TODO_MODEL)?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout.matches("Documentation mentions 'TODO'").count(), 1);
    assert!(output.stdout.contains("  --> android/app/Activity.java:12"));
    assert!(output.stdout.contains("= note: method android.app.Activity#finish()"));
    assert!(!output.stdout.contains("Collator"));
    assert!(output.stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_strict_fails_on_warnings() -> Result<()> {
    let test = CliTest::with_file("api/todo.json", TODO_MODEL)?;

    let mut cmd = test.check_command();
    cmd.arg("--strict");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(1));

    Ok(())
}

#[test]
fn test_permission_report() -> Result<()> {
    let test = CliTest::with_file("api/permissions.json", PERMISSION_MODEL)?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Wrote permission report to metalava.json (1 method, 1 field records)")
    );

    let content = test.read_file("metalava.json")?;
    assert!(content.starts_with("{\n  \"method\""));
    let report: Value = serde_json::from_str(&content)?;
    assert_eq!(
        report,
        json!({
            "method": [{
                "methodName": "open",
                "attribute": "anyOf",
                "class": "android.hardware.Camera",
                "return": "android.hardware.Camera",
                "param": ["int", "android.os.Handler"],
                "permission": ["android.permission.A", "android.permission.B"]
            }],
            "field": [{
                "fieldName": "ACTION_CALL",
                "attribute": "value",
                "class": "android.content.Intent",
                "value": "android.intent.action.CALL",
                "permission": ["android.permission.CALL_PHONE"]
            }]
        })
    );

    Ok(())
}

#[test]
fn test_report_file_override_and_no_report() -> Result<()> {
    let test = CliTest::with_file("api/permissions.json", PERMISSION_MODEL)?;

    let mut cmd = test.check_command();
    cmd.args(["--report-file", "out.json"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(test.root().join("out.json").exists());
    assert!(!test.root().join("metalava.json").exists());

    let mut cmd = test.check_command();
    cmd.arg("--no-report");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(!test.root().join("metalava.json").exists());
    assert!(!output.stdout.contains("Wrote permission report"));

    Ok(())
}

#[test]
fn test_documentation_rules() -> Result<()> {
    let test = CliTest::with_file("api/player.json", DOC_MODEL)?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains(
        "warning: Parameter 'mode' of 'setMode' documentation mentions constants without declaring an @IntDef  int-def"
    ));
    assert!(output.stdout.contains(
        "warning: Field 'mName' documentation mentions 'null' without declaring @NonNull or @Nullable  nullable"
    ));
    assert!(!output.stdout.contains("Parameter 'tag'"));
    assert!(!output.stdout.contains("Return value of 'setMode'"));
    assert!(output.stdout.contains("2 problems (0 errors, 2 warnings)"));

    Ok(())
}

#[test]
fn test_rule_selection() -> Result<()> {
    let test = CliTest::with_file("api/player.json", DOC_MODEL)?;

    let mut cmd = test.check_command();
    cmd.arg("nullable");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("nullable"));
    assert!(!output.stdout.contains("int-def"));
    assert!(!test.root().join("metalava.json").exists());

    Ok(())
}

#[test]
fn test_parse_error_fails_run() -> Result<()> {
    let test = CliTest::with_file("api/activity.json", CLEAN_MODEL)?;
    test.write_file("api/broken.json", "{ \"classes\": [")?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("broken.json"));
    assert!(output.stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_missing_model_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: Model path does not exist"));

    Ok(())
}

#[test]
fn test_model_flag_overrides_model_root() -> Result<()> {
    let test = CliTest::with_file("models/activity.json", CLEAN_MODEL)?;

    let mut cmd = test.check_command();
    cmd.args(["--model", "models/activity.json"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 class"));

    Ok(())
}

#[test]
fn test_config_namespaces() -> Result<()> {
    let test = CliTest::with_file(
        "api/widget.json",
        r#"{"classes": [
            {"qualifiedName": "com.example.Widget", "package": "com.example", "documentation": "TODO(owner): doc"},
            {"qualifiedName": "android.app.Activity", "package": "android.app", "documentation": "TODO: doc"}
        ]}"#,
    )?;
    test.write_file(
        ".apicheckrc.json",
        r#"{ "includes": ["com.example.*"], "excludes": [] }"#,
    )?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("= note: class com.example.Widget"));
    assert!(!output.stdout.contains("android.app.Activity"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file("api/activity.json", CLEAN_MODEL)?;
    test.write_file(".apicheckrc.json", r#"{ "includes": ["[invalid"] }"#)?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("includes"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("check"));
    assert!(output.stdout.contains("init"));

    Ok(())
}

use std::io::Write;
use std::process::Stdio;

use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

const ORDER_SCHEMA: &str = r#"{
    "protoPath": "order.proto",
    "goPath": "example.com/gen/order",
    "messages": [
        {
            "name": "Order",
            "fields": [
                {
                    "name": "id",
                    "goName": "Id",
                    "goIdent": "Order_Id",
                    "comments": {"leading": "@go.name=ID\n@validate.tag=\"required\""}
                }
            ]
        }
    ]
}"#;

const INVALID_DIRECTIVES_SCHEMA: &str = r#"{
    "protoPath": "order.proto",
    "goPath": "example.com/gen/order",
    "messages": [
        {
            "name": "Order",
            "fields": [
                {
                    "name": "id",
                    "comments": {"leading": "@go.name=foo", "trailing": "@json.tag=a b"}
                }
            ]
        }
    ]
}"#;

#[test]
fn test_extract_to_stdout() -> Result<()> {
    let test = CliTest::with_file("schema.json", ORDER_SCHEMA)?;

    let mut cmd = test.command();
    cmd.arg("schema.json");

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "schema": {
        "protoPath": "order.proto",
        "goPath": "example.com/gen/order",
        "messages": [
          {
            "name": "Order",
            "fields": [
              {
                "name": "id",
                "goName": "ID",
                "goIdent": "Order_ID"
              }
            ]
          }
        ]
      },
      "descriptor": {
        "protoPath": "order.proto",
        "goPath": "example.com/gen/order",
        "models": {
          "Order": {
            "name": "Order",
            "fields": {
              "ID": {
                "name": "id",
                "goName": "ID",
                "tags": [
                  {
                    "kind": "validate",
                    "value": "required"
                  }
                ]
              }
            }
          }
        }
      }
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_invalid_directives_warn_and_stay_in_comments() -> Result<()> {
    let test = CliTest::with_file("schema.json", INVALID_DIRECTIVES_SCHEMA)?;

    let mut cmd = test.command();
    cmd.arg("schema.json");

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "schema": {
        "protoPath": "order.proto",
        "goPath": "example.com/gen/order",
        "messages": [
          {
            "name": "Order",
            "fields": [
              {
                "name": "id",
                "comments": {
                  "leading": "@go.name=foo",
                  "trailing": "@json.tag=a b"
                }
              }
            ]
          }
        ]
      },
      "descriptor": {
        "protoPath": "order.proto",
        "goPath": "example.com/gen/order",
        "models": {}
      }
    }

    ----- stderr -----
    warning: skip id go name replacement, illegal value 'foo'
    warning: skip commentary tag 'json' declaration on field 'id', illegal value 'a b'
    "#);

    Ok(())
}

#[test]
fn test_quiet_suppresses_warnings() -> Result<()> {
    let test = CliTest::with_file("schema.json", INVALID_DIRECTIVES_SCHEMA)?;

    let output = test.command().args(["--quiet", "schema.json"]).output()?;

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(!output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_write_output_file() -> Result<()> {
    let test = CliTest::with_file("schema.json", ORDER_SCHEMA)?;

    let output = test
        .command()
        .args(["schema.json", "-o", "out.json"])
        .output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = test.read_file("out.json")?;
    assert!(written.ends_with('\n'));

    let envelope: Value = serde_json::from_str(&written)?;
    assert_eq!(
        envelope["schema"]["messages"][0]["fields"][0]["goIdent"],
        "Order_ID"
    );
    assert_eq!(
        envelope["descriptor"]["models"]["Order"]["fields"]["ID"]["tags"][0]["value"],
        "required"
    );

    Ok(())
}

#[test]
fn test_reads_from_stdin() -> Result<()> {
    let test = CliTest::new()?;

    let mut child = test
        .command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .context("stdin not captured")?
        .write_all(ORDER_SCHEMA.as_bytes())?;
    let output = child.wait_with_output()?;

    assert!(output.status.success());
    let envelope: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        envelope["schema"]["messages"][0]["fields"][0]["goName"],
        "ID"
    );
    assert_eq!(
        envelope["descriptor"]["models"]["Order"]["name"],
        "Order"
    );

    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("missing.json");

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: failed to read missing.json
    "#);

    Ok(())
}

#[test]
fn test_invalid_schema_json() -> Result<()> {
    let test = CliTest::with_file("schema.json", "{ this is not json")?;

    let mut cmd = test.command();
    cmd.arg("schema.json");

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: failed to parse schema JSON
    "#);

    Ok(())
}

use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .glotcsrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".glotcsrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["sourceRoot"], "src/Shell");
    assert_eq!(
        parsed["localizationFile"],
        "src/Core/Services/LocalizationService.cs"
    );
    assert_eq!(parsed["ignoreMarker"], "i18n-ignore");
    assert!(parsed["ignoreTexts"].as_array().is_some_and(|a| a.is_empty()));
    assert!(content.contains("\n  \"sourceRoot\""), "2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glotcsrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .glotcsrc.json already exists
    ");
    assert_eq!(test.read_file(".glotcsrc.json")?, "{}");

    Ok(())
}

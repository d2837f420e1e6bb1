use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_keys(&["dialog.title"])?;
    test.write_file(
        "src/Shell/MainWindow.cs",
        r#"public class MainWindow
{
    public MainWindow()
    {
        Title = L["dialog.title"];
        Name = "MainWindowRoot";
    }
}
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_hardcoded_text() -> Result<()> {
    let test = CliTest::with_keys(&["dialog.title"])?;
    test.write_file(
        "src/Shell/MainWindow.cs",
        r#"public class MainWindow
{
    public MainWindow()
    {
        Title = "Connect to server";
        _logger.LogInformation("Window created for user");
        Hint = "Not UI copy at all"; // i18n-ignore
    }
}
"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("hardcoded"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Connect to server"  hardcoded
      --> src/Shell/MainWindow.cs:5:17
      |
    5 |         Title = "Connect to server";
      |                 ^
      = hint: add // i18n-ignore on the same line or the line above if this is not UI copy

    ✘ 1 problems (1 error)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_missing_keys() -> Result<()> {
    let test = CliTest::with_keys(&["menu.file"])?;
    test.write_file(
        "src/Shell/Views/MainView.axaml",
        r#"<UserControl>
  <MenuItem Header="{Binding L[menu.file]}" />
  <MenuItem Header="{Binding L[menu.edit]}" />
</UserControl>
"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("missing"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "menu.edit"  missing-key
      --> src/Shell/Views/MainView.axaml:3:32
      |
    3 |   <MenuItem Header="{Binding L[menu.edit]}" />
      |                                ^
      = note: not found in src/Core/Services/LocalizationService.cs

    ✘ 1 problems (1 error)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_rule_selection() -> Result<()> {
    let test = CliTest::with_keys(&["menu.file"])?;
    test.write_file(
        "src/Shell/Main.cs",
        r#"Title = "Connect to server"; var k = L["menu.unknown"];"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("missing"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "menu.unknown"  missing-key
      --> src/Shell/Main.cs:1:41
      |
    1 | Title = "Connect to server"; var k = L["menu.unknown"];
      |                                         ^
      = note: not found in src/Core/Services/LocalizationService.cs

    ✘ 1 problems (1 error)

    ----- stderr -----
    "#);

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Connect to server"  hardcoded
      --> src/Shell/Main.cs:1:9
      |
    1 | Title = "Connect to server"; var k = L["menu.unknown"];
      |         ^
      = hint: add // i18n-ignore on the same line or the line above if this is not UI copy

    error: "menu.unknown"  missing-key
      --> src/Shell/Main.cs:1:41
      |
    1 | Title = "Connect to server"; var k = L["menu.unknown"];
      |                                         ^
      = note: not found in src/Core/Services/LocalizationService.cs

    ✘ 2 problems (2 errors)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_missing_localization_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/Shell/Main.cs", r#"var k = L["menu.file"];"#)?;

    assert_cmd_snapshot!(test.check_command().arg("missing"), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Localization file not found: ./src/Core/Services/LocalizationService.cs
    "#);

    // The hardcoded rule does not need the dictionary.
    assert_cmd_snapshot!(test.check_command().arg("hardcoded"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_missing_source_root() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Source root not found: ./src/Shell
    "#);

    Ok(())
}

#[test]
fn test_cli_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/Strings.cs", r#"["menu.file"] = "File","#)?;
    test.write_file("app/Ui/Main.cs", r#"var k = L["menu.file"];"#)?;

    assert_cmd_snapshot!(
        test.check_command().args([
            "--source-root",
            "app/Ui",
            "--localization-file",
            "app/Strings.cs",
        ]),
        @r#"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Checked 1 source file - no issues found

        ----- stderr -----
        "#
    );

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::with_keys(&["menu.file"])?;
    test.write_file(
        ".glotcsrc.json",
        r#"{
  "ignores": ["**/Generated/**"],
  "ignoreTexts": ["Lorem ipsum dolor"],
  "ignoreMarker": "no-i18n"
}"#,
    )?;
    test.write_file(
        "src/Shell/Generated/Designer.cs",
        r#"Title = "Generated window title";"#,
    )?;
    test.write_file(
        "src/Shell/Main.cs",
        r#"C = "Reported window title";
A = "Lorem ipsum dolor";
B = "Skipped by marker"; // no-i18n
"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("hardcoded"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Reported window title"  hardcoded
      --> src/Shell/Main.cs:1:5
      |
    1 | C = "Reported window title";
      |     ^
      = hint: add // no-i18n on the same line or the line above if this is not UI copy

    ✘ 1 problems (1 error)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_keys(&["menu.file"])?;
    test.write_file(".glotcsrc.json", r#"{ "ignores": ["[unclosed"] }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid glob pattern in 'ignores': "[unclosed"
    "#);

    Ok(())
}

#[test]
fn test_path_argument() -> Result<()> {
    let test = CliTest::with_keys(&["menu.file"])?;
    test.write_file("src/Shell/Main.cs", r#"Title = "Connect to server";"#)?;

    let mut cmd = test.command();
    cmd.current_dir(std::env::temp_dir());
    cmd.args(["check", "hardcoded", "--path"]).arg(test.root());

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Connect to server"  hardcoded
      --> src/Shell/Main.cs:1:9
      |
    1 | Title = "Connect to server";
      |         ^
      = hint: add // i18n-ignore on the same line or the line above if this is not UI copy

    ✘ 1 problems (1 error)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    A fast CLI tool for checking i18n issues in C# / Avalonia shells

    Usage: glotcs [COMMAND]

    Commands:
      check  Check for i18n issues (hardcoded UI copy, missing keys)
      init   Initialize a new .glotcsrc.json configuration file
      help   Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    "#);

    Ok(())
}

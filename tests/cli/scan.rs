use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const EN: &str = r#""a" = "Alpha";
"b" = "Beta";
"#;

#[test]
fn missing_entry_fails_and_is_reported() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.lproj/Localizable.strings", EN)?;
    test.write_file("fr.lproj/Localizable.strings", "\"a\" = \"Alpha\";\n")?;

    let output = test.command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("Missing b for French"));
    assert!(out.contains("Finished, missing 1 entry"));

    let html = test.read_file("report.html")?;
    assert!(html.contains("<h2>French</h2>"));
    assert!(html.contains("<li>b</li>"));

    Ok(())
}

#[test]
fn complete_translations_succeed() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.lproj/Localizable.strings", EN)?;
    test.write_file("de.lproj/Localizable.strings", EN)?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Finished, no missing localization entries."));

    let html = test.read_file("report.html")?;
    assert!(html.contains("No missing localization entries."));

    Ok(())
}

#[test]
fn missing_reference_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("fr.lproj/Localizable.strings", EN)?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Reference localization file not found."));
    assert!(!test.has_file("report.html"));

    Ok(())
}

#[test]
fn unreadable_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("does-not-exist").output()?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn base_localization_is_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.lproj/Localizable.strings", EN)?;
    test.write_file("Base.lproj/Localizable.strings", "")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn unknown_locale_code_is_reported_by_raw_code() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.lproj/Localizable.strings", EN)?;
    test.write_file("xx.lproj/Localizable.strings", "\"a\" = \"Alpha\";\n")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Missing b for xx"));

    Ok(())
}

#[test]
fn plural_singular_form_is_exempt_for_japanese() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "en.lproj/Localizable.strings",
        "\"items##{one}\" = \"%d item\";\n\"items##{other}\" = \"%d items\";\n",
    )?;
    test.write_file(
        "ja.lproj/Localizable.strings",
        "\"items##{other}\" = \"%d個\";\n",
    )?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn plural_singular_form_is_required_for_french() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "en.lproj/Localizable.strings",
        "\"items##{one}\" = \"%d item\";\n\"items##{other}\" = \"%d items\";\n",
    )?;
    test.write_file(
        "fr.lproj/Localizable.strings",
        "\"items##{other}\" = \"%d éléments\";\n",
    )?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Missing items##{one} for French"));

    Ok(())
}

#[test]
fn json_format_writes_structured_report() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.lproj/Localizable.strings", EN)?;
    test.write_file("fr.lproj/Localizable.strings", "\"a\" = \"Alpha\";\n")?;

    let output = test.command().args(["--format", "json"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!test.has_file("report.html"));

    let json: serde_json::Value = serde_json::from_str(&test.read_file("report.json")?)?;
    assert_eq!(json["missingEntriesCount"], 1);
    assert_eq!(json["languageReports"][0]["languageName"], "French");
    assert_eq!(json["languageReports"][0]["missingKeys"][0], "b");

    Ok(())
}

#[test]
fn scans_nested_directories() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("App/Resources/en.lproj/Localizable.strings", EN)?;
    test.write_file(
        "Modules/Auth/pt-BR.lproj/Localizable.strings",
        "\"b\" = \"Beta\";\n",
    )?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Missing a for Portuguese (Brazil)"));

    Ok(())
}

#[test]
fn version_flag_prints_version() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("-v").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));

    Ok(())
}

#[test]
fn help_flag_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("--append"));
    assert!(out.contains("--format"));

    Ok(())
}

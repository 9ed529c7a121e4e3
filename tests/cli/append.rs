use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn append_flag_adds_placeholders_for_missing_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "en.lproj/Localizable.strings",
        "\"a\" = \"Alpha\";\n\"b\" = \"Beta\";\n",
    )?;
    test.write_file("fr.lproj/Localizable.strings", "\"a\" = \"Alpha\";\n")?;

    let output = test.command().arg("-a").output()?;
    let out = stdout(&output);

    // The run that found the missing keys still fails; remediation does
    // not mask the count.
    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("Missing b for French"));
    assert!(out.contains("Appended b"));

    let fr = test.read_file("fr.lproj/Localizable.strings")?;
    assert!(fr.contains("\"b\" = \"Beta\";"));

    // A second scan sees the placeholder and comes back clean.
    let rerun = test.command().output()?;
    assert_eq!(rerun.status.code(), Some(0));

    Ok(())
}

#[test]
fn append_preserves_existing_entries() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "en.lproj/Localizable.strings",
        "\"greeting\" = \"Hello\";\n\"farewell\" = \"Bye\";\n",
    )?;
    test.write_file(
        "de.lproj/Localizable.strings",
        "\"greeting\" = \"Hallo\";\n",
    )?;

    test.command().arg("-a").output()?;

    let de = test.read_file("de.lproj/Localizable.strings")?;
    assert!(de.starts_with("\"greeting\" = \"Hallo\";\n"));
    assert!(de.contains("\"farewell\" = \"Bye\";"));

    Ok(())
}

#[test]
fn append_without_missing_keys_changes_nothing() -> Result<()> {
    let content = "\"a\" = \"Alpha\";\n";
    let test = CliTest::new()?;
    test.write_file("en.lproj/Localizable.strings", content)?;
    test.write_file("es.lproj/Localizable.strings", content)?;

    let output = test.command().arg("-a").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("es.lproj/Localizable.strings")?, content);

    Ok(())
}

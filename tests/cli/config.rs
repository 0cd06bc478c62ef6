use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_config_file_is_used() -> Result<()> {
    let test = CliTest::with_file(
        ".msgscanrc.json",
        r#"{
  "languages": ["de"],
  "catalogDir": "locale",
  "marker": "gettext",
  "contextNames": ["locale"],
  "ignores": ["vendor/**"]
}"#,
    )?;
    test.write_file("app.py", "gettext(locale, 'Hallo')\n_(ctx, 'Ignored')\n")?;
    test.write_file("vendor/lib.py", "gettext(locale, 'Vendored')\n")?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        "Found 1 strings.\nSaving 0 translated strings to ./locale/de.po.\n"
    );
    assert_eq!(
        test.read_file("locale/de.po")?,
        "# file: app.py:1:16\nmsgid Hallo\nmsgstr\n\n"
    );

    Ok(())
}

#[test]
fn test_malformed_config_file() -> Result<()> {
    let test = CliTest::with_file(".msgscanrc.json", "{ not json")?;
    test.write_file("app.py", "_(ctx, 'Hi')\n")?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.starts_with("Error: Failed to parse config file"));
    assert!(!test.root().join("po").exists());

    Ok(())
}

#[test]
fn test_invalid_ignore_pattern() -> Result<()> {
    let test = CliTest::with_file(".msgscanrc.json", r#"{ "ignores": ["[broken"] }"#)?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_check_reports_missing_catalogs() -> Result<()> {
    let test = CliTest::with_file("a.py", "_(ctx, 'Hi')\n")?;

    let mut cmd = test.scan_command();
    cmd.arg("--check");
    let result = run(cmd)?;

    assert_eq!(result.code, Some(1));
    assert_eq!(
        result.stdout,
        "Found 1 strings.\n✘ ./po/cs.po is out of date.\n✘ ./po/sk.po is out of date.\n"
    );
    assert!(!test.root().join("po").exists());

    Ok(())
}

#[test]
fn test_check_after_scan_is_clean() -> Result<()> {
    let test = CliTest::with_file("a.py", "_(ctx, 'Hi')\n")?;
    run(test.scan_command())?;

    let mut cmd = test.scan_command();
    cmd.arg("--check");
    let result = run(cmd)?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("✓ ./po/cs.po is up to date.\n"));
    assert!(result.stdout.contains("✓ ./po/sk.po is up to date.\n"));

    Ok(())
}

#[test]
fn test_check_detects_new_string() -> Result<()> {
    let test = CliTest::with_file("a.py", "_(ctx, 'Hi')\n")?;
    run(test.scan_command())?;
    let before = test.read_file("po/cs.po")?;

    test.write_file("b.py", "_(ctx, 'Bye')\n")?;
    let mut cmd = test.scan_command();
    cmd.arg("--check");
    let result = run(cmd)?;

    assert_eq!(result.code, Some(1));
    assert_eq!(test.read_file("po/cs.po")?, before);

    Ok(())
}

#[test]
fn test_check_does_not_drop_stale_translations() -> Result<()> {
    let test = CliTest::with_file("a.py", "_(ctx, 'Hi')\n")?;
    let catalog = "# file: a.py:1:7\nmsgid Hi\nmsgstr Ahoj\n\n# file: a.py:2:7\nmsgid Gone\nmsgstr Pryč\n\n";
    test.write_file("po/cs.po", catalog)?;

    let mut cmd = test.scan_command();
    cmd.args(["--check", "-l", "cs"]);
    let result = run(cmd)?;

    assert_eq!(result.code, Some(1));
    assert_eq!(
        result.stderr,
        "warning: 1 translation(s) in ./po/cs.po are no longer used in sources and would be dropped\n"
    );
    assert_eq!(test.read_file("po/cs.po")?, catalog);

    Ok(())
}

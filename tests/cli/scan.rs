use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const MODULE: &str = r#"from core import command

@command(help=_(ctx, "Say hello"))
async def hello(ctx):
    await ctx.send(_(ctx, "Hello"))
    await ctx.send(_(ctx, "Hello {name}".format(name=ctx.author)))
"#;

#[test]
fn test_writes_catalog_per_language() -> Result<()> {
    let test = CliTest::with_file("modules/base/module.py", MODULE)?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        "Found 3 strings.\n\
         Saving 0 translated strings to ./po/cs.po.\n\
         Saving 0 translated strings to ./po/sk.po.\n"
    );

    let expected = "\
# file: modules/base/module.py:3:21
msgid Say hello
msgstr

# file: modules/base/module.py:5:26
msgid Hello
msgstr

# file: modules/base/module.py:6:26
msgid Hello {name}
msgstr

";
    assert_eq!(test.read_file("po/cs.po")?, expected);
    assert_eq!(test.read_file("po/sk.po")?, expected);

    Ok(())
}

#[test]
fn test_missing_directory() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("does-not-exist");
    let result = run(cmd)?;

    assert_eq!(result.code, Some(64));
    assert_eq!(result.stderr, "Path does-not-exist does not exist.\n");
    assert!(result.stdout.is_empty());
    assert!(!test.root().join("po").exists());
    assert!(!test.root().join("does-not-exist").exists());

    Ok(())
}

#[test]
fn test_second_run_is_byte_identical() -> Result<()> {
    let test = CliTest::with_file("a.py", "_(ctx, 'Save')\n_(tc, 'Quit')\n")?;
    test.write_file("b.py", "_(ctx, 'Save')\n")?;

    run(test.scan_command())?;
    let first = test.read_file("po/cs.po")?;

    let result = run(test.scan_command())?;
    assert_eq!(result.code, Some(0));
    assert_eq!(test.read_file("po/cs.po")?, first);
    assert_eq!(
        first,
        "# file: a.py:1:7\n# file: b.py:1:7\nmsgid Save\nmsgstr\n\n# file: a.py:2:6\nmsgid Quit\nmsgstr\n\n"
    );

    Ok(())
}

#[test]
fn test_translations_are_preserved() -> Result<()> {
    let test = CliTest::with_file("bot.py", "x = _(ctx, \"Hello\")\ny = _(ctx, \"New\")\n")?;
    test.write_file(
        "po/cs.po",
        "# file: bot.py:9:9\nmsgid Hello\nmsgstr Ahoj\n\n# file: bot.py:10:0\nmsgid Stale\nmsgstr Staré\n\n",
    )?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Saving 1 translated strings to ./po/cs.po.\n"));
    assert!(result.stdout.contains("Saving 0 translated strings to ./po/sk.po.\n"));
    assert!(
        result
            .stderr
            .contains("1 translation(s) in ./po/cs.po are no longer used in sources and were dropped")
    );
    assert_eq!(
        test.read_file("po/cs.po")?,
        "# file: bot.py:1:11\nmsgid Hello\nmsgstr Ahoj\n\n# file: bot.py:2:11\nmsgid New\nmsgstr\n\n"
    );

    Ok(())
}

#[test]
fn test_diagnostics_are_reported() -> Result<()> {
    let test = CliTest::with_file(
        "bot.py",
        "_(ctx)\n_(self, \"Hi\")\n_(ctx, 123)\n_(ctx, \"Fine\")\n",
    )?;

    let result = run(test.scan_command())?;

    // Malformed calls do not fail the run.
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains(
        "error: \"Bad argument count (expected 2, got 1).\"  argument-count\n  --> bot.py:1:1\n"
    ));
    assert!(result.stdout.contains(
        "error: \"Translation context variable has to have name 'ctx' or 'tc', got 'self'.\"  context-name\n  --> bot.py:2:1\n"
    ));
    assert!(result.stdout.contains(
        "error: \"Translation string has to be of type 'str', not 'int'.\"  literal-type\n  --> bot.py:3:1\n"
    ));
    assert!(result.stdout.contains("✘ 3 problems\n"));
    assert!(result.stdout.contains("Found 1 strings.\n"));
    assert_eq!(
        test.read_file("po/cs.po")?,
        "# file: bot.py:4:7\nmsgid Fine\nmsgstr\n\n"
    );

    Ok(())
}

#[test]
fn test_syntax_error_skips_file() -> Result<()> {
    let test = CliTest::with_file("broken.py", "def broken(:\n    _(ctx, 'Lost')\n")?;
    test.write_file("ok.py", "_(ctx, 'Kept')\n")?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("parse-error"));
    assert!(result.stdout.contains("  --> broken.py:"));
    assert!(result.stdout.contains("Found 1 strings.\n"));
    assert!(!test.read_file("po/cs.po")?.contains("Lost"));

    Ok(())
}

#[test]
fn test_lang_option_overrides_languages() -> Result<()> {
    let test = CliTest::with_file("a.py", "_(ctx, 'Hi')\n")?;

    let mut cmd = test.scan_command();
    cmd.args(["--lang", "de", "-l", "pl"]);
    let result = run(cmd)?;

    assert_eq!(result.code, Some(0));
    assert!(test.root().join("po/de.po").exists());
    assert!(test.root().join("po/pl.po").exists());
    assert!(!test.root().join("po/cs.po").exists());

    Ok(())
}

#[test]
fn test_invalid_language_code() -> Result<()> {
    let test = CliTest::with_file("a.py", "_(ctx, 'Hi')\n")?;

    let mut cmd = test.scan_command();
    cmd.args(["--lang", "../escape"]);
    let result = run(cmd)?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.starts_with("Error: Invalid language code"));
    assert!(!test.root().join("po").exists());

    Ok(())
}

#[test]
fn test_verbose_progress() -> Result<()> {
    let test = CliTest::with_file("a.py", "_(ctx, 'Hi')\n")?;
    test.write_file("pkg/b.py", "")?;

    let mut cmd = test.scan_command();
    cmd.arg("--verbose");
    let result = run(cmd)?;

    assert!(result.stderr.contains("Scanning a.py\n"));
    assert!(result.stderr.contains("Scanning pkg/b.py\n"));
    assert!(result.stderr.contains("using default configuration"));

    Ok(())
}

#[test]
fn test_duplicate_language_code() -> Result<()> {
    let test = CliTest::with_file("a.py", "_(ctx, 'Hi')\n")?;

    let mut cmd = test.scan_command();
    cmd.args(["-l", "cs", "-l", "de", "--lang", "cs"]);
    let result = run(cmd)?;

    assert_eq!(result.code, Some(2));
    assert_eq!(
        result.stderr,
        "Error: Duplicate language code in 'languages': \"cs\"\n"
    );
    assert!(!test.root().join("po").exists());

    Ok(())
}

#[test]
fn test_byte_order_mark_in_source() -> Result<()> {
    let test = CliTest::with_file("a.py", "\u{feff}_(ctx, 'Hi')\n")?;

    let result = run(test.scan_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        test.read_file("po/cs.po")?,
        "# file: a.py:1:7\nmsgid Hi\nmsgstr\n\n"
    );

    Ok(())
}

use anyhow::Result;

use crate::CliTest;

#[test]
fn test_generate_with_defaults() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.generate_command().output()?;
    assert!(output.status.success(), "stderr: {:?}", output.stderr);

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Generated L10n.swift"), "stdout: {stdout}");

    let generated = test.read_file("L10n.swift")?;
    assert!(generated.contains("public enum L10n {"));
    assert!(generated.contains("public enum Home {"));
    assert!(generated.contains("/// Welcome"));
    assert!(generated.contains("public static var title: String { translate(\"home_title\") }"));
    assert!(generated.contains(
        "public static func itemsCount(_ p1: Int) -> String { translate(\"cart_itemsCount\", p1) }"
    ));
    Ok(())
}

#[test]
fn test_generate_emits_support_section_once() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());

    let generated = test.read_file("L10n.swift")?;
    assert_eq!(generated.matches("NSLocalizedString").count(), 1);
    assert_eq!(
        generated
            .matches("fileprivate func translate(base: String, _ key: String)")
            .count(),
        1
    );
    Ok(())
}

#[test]
fn test_generate_dry_run_prints_instead_of_writing() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let mut cmd = test.generate_command();
    cmd.arg("--dry-run");
    let output = cmd.output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("import Foundation"));
    assert!(stdout.contains("public enum L10n {"));
    assert!(!test.root().join("L10n.swift").exists());
    Ok(())
}

#[test]
fn test_generate_with_flag_overrides() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let mut cmd = test.generate_command();
    cmd.args([
        "--output",
        "Generated/Strings.swift",
        "--type-name",
        "Strings",
        "--access",
        "internal",
        "--table",
        "strings",
    ]);
    let output = cmd.output()?;
    assert!(output.status.success(), "stderr: {:?}", output.stderr);

    let generated = test.read_file("Generated/Strings.swift")?;
    assert!(generated.contains("internal enum Strings {"));
    assert!(generated.contains("fileprivate let tableName: String = \"strings\""));
    Ok(())
}

#[test]
fn test_generate_with_config_file() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file(
        ".xcgenrc.json",
        r#"{
            "typeName": "Strings",
            "output": "Sources/Generated/Strings.swift"
        }"#,
    )?;

    let output = test.generate_command().output()?;
    assert!(output.status.success(), "stderr: {:?}", output.stderr);

    let generated = test.read_file("Sources/Generated/Strings.swift")?;
    assert!(generated.contains("public enum Strings {"));
    Ok(())
}

#[test]
fn test_generate_comments_locale_override() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let mut cmd = test.generate_command();
    cmd.args(["--comments-locale", "de"]);
    let output = cmd.output()?;
    assert!(output.status.success());

    let generated = test.read_file("L10n.swift")?;
    assert!(generated.contains("/// Willkommen"));
    // de has no value for home_subtitle, so the generic annotation is used
    assert!(generated.contains("/// key: home_subtitle"));
    Ok(())
}

#[test]
fn test_generate_missing_catalog_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("Failed to read strings catalog"),
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn test_generate_rejects_invalid_access() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let mut cmd = test.generate_command();
    cmd.args(["--access", "friendly"]);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("access"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_generate_is_deterministic_across_runs() -> Result<()> {
    let test = CliTest::with_catalog()?;

    assert!(test.generate_command().output()?.status.success());
    let first = test.read_file("L10n.swift")?;

    assert!(test.generate_command().output()?.status.success());
    let second = test.read_file("L10n.swift")?;

    assert_eq!(first, second);
    Ok(())
}

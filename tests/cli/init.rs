use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.init_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Created .xcgenrc.json"), "stdout: {stdout}");

    let config = test.read_file(".xcgenrc.json")?;
    assert!(config.contains("\"typeName\": \"L10n\""));
    assert!(config.contains("\"separator\": \"_\""));
    Ok(())
}

#[test]
fn test_init_fails_if_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xcgenrc.json", "{}")?;

    let output = test.init_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("already exists"), "stderr: {stderr}");
    Ok(())
}

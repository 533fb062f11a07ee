use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod generate;
mod init;

const BIN_NAME: &str = "xcgen";

/// A minimal strings catalog: two plain keys and one plural key.
pub const SAMPLE_CATALOG: &str = r#"{
    "sourceLanguage": "en",
    "strings": {
        "home_title": {
            "localizations": {
                "en": { "stringUnit": { "state": "translated", "value": "Welcome" } },
                "de": { "stringUnit": { "state": "translated", "value": "Willkommen" } }
            }
        },
        "home_subtitle": {
            "localizations": {
                "en": { "stringUnit": { "state": "translated", "value": "Glad to see you" } }
            }
        },
        "cart_itemsCount": {
            "localizations": {
                "en": {
                    "stringUnit": { "state": "translated", "value": "%d items" },
                    "variations": {
                        "plural": {
                            "one": { "stringUnit": { "value": "%d item" } },
                            "other": { "stringUnit": { "value": "%d items" } }
                        }
                    }
                }
            }
        }
    },
    "version": "1.0"
}"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Config discovery stops at a repository boundary; keep it from
        // walking above the temp project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_catalog() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("localization.xcstrings", SAMPLE_CATALOG)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn generate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("generate");
        cmd
    }

    pub fn init_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("init");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".xcgenrc.json";

/// Access modifiers accepted for generated declarations.
pub const VALID_ACCESS_MODIFIERS: &[&str] =
    &["public", "package", "internal", "fileprivate", "private"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path to the `.xcstrings` catalog, relative to the working directory.
    #[serde(default = "default_input")]
    pub input: String,
    /// Path of the generated Swift file.
    #[serde(default = "default_output")]
    pub output: String,
    /// Translation table name baked into the runtime lookup.
    #[serde(default = "default_table")]
    pub table: String,
    /// Name of the generated root enum.
    #[serde(default = "default_type_name")]
    pub type_name: String,
    /// Access modifier for generated declarations.
    #[serde(default = "default_access")]
    pub access: String,
    /// Locale whose values are surfaced as doc comments.
    #[serde(default = "default_comments_locale", alias = "locale")]
    pub comments_locale: String,
    /// Key segment separator (single character).
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_input() -> String {
    "localization.xcstrings".to_string()
}

fn default_output() -> String {
    "L10n.swift".to_string()
}

fn default_table() -> String {
    "localization".to_string()
}

fn default_type_name() -> String {
    "L10n".to_string()
}

fn default_access() -> String {
    "public".to_string()
}

fn default_comments_locale() -> String {
    "en".to_string()
}

fn default_separator() -> String {
    "_".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            table: default_table(),
            type_name: default_type_name(),
            access: default_access(),
            comments_locale: default_comments_locale(),
            separator: default_separator(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the separator is not a single character or the
    /// access modifier is not a Swift access level.
    pub fn validate(&self) -> Result<()> {
        if self.separator.chars().count() != 1 {
            anyhow::bail!(
                "'separator' must be a single character, got \"{}\"",
                self.separator
            );
        }
        if !VALID_ACCESS_MODIFIERS.contains(&self.access.as_str()) {
            anyhow::bail!(
                "'access' must be one of {}, got \"{}\"",
                VALID_ACCESS_MODIFIERS.join(", "),
                self.access
            );
        }
        Ok(())
    }

    /// The separator as a char. Call [`Config::validate`] first.
    pub fn separator_char(&self) -> char {
        self.separator.chars().next().unwrap_or('_')
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

//! Command dispatch.
//!
//! Loads configuration, applies CLI overrides, and drives the catalog
//! reader and the generator. All I/O of the tool lives here and in the
//! catalog reader; the generator itself never touches the filesystem.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};

use super::args::{Arguments, Command, GenerateCommand};
use crate::catalog;
use crate::config::{self, CONFIG_FILE_NAME};
use crate::generator::{self, GenerateOptions};

pub enum CommandSummary {
    Generate(GenerateSummary),
    Init(InitSummary),
}

pub struct GenerateSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub key_count: usize,
    pub plural_count: usize,
    /// True if settings came from a config file, false if from defaults.
    pub config_from_file: bool,
    /// Present on --dry-run; the document is printed instead of written.
    pub document: Option<String>,
}

pub struct InitSummary {
    pub created: bool,
}

pub fn run(Arguments { command }: Arguments) -> Result<CommandSummary> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandSummary::Init(InitSummary { created: true }))
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn generate(cmd: GenerateCommand) -> Result<CommandSummary> {
    let args = cmd.args;
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let loaded = config::load_config(&cwd)?;
    let mut config = loaded.config;

    // CLI flags override config file values.
    if let Some(input) = args.common.input {
        config.input = input.to_string_lossy().into_owned();
    }
    if let Some(locale) = args.common.comments_locale {
        config.comments_locale = locale;
    }
    if let Some(separator) = args.common.separator {
        config.separator = separator.to_string();
    }
    if let Some(output) = args.output {
        config.output = output.to_string_lossy().into_owned();
    }
    if let Some(table) = args.table {
        config.table = table;
    }
    if let Some(type_name) = args.type_name {
        config.type_name = type_name;
    }
    if let Some(access) = args.access {
        config.access = access;
    }
    config.validate()?;

    let input_path = PathBuf::from(&config.input);
    let catalog = catalog::read_catalog(&input_path, &config.comments_locale)?;
    let key_count = catalog.keys.len();
    let plural_count = catalog.plural_keys.len();

    let opts = GenerateOptions {
        separator: config.separator_char(),
        table: config.table.clone(),
        type_name: config.type_name.clone(),
        access: config.access.clone(),
    };
    let document = generator::generate(&catalog.into(), &opts);

    let output_path = PathBuf::from(&config.output);
    let document = if args.dry_run {
        Some(document)
    } else {
        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
        }
        fs::write(&output_path, document)
            .with_context(|| format!("Failed to write generated file: {:?}", output_path))?;
        None
    };

    Ok(CommandSummary::Generate(GenerateSummary {
        input: input_path,
        output: output_path,
        key_count,
        plural_count,
        config_from_file: loaded.from_file,
        document,
    }))
}

fn init() -> Result<()> {
    let config_path = std::path::Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, config::default_config_json()?)?;
    Ok(())
}

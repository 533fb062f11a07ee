//! Strings-catalog (`.xcstrings`) reading.
//!
//! This is the generator's only upstream input: an `.xcstrings` document is
//! a JSON object whose `strings` member maps each key to its localizations.
//! The reader distills that into the three inputs the core consumes — a
//! sorted key list, a key-to-comment map, and a plural-key set — and
//! surfaces missing or malformed catalogs as labeled failures before the
//! core ever runs.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::generator::GeneratorInput;

/// The distilled catalog contents.
///
/// `keys` is sorted ascending so generation is deterministic regardless of
/// the key order in the source document.
#[derive(Debug, Default)]
pub struct Catalog {
    pub keys: Vec<String>,
    pub comments: HashMap<String, String>,
    pub plural_keys: HashSet<String>,
}

impl From<Catalog> for GeneratorInput {
    fn from(catalog: Catalog) -> Self {
        GeneratorInput {
            keys: catalog.keys,
            comments: catalog.comments,
            plural_keys: catalog.plural_keys,
        }
    }
}

/// Read and parse a strings catalog from disk.
pub fn read_catalog(path: &Path, comments_locale: &str) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read strings catalog: {:?}", path))?;
    parse_catalog(&content, comments_locale)
        .with_context(|| format!("Failed to parse strings catalog: {:?}", path))
}

/// Parse strings-catalog JSON text.
///
/// The comment for a key is the `stringUnit.value` of the configured
/// locale, when present. A key counts as plural when any localization
/// carries `variations.plural`; pluralization is never inferred from the
/// value text itself.
pub fn parse_catalog(content: &str, comments_locale: &str) -> Result<Catalog> {
    let json: Value = serde_json::from_str(content).context("Invalid JSON")?;
    let Some(strings) = json.get("strings").and_then(Value::as_object) else {
        bail!("Missing \"strings\" object at catalog root");
    };

    let mut catalog = Catalog::default();
    for (key, entry) in strings {
        catalog.keys.push(key.clone());

        let Some(localizations) = entry.get("localizations").and_then(Value::as_object) else {
            continue;
        };

        if let Some(value) = localizations
            .get(comments_locale)
            .and_then(|loc| loc.get("stringUnit"))
            .and_then(|unit| unit.get("value"))
            .and_then(Value::as_str)
        {
            catalog.comments.insert(key.clone(), value.to_string());
        }

        let is_plural = localizations
            .values()
            .any(|loc| loc.get("variations").and_then(|v| v.get("plural")).is_some());
        if is_plural {
            catalog.plural_keys.insert(key.clone());
        }
    }

    catalog.keys.sort();
    Ok(catalog)
}

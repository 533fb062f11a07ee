//! xcgen - typed Swift accessors from xcstrings catalogs
//!
//! xcgen is a CLI tool and library that reads an Apple strings catalog
//! (`.xcstrings`) and generates a strongly-typed, nested Swift accessor API
//! for its keys: one enum per namespace level, one accessor per key, with
//! format arguments inferred from the catalog's comment text and plural
//! markers.
//!
//! ## Module Structure
//!
//! - `catalog`: Strings-catalog (`.xcstrings`) reading
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `generator`: The code-generation core (tree, identifiers, placeholder
//!   inference, emission)

pub mod catalog;
pub mod cli;
pub mod config;
pub mod generator;

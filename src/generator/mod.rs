//! The code-generation core.
//!
//! A pure, synchronous transformation: one input snapshot (sorted keys,
//! comments, plural set, options) in, one Swift source document out. No
//! I/O, no clock, no randomness; identical inputs always produce
//! byte-identical output.
//!
//! Pipeline: [`tree`] builds the key hierarchy, [`emit`] walks it once,
//! calling [`identifier`] and [`placeholders`] per leaf, and the tree is
//! discarded.

pub mod emit;
pub mod identifier;
pub mod placeholders;
pub mod tree;

use std::collections::{HashMap, HashSet};

pub use placeholders::PlaceholderType;
pub use tree::{Leaf, TreeNode};

/// Generation settings, immutable for one run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Key segment separator.
    pub separator: char,
    /// Translation table name baked into the runtime lookup.
    pub table: String,
    /// Name of the root enum.
    pub type_name: String,
    /// Access modifier for every generated declaration.
    pub access: String,
}

/// The core's input snapshot, as produced by the catalog reader.
///
/// `keys` must be pre-sorted by the caller; the tree itself is
/// order-independent but the caller owns the stable global ordering.
#[derive(Debug, Default)]
pub struct GeneratorInput {
    pub keys: Vec<String>,
    pub comments: HashMap<String, String>,
    pub plural_keys: HashSet<String>,
}

/// Run the full pipeline and return the generated Swift source.
pub fn generate(input: &GeneratorInput, opts: &GenerateOptions) -> String {
    let mut root = TreeNode::default();
    for key in &input.keys {
        root.insert(key, opts.separator);
    }
    emit::render_document(&root, input, opts)
}

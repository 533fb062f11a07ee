//! Key hierarchy construction.
//!
//! Flat separator-delimited keys like `home_title` are split into segments
//! and inserted into a prefix tree. All segments but the last become
//! namespace levels; the last segment becomes a leaf carrying the original
//! full key, which the emitter later embeds in the runtime lookup call.
//!
//! Children are stored in a `BTreeMap` so iteration order is always sorted
//! by segment name, independent of insertion order. This is what makes the
//! emitted output reproducible for the same key set.

use std::collections::BTreeMap;

/// A key whose final segment terminates at a given tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// The final segment of the key, as it appeared in the catalog.
    pub name: String,
    /// The original, unsanitized full key.
    pub full_key: String,
}

/// One path segment in the key hierarchy.
///
/// A node may hold leaves and children simultaneously: `home` and
/// `home_title` can both exist as keys.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TreeNode {
    pub children: BTreeMap<String, TreeNode>,
    pub leaves: Vec<Leaf>,
}

impl TreeNode {
    /// Insert a key, splitting on `separator`.
    ///
    /// Empty subsequences are preserved: a leading, trailing, or doubled
    /// separator yields an empty-string segment rather than being collapsed.
    /// Empty keys are not an error; they become a single empty-named leaf
    /// and are left to the identifier sanitizer.
    pub fn insert(&mut self, key: &str, separator: char) {
        let parts: Vec<&str> = key.split(separator).collect();
        self.insert_parts(&parts, key);
    }

    fn insert_parts(&mut self, parts: &[&str], full_key: &str) {
        let Some((first, rest)) = parts.split_first() else {
            return;
        };
        if rest.is_empty() {
            self.leaves.push(Leaf {
                name: (*first).to_string(),
                full_key: full_key.to_string(),
            });
        } else {
            self.children
                .entry((*first).to_string())
                .or_default()
                .insert_parts(rest, full_key);
        }
    }

    /// True when the node owns no leaves and no children.
    ///
    /// The emitter skips such nodes entirely; a fully empty branch emits
    /// nothing.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.leaves.is_empty()
    }
}

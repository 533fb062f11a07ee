//! Placeholder type inference.
//!
//! The catalog carries no structured argument information, so the argument
//! list of each accessor is inferred from the key's comment text: a fixed,
//! ordered catalog of printf-style specifier patterns is evaluated against
//! the whole comment, and every match contributes one typed entry.
//!
//! The result is ordered by the scan order of the pattern table, not by the
//! left-to-right position of the specifiers in the text. This is a
//! deliberate simplification, not a positional parse: `"%@ failed with
//! code %d"` and `"code %d: %@"` both infer `[Str, Int]` because string
//! patterns are scanned before integer patterns. Generated signatures
//! depend on this order; do not reorder the table.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// The inferred runtime argument type for one format position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderType {
    Int,
    Float,
    Str,
}

use PlaceholderType::{Float, Int, Str};

/// Recognized format-specifier patterns, in scan order.
///
/// For each specifier the positional variant (`%1$d`) is checked before the
/// bare variant (`%d`); the bare pattern cannot match inside a positional
/// occurrence, so the two never double-count.
const PLACEHOLDER_PATTERNS: &[(&str, PlaceholderType)] = &[
    // Strings
    (r"%\d+\$@", Str),
    ("%@", Str),
    // Integers
    (r"%\d+\$d", Int),
    ("%d", Int),
    (r"%\d+\$u", Int),
    ("%u", Int),
    (r"%\d+\$ld", Int),
    ("%ld", Int),
    (r"%\d+\$lld", Int),
    ("%lld", Int),
    (r"%\d+\$x", Int),
    ("%x", Int),
    (r"%\d+\$X", Int),
    ("%X", Int),
    (r"%\d+\$lx", Int),
    ("%lx", Int),
    (r"%\d+\$lX", Int),
    ("%lX", Int),
    (r"%\d+\$o", Int),
    ("%o", Int),
    (r"%\d+\$c", Int),
    ("%c", Int),
    // Floats / scientific / general
    (r"%\d+\$f", Float),
    ("%f", Float),
    (r"%\d+\$e", Float),
    ("%e", Float),
    (r"%\d+\$E", Float),
    ("%E", Float),
    (r"%\d+\$g", Float),
    ("%g", Float),
    (r"%\d+\$G", Float),
    ("%G", Float),
];

// A pattern that fails to compile is kept as None and simply never matches.
static COMPILED_PATTERNS: LazyLock<Vec<(Option<Regex>, PlaceholderType)>> = LazyLock::new(|| {
    PLACEHOLDER_PATTERNS
        .iter()
        .map(|(pattern, ty)| (Regex::new(pattern).ok(), *ty))
        .collect()
});

/// Derive the ordered parameter-type list for one key.
///
/// Membership in `plural_keys` comes from the catalog's explicit plural
/// variation markers and is never inferred from the comment text. A plural
/// key always gets at least one `Int` entry for the pluralization-selector
/// argument: if no integer placeholder was otherwise detected, one is
/// inserted at position 0.
///
/// A key with no comment and no plural flag yields an empty list, which the
/// emitter turns into a zero-argument accessor.
pub fn infer_placeholders(
    key: &str,
    comment: Option<&str>,
    plural_keys: &HashSet<String>,
) -> Vec<PlaceholderType> {
    let text = comment.unwrap_or("");

    let mut found = Vec::new();
    for (regex, ty) in COMPILED_PATTERNS.iter() {
        let Some(regex) = regex else {
            continue;
        };
        for _ in regex.find_iter(text) {
            found.push(*ty);
        }
    }

    if plural_keys.contains(key) && !found.contains(&Int) {
        found.insert(0, Int);
    }

    found
}

//! Identifier sanitization for emitted Swift declarations.
//!
//! Key segments come straight out of the catalog and can contain anything:
//! digits in leading position, punctuation, Swift keywords, or nothing at
//! all. Two independent sanitizers map them to legal identifiers:
//!
//! - [`type_name`] for namespace (enum) names, which type-cases the segment;
//! - [`leaf_name`] for accessor names, which preserves the assumed
//!   lower-camel-case of the source.
//!
//! Collision handling within one emitted scope lives in the emitter; this
//! module only provides the deterministic per-segment mapping.

/// Reserved words of the Swift identifier grammar.
///
/// A sanitized name that lands on one of these is wrapped in backticks so
/// the emitted declaration is never a bare keyword.
const SWIFT_KEYWORDS: &[&str] = &[
    "associatedtype",
    "class",
    "deinit",
    "enum",
    "extension",
    "fileprivate",
    "func",
    "import",
    "init",
    "inout",
    "internal",
    "let",
    "open",
    "operator",
    "private",
    "precedencegroup",
    "protocol",
    "public",
    "rethrows",
    "static",
    "struct",
    "subscript",
    "typealias",
    "var",
    "break",
    "case",
    "continue",
    "default",
    "defer",
    "do",
    "else",
    "fallthrough",
    "for",
    "guard",
    "if",
    "in",
    "repeat",
    "return",
    "switch",
    "where",
    "while",
    "as",
    "Any",
    "catch",
    "false",
    "is",
    "nil",
    "super",
    "self",
    "Self",
    "throw",
    "throws",
    "true",
    "try",
    "_",
    "__COLUMN__",
    "__FILE__",
    "__FUNCTION__",
    "__LINE__",
];

/// Backtick-escape a name if it is a Swift keyword.
pub fn escape_if_keyword(name: &str) -> String {
    if SWIFT_KEYWORDS.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

/// Sanitize a path segment into a namespace (enum) name.
///
/// The segment is split further on the separator (upstream normalization
/// may leave separator-adjacent sub-parts inside one segment), the first
/// letter of every sub-part is upper-cased, and the parts are concatenated.
/// If the result does not start with a letter or the separator it is
/// prefixed with the separator; an entirely empty result falls back to the
/// bare separator. Keywords are backtick-escaped last.
pub fn type_name(segment: &str, separator: char) -> String {
    let mut joined: String = segment
        .split(separator)
        .filter(|part| !part.is_empty())
        .map(capitalize_first)
        .collect();
    let first = joined.chars().next();
    match first {
        Some(first) if !(first.is_alphabetic() || first == separator) => {
            joined.insert(0, separator);
        }
        None => joined.push(separator),
        Some(_) => {}
    }
    escape_if_keyword(&joined)
}

/// Sanitize a leaf's segment name into an accessor name.
///
/// Keeps the segment as-is (keys are assumed lower-camel-case already) but
/// replaces every character that is not a letter or digit with the
/// separator, and prefixes with the separator if the first character is a
/// digit. An entirely empty segment falls back to the bare separator.
/// Keywords are backtick-escaped last.
pub fn leaf_name(segment: &str, separator: char) -> String {
    let mut result: String = segment
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { separator })
        .collect();
    let first = result.chars().next();
    match first {
        Some(first) if first.is_numeric() => result.insert(0, separator),
        None => result.push(separator),
        Some(_) => {}
    }
    escape_if_keyword(&result)
}

/// Upper-case the first character of a candidate name.
///
/// Used by the emitter's collision pass when prepending the previous path
/// segment (`title` becomes `Title` in `homeTitle`).
pub fn capitalize_first(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Swift source emission.
//!
//! Walks the key hierarchy depth-first and renders one nested `enum` per
//! namespace level. Each leaf becomes a `static var` (no placeholders) or a
//! `static func` (one parameter per inferred placeholder); the body always
//! performs a runtime lookup keyed by the leaf's original, unsanitized full
//! key, never the sanitized identifier. Every scope with content also gets
//! a `get(_:)` helper that resolves suffix keys unknown at generation time.
//!
//! The document closes with a fixed runtime-support section (the lookup
//! primitive and the camel-casing helper the `get` functions rely on),
//! emitted verbatim once regardless of input.

use std::collections::HashSet;
use std::fmt::Write;

use super::identifier;
use super::placeholders::{PlaceholderType, infer_placeholders};
use super::tree::TreeNode;
use super::{GenerateOptions, GeneratorInput};

struct RenderContext<'a> {
    input: &'a GeneratorInput,
    opts: &'a GenerateOptions,
}

/// Render the complete generated document.
pub fn render_document(root: &TreeNode, input: &GeneratorInput, opts: &GenerateOptions) -> String {
    let ctx = RenderContext { input, opts };
    let mut out = String::new();

    let _ = writeln!(out, "// Generated by xcgen. Do not edit.");
    let _ = writeln!(out);
    let _ = writeln!(out, "import Foundation");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "fileprivate let tableName: String = \"{}\"",
        opts.table
    );
    let _ = writeln!(out, "{} enum {} {{", opts.access, opts.type_name);
    render_leaves(root, 1, &ctx, &mut out);
    render_children(root, 1, &[], &ctx, &mut out);
    let _ = writeln!(out, "}}");
    let _ = writeln!(out);

    out.push_str(&support_section(opts.separator));
    out
}

fn render_children(
    node: &TreeNode,
    level: usize,
    prefix: &[String],
    ctx: &RenderContext,
    out: &mut String,
) {
    let indent = "    ".repeat(level);
    let access = &ctx.opts.access;
    let separator = ctx.opts.separator;

    for (name, child) in &node.children {
        // A fully empty branch emits nothing.
        if child.is_empty() {
            continue;
        }

        let enum_name = identifier::type_name(name, separator);
        let mut child_prefix = prefix.to_vec();
        child_prefix.push(name.clone());

        let _ = writeln!(out, "{indent}{access} enum {enum_name} {{");

        render_leaves(child, level + 1, ctx, out);

        // Dynamic lookup scoped to this namespace, for keys not known at
        // generation time.
        let base = child_prefix.join(&separator.to_string());
        let _ = writeln!(
            out,
            "{indent}    {access} static func get(_ key: String) -> String? {{ translate(base: \"{base}\", key) }}"
        );

        if !child.children.is_empty() {
            render_children(child, level + 1, &child_prefix, ctx, out);
        }

        let _ = writeln!(out, "{indent}}}");
    }
}

fn render_leaves(node: &TreeNode, level: usize, ctx: &RenderContext, out: &mut String) {
    let indent = "    ".repeat(level);
    let access = &ctx.opts.access;
    let separator = ctx.opts.separator;

    let mut leaves: Vec<_> = node.leaves.iter().collect();
    leaves.sort_by(|a, b| a.name.cmp(&b.name));

    // Fresh per-scope set; identifier uniqueness is only enforced among
    // siblings of one emitted block.
    let mut used_names: HashSet<String> = HashSet::new();

    for leaf in leaves {
        let key = &leaf.full_key;
        let comment = ctx.input.comments.get(key).map(String::as_str);
        let placeholders = infer_placeholders(key, comment, &ctx.input.plural_keys);
        let is_plural = ctx.input.plural_keys.contains(key);

        let mut prop = identifier::leaf_name(&leaf.name, separator);
        if used_names.contains(&prop) {
            // Disambiguate once using the previous path segment. A second
            // collision after this pass is left unresolved.
            let parts: Vec<&str> = key.split(separator).filter(|p| !p.is_empty()).collect();
            if parts.len() >= 2 {
                let prev = identifier::leaf_name(parts[parts.len() - 2], separator);
                let capitalized = identifier::capitalize_first(&prop);
                prop = format!("{prev}{capitalized}");
            }
        }
        used_names.insert(prop.clone());
        let prop = identifier::escape_if_keyword(&prop);

        match comment {
            Some(text) if !text.is_empty() => {
                for line in text.lines().filter(|line| !line.is_empty()) {
                    let _ = writeln!(out, "{indent}/// {line}");
                }
            }
            _ if is_plural => {
                let _ = writeln!(out, "{indent}/// Plural format key: {key}");
            }
            _ => {
                let _ = writeln!(out, "{indent}/// key: {key}");
            }
        }

        if placeholders.is_empty() {
            let _ = writeln!(
                out,
                "{indent}{access} static var {prop}: String {{ translate(\"{key}\") }}"
            );
        } else {
            let (params, call_args) = signature(&placeholders);
            let _ = writeln!(
                out,
                "{indent}{access} static func {prop}({params}) -> String {{ translate(\"{key}\", {call_args}) }}"
            );
        }
    }
}

/// Build the parameter list and the matching call arguments.
///
/// String placeholders take a loosely-typed `Any` argument and are coerced
/// to text with `String(describing:)` at the call boundary.
fn signature(placeholders: &[PlaceholderType]) -> (String, String) {
    let mut params = Vec::new();
    let mut call_args = Vec::new();
    for (idx, ph) in placeholders.iter().enumerate() {
        let p = format!("p{}", idx + 1);
        match ph {
            PlaceholderType::Int => {
                params.push(format!("_ {p}: Int"));
                call_args.push(p);
            }
            PlaceholderType::Float => {
                params.push(format!("_ {p}: Double"));
                call_args.push(p);
            }
            PlaceholderType::Str => {
                params.push(format!("_ {p}: Any"));
                call_args.push(format!("String(describing: {p})"));
            }
        }
    }
    (params.join(", "), call_args.join(", "))
}

/// The fixed runtime-support section every generated document ends with.
///
/// Shape is independent of the input; only the separator is interpolated.
fn support_section(separator: char) -> String {
    format!(
        r#"fileprivate extension String {{
    func camelCased(with separator: Character) -> String {{
        return lowercased()
            .split(separator: separator)
            .enumerated()
            .map {{ $0.offset > 0 ? $0.element.capitalized : $0.element.lowercased() }}
            .joined()
    }}
}}

fileprivate func translate(base: String, _ key: String) -> String? {{
    let localizableKey = "\(base){separator}\(key.camelCased(with: "{separator}"))"
    let localizedKey = translate(localizableKey)
    if localizedKey == localizableKey {{
        return nil
    }}
    return localizedKey
}}

fileprivate func translate(_ key: String, _ args: CVarArg...) -> String {{
    let format = key.localize(withTable: tableName)
    return String(format: format, arguments: args)
}}

fileprivate extension String {{
    func localize(withTable tableName: String = "") -> String {{
        NSLocalizedString(self, tableName: tableName, value: self, comment: "")
    }}
}}
"#
    )
}

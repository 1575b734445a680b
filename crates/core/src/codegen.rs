//! Rendering of the generated Rust source artifact.
//!
//! Output is assembled as a plain string and is byte-for-byte
//! deterministic: identical input tables always produce identical output.

use crate::{
    encode::PackedTable,
    enums::{PropertyId, PropertyRegistry},
    family::FamilyConfig,
};
use heck::ToShoutySnakeCase;
use itertools::Itertools;
use std::fmt::Write;

/// Renders the generated source file for one processed family.
///
/// The artifact contains the provenance header, the property enum in
/// registry insertion order (each variant annotated with the raw names
/// normalized into it), the packed string literal, the two integers a
/// decoder needs, and the default-class constant.
pub fn render(
    config: &FamilyConfig,
    header: &[String],
    packed: &PackedTable,
    registry: &PropertyRegistry,
    default: PropertyId,
) -> String {
    let prefix = config.prefix;
    let shouty = prefix.to_shouty_snake_case();
    let mut out = String::with_capacity(packed.data.len() + 2048);

    let _ = writeln!(out, "//! Packed {} property table.", config.name);
    out.push_str("//!\n");
    out.push_str("//! This is autogenerated code.\n");
    out.push_str("//! Do not manually edit this file.\n");
    out.push_str("//! This file may be overwritten by the codegen system at any time.\n");
    out.push_str("//!\n");
    let _ = writeln!(out, "//! Property definitions: <{}>.", config.doc_link);
    if !header.is_empty() {
        out.push_str("//\n// Generated from:\n//\n");
        for line in header {
            let _ = writeln!(out, "//     {}", line.trim_end());
        }
    }
    out.push('\n');

    let _ = writeln!(out, "/// {} property classes, in table order.", prefix);
    out.push_str("#[derive(Clone, Copy, Debug, PartialEq, Eq)]\n");
    out.push_str("#[repr(u8)]\n");
    let _ = writeln!(out, "pub enum {prefix} {{");
    for value in registry.values() {
        if value.normalized_from.is_empty() {
            let _ = writeln!(out, "    /// `{}`", value.name);
        } else {
            let also = value.normalized_from.iter().map(|name| format!("`{name}`")).join(", ");
            let _ = writeln!(out, "    /// `{}` (also {also})", value.name);
        }
        let _ = writeln!(out, "    {} = {},", value.name, value.index);
    }
    out.push_str("}\n\n");

    out.push_str("/// Packed `(start, end, class)` records: four lowercase base-36 digits\n");
    out.push_str("/// for the start, `!` or four more digits for the end, then one class\n");
    out.push_str("/// letter (`A`-`Z`, then `a`-`z`).\n");
    let _ = writeln!(out, "pub const {shouty}_TABLE: &str = \"{}\";", packed.data);
    out.push('\n');
    let _ = writeln!(out, "/// Number of single-codepoint records in [`{shouty}_TABLE`].");
    let _ = writeln!(out, "pub const {shouty}_SINGLES: usize = {};", packed.singles);
    out.push('\n');
    let _ = writeln!(out, "/// Number of {} classes.", config.name);
    let _ = writeln!(out, "pub const {shouty}_CLASSES: usize = {};", packed.classes);
    out.push('\n');
    out.push_str("/// Class carried by codepoints the table does not cover.\n");
    let _ = writeln!(
        out,
        "pub const {shouty}_DEFAULT: {prefix} = {prefix}::{};",
        registry.get(default).name
    );

    out
}

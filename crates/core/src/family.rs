//! Property families and the end-to-end generation driver.

use crate::{codegen, encode, enums::PropertyRegistry, parse, ranges};
use eyre::Result;

/// One of the two break-property families a run can process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    WordBreak,
    LineBreak,
}

/// Family-specific parameters threaded through one generic pipeline.
#[derive(Clone, Copy, Debug)]
pub struct FamilyConfig {
    /// Human-readable family name, used in logs and generated banners.
    pub name: &'static str,
    /// Type-name prefix for the generated enum and constants.
    pub prefix: &'static str,
    /// Class implicitly carried by codepoints the table does not list.
    pub default_property: &'static str,
    /// Reference documentation linked from the generated artifact.
    pub doc_link: &'static str,
    /// Whether [`parse::NORMALIZATIONS`] applies while parsing.
    pub normalizes: bool,
}

const WORD_BREAK: FamilyConfig = FamilyConfig {
    name: "word-break",
    prefix: "WordBreak",
    default_property: "Other",
    doc_link: "https://unicode.org/reports/tr29/",
    normalizes: false,
};

const LINE_BREAK: FamilyConfig = FamilyConfig {
    name: "line-break",
    prefix: "LineBreak",
    // Unlisted codepoints are XX, which the normalization table resolves
    // to AL, so AL is the effective default class.
    default_property: "AL",
    doc_link: "https://unicode.org/reports/tr14/",
    normalizes: true,
};

impl Family {
    pub fn config(self) -> &'static FamilyConfig {
        match self {
            Self::WordBreak => &WORD_BREAK,
            Self::LineBreak => &LINE_BREAK,
        }
    }
}

/// Runs the full pipeline for one family over the source table text and
/// returns the generated Rust source.
///
/// Stages: parse (header capture + normalization) → seed the family default
/// into the registry if the table never mentioned it → sort/validate/merge →
/// pack → render. Any stage failing aborts the run with nothing written.
pub fn generate(family: Family, source: &str) -> Result<String> {
    let config = family.config();
    let mut registry = PropertyRegistry::new();

    let table = parse::parse_table(source, config.normalizes, &mut registry)?;
    debug!(
        family = config.name,
        ranges = table.ranges.len(),
        classes = registry.len(),
        "parsed property table"
    );

    let default = registry.add(config.default_property);
    let merged = ranges::process(table.ranges, default)?;
    debug!(merged = merged.len(), "merged range collection");

    let packed = encode::encode(&merged, registry.len())?;
    trace!(bytes = packed.data.len(), singles = packed.singles, "packed table");

    Ok(codegen::render(config, &table.header, &packed, &registry, default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_expose_distinct_configs() {
        let word = Family::WordBreak.config();
        let line = Family::LineBreak.config();
        assert!(!word.normalizes);
        assert!(line.normalizes);
        assert_eq!(word.default_property, "Other");
        assert_eq!(line.default_property, "AL");
        assert_ne!(word.prefix, line.prefix);
    }

    #[test]
    fn default_seeding_is_idempotent() {
        // A table that already lists the default must not register it twice.
        let generated = generate(Family::LineBreak, "0041..005A;AL\n").unwrap();
        assert!(generated.contains("pub const LINE_BREAK_CLASSES: usize = 1;"));
    }
}

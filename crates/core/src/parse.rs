//! Parser for Unicode property-listing tables.
//!
//! Each significant line has the shape `<range>;<property>[# comment]`,
//! where `<range>` is a single hexadecimal codepoint or two codepoints
//! joined by `..`. Everything after `#` is a comment; lines that are blank
//! after comment stripping carry no data. A leading block of plain header
//! lines is captured verbatim so generated output can embed it as
//! provenance.

use crate::{
    enums::PropertyRegistry,
    ranges::UnicodeRange,
};

/// Upper bound of the Unicode codepoint space.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Raw source names folded into a canonical class during parsing.
///
/// These are the resolutions of UAX #14 rule LB1; the word-break table has
/// no equivalent aliases and skips this table entirely.
pub const NORMALIZATIONS: &[(&str, &str)] = &[
    ("NL", "BK"),
    ("AI", "AL"),
    ("SA", "AL"),
    ("SG", "AL"),
    ("XX", "AL"),
    ("CJ", "NS"),
];

/// A data line that does not fit the expected table shape.
///
/// Any variant aborts the run; no partial output is ever produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected `<range>;<property>` but found `{text}`")]
    Shape { line: usize, text: String },
    #[error("line {line}: empty property name")]
    EmptyProperty { line: usize },
    #[error("line {line}: invalid hexadecimal codepoint `{text}`")]
    Codepoint { line: usize, text: String },
    #[error("line {line}: codepoint {value:#X} is beyond U+10FFFF")]
    OutOfRange { line: usize, value: u32 },
    #[error("line {line}: range start U+{start:04X} is past its end U+{end:04X}")]
    Inverted { line: usize, start: u32, end: u32 },
}

/// A parsed property table: the preserved header block plus the data
/// ranges in source order.
#[derive(Clone, Debug, Default)]
pub struct PropertyTable {
    /// Leading header lines, verbatim, for provenance output.
    pub header: Vec<String>,
    pub ranges: Vec<UnicodeRange>,
}

/// Parses a full table, interning property names into `registry`.
///
/// The header block is the leading run of lines that are non-blank, not
/// comment-only, and not yet shaped like data (no `;`); the first line
/// outside that run ends it. When `normalizes` is set, raw names listed in
/// [`NORMALIZATIONS`] are registered under their canonical target with the
/// raw name recorded on it.
pub fn parse_table(
    source: &str,
    normalizes: bool,
    registry: &mut PropertyRegistry,
) -> Result<PropertyTable, ParseError> {
    let mut table = PropertyTable::default();
    let mut in_header = true;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let data = strip_comment(raw).trim();

        if in_header {
            if !data.is_empty() && !raw.contains(';') {
                table.header.push(raw.to_string());
                continue;
            }
            in_header = false;
        }

        if data.is_empty() {
            continue;
        }
        table.ranges.push(parse_line(line, data, normalizes, registry)?);
    }

    Ok(table)
}

fn strip_comment(line: &str) -> &str {
    match line.split_once('#') {
        Some((data, _)) => data,
        None => line,
    }
}

fn parse_line(
    line: usize,
    data: &str,
    normalizes: bool,
    registry: &mut PropertyRegistry,
) -> Result<UnicodeRange, ParseError> {
    let (span, name) = data
        .split_once(';')
        .ok_or_else(|| ParseError::Shape { line, text: data.to_string() })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::EmptyProperty { line });
    }

    let span = span.trim();
    let (start, end) = match span.split_once("..") {
        Some((start, end)) => (codepoint(line, start)?, codepoint(line, end)?),
        None => {
            let point = codepoint(line, span)?;
            (point, point)
        }
    };
    if start > end {
        return Err(ParseError::Inverted { line, start, end });
    }

    let normalized = normalizes
        .then(|| NORMALIZATIONS.iter().find(|(raw, _)| *raw == name))
        .flatten();
    let property = match normalized {
        Some((raw, canonical)) => registry.add_normalized(canonical, raw),
        None => registry.add(name),
    };

    Ok(UnicodeRange { start, end, property })
}

fn codepoint(line: usize, text: &str) -> Result<u32, ParseError> {
    let text = text.trim();
    let value = u32::from_str_radix(text, 16)
        .map_err(|_| ParseError::Codepoint { line, text: text.to_string() })?;
    if value > MAX_CODEPOINT {
        return Err(ParseError::OutOfRange { line, value });
    }
    Ok(value)
}

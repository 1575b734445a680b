//! Range collection processing: sort, overlap validation, merge.

use crate::enums::PropertyId;
use std::fmt;

/// A contiguous span of codepoints carrying one property value.
///
/// Invariant: `start <= end`, both within the Unicode codepoint space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnicodeRange {
    pub start: u32,
    pub end: u32,
    pub property: PropertyId,
}

impl fmt::Display for UnicodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "U+{:04X}", self.start)
        } else {
            write!(f, "U+{:04X}..U+{:04X}", self.start, self.end)
        }
    }
}

/// Two source ranges whose spans intersect.
///
/// The source tables guarantee disjoint ranges, so an overlap means the
/// input is corrupt or in an unexpected format; the run aborts without
/// producing output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("range {next} overlaps the preceding range {prev}")]
pub struct OverlapError {
    pub prev: UnicodeRange,
    pub next: UnicodeRange,
}

/// Converts parsed ranges into the canonical minimal sorted form.
///
/// Sorts ascending by start, verifies that no two ranges overlap, then
/// merges in a single scan: consecutive ranges collapse when they carry the
/// same property value and are either directly adjacent or both carry the
/// designated default property. Uncovered codepoints resolve to the default
/// anyway, so gaps between default-property ranges collapse without
/// changing anything observable.
pub fn process(
    mut ranges: Vec<UnicodeRange>,
    default: PropertyId,
) -> Result<Vec<UnicodeRange>, OverlapError> {
    ranges.sort_by_key(|range| range.start);

    for pair in ranges.windows(2) {
        if pair[1].start <= pair[0].end {
            return Err(OverlapError { prev: pair[0], next: pair[1] });
        }
    }

    let mut merged: Vec<UnicodeRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(prev)
                if prev.property == range.property
                    && (range.start == prev.end + 1 || range.property == default) =>
            {
                prev.end = range.end;
            }
            _ => merged.push(range),
        }
    }
    Ok(merged)
}

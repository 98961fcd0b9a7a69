//! Color annotations over a song's lyric text and the normalization pass
//! that keeps them consistent with the text they decorate. The normalizer is
//! the single enforcement point for the range invariant: the save path runs
//! it before every persist, so anything read back from the store can be
//! rendered without re-checking bounds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A half-open `[start, end)` byte span over a song's lyrics paired with the
/// color it should be rendered in. Offsets are byte indices into the lyric
/// text; a range whose `end` runs past the text is considered invalid as a
/// whole rather than being clipped.
pub struct ColorRange {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
    /// Display color, kept as raw text (typically a `#rrggbb` value) so the
    /// store stays agnostic about how the caller names colors.
    pub color: String,
}

impl ColorRange {
    /// Convenience constructor used heavily by callers building annotation
    /// sets by hand.
    pub fn new(start: usize, end: usize, color: impl Into<String>) -> Self {
        Self {
            start,
            end,
            color: color.into(),
        }
    }
}

/// Produce the canonical form of an annotation set against `text`.
///
/// Rules, applied in order: empty or inverted ranges and ranges reaching past
/// the end of `text` are discarded; survivors are sorted ascending by start;
/// a left-to-right scan then keeps a range only if it begins at or after the
/// end of the previously accepted one. An overlapping range is dropped whole,
/// so the first range by start wins outright. No merging, no truncation.
pub fn normalize_ranges(text: &str, mut ranges: Vec<ColorRange>) -> Vec<ColorRange> {
    ranges.retain(|range| range.start < range.end && range.end <= text.len());
    ranges.sort_by_key(|range| range.start);

    let mut accepted = Vec::with_capacity(ranges.len());
    let mut cursor = 0;
    for range in ranges {
        if range.start >= cursor {
            cursor = range.end;
            accepted.push(range);
        }
    }
    accepted
}

use super::segment::LineSegment;
use crate::measure::WordBox;
use crate::units::Pt;
use std::ops::Range;

/// The words packed into one segment of a line
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRun {
    /// Index of the segment within the line's segment list
    pub segment: usize,
    /// Indices of the packed words, relative to the words handed to [fit]
    pub words: Range<usize>,
    /// Width of the packed words including the gaps between them
    pub width: Pt,
}

/// Outcome of fitting one line's worth of words
#[derive(Debug, Clone, PartialEq)]
pub struct Fit<'w> {
    /// The leading words that found a place on the line
    pub placed: &'w [WordBox],
    /// Everything after them, left for later lines
    pub overflow: &'w [WordBox],
    /// Where each placed word went, one entry per segment that received words
    pub runs: Vec<SegmentRun>,
}

/// Greedily packs words from the front of `words` into `segments`, left to right.
///
/// A segment keeps taking words until the next one would not fit, at which point the
/// segment is closed for good and packing moves on to the next segment. `space` is only
/// inserted between two words sharing a segment. Words are never split, so a word wider
/// than every remaining segment stays in the overflow along with everything after it.
pub fn fit<'w>(words: &'w [WordBox], segments: &[LineSegment], space: Pt) -> Fit<'w> {
    let mut next = 0usize;
    let mut runs: Vec<SegmentRun> = Vec::default();

    for (segment_index, segment) in segments.iter().enumerate() {
        if next >= words.len() {
            break;
        }

        let available = segment.width();
        let first = next;
        let mut running = Pt::ZERO;

        while let Some(word) = words.get(next) {
            let gap = if next > first { space } else { Pt::ZERO };
            if running + gap + word.width > available {
                break;
            }
            running += gap + word.width;
            next += 1;
        }

        if next > first {
            runs.push(SegmentRun {
                segment: segment_index,
                words: first..next,
                width: running,
            });
        }
    }

    let (placed, overflow) = words.split_at(next);
    Fit {
        placed,
        overflow,
        runs,
    }
}

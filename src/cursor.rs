use crate::layout::TextLine;
use crate::units::Pt;

/// Where an edit caret lands for a tap or click on the surface
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CursorPosition {
    pub line_index: usize,
    pub segment_index: usize,
    /// Character offset within the segment's text, between `0` and its length inclusive
    pub char_index: usize,
    /// Global index of the word the caret sits in or just after
    pub word_index: usize,
    /// Caret position on the surface
    pub x: Pt,
    pub y: Pt,
}

/// Map a surface coordinate back to a caret position within `lines`.
///
/// The line is the last one whose top is at or above `y`, so a tap inside a line's band
/// picks that line, taps in a skipped band resolve to the closest line above it, taps
/// below the content resolve to the last line and taps above it to the first. Within the
/// line the first segment spanning `x` is used, falling back to the first segment.
/// Characters are assumed to share the segment's text width evenly.
///
/// Returns [None] when there are no lines to place a caret in.
pub fn locate(x: Pt, y: Pt, lines: &[TextLine]) -> Option<CursorPosition> {
    let first = lines.first()?;
    let line = lines
        .iter()
        .rev()
        .find(|line| line.y_position <= y)
        .unwrap_or(first);

    let (segment_index, segment) = line
        .segments
        .iter()
        .enumerate()
        .find(|(_, segment)| segment.start_x <= x && x <= segment.end_x())
        .or_else(|| line.segments.first().map(|segment| (0, segment)))?;

    let chars: Vec<char> = segment.text.chars().collect();
    let len = chars.len();
    let char_width = if len > 0 {
        segment.text_width / len as f32
    } else {
        Pt::ZERO
    };
    let char_index = if char_width.is_positive() {
        ((x - segment.start_x) / char_width).round().clamp(0.0, len as f32) as usize
    } else {
        0
    };

    let words_before = chars[..char_index]
        .iter()
        .filter(|ch| **ch == ' ')
        .count();
    let word_index = (segment.word_range.start + words_before)
        .min(segment.word_range.end.saturating_sub(1));

    Some(CursorPosition {
        line_index: line.line_index,
        segment_index,
        char_index,
        word_index,
        x: segment.start_x + char_width * char_index as f32,
        y: line.y_position,
    })
}

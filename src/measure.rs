//! Turning raw text into measured word boxes.

use crate::style::StyleDescriptor;
use crate::units::Pt;
use std::ops::Range;

/// Something that can tell how wide a run of text is at a given font size.
///
/// Implementations must be deterministic and monotonic: adding characters, or increasing
/// the size, never makes a run narrower.
pub trait Measure {
    /// Width of `text` set at `size`
    fn width_of(&self, text: &str, size: Pt) -> Pt;

    /// Width of the gap placed between two words sharing a segment
    fn space_width(&self, size: Pt) -> Pt {
        self.width_of(" ", size)
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn width_of(&self, text: &str, size: Pt) -> Pt {
        (**self).width_of(text, size)
    }

    fn space_width(&self, size: Pt) -> Pt {
        (**self).space_width(size)
    }
}

/// Measures every character as the same fraction of the font size
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UniformMeasure {
    pub char_width_ratio: f32,
}

impl UniformMeasure {
    pub const DEFAULT_RATIO: f32 = 0.6;

    pub fn new(char_width_ratio: f32) -> UniformMeasure {
        UniformMeasure { char_width_ratio }
    }
}

impl Default for UniformMeasure {
    fn default() -> Self {
        UniformMeasure::new(UniformMeasure::DEFAULT_RATIO)
    }
}

impl Measure for UniformMeasure {
    fn width_of(&self, text: &str, size: Pt) -> Pt {
        size * (self.char_width_ratio * text.chars().count() as f32)
    }
}

/// A single whitespace-delimited token and its measured width
#[derive(Debug, Clone, PartialEq)]
pub struct WordBox {
    pub text: String,
    pub width: Pt,
    /// Ordinal of the token within the tokenized text
    pub start_index: usize,
    /// One past [WordBox::start_index]
    pub end_index: usize,
    /// Byte range of the token within the source text
    pub source_range: Range<usize>,
}

/// Split `text` on runs of whitespace and measure every token with `measure`.
/// Empty input, or input that is only whitespace, produces no boxes.
pub fn measure<M: Measure + ?Sized>(
    text: &str,
    style: &StyleDescriptor,
    measure: &M,
) -> Vec<WordBox> {
    let mut words: Vec<WordBox> = Vec::default();
    let mut token_start: Option<usize> = None;

    let mut push = |range: Range<usize>| {
        let word = &text[range.clone()];
        let ordinal = words.len();
        words.push(WordBox {
            text: word.to_string(),
            width: measure.width_of(word, style.font_size),
            start_index: ordinal,
            end_index: ordinal + 1,
            source_range: range,
        });
    };

    for (i, ch) in text.char_indices() {
        match (ch.is_whitespace(), token_start) {
            (true, Some(start)) => {
                push(start..i);
                token_start = None;
            }
            (false, None) => token_start = Some(i),
            _ => {}
        }
    }
    if let Some(start) = token_start {
        push(start..text.len());
    }

    words
}

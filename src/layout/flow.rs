use super::fit::fit;
use super::segment::segments_for_line;
use crate::measure::{measure, Measure, UniformMeasure, WordBox};
use crate::obstacle::Obstacle;
use crate::style::StyleDescriptor;
use crate::units::Pt;
use crate::FlowError;
use log::{debug, trace};
use std::ops::Range;

/// A run of words placed in one free segment of a line
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSegment {
    /// The placed words joined by single spaces
    pub text: String,
    pub start_x: Pt,
    /// Width of the free segment the words were placed in
    pub width: Pt,
    /// Width actually covered by the words and the gaps between them
    pub text_width: Pt,
    /// Global word indices, into the tokenized source text
    pub word_range: Range<usize>,
}

impl PlacedSegment {
    pub fn end_x(&self) -> Pt {
        self.start_x + self.width
    }
}

/// One laid out line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Ordered by `start_x`, never overlapping
    pub segments: Vec<PlacedSegment>,
    /// Top of the line's band
    pub y_position: Pt,
    /// Position of this line within [TextLayoutResult::lines]
    pub line_index: usize,
    /// Which band of the surface the line sits in; differs from `line_index` once fully
    /// blocked bands have been skipped
    pub band_index: usize,
    pub line_height: Pt,
}

/// The full result of flowing a text around its obstacles
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayoutResult {
    pub lines: Vec<TextLine>,
    /// The y-coordinate at which layout stopped
    pub total_height: Pt,
    /// `true` iff not every word found a place on the surface
    pub overflow: bool,
    pub consumed_word_count: usize,
    pub total_word_count: usize,
}

impl TextLayoutResult {
    fn empty(total_word_count: usize) -> TextLayoutResult {
        TextLayoutResult {
            lines: Vec::default(),
            total_height: Pt::ZERO,
            overflow: total_word_count > 0,
            consumed_word_count: 0,
            total_word_count,
        }
    }

    pub fn overflow_word_count(&self) -> usize {
        self.total_word_count - self.consumed_word_count
    }

    /// Every placed word, in reading order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines
            .iter()
            .flat_map(|line| line.segments.iter())
            .flat_map(|segment| segment.text.split(' '))
    }
}

/// Lays text out line by line around obstacles, measuring words with `M`.
///
/// Each call is a pure function of its arguments; nothing is carried from one call to the
/// next, so a single `TextFlow` can be shared freely between threads.
#[derive(Debug, Default, Clone)]
pub struct TextFlow<M: Measure = UniformMeasure> {
    measure: M,
}

impl<M: Measure> TextFlow<M> {
    pub fn new(measure: M) -> TextFlow<M> {
        TextFlow { measure }
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Flow `text` across a `surface_width` × `surface_height` surface, starting at the top
    /// and skipping any band an obstacle blocks from edge to edge.
    ///
    /// Bands are stepped exactly `style.line_height` apart for as long as the top of the
    /// next band is still on the surface, so consecutive lines are one band apart unless
    /// bands between them were skipped. Words that don't make it are reported through
    /// [TextLayoutResult::overflow].
    ///
    /// Only an invalid style is an error; an empty or degenerate surface simply places
    /// nothing.
    pub fn layout(
        &self,
        text: &str,
        style: &StyleDescriptor,
        obstacles: &[Obstacle],
        surface_width: Pt,
        surface_height: Pt,
    ) -> Result<TextLayoutResult, FlowError> {
        style.validate()?;

        let words = measure(text, style, &self.measure);
        debug!(
            "laying out {} words around {} obstacles on a {surface_width} x {surface_height} surface",
            words.len(),
            obstacles.len()
        );

        if !surface_width.is_positive() || !surface_height.is_positive() {
            return Ok(TextLayoutResult::empty(words.len()));
        }

        let line_height = style.line_height;
        let space = self.measure.space_width(style.font_size);

        // band tops are derived from an integer counter; a running f32 sum stops growing
        // once it is large relative to the line height
        let band_count = (surface_height.0 as f64 / line_height.0 as f64).ceil() as usize;
        let band_top = |band: usize| Pt((band as f64 * line_height.0 as f64) as f32);

        let mut band = 0usize;
        let mut consumed = 0usize;
        let mut lines: Vec<TextLine> = Vec::default();

        while consumed < words.len() && band < band_count {
            let current_y = band_top(band);
            if band > 0 && current_y <= band_top(band - 1) {
                debug!("band {band} no longer advances past {current_y}, stopping");
                band = band_count;
                break;
            }

            let remaining = &words[consumed..];
            if remaining[0].width > surface_width {
                // no band can ever be wider than the surface itself
                trace!(
                    "\"{}\" is wider than the surface, nothing more can be placed",
                    remaining[0].text
                );
                band = band_count;
                break;
            }

            let segments = segments_for_line(obstacles, current_y, line_height, surface_width);
            if segments.is_empty() {
                trace!("band at {current_y} is blocked");
                band += 1;
                continue;
            }

            let fitted = fit(remaining, &segments, space);
            if fitted.placed.is_empty() {
                trace!(
                    "\"{}\" fits none of the {} segments at {current_y}",
                    remaining[0].text,
                    segments.len()
                );
                band += 1;
                continue;
            }

            let placed_segments = fitted
                .runs
                .iter()
                .map(|run| {
                    let segment = &segments[run.segment];
                    let word_range = (consumed + run.words.start)..(consumed + run.words.end);
                    PlacedSegment {
                        text: join_words(&words[word_range.clone()]),
                        start_x: segment.start_x,
                        width: segment.width(),
                        text_width: run.width,
                        word_range,
                    }
                })
                .collect();

            trace!(
                "placed {} words on line {} at {current_y}",
                fitted.placed.len(),
                lines.len()
            );
            consumed += fitted.placed.len();
            lines.push(TextLine {
                segments: placed_segments,
                y_position: current_y,
                line_index: lines.len(),
                band_index: band,
                line_height,
            });
            band += 1;
        }

        let result = TextLayoutResult {
            lines,
            total_height: band_top(band),
            overflow: consumed < words.len(),
            consumed_word_count: consumed,
            total_word_count: words.len(),
        };
        debug!(
            "laid out {} lines, {}/{} words placed, overflow: {}",
            result.lines.len(),
            result.consumed_word_count,
            result.total_word_count,
            result.overflow
        );
        Ok(result)
    }
}

fn join_words(words: &[WordBox]) -> String {
    words
        .iter()
        .map(|word| word.text.as_str())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Flow `text` around `obstacles` using [UniformMeasure::default]
pub fn layout(
    text: &str,
    style: &StyleDescriptor,
    obstacles: &[Obstacle],
    surface_width: Pt,
    surface_height: Pt,
) -> Result<TextLayoutResult, FlowError> {
    TextFlow::<UniformMeasure>::default().layout(
        text,
        style,
        obstacles,
        surface_width,
        surface_height,
    )
}

use crate::colour::Colour;
use crate::error::FlowError;
use crate::units::Pt;

/// Horizontal alignment requested by the caller. Only [Alignment::Start] is laid out by
/// the engine, every other value is accepted and treated as `Start`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
    Justify,
}

/// How a uniform run of text should be measured and stacked
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub font_size: Pt,
    /// Absolute height of one line, the distance between successive line tops
    pub line_height: Pt,
    pub alignment: Alignment,
    /// Ignored by layout; used when painting
    pub colour: Colour,
}

impl StyleDescriptor {
    pub fn new<S: Into<Pt>, L: Into<Pt>>(font_size: S, line_height: L) -> StyleDescriptor {
        StyleDescriptor {
            font_size: font_size.into(),
            line_height: line_height.into(),
            alignment: Alignment::default(),
            colour: Colour::default(),
        }
    }

    pub fn with_alignment(self, alignment: Alignment) -> StyleDescriptor {
        StyleDescriptor { alignment, ..self }
    }

    pub fn with_colour(self, colour: Colour) -> StyleDescriptor {
        StyleDescriptor { colour, ..self }
    }

    /// Reject styles that would make layout meaningless or non-terminating
    pub fn validate(&self) -> Result<(), FlowError> {
        if !self.line_height.is_positive() {
            return Err(FlowError::InvalidLineHeight(self.line_height));
        }
        if !self.font_size.is_positive() {
            return Err(FlowError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }
}

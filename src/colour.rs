use pdf_writer::Content;

/// A colour carried by a [StyleDescriptor](crate::StyleDescriptor). The layout engine never
/// looks at it; it only matters to whatever paints the laid out lines, such as
/// [preview](crate::preview).
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

impl Colour {
    pub(crate) fn apply_fill(&self, content: &mut Content) {
        match *self {
            Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_fill_gray(g),
        };
    }

    pub(crate) fn apply_stroke(&self, content: &mut Content) {
        match *self {
            Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_stroke_gray(g),
        };
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const LIGHT_GREY: Colour = Colour::Grey { g: 0.85 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}

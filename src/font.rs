use crate::{measure::Measure, FlowError, Pt};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed TrueType / OpenType font, used for glyph-accurate word measurement in place of
/// [UniformMeasure](crate::UniformMeasure).
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, FlowError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// a natural choice for [StyleDescriptor::line_height](crate::StyleDescriptor::line_height).
    pub fn line_height(&self, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let scaling = self.scaling(size);
        let leading: Pt = scaling * face.line_gap() as f32;
        let ascent: Pt = scaling * face.ascender() as f32;
        let descent: Pt = scaling * face.descender() as f32;
        leading + ascent - descent
    }

    /// Horizontal advance of a single character. Characters without a glyph are measured
    /// as the `.notdef` glyph so that widths keep growing with character count.
    fn advance(&self, ch: char) -> u16 {
        let face = self.face.as_face_ref();
        let gid = face.glyph_index(ch).unwrap_or(GlyphId(0));
        face.glyph_hor_advance(gid).unwrap_or_default()
    }
}

impl Measure for Font {
    fn width_of(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .map(|ch| scaling * self.advance(ch) as f32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TextFlow;
    use crate::style::StyleDescriptor;

    fn mono() -> Font {
        let font_data = include_bytes!("../assets/DejaVuSansMono.ttf");
        Font::load(font_data.to_vec()).expect("can load font")
    }

    #[test]
    fn widths_grow_with_each_character() {
        let font = mono();
        let mut previous = Pt::ZERO;
        for n in 1..=12 {
            let width = font.width_of(&"m".repeat(n), Pt(12.0));
            assert!(width > previous);
            previous = width;
        }
    }

    #[test]
    fn widths_scale_with_size() {
        let font = mono();
        let small = font.width_of("flow", Pt(10.0));
        let large = font.width_of("flow", Pt(20.0));
        assert!((large.0 - small.0 * 2.0).abs() < 1e-3);
    }

    #[test]
    fn monospaced_glyphs_share_an_advance() {
        let font = mono();
        let narrow = font.width_of("iiii", Pt(12.0));
        let wide = font.width_of("WWWW", Pt(12.0));
        assert!((narrow.0 - wide.0).abs() < 1e-3);
        assert!((font.space_width(Pt(12.0)).0 - narrow.0 / 4.0).abs() < 1e-3);
    }

    #[test]
    fn missing_glyphs_are_measured_as_notdef() {
        let font = mono();
        let missing = font.width_of("日", Pt(12.0));
        assert!(missing.is_positive());
        assert!(font.width_of("a日", Pt(12.0)) > font.width_of("a", Pt(12.0)));
    }

    #[test]
    fn line_height_covers_the_font_size() {
        let font = mono();
        assert!(font.line_height(Pt(12.0)) >= Pt(12.0));
    }

    #[test]
    fn lays_out_with_glyph_widths() {
        let font = mono();
        let size = Pt(12.0);
        let style = StyleDescriptor::new(size, font.line_height(size));
        let text = "The quick brown fox jumps over the lazy dog";

        let one_line = font.width_of(text, size);
        let flow = TextFlow::new(&font);
        let result = flow
            .layout(text, &style, &[], one_line + Pt(1.0), Pt(200.0))
            .expect("valid style");
        assert_eq!(result.lines.len(), 1);
        assert!((result.lines[0].segments[0].text_width.0 - one_line.0).abs() < 1e-2);

        let narrow = flow
            .layout(text, &style, &[], one_line / 2.0, Pt(200.0))
            .expect("valid style");
        assert!(narrow.lines.len() > 1);
        assert!(!narrow.overflow);
        for line in narrow.lines.iter() {
            for segment in line.segments.iter() {
                assert!(segment.text_width <= segment.width);
            }
        }
    }

    #[test]
    fn rejects_bytes_that_are_not_a_font() {
        let result = Font::load(b"definitely not a font".to_vec());
        assert!(matches!(result, Err(FlowError::FaceParsingError(_))));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(Font::load(Vec::new()).is_err());
    }
}

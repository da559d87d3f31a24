//! Renders a [TextLayoutResult] into a single page PDF so a layout can be inspected by eye.
//!
//! Obstacles are painted as grey boxes with their clearance outlined in red, every placed
//! segment is outlined in blue, and the text itself is set in Helvetica using the style's
//! colour. Helvetica's metrics will not match the measurer used for layout, so text may
//! run short of or past its segment outline.

use crate::colour::colours;
use crate::layout::TextLayoutResult;
use crate::obstacle::Obstacle;
use crate::rect::Rect;
use crate::style::StyleDescriptor;
use crate::units::Pt;
use crate::FlowError;
use pdf_writer::{Content, Finish, Name, Pdf, Ref, Str};
use std::io::Write;

const FONT_NAME: Name<'static> = Name(b"F1");

/// Render the layout and its obstacles on a page the size of the surface, returning the
/// PDF bytes
pub fn render(
    result: &TextLayoutResult,
    obstacles: &[Obstacle],
    surface_width: Pt,
    surface_height: Pt,
    style: &StyleDescriptor,
) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let content_id = Ref::new(5);

    let mut writer = Pdf::new();
    writer.catalog(catalog_id).pages(page_tree_id);
    writer.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = writer.page(page_id);
    page.media_box(pdf_writer::Rect::new(
        0.0,
        0.0,
        surface_width.0,
        surface_height.0,
    ));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources().fonts().pair(FONT_NAME, font_id);
    page.finish();

    writer.type1_font(font_id).base_font(Name(b"Helvetica"));

    let content = render_contents(result, obstacles, surface_height, style);
    writer.stream(content_id, &content);

    writer.finish()
}

/// Render the preview and write it to `w`
pub fn write<W: Write>(
    result: &TextLayoutResult,
    obstacles: &[Obstacle],
    surface_width: Pt,
    surface_height: Pt,
    style: &StyleDescriptor,
    mut w: W,
) -> Result<(), FlowError> {
    let bytes = render(result, obstacles, surface_width, surface_height, style);
    w.write_all(bytes.as_slice()).map_err(Into::into)
}

fn render_contents(
    result: &TextLayoutResult,
    obstacles: &[Obstacle],
    surface_height: Pt,
    style: &StyleDescriptor,
) -> Vec<u8> {
    let mut content = Content::new();

    // surface coordinates grow downwards, PDF coordinates grow upwards
    let flip = |r: &Rect| -> (f32, f32, f32, f32) {
        (r.x.0, (surface_height - r.bottom()).0, r.width.0, r.height.0)
    };

    for obstacle in obstacles.iter() {
        let (x, y, w, h) = flip(&obstacle.bounds);
        colours::LIGHT_GREY.apply_fill(&mut content);
        content.rect(x, y, w, h);
        content.fill_nonzero();

        let (x, y, w, h) = flip(&obstacle.footprint());
        colours::RED.apply_stroke(&mut content);
        content.rect(x, y, w, h);
        content.stroke();
    }

    colours::BLUE.apply_stroke(&mut content);
    for line in result.lines.iter() {
        for segment in line.segments.iter() {
            let (x, y, w, h) = flip(&Rect {
                x: segment.start_x,
                y: line.y_position,
                width: segment.width,
                height: line.line_height,
            });
            content.rect(x, y, w, h);
            content.stroke();
        }
    }

    style.colour.apply_fill(&mut content);
    for line in result.lines.iter() {
        let baseline = line.y_position + line.line_height * 0.5 + style.font_size * 0.35;
        for segment in line.segments.iter() {
            let text = to_ascii(&segment.text);
            content.begin_text();
            content.set_font(FONT_NAME, style.font_size.0);
            content.next_line(segment.start_x.0, (surface_height - baseline).0);
            content.show(Str(text.as_bytes()));
            content.end_text();
        }
    }

    content.finish()
}

/// The base 14 fonts are used without an embedded encoding, so restrict the shown text to
/// ASCII
fn to_ascii(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_ascii() { ch } else { '?' })
        .collect()
}

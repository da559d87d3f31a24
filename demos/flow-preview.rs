use text_flow::layout::layout;
use text_flow::preview;
use text_flow::{build_obstacles, colours, PlacedObject, Pt, StyleDescriptor};

fn main() {
    // a few stickers dropped onto the page by hand
    let objects = vec![
        PlacedObject::new("star", "page-1", (Pt(90.0), Pt(120.0)), (Pt(80.0), Pt(80.0))),
        PlacedObject::new("heart", "page-1", (Pt(330.0), Pt(260.0)), (Pt(60.0), Pt(50.0)))
            .with_scale(1.8)
            .with_rotation(15.0),
        PlacedObject::new("banner", "page-1", (Pt(210.0), Pt(430.0)), (Pt(420.0), Pt(30.0))),
        PlacedObject::new("elsewhere", "page-2", (Pt(200.0), Pt(200.0)), (Pt(100.0), Pt(100.0))),
    ];
    let obstacles = build_obstacles(&objects, "page-1", None);

    let (width, height) = (Pt(420.0), Pt(595.0));
    let style = StyleDescriptor::new(Pt(11.0), Pt(16.0)).with_colour(colours::BLACK);
    let text = lipsum::lipsum_from_seed(400, 42);

    let result = layout(&text, &style, &obstacles, width, height).expect("style is valid");
    println!(
        "{} lines, {} of {} words placed, overflow: {}",
        result.lines.len(),
        result.consumed_word_count,
        result.total_word_count,
        result.overflow
    );

    let out = std::fs::File::create("flow-preview.pdf").unwrap();
    preview::write(&result, &obstacles, width, height, &style, out).unwrap();
}

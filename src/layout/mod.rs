//! Flowing text around obstacles.
//!
//! Layout proceeds one band (a strip `line_height` tall) at a time, from the top of the
//! surface down:
//!
//! - [`segments_for_line`](crate::layout::segments_for_line) finds the horizontally free spans of the band
//! - [`fit`](crate::layout::fit) greedily packs the next words into those spans, left to right
//! - [`TextFlow::layout`](crate::layout::TextFlow::layout) repeats this until the words or the surface run out
//!
//! # Example
//!
//! ```
//! use text_flow::{build_obstacles, PlacedObject, Pt, StyleDescriptor};
//! use text_flow::layout::layout;
//!
//! let objects = vec![PlacedObject::new(
//!     "sticker-1",
//!     "page-1",
//!     (Pt(150.0), Pt(30.0)),
//!     (Pt(60.0), Pt(40.0)),
//! )];
//! let obstacles = build_obstacles(&objects, "page-1", None);
//!
//! let style = StyleDescriptor::new(Pt(12.0), Pt(18.0));
//! let result = layout(
//!     "Text flows around the sticker rather than through it.",
//!     &style,
//!     &obstacles,
//!     Pt(300.0),
//!     Pt(200.0),
//! )
//! .expect("style is valid");
//!
//! assert!(!result.overflow);
//! ```

mod fit;
mod flow;
mod segment;

pub use fit::*;
pub use flow::*;
pub use segment::*;

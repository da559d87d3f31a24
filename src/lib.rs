//! Flows a block of prose line by line around rectangular obstacles placed freely on a
//! page, instead of through them.
//!
//! The engine is a set of pure functions: every call recomputes the layout from its
//! inputs, holds no state between calls and performs no I/O (bar the optional
//! [preview]).

mod colour;
pub use colour::*;

mod cursor;
pub use cursor::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Line segmentation, greedy fitting and the layout driver
pub mod layout;
pub use layout::{layout, TextFlow, TextLayoutResult, TextLine};

mod measure;
pub use measure::*;

mod obstacle;
pub use obstacle::*;

pub mod preview;

mod rect;
pub use rect::*;

mod style;
pub use style::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, for callers extending a [preview]
pub use pdf_writer;

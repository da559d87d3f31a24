use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("line height must be positive, got {0}")]
    /// A line height of zero or less would never advance the layout
    InvalidLineHeight(Pt),

    #[error("font size must be positive, got {0}")]
    /// Font sizes of zero or less cannot be measured
    InvalidFontSize(Pt),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// An I/O error occurred while writing a preview
    Io(#[from] std::io::Error),
}

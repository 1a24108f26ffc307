use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The requested surface has a zero-sized dimension.
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A base color is not a `#RRGGBB` hex string.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

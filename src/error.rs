use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to encode or decode an image
    Image(#[from] image::ImageError),

    #[error("could not reserve memory for {what}")]
    /// A word or line buffer could not be allocated; nothing was drawn
    Allocation {
        what: &'static str,
        #[source]
        source: std::collections::TryReserveError,
    },

    #[error("font pixel size must be greater than zero, got {0}")]
    /// Fonts can only be sized to a positive number of pixels
    InvalidPixelSize(u32),

    #[error("alignment `{0}` is not supported (expected `left` or `center`)")]
    /// Only left and centre alignment are implemented
    UnsupportedAlignment(String),

    #[error("invalid framebuffer geometry: {0}")]
    /// The framebuffer description does not match its memory
    FrameBufferGeometry(String),
}

/// Convenience alias for results produced by this crate
pub type Result<T> = std::result::Result<T, Error>;

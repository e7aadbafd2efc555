use compact_str::CompactString;

/// Errors raised while writing a bitmap font or its atlas pages.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The caller passed arguments that cannot produce a font file.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Creating or writing an output file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Encoding an atlas page as PNG failed for a reason other than I/O.
    #[error("PNG encoding failed: {0}")]
    PngEncoding(png::EncodingError),

    /// The `info` charset does not name a known text encoding.
    #[error("Unsupported charset: {0}")]
    UnsupportedCharset(CompactString),
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(io) => Self::Io(io),
            other => Self::PngEncoding(other),
        }
    }
}

impl Error {
    pub(crate) fn no_pages() -> Self {
        Self::InvalidArgument("no atlas pages supplied; at least one page is required".to_string())
    }

    pub(crate) fn unsupported_charset(label: &str) -> Self {
        Self::UnsupportedCharset(label.into())
    }
}

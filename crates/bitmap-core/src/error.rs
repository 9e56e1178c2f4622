//! Error taxonomy shared by the codec, the transforms and the pipeline.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BitmapError>;

/// Coarse classification of a [`BitmapError`].
///
/// Callers that map failures to user-facing messages or exit codes usually
/// only care about which of these four groups an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The bytes are not a supported 24-bit uncompressed bitmap.
    Format,
    /// Reading or writing failed, or the raster ended early.
    Io,
    /// A transform name, value or option string could not be understood.
    Argument,
    /// A crop window does not fit inside the image.
    Bounds,
}

/// Errors produced by bitmap decoding, encoding and transforms.
#[derive(Debug, Error)]
pub enum BitmapError {
    /// Fewer bytes than the smallest possible file (14 + 40).
    #[error("Not a valid BMP file: {len} bytes is shorter than the minimum of 54")]
    TooShort { len: u64 },

    /// The first two bytes are not "BM".
    #[error("Not a valid BMP file: bad signature {0:?}")]
    BadSignature([u8; 2]),

    /// The info header declares a size other than 40, 108 or 124.
    #[error("Unsupported BMP format (DIB header size = {0})")]
    UnsupportedHeaderSize(u32),

    #[error("Not a 24-bit BMP file (bit count = {0})")]
    UnsupportedBitDepth(u16),

    #[error("Compressed BMP files are not supported (compression = {0})")]
    UnsupportedCompression(u32),

    #[error("Unexpected pixel data offset: got {actual}, expected {expected}")]
    DataOffsetMismatch { expected: u32, actual: u32 },

    /// The file is smaller than the header claims it should be.
    #[error("File is corrupted or incomplete: {actual} bytes, expected at least {expected}")]
    FileTooSmall { expected: u64, actual: u64 },

    #[error("Image dimensions {width}x{height} are out of range (0 to 65536)")]
    DimensionsOutOfRange { width: i32, height: i32 },

    /// The pixel raster ended before `height` full rows were read.
    #[error("Truncated pixel data: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    InvalidArgument(String),

    /// A pixel grid does not have the shape its header declares.
    #[error("Pixel grid is {grid_width}x{grid_height} but the header declares {width}x{height}")]
    DimensionMismatch {
        width: i32,
        height: i32,
        grid_width: u32,
        grid_height: u32,
    },

    #[error("Crop window is out of bounds: {0}")]
    CropOutOfBounds(String),
}

impl BitmapError {
    /// Shorthand for [`BitmapError::InvalidArgument`].
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        BitmapError::InvalidArgument(msg.into())
    }

    /// Which of the four error groups this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BitmapError::TooShort { .. }
            | BitmapError::BadSignature(_)
            | BitmapError::UnsupportedHeaderSize(_)
            | BitmapError::UnsupportedBitDepth(_)
            | BitmapError::UnsupportedCompression(_)
            | BitmapError::DataOffsetMismatch { .. }
            | BitmapError::FileTooSmall { .. }
            | BitmapError::DimensionsOutOfRange { .. } => ErrorKind::Format,
            BitmapError::TruncatedData { .. } | BitmapError::Io(_) => ErrorKind::Io,
            BitmapError::InvalidArgument(_) | BitmapError::DimensionMismatch { .. } => {
                ErrorKind::Argument
            }
            BitmapError::CropOutOfBounds(_) => ErrorKind::Bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BitmapError::UnsupportedHeaderSize(50);
        assert_eq!(err.to_string(), "Unsupported BMP format (DIB header size = 50)");

        let err = BitmapError::invalid("invalid filter type - 'sepia'");
        assert_eq!(err.to_string(), "invalid filter type - 'sepia'");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(BitmapError::BadSignature(*b"PN").kind(), ErrorKind::Format);
        assert_eq!(
            BitmapError::TruncatedData {
                expected: 12,
                actual: 4
            }
            .kind(),
            ErrorKind::Io
        );
        assert_eq!(BitmapError::invalid("x").kind(), ErrorKind::Argument);
        assert_eq!(
            BitmapError::CropOutOfBounds("x".into()).kind(),
            ErrorKind::Bounds
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: BitmapError = io.into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}

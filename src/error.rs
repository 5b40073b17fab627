use image::ImageError;
use std::{error::Error, fmt, io, path::PathBuf};

/// An error occured while slicing a sprite sheet.
///
/// `Display` names the failing path only; the underlying IO or image error
/// is available through [Error::source].
#[derive(Debug)]
pub enum SliceError {
    /// An IO error occured while reading the sheet or writing a frame. The
    /// path is the file or directory that was being accessed.
    IoError(PathBuf, io::Error),
    /// The input file could not be decoded as a supported image.
    DecodeError(PathBuf, ImageError),
    /// A frame could not be encoded for the output file at the path.
    EncodeError(PathBuf, ImageError),
    /// The frame grid does not fit the sheet. String contains detailed
    /// message.
    InvalidGeometry(String),
}

impl SliceError {
    /// Classify an error returned while decoding the sheet at `path`.
    ///
    /// The image backend reports missing and unreadable files as image
    /// errors too; those are kept apart from genuine decoding failures.
    pub(crate) fn decoding(path: impl Into<PathBuf>, err: ImageError) -> Self {
        match err {
            ImageError::IoError(io) => SliceError::IoError(path.into(), io),
            other => SliceError::DecodeError(path.into(), other),
        }
    }
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::IoError(path, _) => write!(f, "I/O error at {}", path.display()),
            SliceError::DecodeError(path, _) => write!(f, "Could not decode {}", path.display()),
            SliceError::EncodeError(path, _) => {
                write!(f, "Could not encode frame for {}", path.display())
            }
            SliceError::InvalidGeometry(msg) => write!(f, "Invalid geometry: {}", msg),
        }
    }
}

impl Error for SliceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SliceError::IoError(_, err) => Some(err),
            SliceError::DecodeError(_, err) | SliceError::EncodeError(_, err) => Some(err),
            SliceError::InvalidGeometry(_) => None,
        }
    }
}

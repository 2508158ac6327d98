use std::fmt;
use std::io;
use std::path::PathBuf;

use image::ImageError;

/// Failure reading or writing an image.
///
/// Any of these aborts the operation; a file left behind by a failed
/// encode is not valid output.
#[derive(Debug)]
pub enum CodecError {
    /// The file could not be opened, read, created or flushed.
    Io { path: PathBuf, source: io::Error },
    /// The bytes are not a decodable image.
    Decode { path: Option<PathBuf>, source: ImageError },
    /// The encoder rejected the pixel data or parameters.
    Encode { path: Option<PathBuf>, source: ImageError },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Io { path, source } => write!(f, "cannot access {}: {source}", path.display()),
            CodecError::Decode { path: Some(path), source } => {
                write!(f, "cannot decode {}: {source}", path.display())
            }
            CodecError::Decode { path: None, source } => write!(f, "cannot decode image: {source}"),
            CodecError::Encode { path: Some(path), source } => {
                write!(f, "cannot encode {}: {source}", path.display())
            }
            CodecError::Encode { path: None, source } => write!(f, "cannot encode image: {source}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Io { source, .. } => Some(source),
            CodecError::Decode { source, .. } | CodecError::Encode { source, .. } => Some(source),
        }
    }
}

use std::error::Error;
use std::fmt::Display;
use std::path::PathBuf;

use pixconv_core::BitmapError;

#[derive(Debug)]
pub enum ToolError {
    FileNotFound(PathBuf),
    ReadFailure(PathBuf, std::io::ErrorKind),
    WriteFailure(PathBuf, std::io::ErrorKind),
    ShapeMismatch(BitmapError),
    Image(image::ImageError),
    Preview(minifb::Error),
    InvalidArgument(String),
}

impl From<BitmapError> for ToolError {
    fn from(err: BitmapError) -> ToolError {
        ToolError::ShapeMismatch(err)
    }
}

impl From<image::ImageError> for ToolError {
    fn from(err: image::ImageError) -> ToolError {
        ToolError::Image(err)
    }
}

impl From<minifb::Error> for ToolError {
    fn from(err: minifb::Error) -> ToolError {
        ToolError::Preview(err)
    }
}

impl Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ToolError::FileNotFound(path) => {
                write!(f, "File {} does not exist, check the path", path.display())
            }
            ToolError::ReadFailure(path, kind) => {
                write!(f, "Cannot read {}: {}", path.display(), kind)
            }
            ToolError::WriteFailure(path, kind) => {
                write!(f, "Cannot write {}: {}", path.display(), kind)
            }
            ToolError::ShapeMismatch(err) => err.fmt(f),
            ToolError::Image(err) => err.fmt(f),
            ToolError::Preview(err) => write!(f, "Unable to open preview window: {}", err),
            ToolError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl Error for ToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ToolError::ShapeMismatch(err) => Some(err),
            ToolError::Image(err) => Some(err),
            ToolError::Preview(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

//! Error types

use std::error;
use std::fmt;
use std::io;

/// Errors produced by the arena, the canvas and the exporters
#[derive(Debug)]
pub enum Error {
    /// Backing storage could not be allocated or grown
    Alloc {
        /// Bytes requested by the caller
        requested: usize,
        /// Arena capacity at the time of the request
        capacity: usize,
    },
    /// Arena handle refers to memory past the current used mark
    StaleHandle {
        offset: usize,
        len: usize,
        used: usize,
    },
    /// Pixel buffer too small for the requested canvas geometry
    Layout {
        width: usize,
        height: usize,
        stride: usize,
        len: usize,
    },
    /// Motion table already holds its declared maximum of objects
    TableFull {
        capacity: usize,
    },
    /// Object id was never issued by the motion table
    UnknownObject {
        id: usize,
    },
    /// Reading or writing a file failed
    Io(io::Error),
    /// Encoding or decoding an image failed
    Image(image::ImageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Alloc { requested, capacity } => write!(
                f,
                "arena allocation failed: requested {} bytes, capacity {} bytes",
                requested, capacity
            ),
            Error::StaleHandle { offset, len, used } => write!(
                f,
                "stale arena handle: offset {} len {} beyond used mark {}",
                offset, len, used
            ),
            Error::Layout { width, height, stride, len } => write!(
                f,
                "pixel buffer of {} pixels cannot hold {}x{} with stride {}",
                len, width, height, stride
            ),
            Error::TableFull { capacity } => {
                write!(f, "motion table full: capacity {} objects", capacity)
            }
            Error::UnknownObject { id } => write!(f, "unknown object id {}", id),
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Image(e) => write!(f, "image error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

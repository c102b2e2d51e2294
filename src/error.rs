use crate::state::Position;

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Entropy(rand::Error),
    CapacityExceeded {
        capacity: usize,
    },
    OffCanvas {
        at: Position,
        rows: usize,
        cols: usize,
    },
    CanvasTooSmall {
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "terminal i/o failed: {}", e),
            Error::Entropy(e) => write!(f, "random source unavailable: {}", e),
            Error::CapacityExceeded { capacity } => {
                write!(f, "position record is full ({} entries)", capacity)
            }
            Error::OffCanvas { at, rows, cols } => {
                write!(f, "cell {} lies outside the {}x{} canvas", at, rows, cols)
            }
            Error::CanvasTooSmall { rows, cols } => {
                write!(f, "a {}x{} canvas is too small to draw on", rows, cols)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Error::Entropy(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

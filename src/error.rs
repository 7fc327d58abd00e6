//! .
//!
//! The two failure kinds of the system, both fatal at startup: I/O (missing
//! or unreadable data/image file) and parse (malformed row in a disk data
//! file). Nothing fails after a successful startup.

use std::{fmt, io};

#[derive(Debug)]
pub enum Error {
  Io(io::Error),
  Image(image::ImageError),
  /// A malformed line in a disk data file. `source` names the file,
  /// `line` is 1-based.
  Parse {
    source: String,
    line: usize,
    reason: String
  },
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Error::Io(err) => write!(f, "{}", err),
      Error::Image(err) => write!(f, "{}", err),
      Error::Parse { source, line, reason } =>
        write!(f, "{}:{}: {}", source, line, reason),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Io(err) => Some(err),
      Error::Image(err) => Some(err),
      Error::Parse { .. } => None,
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

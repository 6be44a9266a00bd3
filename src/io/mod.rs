//! Export of drawn figures.

#[cfg(feature = "svg-io")]
pub mod svg;

/// Generic I/O and format‑conversion errors.
///
/// Export formats are behind cargo feature‑flags.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    /// The figure has nothing to write.
    EmptyFigure,
    MalformedPath(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            EmptyFigure => write!(f, "The figure has no strokes to export"),
            MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

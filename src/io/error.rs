use std::fmt;
use std::path::{Path, PathBuf};

use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed for {path_desc}: {source}", path_desc = PathDisplay(path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "failed to parse {format} data in {path_desc}: {details} (at line {line})",
        path_desc = PathDisplay(path)
    )]
    Parse {
        format: Format,
        path: Option<PathBuf>,
        line: usize,
        details: String,
    },

    #[error("the '{0}' format is not supported for this write operation")]
    UnsupportedOutputFormat(String),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}

impl Error {
    pub fn from_io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { path, source }
    }

    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            path: None,
            line,
            details: details.into(),
        }
    }

    /// Attaches the source path to an error raised while reading from an
    /// anonymous stream.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Error::Io { source, .. } => Error::Io {
                path: Some(path.to_path_buf()),
                source,
            },
            Error::Parse {
                format,
                line,
                details,
                ..
            } => Error::Parse {
                format,
                path: Some(path.to_path_buf()),
                line,
                details,
            },
            other => other,
        }
    }
}

struct PathDisplay<'a>(&'a Option<PathBuf>);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(path) => write!(f, "file '{}'", path.display()),
            None => write!(f, "stream input"),
        }
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChRot13Error {
    #[error("Cannot use --encode and --decode together")]
    ConflictingModes,

    #[error("No input provided")]
    NoInput,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("File encoding error: {0}")]
    Encoding(String),

    #[error("IO error on {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation cancelled by user")]
    Interrupted,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Broad category of a failure, used to pick the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Resource,
    Encoding,
    Interruption,
    Unexpected,
}

impl ChRot13Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConflictingModes | Self::NoInput => ErrorKind::Configuration,
            Self::FileNotFound(_) | Self::PermissionDenied(_) | Self::Io { .. } => {
                ErrorKind::Resource
            }
            Self::Encoding(_) => ErrorKind::Encoding,
            Self::Interrupted => ErrorKind::Interruption,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Cancellation is a clean exit; everything else is a failure
    pub fn is_failure(&self) -> bool {
        self.kind() != ErrorKind::Interruption
    }

    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            std::io::ErrorKind::InvalidData => Self::Encoding(path.display().to_string()),
            _ => Self::Io {
                target: path.display().to_string(),
                source: err,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ChRot13Error>;

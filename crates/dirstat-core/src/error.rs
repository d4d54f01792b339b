use std::io;
use std::path::{Path, PathBuf};

use crate::metadata::FileKind;

/// All errors produced by dirstat-core.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("no such file or directory: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: expected {expected}, found {found}", path.display())]
    WrongKind {
        path: PathBuf,
        expected: FileKind,
        found: FileKind,
    },

    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InspectError {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// The path the failing operation was looking at.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::WrongKind { path, .. }
            | Self::PermissionDenied { path }
            | Self::Io { path, .. } => path,
        }
    }

    /// True for a missing path or an object of the wrong kind.
    pub fn is_not_found_or_wrong_kind(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::WrongKind { .. })
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;

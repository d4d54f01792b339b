use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{InspectError, Result};

/// Object kind as reported by the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Regular file holding byte-stream data.
    File,
    Dir,
    /// Only seen when metadata is resolved without following links.
    #[serde(rename = "link")]
    Symlink,
    /// Devices, sockets, FIFOs.
    Other,
}

impl FileKind {
    fn of(ft: fs::FileType) -> Self {
        if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_dir() {
            Self::Dir
        } else if ft.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Dir => write!(f, "dir"),
            Self::Symlink => write!(f, "link"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Unique identity of a filesystem object, independent of the name used
/// to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileId {
    /// Device + inode pair.
    Inode { dev: u64, ino: u64 },
    /// Fully resolved absolute path, for targets without stable inode access.
    Canonical(PathBuf),
}

impl FileId {
    /// Identity carried by the metadata itself, where the platform has one.
    #[cfg(unix)]
    fn from_metadata(md: &fs::Metadata) -> Option<Self> {
        use std::os::unix::fs::MetadataExt;
        Some(Self::Inode {
            dev: md.dev(),
            ino: md.ino(),
        })
    }

    #[cfg(not(unix))]
    fn from_metadata(_md: &fs::Metadata) -> Option<Self> {
        None
    }

    fn canonical(path: &Path) -> Result<Self> {
        fs::canonicalize(path)
            .map(Self::Canonical)
            .map_err(|e| InspectError::from_io(path, e))
    }
}

/// The subset of filesystem attributes the inspection operations consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub kind: FileKind,
    /// Byte length as reported by the filesystem.
    pub size: u64,
    /// `None` when the platform only offers path-based identity, which
    /// [`FileMetadata::identity`] computes on demand.
    pub id: Option<FileId>,
}

impl FileMetadata {
    /// Resolve metadata for `path`. With `follow_symlinks` the link target
    /// is described; otherwise the link itself.
    pub fn resolve(path: &Path, follow_symlinks: bool) -> Result<Self> {
        let md = if follow_symlinks {
            fs::metadata(path)
        } else {
            fs::symlink_metadata(path)
        }
        .map_err(|e| InspectError::from_io(path, e))?;

        Ok(Self {
            kind: FileKind::of(md.file_type()),
            size: md.len(),
            id: FileId::from_metadata(&md),
        })
    }

    /// Identity of the object at `path`, which these metadata describe.
    pub fn identity(&self, path: &Path) -> Result<FileId> {
        match &self.id {
            Some(id) => Ok(id.clone()),
            None => FileId::canonical(path),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Dir
    }

    /// Fail with `WrongKind` unless this object is of kind `expected`.
    pub fn expect_kind(self, path: &Path, expected: FileKind) -> Result<Self> {
        if self.kind == expected {
            Ok(self)
        } else {
            Err(InspectError::WrongKind {
                path: path.to_path_buf(),
                expected,
                found: self.kind,
            })
        }
    }
}

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::InspectConfig;
use crate::error::{InspectError, Result};
use crate::metadata::{FileKind, FileMetadata};
use crate::path::{is_pseudo_entry, join_path};

/// Runs metadata queries against the host filesystem.
///
/// Every call is a single synchronous pass with no state retained between
/// calls, so one inspector can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    config: InspectConfig,
}

/// Per-kind breakdown of a directory's immediate children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirSummary {
    pub path: PathBuf,
    pub directories: u64,
    pub files: u64,
    /// Symlinks (when not followed), devices, sockets, FIFOs.
    pub others: u64,
    /// Entries whose metadata could not be resolved.
    pub skipped: u64,
    /// Sum of the sizes of regular files.
    pub total_bytes: u64,
}

impl DirSummary {
    /// Entries seen, excluding pseudo-entries.
    pub fn entries(&self) -> u64 {
        self.directories + self.files + self.others + self.skipped
    }
}

impl Inspector {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Resolve metadata for `path` according to the symlink policy.
    pub fn metadata(&self, path: impl AsRef<Path>) -> Result<FileMetadata> {
        FileMetadata::resolve(path.as_ref(), self.config.follow_symlinks)
    }

    /// Byte length of a regular file.
    pub fn file_size(&self, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        let md = self.metadata(path)?.expect_kind(path, FileKind::File)?;
        Ok(md.size)
    }

    /// Number of immediate children of `dir` that are directories.
    pub fn count_directories(&self, dir: impl AsRef<Path>) -> Result<u64> {
        let dir = dir.as_ref();
        let mut count = 0;
        for path in self.entries(dir)? {
            match self.metadata(&path) {
                Ok(md) if md.is_dir() => count += 1,
                Ok(_) => {}
                Err(e) => skip(&e),
            }
        }
        debug!(path = %dir.display(), count, "counted directories");
        Ok(count)
    }

    /// Sum of the sizes of the regular files directly inside `dir`.
    /// Everything else contributes zero.
    pub fn total_file_size(&self, dir: impl AsRef<Path>) -> Result<u64> {
        let dir = dir.as_ref();
        let mut total: u64 = 0;
        for path in self.entries(dir)? {
            match self.file_size(&path) {
                Ok(size) => total = total.saturating_add(size),
                Err(InspectError::WrongKind { .. }) => {}
                Err(e) => skip(&e),
            }
        }
        debug!(path = %dir.display(), total, "summed file sizes");
        Ok(total)
    }

    /// Whether `a` and `b` name the same filesystem object.
    ///
    /// A path that cannot be resolved is never the same as anything.
    pub fn same_file(&self, a: impl AsRef<Path>, b: impl AsRef<Path>) -> bool {
        let identity = |p: &Path| self.metadata(p).and_then(|md| md.identity(p));
        match (identity(a.as_ref()), identity(b.as_ref())) {
            (Ok(ia), Ok(ib)) => ia == ib,
            _ => false,
        }
    }

    /// Classify every immediate child of `dir` in one pass.
    pub fn summarize(&self, dir: impl AsRef<Path>) -> Result<DirSummary> {
        let dir = dir.as_ref();
        let mut summary = DirSummary {
            path: dir.to_path_buf(),
            ..Default::default()
        };
        for path in self.entries(dir)? {
            match self.metadata(&path) {
                Ok(md) => match md.kind {
                    FileKind::Dir => summary.directories += 1,
                    FileKind::File => {
                        summary.files += 1;
                        summary.total_bytes = summary.total_bytes.saturating_add(md.size);
                    }
                    FileKind::Symlink | FileKind::Other => summary.others += 1,
                },
                Err(e) => {
                    skip(&e);
                    summary.skipped += 1;
                }
            }
        }
        Ok(summary)
    }

    /// Open `dir` for a single pass over its children.
    ///
    /// Fails before acquiring a handle when `dir` is missing or not a
    /// directory. The handle is released when the iterator is dropped.
    fn entries(&self, dir: &Path) -> Result<Entries> {
        self.metadata(dir)?.expect_kind(dir, FileKind::Dir)?;
        let inner = fs::read_dir(dir).map_err(|e| InspectError::from_io(dir, e))?;
        Ok(Entries {
            dir: dir.to_path_buf(),
            inner,
            skip_pseudo: self.config.skip_pseudo_entries,
        })
    }
}

/// Lazy, non-restartable sequence of joined child paths.
struct Entries {
    dir: PathBuf,
    inner: ReadDir,
    skip_pseudo: bool,
}

impl Iterator for Entries {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    skip(&InspectError::from_io(&self.dir, e));
                    continue;
                }
            };
            let name = entry.file_name();
            if self.skip_pseudo && is_pseudo_entry(&name) {
                continue;
            }
            let path = join_path(&self.dir, &name);
            trace!(path = %path.display(), "entry");
            return Some(path);
        }
    }
}

fn skip(err: &InspectError) {
    debug!(path = %err.path().display(), error = %err, "skipping entry");
}

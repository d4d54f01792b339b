pub mod config;
pub mod error;
pub mod inspect;
pub mod legacy;
pub mod metadata;
pub mod path;

use std::path::Path;

pub use config::{InspectConfig, SamplePaths};
pub use error::{InspectError, Result};
pub use inspect::{DirSummary, Inspector};
pub use metadata::{FileId, FileKind, FileMetadata};
pub use path::{is_pseudo_entry, join_path};

/// Byte length of the regular file at `path`, following symlinks.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    Inspector::default().file_size(path)
}

/// Number of subdirectories directly inside `dir`, excluding "." and "..".
pub fn count_directories(dir: impl AsRef<Path>) -> Result<u64> {
    Inspector::default().count_directories(dir)
}

/// Total size of the regular files directly inside `dir`.
pub fn total_file_size(dir: impl AsRef<Path>) -> Result<u64> {
    Inspector::default().total_file_size(dir)
}

/// Whether two paths resolve to the same filesystem object.
pub fn same_file(a: impl AsRef<Path>, b: impl AsRef<Path>) -> bool {
    Inspector::default().same_file(a, b)
}

/// One-pass per-kind breakdown of `dir`.
pub fn summarize(dir: impl AsRef<Path>) -> Result<DirSummary> {
    Inspector::default().summarize(dir)
}

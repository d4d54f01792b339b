//! Sentinel-returning wrappers for callers that expect `-1` on any failure.
//!
//! Every failure shape (missing path, wrong kind, unreadable directory)
//! collapses to [`SENTINEL`]. Sizes beyond `i64::MAX` saturate.

use std::path::Path;

use crate::error::Result;
use crate::Inspector;

/// Returned in place of a count or size when the query fails.
pub const SENTINEL: i64 = -1;

fn collapse(r: Result<u64>) -> i64 {
    match r {
        Ok(n) => i64::try_from(n).unwrap_or(i64::MAX),
        Err(_) => SENTINEL,
    }
}

/// Subdirectory count of `dir`, or `-1`.
pub fn count_directories(dir: impl AsRef<Path>) -> i64 {
    collapse(Inspector::default().count_directories(dir))
}

/// Size of the regular file at `path`, or `-1`.
pub fn file_size(path: impl AsRef<Path>) -> i64 {
    collapse(Inspector::default().file_size(path))
}

/// Total size of the regular files in `dir`, or `-1`.
pub fn file_sizes(dir: impl AsRef<Path>) -> i64 {
    collapse(Inspector::default().total_file_size(dir))
}

/// Same as [`Inspector::same_file`]; kept here so legacy callers need a
/// single import.
pub fn is_same_file(a: impl AsRef<Path>, b: impl AsRef<Path>) -> bool {
    Inspector::default().same_file(a, b)
}

/// Collapse a typed result from any [`Inspector`] call to the sentinel form.
pub fn to_sentinel(r: Result<u64>) -> i64 {
    collapse(r)
}

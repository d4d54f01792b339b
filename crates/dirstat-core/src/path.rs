use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

/// Join a directory path and an entry name with the platform separator.
///
/// Unlike [`Path::join`] this never replaces `dir` when `name` is absolute;
/// the result is always `dir + separator + name`.
pub fn join_path(dir: impl AsRef<Path>, name: impl AsRef<OsStr>) -> PathBuf {
    let dir = dir.as_ref().as_os_str();
    let name = name.as_ref();
    let mut buf = OsString::with_capacity(dir.len() + 1 + name.len());
    buf.push(dir);
    buf.push(MAIN_SEPARATOR_STR);
    buf.push(name);
    PathBuf::from(buf)
}

/// Is `name` one of the self/parent pseudo-entries?
pub fn is_pseudo_entry(name: impl AsRef<OsStr>) -> bool {
    let name = name.as_ref();
    name == "." || name == ".."
}

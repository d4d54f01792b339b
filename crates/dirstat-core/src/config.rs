use std::path::{Path, PathBuf};

/// Configuration for an [`Inspector`](crate::Inspector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    /// Resolve metadata through symlinks (`stat`) rather than describing
    /// the link itself (`lstat`).
    pub follow_symlinks: bool,
    /// Skip the "." and ".." entries by name while enumerating.
    pub skip_pseudo_entries: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl InspectConfig {
    /// Create a config builder with default settings.
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder {
            follow_symlinks: true,
            skip_pseudo_entries: true,
        }
    }
}

/// Builder for [`InspectConfig`].
#[derive(Debug, Clone)]
pub struct InspectConfigBuilder {
    follow_symlinks: bool,
    skip_pseudo_entries: bool,
}

impl InspectConfigBuilder {
    /// Describe link targets (`true`) or the links themselves (`false`).
    pub fn follow_symlinks(mut self, yes: bool) -> Self {
        self.follow_symlinks = yes;
        self
    }

    /// Skip "." and ".." while enumerating.
    pub fn skip_pseudo_entries(mut self, yes: bool) -> Self {
        self.skip_pseudo_entries = yes;
        self
    }

    /// Finish the configuration.
    pub fn build(self) -> InspectConfig {
        InspectConfig {
            follow_symlinks: self.follow_symlinks,
            skip_pseudo_entries: self.skip_pseudo_entries,
        }
    }
}

/// A sample file and directory used by the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePaths {
    pub file: PathBuf,
    pub dir: PathBuf,
}

impl SamplePaths {
    const WINDOWS: (&'static str, &'static str) = (r"C:\Windows\notepad.exe", r"C:\Windows");
    const POSIX: (&'static str, &'static str) = ("/usr/include/stdlib.h", "/usr/include");

    /// Sample paths for a target OS name as found in `std::env::consts::OS`.
    pub fn for_os(os: &str) -> Self {
        let (file, dir) = match os {
            "windows" => Self::WINDOWS,
            _ => Self::POSIX,
        };
        Self::new(file, dir)
    }

    /// Sample paths for the platform this binary runs on.
    pub fn for_current_platform() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    pub fn new(file: impl AsRef<Path>, dir: impl AsRef<Path>) -> Self {
        Self {
            file: file.as_ref().to_path_buf(),
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Replace either path, keeping the other.
    pub fn with_overrides(self, file: Option<PathBuf>, dir: Option<PathBuf>) -> Self {
        Self {
            file: file.unwrap_or(self.file),
            dir: dir.unwrap_or(self.dir),
        }
    }
}

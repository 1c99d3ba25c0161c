//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the application layer to read and rewrite asset
//! directories without depending on a concrete implementation (local, mock).

use std::io;
use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach a path to an I/O error
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }

    /// Lower into a plain `io::Error` for error variants that carry one
    pub fn into_io(self) -> io::Error {
        match self {
            FsError::NotFound(path) => io::Error::new(
                io::ErrorKind::NotFound,
                format!("not found: {}", path.display()),
            ),
            FsError::PermissionDenied(path) => io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ),
            FsError::Io(err) => err,
            FsError::Other(msg) => io::Error::other(msg),
        }
    }
}

impl From<io::Error> for FsError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with optional atomic replace
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Read file content, replacing invalid UTF-8 with U+FFFD
    fn read_lossy(&self, path: &Path) -> FsResult<String> {
        self.read(path)
    }

    /// Replace file content
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// List the names of a directory's direct entries (non-recursive).
    ///
    /// Names that are not valid UTF-8 are left out.
    fn list_dir(&self, path: &Path) -> FsResult<Vec<String>>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn read_lossy(&self, path: &Path) -> FsResult<String> {
        (**self).read_lossy(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        (**self).list_dir(path)
    }
}

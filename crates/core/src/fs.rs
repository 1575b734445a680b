//! `std::fs` wrappers whose errors carry the offending path.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Error variants for `std::fs` operations that add the target path, which
/// the plain `io::Error` does not provide.
#[derive(Debug, thiserror::Error)]
pub enum FsPathError {
    #[error("failed to read from {path:?}: {source}")]
    Read { source: io::Error, path: PathBuf },
    #[error("failed to write to {path:?}: {source}")]
    Write { source: io::Error, path: PathBuf },
    #[error("failed to create dir {path:?}: {source}")]
    CreateDir { source: io::Error, path: PathBuf },
}

type Result<T> = std::result::Result<T, FsPathError>;

/// Wrapper for [`fs::read_to_string`].
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map_err(|source| FsPathError::Read { source, path: path.to_path_buf() })
}

/// Wrapper for [`fs::write`].
pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents)
        .map_err(|source| FsPathError::Write { source, path: path.to_path_buf() })
}

/// Wrapper for [`fs::create_dir_all`].
pub fn create_dir_all(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path)
        .map_err(|source| FsPathError::CreateDir { source, path: path.to_path_buf() })
}

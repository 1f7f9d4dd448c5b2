use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not a directory: {0}")]
    OutputDir(String),
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check that `dir` exists and is a directory. Nothing is created.
pub fn check_output_dir(dir: &Path) -> Result<(), PersistError> {
    let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(format!("{dir:?}: {e}")))?;
    if !meta.is_dir() {
        return Err(PersistError::OutputDir(format!("{dir:?} is not a directory")));
    }
    Ok(())
}

/// Create or truncate `path` and write `content` to it as UTF-8.
///
/// Symlinks are followed and an existing file keeps its mode; new files get
/// the process umask.
pub fn write_output(path: &Path, content: &str) -> Result<PathBuf, PersistError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    check_output_dir(dir)?;

    let io_err = |source: io::Error| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;
    file.sync_all().map_err(io_err)?;
    Ok(path.to_path_buf())
}

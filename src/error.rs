//! Errors that abort a whole scan. Per-file failures never surface here;
//! they become issues on the file instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Folder not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a folder: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to list folder {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

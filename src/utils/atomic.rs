//! Atomic file write operations.
//!
//! The manifest must never be observed half-written, so writes go through a
//! temp file in the target directory followed by an atomic rename.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write content to a file atomically using a temporary file.
///
/// The temp file is created in the same directory as the target (required for
/// an atomic rename) and cleaned up automatically if any step fails.
///
/// # Errors
///
/// Returns an `io::Error` if the parent directory cannot be determined, the
/// temp file cannot be created, writing fails, or the rename fails.
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target_path = path.to_path_buf();
    let content_owned = content.to_string();

    // Run synchronous tempfile operations in a blocking task
    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content_owned.as_bytes())?;
        temp_file.flush()?;

        // Persisting consumes the NamedTempFile, preventing auto-deletion
        temp_file.persist(&target_path)?;

        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}

use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs;

/// Compute the SHA-256 digest of a byte buffer as lowercase hex
#[must_use]
pub fn compute_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Compute the SHA-256 digest of a file's raw contents
pub async fn compute_file_hash(path: &Path) -> Result<String, std::io::Error> {
    let content = fs::read(path).await?;
    Ok(compute_hash(&content))
}

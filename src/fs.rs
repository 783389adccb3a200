//! Filesystem helpers
//!
//! Atomic writes (tempfile + rename), directory housekeeping for package
//! output trees, and SHA-256 content fingerprinting.

use sha2::{Digest, Sha256};
use std::io::Write;
use std::path::Path;

use crate::error::TypepackResult;

/// Write content to a file atomically.
///
/// The content lands in a temporary file in the target directory, then is
/// renamed into place, so readers never observe a half-written file. Parent
/// directories are created as needed.
pub fn atomic_write(path: &Path, content: &str) -> TypepackResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all of its parents (idempotent)
pub fn ensure_dir(path: &Path) -> TypepackResult<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Remove the top-level files inside `dir`, returning the removed names
/// sorted for stable logging.
///
/// Non-recursive: subdirectories are left in place. Output trees written by
/// the generator are flat, so this matches the on-disk layout from prior
/// runs.
pub fn clear_dir_files(dir: &Path) -> TypepackResult<Vec<String>> {
    let mut removed = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            std::fs::remove_file(entry.path())?;
            removed.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    removed.sort();
    Ok(removed)
}

/// SHA-256 fingerprint of a byte buffer, as lowercase hex
pub fn hash_content(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

/// SHA-256 fingerprint of a file set under `root`.
///
/// Each relative path and its content feed the digest in the order given,
/// so renaming a file changes the fingerprint just like editing one does.
/// This is the fingerprint upstream producers record as `contentHash`.
pub fn hash_files(root: &Path, files: &[String]) -> TypepackResult<String> {
    let mut hasher = Sha256::new();
    for file in files {
        hasher.update(file.as_bytes());
        hasher.update(std::fs::read(root.join(file))?);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

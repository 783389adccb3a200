//! Run-report writing
//!
//! One human-readable log file per full run, for operators digging into
//! what a generation pass did. Purely diagnostic.

use std::path::{Path, PathBuf};

use crate::error::TypepackResult;
use crate::fs::atomic_write;

/// Directory run reports land in, under the working directory
pub const LOG_DIR: &str = "logs";

/// Report filename for generate runs
pub const GENERATE_LOG_FILENAME: &str = "package-generator.md";

/// Write the collected run log under `root`, returning the report path.
pub fn write_run_log(root: &Path, lines: &[String]) -> TypepackResult<PathBuf> {
    let path = root.join(LOG_DIR).join(GENERATE_LOG_FILENAME);
    let mut content = lines.join("\r\n");
    content.push_str("\r\n");
    atomic_write(&path, &content)?;
    Ok(path)
}

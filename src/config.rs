//! Publish configuration
//!
//! Loaded from `typepack.toml`. Every option has a default so a missing
//! config file is not an error; a malformed file is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{TypepackError, TypepackResult};

/// Default config filename, resolved relative to the working directory
pub const CONFIG_FILENAME: &str = "typepack.toml";

/// Settings controlling where packages are generated and how they are named
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Scope prefix for published names, without the `@` (e.g. `types`)
    pub scope_name: String,

    /// Base directory the per-package output trees are created under
    pub output_path: PathBuf,

    /// Root of the typings source tree the parser ran against
    pub source_path: PathBuf,

    /// Branch label recorded in README provenance lines
    pub source_branch: String,

    /// Optional prerelease suffix appended to every version (e.g. `alpha`)
    pub prerelease_tag: Option<String>,

    /// Optional publish tag. Recognized for forward compatibility; the
    /// generator itself does not use it.
    pub tag: Option<String>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            scope_name: "types".to_string(),
            output_path: PathBuf::from("output"),
            source_path: PathBuf::from("."),
            source_branch: "master".to_string(),
            prerelease_tag: None,
            tag: None,
        }
    }
}

impl PublishConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TypepackResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TypepackError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> TypepackResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

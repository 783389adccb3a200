//! Version store - durable patch-version table with change detection
//!
//! Tracks, per package name, the last published patch version and the
//! content fingerprint it was published from. The table decides whether a
//! regeneration must advance the version: same fingerprint, same version;
//! anything else bumps by one.
//!
//! Lifecycle: constructed (and loaded) once per run, then threaded by
//! mutable reference through the generator. Computing the next version is a
//! pure read; only `record_update` mutates, and it persists the whole table
//! synchronously before returning so a crash mid-run never loses a
//! committed version.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::TypepackResult;
use crate::fs::atomic_write;

/// Default version table filename, resolved relative to the working directory
pub const VERSIONS_FILENAME: &str = "versions.json";

/// Per-package entry in the version table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// Last published patch version. Non-decreasing for a given name.
    pub last_version: u32,

    /// Fingerprint the last version was published from. Opaque string.
    #[serde(default)]
    pub last_content_hash: String,
}

/// Durable `name -> VersionRecord` table
#[derive(Debug)]
pub struct VersionStore {
    path: PathBuf,
    table: BTreeMap<String, VersionRecord>,
}

impl VersionStore {
    /// Load the table from `path`. A missing file yields an empty table,
    /// not an error; a present-but-corrupt file does error.
    pub fn load(path: impl Into<PathBuf>) -> TypepackResult<Self> {
        let path = path.into();
        let table = if path.exists() {
            serde_json::from_str(&std::fs::read_to_string(&path)?)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, table })
    }

    /// Next version to publish for `name` given its current fingerprint.
    ///
    /// Pure read: calling this any number of times without an intervening
    /// `record_update` returns the same value. Names without an entry
    /// behave as `{lastVersion: 0, lastContentHash: ""}`.
    pub fn compute_next_version(&self, name: &str, content_hash: &str, force_update: bool) -> u32 {
        let (last_version, last_hash) = match self.table.get(name) {
            Some(record) => (record.last_version, record.last_content_hash.as_str()),
            None => (0, ""),
        };
        if force_update || last_hash != content_hash {
            last_version + 1
        } else {
            last_version
        }
    }

    /// Stored record for `name`, if any
    pub fn record(&self, name: &str) -> Option<&VersionRecord> {
        self.table.get(name)
    }

    /// Number of tracked packages
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Commit the published version/fingerprint pair for `name`.
    ///
    /// The whole table is rewritten to durable storage before this returns;
    /// callers must invoke it only after the package's output tree has been
    /// fully written.
    pub fn record_update(
        &mut self,
        name: &str,
        version: u32,
        content_hash: &str,
    ) -> TypepackResult<()> {
        self.table.insert(
            name.to_string(),
            VersionRecord {
                last_version: version,
                last_content_hash: content_hash.to_string(),
            },
        );
        let json = serde_json::to_string_pretty(&self.table)?;
        atomic_write(&self.path, &json)
    }

    /// Path the table persists to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

//! Dependency pinning ("shrinkwrap")
//!
//! Optional post-processing over already-generated output trees: wildcard
//! dependency versions in a manifest are replaced with the concrete version
//! each dependency was published under in the current pass. A dependency
//! whose own manifest is nowhere to be found is removed from the manifest
//! instead; that is a logged skip, not a failure.
//!
//! Run this only after every dependency package has been materialized, or
//! pinning quietly degrades to removal.

use serde_json::Value;

use crate::config::PublishConfig;
use crate::error::TypepackResult;
use crate::fs::atomic_write;

use super::{output_path, MANIFEST_FILENAME};

/// Result of pinning one package's manifest
#[derive(Debug, Clone, Default)]
pub struct ShrinkwrapOutcome {
    /// Ordered human-readable progress lines
    pub log: Vec<String>,

    /// Dependencies pinned to a concrete version
    pub pinned: usize,

    /// Dependencies removed because their manifest was absent
    pub dropped: usize,
}

/// Pin the dependencies of one generated package in place.
pub fn shrinkwrap_package(
    typing_name: &str,
    config: &PublishConfig,
) -> TypepackResult<ShrinkwrapOutcome> {
    let manifest_path = output_path(config, typing_name).join(MANIFEST_FILENAME);
    let mut manifest: Value = serde_json::from_str(&std::fs::read_to_string(&manifest_path)?)?;

    let mut outcome = ShrinkwrapOutcome::default();

    if let Some(dependencies) = manifest
        .get_mut("dependencies")
        .and_then(Value::as_object_mut)
    {
        let names: Vec<String> = dependencies.keys().cloned().collect();
        for dep_name in names {
            match published_version(&dep_name, config)? {
                Some(version) => {
                    outcome
                        .log
                        .push(format!("Pin {} to {}", dep_name, version));
                    dependencies.insert(dep_name, Value::String(version));
                    outcome.pinned += 1;
                }
                None => {
                    outcome
                        .log
                        .push(format!("Drop unresolved dependency {}", dep_name));
                    dependencies.remove(&dep_name);
                    outcome.dropped += 1;
                }
            }
        }
    }

    atomic_write(&manifest_path, &serde_json::to_string_pretty(&manifest)?)?;
    Ok(outcome)
}

/// Concrete version a dependency was published under, read from its own
/// generated manifest. `None` when that manifest does not exist (yet).
fn published_version(dep_name: &str, config: &PublishConfig) -> TypepackResult<Option<String>> {
    // Manifest keys carry the scope; the output folder does not.
    let scope_prefix = format!("@{}/", config.scope_name);
    let folder = dep_name.strip_prefix(&scope_prefix).unwrap_or(dep_name);

    let manifest_path = output_path(config, folder).join(MANIFEST_FILENAME);
    if !manifest_path.exists() {
        return Ok(None);
    }

    let manifest: Value = serde_json::from_str(&std::fs::read_to_string(&manifest_path)?)?;
    Ok(manifest
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string))
}

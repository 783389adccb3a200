//! Package materialization
//!
//! For one package: decide the next patch version, rebuild the package's
//! output tree from scratch (three metadata files plus the patched source
//! files), and only then commit the version to the store. Because the
//! commit happens last, an I/O failure mid-materialization leaves the store
//! untouched and a rerun recomputes the same target version.

mod manifest;
mod readme;
mod shrinkwrap;

pub use shrinkwrap::{shrinkwrap_package, ShrinkwrapOutcome};

use std::path::PathBuf;

use crate::config::PublishConfig;
use crate::error::TypepackResult;
use crate::fs::{atomic_write, clear_dir_files, ensure_dir};
use crate::models::{TypesData, TypingsData};
use crate::patch::patch_definition_file;
use crate::versions::VersionStore;

/// Package manifest filename
pub const MANIFEST_FILENAME: &str = "package.json";
/// Metadata snapshot filename
pub const METADATA_FILENAME: &str = "types-metadata.json";
/// README filename
pub const README_FILENAME: &str = "README.md";

/// Options for a generate run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Bump every version even when the content fingerprint is unchanged
    pub force_update: bool,
}

/// Result of materializing one package
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Ordered human-readable progress lines. Observational only.
    pub log: Vec<String>,

    /// Full version string the package was published under
    pub version: String,
}

/// Scoped, lower-cased published package name (`@scope/name`)
pub fn package_name(config: &PublishConfig, name: &str) -> String {
    format!("@{}/{}", config.scope_name, name.to_lowercase())
}

/// Output directory for a package. Pure function of configuration and
/// package identity, so it is stable across runs.
pub fn output_path(config: &PublishConfig, name: &str) -> PathBuf {
    config.output_path.join(name.to_lowercase())
}

/// Materialize one package to disk.
///
/// `available` is the full known collection; declared dependencies outside
/// it are silently dropped from the manifest. The version store is read to
/// compute the prospective version up front and written only after every
/// output file landed.
pub fn generate_package(
    typing: &TypingsData,
    available: &TypesData,
    config: &PublishConfig,
    store: &mut VersionStore,
    options: GenerateOptions,
) -> TypepackResult<GenerateOutcome> {
    let mut log = Vec::new();

    let file_version =
        store.compute_next_version(&typing.name, &typing.content_hash, options.force_update);
    let version = manifest::version_string(typing, file_version, config);

    let out_dir = output_path(config, &typing.name);
    log.push(format!("Create output path {}", out_dir.display()));
    ensure_dir(&out_dir)?;

    log.push("Clear out old files".to_string());
    clear_dir_files(&out_dir)?;

    log.push(format!(
        "Generate {}, {}, and {}",
        MANIFEST_FILENAME, METADATA_FILENAME, README_FILENAME
    ));
    let package_json = manifest::create_package_json(typing, &version, available, config)?;
    let metadata_json = manifest::create_metadata_json(typing)?;
    let readme = readme::create_readme(typing, config);

    log.push("Write metadata files to disk".to_string());
    atomic_write(&out_dir.join(MANIFEST_FILENAME), &package_json)?;
    atomic_write(&out_dir.join(METADATA_FILENAME), &metadata_json)?;
    atomic_write(&out_dir.join(README_FILENAME), &readme)?;

    for file in &typing.files {
        log.push(format!("Copy and patch {}", file));
        let content = std::fs::read_to_string(typing.root.join(file))?;
        atomic_write(&out_dir.join(file), &patch_definition_file(&content))?;
    }

    store.record_update(&typing.name, file_version, &typing.content_hash)?;

    Ok(GenerateOutcome { log, version })
}

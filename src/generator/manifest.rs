//! Manifest and metadata-snapshot rendering

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::PublishConfig;
use crate::error::TypepackResult;
use crate::models::{TypesData, TypingsData};

use super::package_name;

/// Published manifest shape. Field order here is the field order on disk.
#[derive(Debug, Serialize)]
struct PackageManifest {
    name: String,
    version: String,
    description: String,
    main: String,
    scripts: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    license: String,
    typings: String,
    dependencies: BTreeMap<String, String>,
}

/// Full version string: `{major}.{minor}.{fileVersion}` plus the optional
/// configured prerelease suffix.
pub(super) fn version_string(
    typing: &TypingsData,
    file_version: u32,
    config: &PublishConfig,
) -> String {
    let version = format!(
        "{}.{}.{}",
        typing.major_version, typing.minor_version, file_version
    );
    match &config.prerelease_tag {
        Some(tag) => format!("{}-{}", version, tag),
        None => version,
    }
}

/// Render `package.json`.
///
/// Declared dependencies are filtered against the known collection: a name
/// the parser never produced is dropped without comment, never an error.
/// Present dependencies are pinned to `*`; concrete pinning is the separate
/// shrinkwrap pass.
pub(super) fn create_package_json(
    typing: &TypingsData,
    version: &str,
    available: &TypesData,
    config: &PublishConfig,
) -> TypepackResult<String> {
    let mut dependencies = BTreeMap::new();
    for dep in typing.declared_dependencies() {
        if available.contains_key(dep) {
            dependencies.insert(package_name(config, dep), "*".to_string());
        }
    }

    let manifest = PackageManifest {
        name: package_name(config, &typing.name),
        version: version.to_string(),
        description: format!("TypeScript definitions for {}", typing.library_name),
        main: String::new(),
        scripts: BTreeMap::new(),
        author: typing.authors.clone(),
        license: "MIT".to_string(),
        typings: typing.definition_filename.clone(),
        dependencies,
    };

    Ok(serde_json::to_string_pretty(&manifest)?)
}

/// Render `types-metadata.json`: the artifact record itself, minus the
/// machine-local `root` path.
pub(super) fn create_metadata_json(typing: &TypingsData) -> TypepackResult<String> {
    let mut value = serde_json::to_value(typing)?;
    if let Some(map) = value.as_object_mut() {
        map.remove("root");
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

//! Core data models for typepack
//!
//! Defines the structures handed over by the upstream definition parser:
//! - `TypingsData`: one generatable package with identity, version numbers,
//!   and a content fingerprint
//! - `TypesData`: the full name-keyed collection
//! - `DefinitionFileKind`: file-structure classification of a package
//!
//! All of this is read-only input to typepack; the on-disk shape is the
//! camelCase JSON the parser emits.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// The full parsed-definitions collection, keyed by package name.
///
/// A `BTreeMap` so that iteration (and therefore generation order and the
/// run log) is deterministic.
pub type TypesData = BTreeMap<String, TypingsData>;

/// File-structure classification assigned by the definition parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DefinitionFileKind {
    /// Could not be classified
    #[default]
    Unknown,
    /// Declarations that live in the global namespace
    Global,
    /// One or more `declare module "..."` blocks
    DeclareModule,
    /// A proper top-level export module
    ProperModule,
    /// Multiple modules in one file
    MultipleModules,
    /// Mix of global declarations and modules
    Mixed,
    /// UMD-style module with a global fallback
    Umd,
}

impl fmt::Display for DefinitionFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DefinitionFileKind::Unknown => "unknown",
            DefinitionFileKind::Global => "global",
            DefinitionFileKind::DeclareModule => "declareModule",
            DefinitionFileKind::ProperModule => "properModule",
            DefinitionFileKind::MultipleModules => "multipleModules",
            DefinitionFileKind::Mixed => "mixed",
            DefinitionFileKind::Umd => "umd",
        };
        write!(f, "{}", name)
    }
}

/// One generatable typings package, as described by the parsed data file
///
/// Immutable descriptor: typepack never writes these back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingsData {
    /// Package identity (the folder name in the source tree)
    pub name: String,

    /// Human-readable library name, used in the README and manifest
    pub library_name: String,

    /// Upstream project name, if the header declared one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// Definition authors, if the header declared them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,

    /// Declared library major version
    pub major_version: u32,

    /// Declared library minor version
    pub minor_version: u32,

    /// File-structure classification
    #[serde(default)]
    pub kind: DefinitionFileKind,

    /// Global values the definitions introduce
    #[serde(default)]
    pub globals: Vec<String>,

    /// Repository the source files were exported from
    pub source_repo_url: String,

    /// Fingerprint of the package's source files.
    ///
    /// Opaque to typepack: it is compared byte-wise against the version
    /// store, never interpreted.
    pub content_hash: String,

    /// Local directory containing the source files.
    ///
    /// A machine-local path; stripped from the published metadata snapshot.
    pub root: PathBuf,

    /// Relative source file paths to copy into the package
    #[serde(default)]
    pub files: Vec<String>,

    /// Names of packages this one depends on via module imports
    #[serde(default)]
    pub module_dependencies: Vec<String>,

    /// Names of packages this one depends on via reference directives
    #[serde(default)]
    pub library_dependencies: Vec<String>,

    /// Entry-point definition file within `files`
    pub definition_filename: String,
}

impl TypingsData {
    /// All declared dependency names, module dependencies first.
    pub fn declared_dependencies(&self) -> impl Iterator<Item = &str> {
        self.module_dependencies
            .iter()
            .chain(self.library_dependencies.iter())
            .map(String::as_str)
    }
}

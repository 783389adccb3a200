//! typepack - versioned typings-package generator
//!
//! typepack takes the output of a definition parser (a name-keyed map of
//! typings packages with content fingerprints) and materializes each
//! package as an npm-style output tree: manifest, metadata snapshot,
//! README, and the patched definition files. Patch versions are assigned
//! deterministically: a package's version advances only when its content
//! fingerprint changes, tracked in a durable `versions.json` table.

pub mod config;
pub mod data;
pub mod error;
pub mod fs;
pub mod generator;
pub mod models;
pub mod patch;
pub mod report;
pub mod versions;

// Re-exports for convenience
pub use config::PublishConfig;
pub use data::load_types_data;
pub use error::{TypepackError, TypepackResult};
pub use generator::{
    generate_package, shrinkwrap_package, GenerateOptions, GenerateOutcome, ShrinkwrapOutcome,
};
pub use models::{DefinitionFileKind, TypesData, TypingsData};
pub use patch::patch_definition_file;
pub use versions::{VersionRecord, VersionStore};

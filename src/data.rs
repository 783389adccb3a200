//! Typings data file loading
//!
//! The definition parser runs first and leaves a name-keyed JSON map of
//! `TypingsData` records. An absent file is the fatal "run the parser
//! first" precondition, distinct from a file that exists but is corrupt.

use std::path::Path;

use crate::error::{TypepackError, TypepackResult};
use crate::models::TypesData;

/// Default data filename, resolved relative to the working directory
pub const DATA_FILENAME: &str = "typings-data.json";

/// Load the parsed typings data collection from `path`
pub fn load_types_data(path: &Path) -> TypepackResult<TypesData> {
    if !path.exists() {
        return Err(TypepackError::MissingData {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| TypepackError::InvalidData {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

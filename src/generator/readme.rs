//! README rendering
//!
//! Deterministic section sequence; the only run-dependent line is the
//! timestamp. Lines join with CRLF, which downstream tooling expects.

use chrono::Utc;

use crate::config::PublishConfig;
use crate::models::TypingsData;

use super::package_name;

pub(super) fn create_readme(typing: &TypingsData, config: &PublishConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Installation".to_string());
    lines.push(format!(
        "> `npm install --save {}`",
        package_name(config, &typing.name)
    ));
    lines.push(String::new());

    lines.push("# Summary".to_string());
    match &typing.project_name {
        Some(project) => lines.push(format!(
            "This package contains type definitions for {} ({}).",
            typing.library_name, project
        )),
        None => lines.push(format!(
            "This package contains type definitions for {}.",
            typing.library_name
        )),
    }
    lines.push(String::new());

    lines.push("# Details".to_string());
    lines.push(format!(
        "Files were exported from {}/tree/{}/{}",
        typing.source_repo_url, config.source_branch, typing.name
    ));
    lines.push(String::new());

    lines.push("Additional Details".to_string());
    lines.push(format!(
        " * Last updated: {}",
        Utc::now().format("%a, %d %b %Y %H:%M:%S GMT")
    ));
    lines.push(format!(" * File structure: {}", typing.kind));
    lines.push(format!(
        " * Library Dependencies: {}",
        join_or_none(&typing.library_dependencies)
    ));
    lines.push(format!(
        " * Module Dependencies: {}",
        join_or_none(&typing.module_dependencies)
    ));
    lines.push(format!(
        " * Global values: {}",
        join_or_none(&typing.globals)
    ));
    lines.push(String::new());

    if let Some(authors) = &typing.authors {
        lines.push("# Credits".to_string());
        lines.push(format!("These definitions were written by {}.", authors));
        lines.push(String::new());
    }

    lines.join("\r\n")
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

//! Reference-directive patching
//!
//! Published files must refer to sibling packages by name, not by relative
//! path into the source tree. A directive line
//! `/// <reference path="../node/index.d.ts" />` therefore becomes
//! `/// <reference types="node" />` on its way into the output tree.
//!
//! Pure text transform: no filesystem access, everything that is not a
//! matching directive line passes through untouched.

const DIRECTIVE_PREFIX: &str = "/// <reference path=\"../";

/// Rewrite every sibling-path reference directive in `input`.
pub fn patch_definition_file(input: &str) -> String {
    if !input.contains(DIRECTIVE_PREFIX) {
        return input.to_string();
    }

    let mut output = String::with_capacity(input.len());
    for line in input.split_inclusive('\n') {
        match patch_line(line) {
            Some(patched) => output.push_str(&patched),
            None => output.push_str(line),
        }
    }
    output
}

/// Patch one line (including its original line terminator), or `None` when
/// the line is not a sibling-path reference directive.
fn patch_line(line: &str) -> Option<String> {
    let (body, terminator) = split_terminator(line);

    // The directive must be the line itself, not embedded in other content.
    let after_prefix = body.strip_prefix(DIRECTIVE_PREFIX)?;
    let quote_end = after_prefix.find('"')?;
    let inner = &after_prefix[..quote_end];
    let suffix = &after_prefix[quote_end + 1..];

    // The quoted path splits as <name>/<rest>, where <name> greedily takes
    // every segment up to the last separator and <rest> must be non-empty.
    let slash = inner.rfind('/')?;
    let (name, rest) = (&inner[..slash], &inner[slash + 1..]);
    if name.is_empty() || rest.is_empty() {
        return None;
    }
    let first = name.chars().next()?;
    if !(first.is_ascii_alphanumeric() || first == '_') {
        return None;
    }

    Some(format!(
        "/// <reference types=\"{}\"{}{}",
        name, suffix, terminator
    ))
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

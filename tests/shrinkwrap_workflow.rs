//! End-to-end shrinkwrap workflow tests.

use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn write_source_file(root: &Path, name: &str, content: &str) {
    std::fs::create_dir_all(root).unwrap();
    std::fs::write(root.join(name), content).unwrap();
}

fn typing_json(name: &str, major: u32, minor: u32, root: &Path, deps: &[&str]) -> String {
    let deps_json: Vec<String> = deps.iter().map(|d| format!("\"{}\"", d)).collect();
    format!(
        r#"{{
            "name": "{name}",
            "libraryName": "{name}",
            "majorVersion": {major},
            "minorVersion": {minor},
            "kind": "global",
            "sourceRepoUrl": "https://github.com/example/typings",
            "contentHash": "{name}-hash",
            "root": "{root}",
            "files": ["index.d.ts"],
            "moduleDependencies": [{deps}],
            "libraryDependencies": [],
            "definitionFilename": "index.d.ts"
        }}"#,
        name = name,
        major = major,
        minor = minor,
        root = root.display(),
        deps = deps_json.join(", "),
    )
}

fn setup(dir: &Path) {
    let foo_root = dir.join("src").join("foo");
    let bar_root = dir.join("src").join("bar");
    let baz_root = dir.join("src").join("baz");
    write_source_file(&foo_root, "index.d.ts", "declare var foo: number;\n");
    write_source_file(&bar_root, "index.d.ts", "declare var bar: number;\n");
    write_source_file(&baz_root, "index.d.ts", "declare var baz: number;\n");

    let entries = [
        ("foo", typing_json("foo", 1, 2, &foo_root, &["bar", "baz"])),
        ("bar", typing_json("bar", 3, 4, &bar_root, &[])),
        ("baz", typing_json("baz", 0, 9, &baz_root, &[])),
    ];
    let body: Vec<String> = entries
        .iter()
        .map(|(name, json)| format!("\"{}\": {}", name, json))
        .collect();
    std::fs::write(
        dir.join("typings-data.json"),
        format!("{{ {} }}", body.join(", ")),
    )
    .unwrap();
}

fn run(dir: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_typepack");
    Command::new(bin).args(args).current_dir(dir).output().unwrap()
}

fn read_manifest(dir: &Path, name: &str) -> serde_json::Value {
    let raw = std::fs::read_to_string(dir.join("output").join(name).join("package.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn shrinkwrap_pins_wildcards_to_published_versions() {
    let dir = tempdir().unwrap();
    setup(dir.path());

    assert!(run(dir.path(), &["generate"]).status.success());
    // Before pinning, everything is a wildcard
    assert_eq!(read_manifest(dir.path(), "foo")["dependencies"]["@types/bar"], "*");

    let output = run(dir.path(), &["shrinkwrap"]);
    assert!(
        output.status.success(),
        "shrinkwrap failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let deps = read_manifest(dir.path(), "foo")["dependencies"]
        .as_object()
        .cloned()
        .unwrap();
    assert_eq!(deps["@types/bar"], "3.4.1");
    assert_eq!(deps["@types/baz"], "0.9.1");
}

#[test]
fn shrinkwrap_removes_dependency_whose_manifest_is_missing() {
    let dir = tempdir().unwrap();
    setup(dir.path());
    assert!(run(dir.path(), &["generate"]).status.success());

    // Simulate a pass where baz was never materialized
    std::fs::remove_dir_all(dir.path().join("output").join("baz")).unwrap();

    let output = run(dir.path(), &["shrinkwrap"]);
    assert!(output.status.success());

    let deps = read_manifest(dir.path(), "foo")["dependencies"]
        .as_object()
        .cloned()
        .unwrap();
    // The unresolved entry is gone entirely; the resolved one is concrete
    assert_eq!(deps.len(), 1);
    assert_eq!(deps["@types/bar"], "3.4.1");

    // And the missing package itself was skipped, not fatal
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Skipping baz"));
}

#[test]
fn shrinkwrap_json_mode_reports_counts() {
    let dir = tempdir().unwrap();
    setup(dir.path());
    assert!(run(dir.path(), &["generate"]).status.success());
    std::fs::remove_dir_all(dir.path().join("output").join("baz")).unwrap();

    let output = run(dir.path(), &["--json", "shrinkwrap"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary: serde_json::Value =
        serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(summary["event"], "shrinkwrap");
    assert_eq!(summary["pinned"], 1);
    assert_eq!(summary["dropped"], 1);
}

#[test]
fn shrinkwrap_is_idempotent_once_pinned() {
    let dir = tempdir().unwrap();
    setup(dir.path());
    assert!(run(dir.path(), &["generate"]).status.success());
    assert!(run(dir.path(), &["shrinkwrap"]).status.success());

    let first = std::fs::read(dir.path().join("output").join("foo").join("package.json")).unwrap();
    assert!(run(dir.path(), &["shrinkwrap"]).status.success());
    let second = std::fs::read(dir.path().join("output").join("foo").join("package.json")).unwrap();

    // Pinned versions re-resolve to themselves
    assert_eq!(first, second);
}

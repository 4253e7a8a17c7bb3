//! Hygiene: source-level checks for the page builder library.
//!
//! Scans `src/` (test modules excluded) for patterns that crash the process or
//! swallow errors. Every budget is zero. Handle the case instead of raising one.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").as_path(), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Fail with a per-file breakdown if `pattern` occurs more than `max` times.
fn check_budget(pattern: &str, max: usize) {
    let hits: Vec<(String, usize)> = source_files()
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path, count))
        })
        .collect();
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let detail = hits
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{detail}");
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")));
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

// Panics.

#[test]
fn unwrap_budget() {
    check_budget(".unwrap()", 0);
}

#[test]
fn expect_budget() {
    check_budget(".expect(", 0);
}

#[test]
fn panic_budget() {
    check_budget("panic!(", 0);
}

#[test]
fn unreachable_budget() {
    check_budget("unreachable!(", 0);
}

#[test]
fn todo_budget() {
    check_budget("todo!(", 0);
}

#[test]
fn unimplemented_budget() {
    check_budget("unimplemented!(", 0);
}

// Silent loss.

#[test]
fn silent_discard_budget() {
    check_budget("let _ =", 0);
}

#[test]
fn dot_ok_budget() {
    check_budget(".ok()", 0);
}

#[test]
fn allow_dead_code_budget() {
    check_budget("#[allow(dead_code)]", 0);
}

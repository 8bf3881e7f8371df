//! Hygiene checks over the taskbot source tree.
//!
//! Each pattern has a budget. A panic in the controller takes the whole
//! dashboard tab down. Budgets only ever shrink.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
    Budget { pattern: "let _ =", max: 0 },
    // config.rs: env lookup treats an unset variable as absent.
    Budget { pattern: ".ok()", max: 1 },
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
    Budget { pattern: "unsafe ", max: 0 },
    Budget { pattern: "println!(", max: 0 },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, sibling `_test.rs` files excluded.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("controller.rs")), "run from the taskbot crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  `{}`: found {count}, max {}\n{detail}", budget.pattern, budget.max));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn every_module_has_sibling_tests() {
    let files = source_files();
    let missing = files
        .iter()
        .filter(|f| !f.path.ends_with("lib.rs") && !f.path.ends_with("error.rs"))
        .filter(|f| !f.content.contains("#[cfg(test)]"))
        .map(|f| f.path.clone())
        .collect::<Vec<_>>();
    assert!(missing.is_empty(), "modules without a test module: {missing:?}");
}

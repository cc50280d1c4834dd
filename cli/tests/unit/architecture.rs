//! Structural tests for layer boundary enforcement.
//!
//! These scan source files to verify that domain stays pure, application
//! stays free of infrastructure, and network code lives only in infra/.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Read a file and strip comment lines to avoid false positives.
fn read_non_comment_lines(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .filter(|l| {
            let trimmed = l.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with("/*") && !trimmed.starts_with('*')
        })
        .map(String::from)
        .collect()
}

/// Track brace depth and report whether a line is inside a `#[cfg(test)]` block.
struct CfgTestTracker {
    in_test_block: bool,
    brace_depth: i32,
    test_block_start_depth: i32,
}

impl CfgTestTracker {
    fn new() -> Self {
        Self {
            in_test_block: false,
            brace_depth: 0,
            test_block_start_depth: 0,
        }
    }

    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().contains("#[cfg(test)]") {
            self.in_test_block = true;
            self.test_block_start_depth = self.brace_depth;
        }
        for ch in line.chars() {
            match ch {
                '{' => self.brace_depth += 1,
                '}' => {
                    self.brace_depth -= 1;
                    if self.in_test_block && self.brace_depth <= self.test_block_start_depth {
                        self.in_test_block = false;
                    }
                }
                _ => {}
            }
        }
        self.in_test_block
    }
}

fn src_dir(sub: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join(sub)
}

/// Lines in `dir` (outside `#[cfg(test)]`) containing any of `forbidden`.
fn find_violations(dir: &Path, forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for file in collect_rs_files(dir) {
        let rel = file
            .strip_prefix(env!("CARGO_MANIFEST_DIR"))
            .unwrap_or(&file)
            .display()
            .to_string();
        let Ok(content) = std::fs::read_to_string(&file) else {
            continue;
        };
        let mut tracker = CfgTestTracker::new();
        for (i, line) in content.lines().enumerate() {
            let in_test = tracker.process_line(line);
            if in_test || line.trim().starts_with("//") {
                continue;
            }
            for pattern in forbidden {
                if line.contains(pattern) {
                    violations.push(format!("{rel}:{}: `{pattern}`: {line}", i + 1));
                }
            }
        }
    }
    violations
}

// ── Domain purity ─────────────────────────────────────────────────────────────

#[test]
fn domain_has_no_io_or_outer_layer_imports() {
    let violations = find_violations(
        &src_dir("domain"),
        &[
            "crate::infra",
            "crate::commands",
            "crate::application",
            "crate::output",
            "std::fs",
            "std::net",
            "ureq::",
        ],
    );
    assert!(
        violations.is_empty(),
        "domain/ must stay pure:\n{}",
        violations.join("\n")
    );
}

// ── Application boundaries ───────────────────────────────────────────────────

#[test]
fn application_has_no_infra_commands_or_output_imports() {
    let violations = find_violations(
        &src_dir("application"),
        &["crate::infra", "crate::commands", "crate::output", "ureq::"],
    );
    assert!(
        violations.is_empty(),
        "application/ may only depend on domain/:\n{}",
        violations.join("\n")
    );
}

// ── Infra boundaries ─────────────────────────────────────────────────────────

#[test]
fn infra_has_no_imports_from_commands_or_output() {
    let violations = find_violations(&src_dir("infra"), &["crate::commands", "crate::output"]);
    assert!(
        violations.is_empty(),
        "infra/ must not import from commands/ or output/:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_print_macros_outside_tests() {
    let violations = find_violations(&src_dir("infra"), &["println!", "eprintln!"]);
    assert!(
        violations.is_empty(),
        "infra/ must not use println!/eprintln! outside #[cfg(test)]:\n{}",
        violations.join("\n")
    );
}

#[test]
fn http_client_only_used_in_infra() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();
    for file in collect_rs_files(&src) {
        let rel = file.to_string_lossy().replace('\\', "/");
        if rel.contains("/infra/") {
            continue;
        }
        for (i, line) in read_non_comment_lines(&file).iter().enumerate() {
            if line.contains("ureq::") {
                violations.push(format!("{rel}:{}: {line}", i + 1));
            }
        }
    }
    assert!(
        violations.is_empty(),
        "ureq must only be used behind the AdminTransport port in infra/:\n{}",
        violations.join("\n")
    );
}

// ── Command handlers ─────────────────────────────────────────────────────────

#[test]
fn command_handlers_take_port_not_concrete_transport() {
    let violations = find_violations(&src_dir("commands"), &["HttpAdminTransport", "crate::infra"]);
    assert!(
        violations.is_empty(),
        "commands/ must accept `AdminConsole<T: AdminTransport>`:\n{}",
        violations.join("\n")
    );
}

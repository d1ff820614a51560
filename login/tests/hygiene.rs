//! Source scans over `login/src`.
//!
//! The login crate runs inside a browser tab and a CLI, and it handles a
//! bearer credential. Each scan below counts a pattern in non-test sources
//! against a fixed allowance. The allowances are zero; raising one needs a
//! matching reduction somewhere else.

use std::fs;
use std::path::{Path, PathBuf};

struct Scan {
    pattern: &'static str,
    allowance: usize,
    hint: &'static str,
}

const UNWRAP: Scan = Scan { pattern: ".unwrap()", allowance: 0, hint: "propagate with `?`" };
const EXPECT: Scan = Scan { pattern: ".expect(", allowance: 0, hint: "propagate with `?`" };
const PANIC: Scan = Scan { pattern: "panic!(", allowance: 0, hint: "return a `LoginError`" };
const UNREACHABLE: Scan = Scan { pattern: "unreachable!(", allowance: 0, hint: "make the match exhaustive" };
const TODO: Scan = Scan { pattern: "todo!(", allowance: 0, hint: "finish the stub" };
const UNIMPLEMENTED: Scan = Scan { pattern: "unimplemented!(", allowance: 0, hint: "finish the stub" };
const DISCARD: Scan = Scan { pattern: "let _ =", allowance: 0, hint: "handle or log the value" };
const DOT_OK: Scan = Scan { pattern: ".ok()", allowance: 0, hint: "handle the error case" };
const DEAD_CODE: Scan = Scan { pattern: "#[allow(dead_code)]", allowance: 0, hint: "delete the unused item" };
const PRINTLN: Scan = Scan { pattern: "println!(", allowance: 0, hint: "log through the `log` facade" };

struct Source {
    path: PathBuf,
    text: String,
}

/// Non-test `.rs` files under `src/`.
fn sources() -> Vec<Source> {
    let mut found = Vec::new();
    walk(Path::new("src"), &mut found);
    assert!(!found.is_empty(), "no sources under src/; run from the login crate root");
    found
}

fn walk(dir: &Path, found: &mut Vec<Source>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            walk(&path, found);
            continue;
        }
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(text) = fs::read_to_string(&path) {
            found.push(Source { path, text });
        }
    }
}

/// `path:line: text` for every line matching `pred`.
fn offending_lines(sources: &[Source], pred: impl Fn(&str) -> bool) -> Vec<String> {
    sources
        .iter()
        .flat_map(|src| {
            src.text
                .lines()
                .enumerate()
                .filter(|(_, line)| pred(line))
                .map(|(n, line)| format!("{}:{}: {}", src.path.display(), n + 1, line.trim()))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn check(scan: &Scan) {
    let hits = offending_lines(&sources(), |line| line.contains(scan.pattern));
    assert!(
        hits.len() <= scan.allowance,
        "`{}` appears {} time(s), allowance {} ({}):\n{}",
        scan.pattern,
        hits.len(),
        scan.allowance,
        scan.hint,
        hits.join("\n")
    );
}

// =============================================================================
// Crash paths
// =============================================================================

#[test]
fn no_unwrap() {
    check(&UNWRAP);
}

#[test]
fn no_expect() {
    check(&EXPECT);
}

#[test]
fn no_panic() {
    check(&PANIC);
}

#[test]
fn no_unreachable() {
    check(&UNREACHABLE);
}

#[test]
fn no_todo() {
    check(&TODO);
}

#[test]
fn no_unimplemented() {
    check(&UNIMPLEMENTED);
}

// =============================================================================
// Swallowed errors and leftovers
// =============================================================================

#[test]
fn no_silent_discard() {
    check(&DISCARD);
}

#[test]
fn no_dot_ok() {
    check(&DOT_OK);
}

#[test]
fn no_allow_dead_code() {
    check(&DEAD_CODE);
}

#[test]
fn no_println() {
    check(&PRINTLN);
}

// =============================================================================
// Credential handling
// =============================================================================

const FORMATTING: [&str; 8] =
    ["format!(", "write!(", "writeln!(", "print!(", "eprint", "log::", "info!(", "error!("];

/// The identity token may only reach a formatter as the redacted placeholder.
#[test]
fn id_token_is_never_formatted() {
    let hits = offending_lines(&sources(), |line| {
        if !line.contains("id_token") {
            return false;
        }
        let in_debug_field = line.contains(".field(") && !line.contains("<redacted>");
        let in_formatter = FORMATTING.iter().any(|m| line.contains(m));
        in_debug_field || in_formatter
    });
    assert!(hits.is_empty(), "id_token reaches a formatter:\n{}", hits.join("\n"));
}

#[test]
fn token_types_redact_debug() {
    let sources = sources();
    let ports = sources
        .iter()
        .find(|src| src.path.ends_with("ports.rs"))
        .map(|src| src.text.as_str())
        .unwrap_or_default();
    for ty in ["Identity", "LoginRequest"] {
        assert!(
            ports.contains(&format!("fmt::Debug for {ty} {{")),
            "{ty} must implement Debug by hand so the token stays redacted"
        );
        assert!(!derives_debug(ports, ty), "{ty} derives Debug");
    }
}

/// Whether the `derive` attribute directly above `pub struct {ty}` lists `Debug`.
fn derives_debug(text: &str, ty: &str) -> bool {
    let lines: Vec<&str> = text.lines().collect();
    lines.iter().enumerate().any(|(n, line)| {
        line.trim_start().starts_with(&format!("pub struct {ty} "))
            && lines[..n]
                .iter()
                .rev()
                .take_while(|l| l.trim_start().starts_with("#[") || l.trim_start().starts_with("///"))
                .any(|l| l.contains("derive(") && l.contains("Debug"))
    })
}

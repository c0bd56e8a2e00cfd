//! Anti-pattern detectors.
//!
//! Each detector is a pure function of the raw text returning zero or more
//! findings. `detect_anti_patterns` concatenates them in a fixed order that
//! callers (and tests) may rely on.

use crate::analysis_utils::line_number_of_offset;
use crate::core::{AntiPattern, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

const GLOBAL_THRESHOLD: usize = 3;
const OLD_FORMAT_THRESHOLD: usize = 2;

static GLOBAL_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^global\s+").unwrap());
static BARE_EXCEPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"except\s*:").unwrap());
static MUTABLE_DEFAULT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"def\s+\w+\([^)]*=\s*(\[\]|\{\})").unwrap());
static WILDCARD_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"from\s+\w+\s+import\s+\*").unwrap());
static DYNAMIC_EXEC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(eval|exec)\s*\(").unwrap());
static OLD_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"%\s*[sd(]").unwrap());

/// Run every anti-pattern detector and concatenate the findings in order:
/// globals, bare excepts, mutable defaults, wildcard imports, dynamic
/// execution, old-style formatting.
pub fn detect_anti_patterns(content: &str) -> Vec<AntiPattern> {
    let mut findings = Vec::new();
    findings.extend(detect_excessive_globals(content));
    findings.extend(detect_bare_excepts(content));
    findings.extend(detect_mutable_defaults(content));
    findings.extend(detect_wildcard_imports(content));
    findings.extend(detect_dynamic_execution(content));
    findings.extend(detect_old_string_formatting(content));
    findings
}

/// More than three module-level `global` declarations; reports the line of
/// the first one.
pub fn detect_excessive_globals(content: &str) -> Option<AntiPattern> {
    let matches: Vec<_> = GLOBAL_DECL.find_iter(content).collect();
    if matches.len() > GLOBAL_THRESHOLD {
        Some(AntiPattern {
            name: "Excessive Global Variables".to_string(),
            severity: Severity::High,
            description: format!("Found {} global variable declarations", matches.len()),
            line_number: line_number_of_offset(content, matches[0].start()),
        })
    } else {
        None
    }
}

/// `except:` with no exception type, one finding per occurrence.
pub fn detect_bare_excepts(content: &str) -> Vec<AntiPattern> {
    BARE_EXCEPT
        .find_iter(content)
        .map(|m| AntiPattern {
            name: "Bare Except Clause".to_string(),
            severity: Severity::Medium,
            description: "Using except without specifying exception type".to_string(),
            line_number: line_number_of_offset(content, m.start()),
        })
        .collect()
}

/// Empty list/dict literals as parameter defaults, one finding per occurrence.
pub fn detect_mutable_defaults(content: &str) -> Vec<AntiPattern> {
    MUTABLE_DEFAULT
        .find_iter(content)
        .map(|m| AntiPattern {
            name: "Mutable Default Arguments".to_string(),
            severity: Severity::High,
            description: "Using mutable objects (list/dict) as default arguments".to_string(),
            line_number: line_number_of_offset(content, m.start()),
        })
        .collect()
}

/// `from module import *`, one finding per occurrence.
pub fn detect_wildcard_imports(content: &str) -> Vec<AntiPattern> {
    WILDCARD_IMPORT
        .find_iter(content)
        .map(|m| AntiPattern {
            name: "Wildcard Import".to_string(),
            severity: Severity::Medium,
            description: "Wildcard imports pollute namespace".to_string(),
            line_number: line_number_of_offset(content, m.start()),
        })
        .collect()
}

/// Calls to `eval` or `exec`; the finding is named for the primitive.
pub fn detect_dynamic_execution(content: &str) -> Vec<AntiPattern> {
    DYNAMIC_EXEC
        .captures_iter(content)
        .map(|caps| {
            let m = caps.get(0).expect("match has a full capture");
            let primitive = &caps[1];
            AntiPattern {
                name: format!("Dangerous {} Usage", primitive.to_uppercase()),
                severity: Severity::Critical,
                description: format!("Using {primitive}() can execute arbitrary code"),
                line_number: line_number_of_offset(content, m.start()),
            }
        })
        .collect()
}

/// More than two printf-style interpolation markers; reports the line of the
/// first one.
pub fn detect_old_string_formatting(content: &str) -> Option<AntiPattern> {
    let matches: Vec<_> = OLD_FORMAT.find_iter(content).collect();
    if matches.len() > OLD_FORMAT_THRESHOLD {
        Some(AntiPattern {
            name: "Old-Style String Formatting".to_string(),
            severity: Severity::Low,
            description: "Consider using f-strings or .format() instead of % formatting"
                .to_string(),
            line_number: line_number_of_offset(content, matches[0].start()),
        })
    } else {
        None
    }
}

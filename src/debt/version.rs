//! Python version heuristic.
//!
//! Scores two disjoint pattern sets against the text: Python 2-only idioms
//! versus Python 3-only ones. Each pattern contributes at most one point,
//! however often it occurs. Never fails; texts matching neither set are
//! labeled unknown.

use once_cell::sync::Lazy;
use regex::Regex;

pub const PYTHON_2_LABEL: &str = "Python 2 (Legacy - EOL)";
pub const PYTHON_3_LABEL: &str = "Python 3";
pub const UNKNOWN_LABEL: &str = "Unknown";

static PY2_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"print\s+[^(]",
        r"\bxrange\b",
        r"\.iteritems\(\)",
        r"\.iterkeys\(\)",
        r"\.itervalues\(\)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("version pattern is valid"))
    .collect()
});

static PY3_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"print\(",
        r"\basync\s+def\b",
        r"\bnonlocal\b",
        r":=",
        r"\basync\s+for\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("version pattern is valid"))
    .collect()
});

pub fn detect_python_version(content: &str) -> String {
    let py2_score = PY2_PATTERNS.iter().filter(|p| p.is_match(content)).count();
    let py3_score = PY3_PATTERNS.iter().filter(|p| p.is_match(content)).count();

    if py2_score > py3_score {
        PYTHON_2_LABEL.to_string()
    } else if py3_score > 0 {
        PYTHON_3_LABEL.to_string()
    } else {
        UNKNOWN_LABEL.to_string()
    }
}

//! Import extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static PLAIN_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^import\s+([\w.]+)").unwrap());
static FROM_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^from\s+([\w.]+)\s+import").unwrap());

/// Distinct root module names from `import x.y` and `from x.y import ...`
/// statements, sorted alphabetically. Only the segment before the first `.`
/// is kept.
pub fn extract_dependencies(content: &str) -> Vec<String> {
    let mut deps = BTreeSet::new();

    for caps in PLAIN_IMPORT.captures_iter(content) {
        deps.insert(root_module(&caps[1]));
    }
    for caps in FROM_IMPORT.captures_iter(content) {
        deps.insert(root_module(&caps[1]));
    }

    deps.into_iter().collect()
}

fn root_module(path: &str) -> String {
    path.split('.').next().unwrap_or(path).to_string()
}

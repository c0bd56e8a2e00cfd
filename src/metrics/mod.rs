//! Metrics aggregation.
//!
//! Combines document stats, complexity output, and detector findings into one
//! `CodeMetrics` record. The maintainability and technical-debt formulas are
//! simple linear scoring rules carried over coefficient-for-coefficient from
//! the legacy tool; do not retune them.

use crate::analysis_utils::function_blocks;
use crate::core::{AntiPattern, CodeMetrics, CodeSmell, SourceDocument};
use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*class\s+\w+").unwrap());
static FUNCTION_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*def\s+\w+").unwrap());

#[allow(clippy::too_many_arguments)]
pub fn aggregate(
    doc: &SourceDocument,
    cyclomatic_complexity: u32,
    max_nesting_depth: u32,
    dependencies: Vec<String>,
    anti_patterns: Vec<AntiPattern>,
    code_smells: Vec<CodeSmell>,
    python_version: String,
) -> CodeMetrics {
    let lines_of_code = doc.lines_of_code();
    let comment_lines = doc.comment_lines();
    let blank_lines = doc.blank_lines();
    let code_lines = doc.code_lines();

    let maintainability_index = maintainability_index(
        code_lines,
        comment_lines,
        cyclomatic_complexity,
        anti_patterns.len(),
        code_smells.len(),
    );
    let technical_debt_score = technical_debt_score(
        cyclomatic_complexity,
        anti_patterns.len(),
        code_smells.len(),
        lines_of_code,
    );

    CodeMetrics {
        lines_of_code,
        code_lines,
        comment_lines,
        blank_lines,
        cyclomatic_complexity,
        dependencies,
        anti_patterns,
        code_smells,
        python_version,
        class_count: CLASS_HEADER.find_iter(doc.content()).count(),
        function_count: FUNCTION_HEADER.find_iter(doc.content()).count(),
        maintainability_index,
        technical_debt_score,
        average_function_length: average_function_length(doc.content()),
        max_nesting_depth,
    }
}

/// Mean body length over all `def` headers, with the same block-boundary
/// heuristic as the long-function smell. 0 when there are no functions.
pub fn average_function_length(content: &str) -> f64 {
    let blocks = function_blocks(content);
    if blocks.is_empty() {
        return 0.0;
    }
    let total: usize = blocks.iter().map(|b| b.body_lines).sum();
    total as f64 / blocks.len() as f64
}

/// 0-100, higher is better.
pub fn maintainability_index(
    code_lines: usize,
    comment_lines: usize,
    complexity: u32,
    anti_pattern_count: usize,
    smell_count: usize,
) -> f64 {
    let comment_ratio = comment_lines as f64 / (code_lines.max(1)) as f64;
    let avg_complexity = complexity as f64 / (code_lines as f64 / 10.0).max(1.0);

    let maintainability = 100.0 - avg_complexity * 3.0 - anti_pattern_count as f64 * 5.0
        - smell_count as f64 * 2.0
        + comment_ratio * 15.0;

    maintainability.clamp(0.0, 100.0)
}

/// 0-100, lower is better.
pub fn technical_debt_score(
    complexity: u32,
    anti_pattern_count: usize,
    smell_count: usize,
    lines_of_code: usize,
) -> f64 {
    let debt = complexity as f64 * 0.5
        + anti_pattern_count as f64 * 10.0
        + smell_count as f64 * 5.0
        + (lines_of_code as f64 / 100.0) * 2.0;

    debt.clamp(0.0, 100.0)
}

//! The analysis pipeline.
//!
//! Data flows strictly forward: document stats, then complexity, then the
//! textual detectors, then aggregation, scoring, and recommendations. Every
//! stage is a pure function, so the whole pipeline is total over arbitrary
//! UTF-8 input and safe to run concurrently over independent units.

use crate::core::{Report, SourceDocument};
use crate::{complexity, debt, metrics, risk};

/// Analyze one self-contained unit of Python source text.
///
/// Never fails: malformed input degrades to the complexity fallback path and
/// empty detector output, still producing a valid report.
pub fn analyze_source(content: &str) -> Report {
    let doc = SourceDocument::new(content);

    let (cyclomatic_complexity, max_nesting_depth) = complexity::measure(content);
    let dependencies = debt::extract_dependencies(content);
    let anti_patterns = debt::detect_anti_patterns(content);
    let code_smells = debt::detect_code_smells(&doc, &dependencies);
    let python_version = debt::detect_python_version(content);

    let metrics = metrics::aggregate(
        &doc,
        cyclomatic_complexity,
        max_nesting_depth,
        dependencies,
        anti_patterns,
        code_smells,
        python_version,
    );

    let risk = risk::assess_risk(&metrics);
    let recommendations = risk::recommendations::generate_recommendations(&metrics);

    Report {
        risk,
        metrics,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_a_degenerate_report() {
        let report = analyze_source("");
        assert_eq!(report.metrics.cyclomatic_complexity, 0);
        assert_eq!(report.metrics.lines_of_code, 1);
        assert!(report.metrics.anti_patterns.is_empty());
        assert!(report.metrics.code_smells.is_empty());
        assert!(report.recommendations.is_empty());
        assert_eq!(report.risk.score, 0);
    }

    #[test]
    fn gibberish_still_produces_a_report() {
        let report = analyze_source("%%% not (valid python");
        assert!(report.metrics.cyclomatic_complexity >= 1);
        assert!(report.metrics.maintainability_index <= 100.0);
    }
}

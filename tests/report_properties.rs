//! Invariants that must hold for arbitrary input, printable or not.

use modmap::{analyze_source, report_to_json};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scores_stay_clamped(content in ".{0,400}") {
        let report = analyze_source(&content);
        prop_assert!(report.metrics.maintainability_index >= 0.0);
        prop_assert!(report.metrics.maintainability_index <= 100.0);
        prop_assert!(report.metrics.technical_debt_score >= 0.0);
        prop_assert!(report.metrics.technical_debt_score <= 100.0);
        prop_assert!(report.risk.score <= 100);
    }

    #[test]
    fn dependencies_are_sorted_and_distinct(content in "(import [a-z]{1,8}\n){0,30}") {
        let report = analyze_source(&content);
        let deps = &report.metrics.dependencies;
        prop_assert!(deps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn analysis_is_deterministic(content in ".{0,200}") {
        let first = analyze_source(&content);
        let second = analyze_source(&content);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&report_to_json(&first)).unwrap(),
            serde_json::to_string(&report_to_json(&second)).unwrap()
        );
    }

    #[test]
    fn line_counts_partition_the_document(content in "[ -~\n]{0,300}") {
        let m = analyze_source(&content).metrics;
        prop_assert_eq!(
            m.lines_of_code,
            m.code_lines + m.comment_lines + m.blank_lines
        );
    }
}

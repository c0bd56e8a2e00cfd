//! Modernization risk scoring.
//!
//! A deterministic weighted sum over the metrics record: each contribution is
//! computed independently and added, the total is clamped to [0, 100], and
//! the clamped score is mapped to a discrete level. Same metrics in, same
//! assessment out.

pub mod recommendations;

use crate::core::{CodeMetrics, RiskAssessment, RiskLevel, Severity};

const SMELL_CONTRIBUTION_CAP: u32 = 25;

pub fn assess_risk(metrics: &CodeMetrics) -> RiskAssessment {
    let score = risk_score(metrics);
    RiskAssessment {
        level: risk_level(score),
        score,
    }
}

fn risk_score(metrics: &CodeMetrics) -> u32 {
    let mut score: u32 = 0;

    score += match metrics.cyclomatic_complexity {
        c if c > 50 => 30,
        c if c > 30 => 20,
        c if c > 15 => 10,
        _ => 0,
    };

    let critical_count = metrics
        .anti_patterns
        .iter()
        .filter(|p| p.severity == Severity::Critical)
        .count() as u32;
    let high_count = metrics
        .anti_patterns
        .iter()
        .filter(|p| p.severity == Severity::High)
        .count() as u32;
    score += critical_count * 25;
    score += high_count * 15;
    score += metrics.anti_patterns.len() as u32 * 3;

    score += SMELL_CONTRIBUTION_CAP.min(metrics.code_smells.len() as u32 * 2);

    score += match metrics.lines_of_code {
        loc if loc > 1000 => 15,
        loc if loc > 500 => 10,
        _ => 0,
    };

    if metrics.python_version.contains("Python 2") {
        score += 30;
    }

    score += match metrics.maintainability_index {
        m if m < 40.0 => 20,
        m if m < 60.0 => 10,
        _ => 0,
    };

    score += match metrics.technical_debt_score {
        d if d > 70.0 => 15,
        d if d > 50.0 => 10,
        _ => 0,
    };

    score.min(100)
}

fn risk_level(score: u32) -> RiskLevel {
    match score {
        s if s >= 70 => RiskLevel::Critical,
        s if s >= 50 => RiskLevel::High,
        s if s >= 30 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_metrics() -> CodeMetrics {
        CodeMetrics {
            lines_of_code: 10,
            code_lines: 8,
            comment_lines: 1,
            blank_lines: 1,
            cyclomatic_complexity: 1,
            dependencies: vec![],
            anti_patterns: vec![],
            code_smells: vec![],
            python_version: "Python 3".to_string(),
            class_count: 0,
            function_count: 1,
            maintainability_index: 95.0,
            technical_debt_score: 2.0,
            average_function_length: 5.0,
            max_nesting_depth: 1,
        }
    }

    #[test]
    fn quiet_code_is_low_risk() {
        let assessment = assess_risk(&quiet_metrics());
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    #[test]
    fn complexity_tiers_step_at_15_30_50() {
        let mut metrics = quiet_metrics();
        for (complexity, expected) in [(15, 0), (16, 10), (31, 20), (51, 30)] {
            metrics.cyclomatic_complexity = complexity;
            assert_eq!(assess_risk(&metrics).score, expected);
        }
    }

    #[test]
    fn critical_anti_pattern_scores_28() {
        use crate::core::AntiPattern;
        let mut metrics = quiet_metrics();
        metrics.anti_patterns.push(AntiPattern {
            name: "Dangerous EVAL Usage".to_string(),
            severity: Severity::Critical,
            description: String::new(),
            line_number: 1,
        });
        // 25 for critical + 3 per finding.
        assert_eq!(assess_risk(&metrics).score, 28);
    }

    #[test]
    fn smell_contribution_caps_at_25() {
        use crate::core::CodeSmell;
        let mut metrics = quiet_metrics();
        metrics.code_smells = (0..20)
            .map(|i| CodeSmell {
                name: "Long Line".to_string(),
                location: format!("Line {i}"),
                description: String::new(),
            })
            .collect();
        assert_eq!(assess_risk(&metrics).score, 25);
    }

    #[test]
    fn legacy_python_adds_30() {
        let mut metrics = quiet_metrics();
        metrics.python_version = "Python 2 (Legacy - EOL)".to_string();
        assert_eq!(assess_risk(&metrics).score, 30);
        assert_eq!(assess_risk(&metrics).level, RiskLevel::Medium);
    }

    #[test]
    fn score_is_clamped_to_100() {
        use crate::core::AntiPattern;
        let mut metrics = quiet_metrics();
        metrics.cyclomatic_complexity = 80;
        metrics.lines_of_code = 2000;
        metrics.maintainability_index = 10.0;
        metrics.technical_debt_score = 90.0;
        metrics.python_version = "Python 2 (Legacy - EOL)".to_string();
        metrics.anti_patterns = (0..5)
            .map(|i| AntiPattern {
                name: format!("p{i}"),
                severity: Severity::Critical,
                description: String::new(),
                line_number: 0,
            })
            .collect();
        let assessment = assess_risk(&metrics);
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.level, RiskLevel::Critical);
    }

    #[test]
    fn level_thresholds_are_30_50_70() {
        assert_eq!(risk_level(29), RiskLevel::Low);
        assert_eq!(risk_level(30), RiskLevel::Medium);
        assert_eq!(risk_level(49), RiskLevel::Medium);
        assert_eq!(risk_level(50), RiskLevel::High);
        assert_eq!(risk_level(69), RiskLevel::High);
        assert_eq!(risk_level(70), RiskLevel::Critical);
    }
}

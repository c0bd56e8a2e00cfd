//! Prioritized modernization recommendations.
//!
//! Rules fire in a fixed order and the output keeps that order; there is no
//! global re-prioritization. Each rule reads the metrics record only.

use crate::core::{CodeMetrics, Recommendation, Severity};

const HIGH_PATTERN_LIMIT: usize = 3;

pub fn generate_recommendations(metrics: &CodeMetrics) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if metrics.python_version.contains("Python 2") {
        recommendations.push(Recommendation {
            priority: Severity::Critical,
            action: "Migrate to Python 3".to_string(),
            reason: "Python 2 reached end-of-life in January 2020. Security updates are no \
                     longer provided."
                .to_string(),
        });
    }

    if metrics.cyclomatic_complexity > 50 {
        recommendations.push(Recommendation {
            priority: Severity::High,
            action: "Refactor complex code paths".to_string(),
            reason: format!(
                "Cyclomatic complexity of {} makes code difficult to test and maintain",
                metrics.cyclomatic_complexity
            ),
        });
    } else if metrics.cyclomatic_complexity > 30 {
        recommendations.push(Recommendation {
            priority: Severity::Medium,
            action: "Reduce code complexity".to_string(),
            reason: format!(
                "Complexity score of {} is above recommended threshold of 30",
                metrics.cyclomatic_complexity
            ),
        });
    }

    for pattern in metrics
        .anti_patterns
        .iter()
        .filter(|p| p.severity == Severity::Critical)
    {
        recommendations.push(Recommendation {
            priority: Severity::Critical,
            action: format!("Fix: {}", pattern.name),
            reason: format!("{} (line {})", pattern.description, pattern.line_number),
        });
    }

    for pattern in metrics
        .anti_patterns
        .iter()
        .filter(|p| p.severity == Severity::High)
        .take(HIGH_PATTERN_LIMIT)
    {
        recommendations.push(Recommendation {
            priority: Severity::High,
            action: format!("Fix: {}", pattern.name),
            reason: format!("{} (line {})", pattern.description, pattern.line_number),
        });
    }

    if metrics.maintainability_index < 40.0 {
        recommendations.push(Recommendation {
            priority: Severity::High,
            action: "Improve code maintainability".to_string(),
            reason: format!(
                "Maintainability index of {:.1} is below acceptable threshold",
                metrics.maintainability_index
            ),
        });
    } else if metrics.maintainability_index < 60.0 {
        recommendations.push(Recommendation {
            priority: Severity::Medium,
            action: "Add documentation and refactor".to_string(),
            reason: "Code maintainability could be improved with better structure and \
                     documentation"
                .to_string(),
        });
    }

    if metrics.average_function_length > 50.0 {
        recommendations.push(Recommendation {
            priority: Severity::Medium,
            action: "Break down large functions".to_string(),
            reason: format!(
                "Average function length of {:.1} lines exceeds recommended maximum",
                metrics.average_function_length
            ),
        });
    }

    if metrics.max_nesting_depth > 5 {
        recommendations.push(Recommendation {
            priority: Severity::Medium,
            action: "Reduce nesting depth".to_string(),
            reason: format!(
                "Maximum nesting depth of {} makes code hard to follow",
                metrics.max_nesting_depth
            ),
        });
    }

    let long_functions = metrics
        .code_smells
        .iter()
        .filter(|s| s.name == "Long Function")
        .count();
    if long_functions > 3 {
        recommendations.push(Recommendation {
            priority: Severity::Medium,
            action: "Refactor long functions".to_string(),
            reason: format!("Found {long_functions} functions exceeding recommended length"),
        });
    }

    if metrics.dependencies.len() > 20 {
        recommendations.push(Recommendation {
            priority: Severity::Low,
            action: "Review and reduce dependencies".to_string(),
            reason: format!(
                "Module has {} dependencies, consider splitting into smaller modules",
                metrics.dependencies.len()
            ),
        });
    }

    recommendations
}

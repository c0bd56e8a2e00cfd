//! Common type definitions used across the codebase

pub mod document;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use document::SourceDocument;

/// Severity levels for detected issues, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// Aggregate modernization risk, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// A detected anti-pattern: a named risky practice with a severity.
///
/// `line_number` is 1-based; 0 means the finding has no single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiPattern {
    pub name: String,
    pub severity: Severity,
    pub description: String,
    pub line_number: usize,
}

/// A structural symptom (size, length, duplication) without an assigned
/// severity. `location` is a human-readable locator, not always a line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSmell {
    pub name: String,
    pub location: String,
    pub description: String,
}

/// A prioritized modernization recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Severity,
    pub action: String,
    pub reason: String,
}

/// Structured metrics for one unit of source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeMetrics {
    pub lines_of_code: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    pub cyclomatic_complexity: u32,
    /// Distinct root module names of all imports, sorted.
    pub dependencies: Vec<String>,
    pub anti_patterns: Vec<AntiPattern>,
    pub code_smells: Vec<CodeSmell>,
    pub python_version: String,
    pub class_count: usize,
    pub function_count: usize,
    /// Clamped to [0, 100]; higher is better.
    pub maintainability_index: f64,
    /// Clamped to [0, 100]; lower is better.
    pub technical_debt_score: f64,
    pub average_function_length: f64,
    pub max_nesting_depth: u32,
}

/// Weighted risk score mapped to a discrete level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Clamped to [0, 100].
    pub score: u32,
}

/// Complete analysis output. Built once per call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub risk: RiskAssessment,
    pub metrics: CodeMetrics,
    pub recommendations: Vec<Recommendation>,
}

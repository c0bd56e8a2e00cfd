// Export modules for library usage
pub mod analysis;
pub mod analysis_utils;
pub mod assistant;
pub mod cli;
pub mod complexity;
pub mod core;
pub mod debt;
pub mod errors;
pub mod io;
pub mod metrics;
pub mod risk;

// Re-export commonly used types
pub use crate::analysis::analyze_source;
pub use crate::assistant::KnowledgeBase;
pub use crate::core::{
    AntiPattern, CodeMetrics, CodeSmell, Recommendation, Report, RiskAssessment, RiskLevel,
    Severity, SourceDocument,
};
pub use crate::errors::{ModmapError, ModmapResult};
pub use crate::io::output::{create_writer, report_to_json, OutputFormat, OutputWriter};

//! Textual detectors: anti-patterns, code smells, imports, version heuristic.

pub mod dependencies;
pub mod patterns;
pub mod smells;
pub mod version;

pub use dependencies::extract_dependencies;
pub use patterns::detect_anti_patterns;
pub use smells::detect_code_smells;
pub use version::detect_python_version;

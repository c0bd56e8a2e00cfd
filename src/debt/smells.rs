//! Code smell detectors.
//!
//! Smells are structural symptoms without an assigned severity. As with the
//! anti-pattern detectors, each is a pure function and the concatenation
//! order of `detect_code_smells` is part of the observable contract.

use crate::analysis_utils::{function_blocks, leading_indent_width};
use crate::core::{CodeSmell, SourceDocument};

const LONG_FUNCTION_THRESHOLD: usize = 50;
const LONG_LINE_THRESHOLD: usize = 120;
const DEEP_INDENT_THRESHOLD: usize = 20;
const COMMENTED_CODE_THRESHOLD: usize = 5;
const DEPENDENCY_THRESHOLD: usize = 15;

/// Run every smell detector in order: long functions, long lines, deep
/// nesting, commented-out code, dependency sprawl.
pub fn detect_code_smells(doc: &SourceDocument, dependencies: &[String]) -> Vec<CodeSmell> {
    let mut smells = Vec::new();
    smells.extend(detect_long_functions(doc.content()));
    smells.extend(detect_long_lines(doc.lines()));
    smells.extend(detect_deep_nesting(doc.lines()));
    smells.extend(detect_commented_code(doc.lines()));
    smells.extend(detect_dependency_sprawl(dependencies));
    smells
}

/// Functions whose indented body exceeds 50 lines.
pub fn detect_long_functions(content: &str) -> Vec<CodeSmell> {
    function_blocks(content)
        .into_iter()
        .filter(|block| block.body_lines > LONG_FUNCTION_THRESHOLD)
        .map(|block| CodeSmell {
            name: "Long Function".to_string(),
            location: format!("Function '{}'", block.name),
            description: format!(
                "Function is {} lines long (recommended: <{})",
                block.body_lines, LONG_FUNCTION_THRESHOLD
            ),
        })
        .collect()
}

/// Lines longer than 120 characters.
pub fn detect_long_lines(lines: &[&str]) -> Vec<CodeSmell> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.chars().count() > LONG_LINE_THRESHOLD)
        .map(|(idx, line)| CodeSmell {
            name: "Long Line".to_string(),
            location: format!("Line {}", idx + 1),
            description: format!(
                "Line is {} characters (PEP 8 recommends 79-120)",
                line.chars().count()
            ),
        })
        .collect()
}

/// Non-comment lines indented past 20 columns; depth is reported in 4-space
/// levels.
pub fn detect_deep_nesting(lines: &[&str]) -> Vec<CodeSmell> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty() && !line.trim().starts_with('#'))
        .filter(|(_, line)| leading_indent_width(line) > DEEP_INDENT_THRESHOLD)
        .map(|(idx, line)| CodeSmell {
            name: "Deep Nesting".to_string(),
            location: format!("Line {}", idx + 1),
            description: format!(
                "Code is nested {} levels deep",
                leading_indent_width(line) / 4
            ),
        })
        .collect()
}

/// More than five comment lines that look like disabled code, reported as one
/// aggregate finding.
pub fn detect_commented_code(lines: &[&str]) -> Option<CodeSmell> {
    let count = lines
        .iter()
        .filter(|line| line.trim().starts_with('#'))
        .filter(|line| line.chars().any(|c| "({[=;".contains(c)))
        .count();

    if count > COMMENTED_CODE_THRESHOLD {
        Some(CodeSmell {
            name: "Commented Code".to_string(),
            location: "Multiple locations".to_string(),
            description: format!("Found {count} lines of commented-out code"),
        })
    } else {
        None
    }
}

/// More than 15 distinct imported root modules.
pub fn detect_dependency_sprawl(dependencies: &[String]) -> Option<CodeSmell> {
    if dependencies.len() > DEPENDENCY_THRESHOLD {
        Some(CodeSmell {
            name: "Too Many Dependencies".to_string(),
            location: "Module level".to_string(),
            description: format!("Module imports {} different packages", dependencies.len()),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc_smells(content: &str) -> Vec<CodeSmell> {
        let doc = SourceDocument::new(content);
        detect_code_smells(&doc, &[])
    }

    #[test]
    fn long_function_names_the_function() {
        let mut content = String::from("def sprawling():\n");
        for i in 0..55 {
            content.push_str(&format!("    x{i} = {i}\n"));
        }
        content.push_str("def tiny():\n    pass\n");

        let smells = detect_long_functions(&content);
        assert_eq!(smells.len(), 1);
        assert_eq!(smells[0].location, "Function 'sprawling'");
        assert_eq!(
            smells[0].description,
            "Function is 55 lines long (recommended: <50)"
        );
    }

    #[test]
    fn long_line_reports_line_number_and_length() {
        let long = "x".repeat(121);
        let content = format!("short = 1\n{long}\n");
        let smells = doc_smells(&content);
        assert_eq!(smells.len(), 1);
        assert_eq!(smells[0].name, "Long Line");
        assert_eq!(smells[0].location, "Line 2");
        assert_eq!(
            smells[0].description,
            "Line is 121 characters (PEP 8 recommends 79-120)"
        );
    }

    #[test]
    fn boundary_line_of_120_chars_is_fine() {
        let content = "y".repeat(120);
        assert!(doc_smells(&content).is_empty());
    }

    #[test]
    fn deep_nesting_reports_levels() {
        let content = format!("{}x = 1\n", " ".repeat(24));
        let smells = doc_smells(&content);
        assert_eq!(smells.len(), 1);
        assert_eq!(smells[0].name, "Deep Nesting");
        assert_eq!(smells[0].location, "Line 1");
        assert_eq!(smells[0].description, "Code is nested 6 levels deep");
    }

    #[test]
    fn deeply_indented_comments_do_not_smell() {
        let content = format!("{}# just a note\n", " ".repeat(24));
        assert!(doc_smells(&content).is_empty());
    }

    #[test]
    fn commented_code_is_a_single_aggregate_finding() {
        let mut content = String::new();
        for i in 0..6 {
            content.push_str(&format!("# result = compute({i})\n"));
        }
        let smells = doc_smells(&content);
        assert_eq!(smells.len(), 1);
        assert_eq!(smells[0].name, "Commented Code");
        assert_eq!(smells[0].description, "Found 6 lines of commented-out code");
    }

    #[test]
    fn prose_comments_do_not_count_as_code() {
        let mut content = String::new();
        for _ in 0..10 {
            content.push_str("# plain prose without symbols\n");
        }
        assert!(doc_smells(&content).is_empty());
    }

    #[test]
    fn sixteen_dependencies_sprawl() {
        let deps: Vec<String> = (0..16).map(|i| format!("mod{i}")).collect();
        let smell = detect_dependency_sprawl(&deps).unwrap();
        assert_eq!(smell.location, "Module level");
        assert_eq!(smell.description, "Module imports 16 different packages");
        assert!(detect_dependency_sprawl(&deps[..15]).is_none());
    }
}

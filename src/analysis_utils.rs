//! Small pure helpers shared by the textual detectors and the aggregator.

use once_cell::sync::Lazy;
use regex::Regex;

static FUNCTION_DEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"def\s+(\w+)").unwrap());

/// 1-based line number of a byte offset into `content`.
pub fn line_number_of_offset(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

/// Width of the leading whitespace run, in characters.
pub fn leading_indent_width(line: &str) -> usize {
    line.chars().count() - line.trim_start().chars().count()
}

/// A function header together with the length of its indented body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBlock {
    pub name: String,
    pub body_lines: usize,
}

/// Locate every `def` header and measure its body with the legacy block
/// heuristic: the body runs from the line after the header up to the next
/// non-empty line whose first character is not whitespace. Blank lines inside
/// the run are counted. Fragile against multi-line headers, but the smell
/// thresholds and `average_function_length` are calibrated against exactly
/// this rule.
pub fn function_blocks(content: &str) -> Vec<FunctionBlock> {
    FUNCTION_DEF
        .captures_iter(content)
        .map(|caps| {
            let header = caps.get(0).expect("match has a full capture");
            let mut body_lines = 0;
            for line in content[header.start()..].split('\n').skip(1) {
                let starts_at_column_zero = line
                    .chars()
                    .next()
                    .is_some_and(|c| !c.is_whitespace());
                if starts_at_column_zero {
                    break;
                }
                body_lines += 1;
            }
            FunctionBlock {
                name: caps[1].to_string(),
                body_lines,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn offsets_map_to_lines() {
        let content = "a\nb\nc";
        assert_eq!(line_number_of_offset(content, 0), 1);
        assert_eq!(line_number_of_offset(content, 2), 2);
        assert_eq!(line_number_of_offset(content, 4), 3);
    }

    #[test]
    fn indent_width_counts_characters() {
        assert_eq!(leading_indent_width("    x"), 4);
        assert_eq!(leading_indent_width("\t\tx"), 2);
        assert_eq!(leading_indent_width("x"), 0);
    }

    #[test]
    fn body_ends_at_next_column_zero_line() {
        let blocks = function_blocks(indoc! {"
            def first():
                a = 1

                b = 2
            def second():
                pass
        "});
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "first");
        assert_eq!(blocks[0].body_lines, 3);
        assert_eq!(blocks[1].name, "second");
        // Trailing newline leaves one empty line after the body.
        assert_eq!(blocks[1].body_lines, 2);
    }

    #[test]
    fn no_functions_yields_empty() {
        assert!(function_blocks("x = 1\n").is_empty());
    }
}

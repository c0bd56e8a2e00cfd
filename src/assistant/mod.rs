//! Question answering over a report's textual content.
//!
//! This is deliberately simple lexical retrieval, not part of the analysis
//! core: the corpus line sharing the most words with the query wins, and the
//! answer wraps that line in a sentence template picked from the query's own
//! wording. The assistant only ever reads what the report already says.

use crate::core::Report;
use std::collections::HashSet;

pub const NO_INFORMATION: &str =
    "No information available for that question; try asking about the analysis findings.";

/// An ordered corpus of short knowledge lines.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    lines: Vec<String>,
}

impl KnowledgeBase {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Flatten a report into retrievable lines: a summary sentence, one line
    /// per finding, one per recommendation.
    pub fn from_report(report: &Report) -> Self {
        let m = &report.metrics;
        let mut lines = vec![
            format!(
                "The overall modernization risk is {} with a score of {} out of 100",
                report.risk.level, report.risk.score
            ),
            format!(
                "Cyclomatic complexity is {} and the maintainability index is {:.1}",
                m.cyclomatic_complexity, m.maintainability_index
            ),
            format!(
                "The code appears to be {} with a technical debt score of {:.1}",
                m.python_version, m.technical_debt_score
            ),
        ];
        for pattern in &m.anti_patterns {
            lines.push(format!("{}: {}", pattern.name, pattern.description));
        }
        for smell in &m.code_smells {
            lines.push(format!("{}: {}", smell.name, smell.description));
        }
        for rec in &report.recommendations {
            lines.push(format!("{}: {}", rec.action, rec.reason));
        }
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Answer a free-form question with the best-matching corpus line.
    ///
    /// Scoring is lowercase word-set intersection; ties go to the earlier
    /// line. Queries sharing no words with any line get the fixed
    /// no-information answer.
    pub fn answer(&self, query: &str) -> String {
        let query_lower = query.to_lowercase();
        let query_words = tokenize(&query_lower);

        let best = self
            .lines
            .iter()
            .map(|line| {
                let lower = line.to_lowercase();
                let words = tokenize(&lower);
                words.intersection(&query_words).count()
            })
            .enumerate()
            // max_by_key keeps the later of equal scores, so compare on
            // (score, reversed index) to make earlier lines win ties.
            .max_by_key(|&(idx, score)| (score, std::cmp::Reverse(idx)));

        match best {
            Some((idx, score)) if score > 0 => {
                let line = &self.lines[idx];
                if query_lower.contains("risk") {
                    format!("The main risk factor identified: {line}.")
                } else if query_lower.contains("modernize") {
                    format!("To modernize this code: {line}.")
                } else {
                    format!("From the analysis: {line}.")
                }
            }
            _ => NO_INFORMATION.to_string(),
        }
    }
}

fn tokenize(text: &str) -> HashSet<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn corpus() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            "eval can execute arbitrary code".to_string(),
            "Python 2 reached end of life".to_string(),
            "complexity makes code hard to test".to_string(),
        ])
    }

    #[test]
    fn empty_corpus_has_no_answer() {
        let kb = KnowledgeBase::default();
        assert_eq!(kb.answer("why is eval dangerous?"), NO_INFORMATION);
    }

    #[test]
    fn zero_overlap_has_no_answer() {
        assert_eq!(corpus().answer("what about the weather"), NO_INFORMATION);
    }

    #[test]
    fn best_overlap_wins() {
        let answer = corpus().answer("why is eval dangerous to execute?");
        assert_eq!(
            answer,
            "From the analysis: eval can execute arbitrary code."
        );
    }

    #[test]
    fn risk_queries_use_the_risk_template() {
        let answer = corpus().answer("what is the risk of eval?");
        assert!(answer.starts_with("The main risk factor identified:"));
    }

    #[test]
    fn modernize_queries_use_the_modernize_template() {
        let answer = corpus().answer("how do I modernize Python 2 code?");
        assert!(answer.starts_with("To modernize this code:"));
        assert!(answer.contains("Python 2"));
    }

    #[test]
    fn ties_break_toward_earlier_lines() {
        let kb = KnowledgeBase::new(vec![
            "alpha shared".to_string(),
            "beta shared".to_string(),
        ]);
        assert_eq!(kb.answer("shared?"), "From the analysis: alpha shared.");
    }

    #[test]
    fn tokenization_is_case_insensitive_and_punctuation_blind() {
        let kb = KnowledgeBase::new(vec!["EVAL, is: risky!".to_string()]);
        assert_eq!(kb.answer("eval"), "From the analysis: EVAL, is: risky!.");
    }

    #[test]
    fn report_corpus_answers_about_findings() {
        let report = crate::analysis::analyze_source("x = eval(\"1+1\")\n");
        let kb = KnowledgeBase::from_report(&report);
        let answer = kb.answer("why is eval usage dangerous?");
        assert!(answer.to_lowercase().contains("eval"));
    }
}

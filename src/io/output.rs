//! Report writers.

use crate::core::{Report, RiskLevel, Severity};
use crate::errors::ModmapResult;
use colored::*;
use serde_json::json;
use std::io::Write;

const FINDING_DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "terminal" => Ok(OutputFormat::Terminal),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> ModmapResult<()>;
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

/// Flatten a report into the serialized shape downstream consumers expect:
/// risk at the top level, findings pulled out of the metrics record, real
/// scores rounded to two decimals.
pub fn report_to_json(report: &Report) -> serde_json::Value {
    let m = &report.metrics;
    json!({
        "risk_level": report.risk.level,
        "risk_score": report.risk.score,
        "metrics": {
            "lines_of_code": m.lines_of_code,
            "code_lines": m.code_lines,
            "comment_lines": m.comment_lines,
            "blank_lines": m.blank_lines,
            "cyclomatic_complexity": m.cyclomatic_complexity,
            "class_count": m.class_count,
            "function_count": m.function_count,
            "maintainability_index": round2(m.maintainability_index),
            "technical_debt_score": round2(m.technical_debt_score),
            "average_function_length": round2(m.average_function_length),
            "max_nesting_depth": m.max_nesting_depth,
            "python_version": m.python_version,
            "dependencies": m.dependencies,
        },
        "anti_patterns": m.anti_patterns.iter().map(|ap| json!({
            "name": ap.name,
            "severity": ap.severity,
            "description": ap.description,
            "line": ap.line_number,
        })).collect::<Vec<_>>(),
        "code_smells": m.code_smells,
        "recommendations": report.recommendations,
    })
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> ModmapResult<()> {
        let json = serde_json::to_string_pretty(&report_to_json(report))?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn risk_banner(level: RiskLevel) -> ColoredString {
        match level {
            RiskLevel::Low => "LOW".green().bold(),
            RiskLevel::Medium => "MEDIUM".yellow().bold(),
            RiskLevel::High => "HIGH".truecolor(255, 165, 0).bold(),
            RiskLevel::Critical => "CRITICAL".red().bold(),
        }
    }

    fn severity_tag(severity: Severity) -> ColoredString {
        match severity {
            Severity::Low => "low".normal(),
            Severity::Medium => "medium".yellow(),
            Severity::High => "high".truecolor(255, 165, 0),
            Severity::Critical => "critical".red(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> ModmapResult<()> {
        let w = &mut self.writer;
        let m = &report.metrics;

        writeln!(w, "\n{}", "=".repeat(80))?;
        writeln!(w, "CODE MODERNIZATION ANALYSIS REPORT")?;
        writeln!(w, "{}", "=".repeat(80))?;

        writeln!(w, "\nRISK LEVEL: {}", Self::risk_banner(report.risk.level))?;
        writeln!(w, "   Risk Score: {}/100", report.risk.score)?;

        writeln!(w, "\nMETRICS SUMMARY")?;
        writeln!(w, "{}", "-".repeat(80))?;
        writeln!(w, "  Lines of Code:          {}", m.lines_of_code)?;
        writeln!(w, "  Code Lines:             {}", m.code_lines)?;
        writeln!(w, "  Comment Lines:          {}", m.comment_lines)?;
        writeln!(w, "  Cyclomatic Complexity:  {}", m.cyclomatic_complexity)?;
        writeln!(
            w,
            "  Maintainability Index:  {:.2}/100",
            m.maintainability_index
        )?;
        writeln!(
            w,
            "  Technical Debt Score:   {:.2}/100",
            m.technical_debt_score
        )?;
        writeln!(w, "  Python Version:         {}", m.python_version)?;
        writeln!(w, "  Classes:                {}", m.class_count)?;
        writeln!(w, "  Functions:              {}", m.function_count)?;
        writeln!(
            w,
            "  Avg Function Length:    {:.1} lines",
            m.average_function_length
        )?;
        writeln!(w, "  Max Nesting Depth:      {}", m.max_nesting_depth)?;
        writeln!(w, "  Dependencies:           {}", m.dependencies.len())?;

        if !m.anti_patterns.is_empty() {
            writeln!(w, "\nANTI-PATTERNS DETECTED")?;
            writeln!(w, "{}", "-".repeat(80))?;
            for ap in m.anti_patterns.iter().take(FINDING_DISPLAY_LIMIT) {
                writeln!(
                    w,
                    "  [{}] {} (Line {})",
                    Self::severity_tag(ap.severity),
                    ap.name,
                    ap.line_number
                )?;
                writeln!(w, "     {}", ap.description)?;
            }
        }

        if !m.code_smells.is_empty() {
            writeln!(w, "\nCODE SMELLS DETECTED")?;
            writeln!(w, "{}", "-".repeat(80))?;
            for smell in m.code_smells.iter().take(FINDING_DISPLAY_LIMIT) {
                writeln!(w, "  * {} - {}", smell.name, smell.location)?;
                writeln!(w, "    {}", smell.description)?;
            }
        }

        if !report.recommendations.is_empty() {
            writeln!(w, "\nMODERNIZATION RECOMMENDATIONS")?;
            writeln!(w, "{}", "-".repeat(80))?;
            for (idx, rec) in report.recommendations.iter().enumerate() {
                writeln!(
                    w,
                    "  {}. [{}] {}",
                    idx + 1,
                    Self::severity_tag(rec.priority),
                    rec.action
                )?;
                writeln!(w, "     {}", rec.reason)?;
            }
        }

        writeln!(w, "\n{}\n", "=".repeat(80))?;
        Ok(())
    }
}

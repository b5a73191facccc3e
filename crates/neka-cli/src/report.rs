//! Evaluation report rendering
//!
//! The report is authored as Markdown and can be converted to a standalone
//! HTML page. Files are named after the script title and saved to the
//! requested directory, the user's Downloads folder, or the current
//! directory, in that order of preference.

use chrono::{DateTime, Local};
use pulldown_cmark::{Options, Parser, html};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

use neka_core::{Error, Metric, MetricsBundle, Recommendation, Result, ScoreBreakdown};

use crate::analyzer::QualitativeReport;

/// Supported report file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Html,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Html => "html",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            "html" => Ok(ReportFormat::Html),
            _ => Err(Error::InvalidInput(format!(
                "Unknown report format '{}'. Valid formats: md, html",
                s
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything the report shows about one evaluation
pub struct EvaluationReport<'a> {
    pub title: &'a str,
    pub metrics: &'a MetricsBundle,
    pub breakdown: &'a ScoreBreakdown,
    pub qualitative: &'a QualitativeReport,
    pub generated_at: DateTime<Local>,
}

impl<'a> EvaluationReport<'a> {
    pub fn new(
        title: &'a str,
        metrics: &'a MetricsBundle,
        breakdown: &'a ScoreBreakdown,
        qualitative: &'a QualitativeReport,
    ) -> Self {
        Self {
            title,
            metrics,
            breakdown,
            qualitative,
            generated_at: Local::now(),
        }
    }

    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Markdown => self.render_markdown(),
            ReportFormat::Html => self.render_html(),
        }
    }

    pub fn render_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&self.render_header());
        md.push('\n');
        md.push_str(&self.render_overall());
        md.push('\n');
        md.push_str(&self.render_tier_one());
        md.push_str(&self.render_tier_two());

        md
    }

    pub fn render_html(&self) -> String {
        let markdown = self.render_markdown();
        let parser = Parser::new_ext(&markdown, Options::ENABLE_TABLES);
        let mut body = String::new();
        html::push_html(&mut body, parser);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - NEKA Evaluation</title>
    <style>
{CSS}
    </style>
</head>
<body>
<div class="container">
{}</div>
</body>
</html>
"#,
            html_escape(self.title),
            body
        )
    }

    fn render_header(&self) -> String {
        format!(
            r#"# NEKA Script Evaluation Report

## Script Information

- **Title:** {}
- **Page Count:** {:.1} pages
- **Scene Count:** {} scenes
- **Generated:** {}
"#,
            self.title,
            self.metrics.page_count,
            self.metrics.scene_count(),
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )
    }

    fn render_overall(&self) -> String {
        let recommendation = Recommendation::from_score(self.breakdown.final_score);
        let marker = match recommendation {
            Recommendation::Recommend => "🟢",
            Recommendation::Consider => "🟠",
            Recommendation::Pass => "🔴",
        };

        format!(
            r#"## OVERALL SCORE: {:.1}/100

**Recommendation: {} {}**

Objective metrics contribute {:.1} points, qualitative analysis {:.1} points.
"#,
            self.breakdown.final_score,
            marker,
            recommendation,
            self.breakdown.objective,
            self.breakdown.qualitative
        )
    }

    fn render_tier_one(&self) -> String {
        let m = self.metrics;
        let mut md = String::from("## TIER 1: QUANTIFIABLE METRICS (70% weight)\n\n");

        md.push_str(&metric_heading(1, &m.format));
        push_bullets(&mut md, &m.format.issues);

        md.push_str(&metric_heading(2, &m.grammar));
        if m.grammar.issues.is_empty() {
            md.push_str("- No major issues detected\n\n");
        } else {
            push_bullets(&mut md, &m.grammar.issues);
        }

        md.push_str(&metric_heading(3, &m.dialogue));
        md.push_str(&format!(
            "Dialogue comprises {:.1}% of the script (Ideal: 35-45%)\n\n",
            m.dialogue.ratio
        ));
        push_bullets(&mut md, &m.dialogue.feedback);

        md.push_str(&metric_heading(4, &m.scenes));
        md.push_str(&format!(
            "Average scene length: {:.1} pages (Ideal: 1.5-3 pages)\n\n",
            m.scenes.avg_length
        ));
        push_bullets(&mut md, &m.scenes.feedback);

        md.push_str(&metric_heading(5, &m.whitespace));
        md.push_str(&format!(
            "White space ratio: {:.1}% (Ideal: 40-60%)\n\n",
            m.whitespace.ratio
        ));
        push_bullets(&mut md, &m.whitespace.feedback);

        md
    }

    fn render_tier_two(&self) -> String {
        let scores = &self.qualitative.scores;
        let source = if self.qualitative.scores_parsed {
            "Scores read from the analysis below."
        } else {
            "Default scores used, the analysis did not provide all three."
        };

        format!(
            r#"## TIER 2: QUALITATIVE ANALYSIS (30% weight)

| Category | Score |
|----------|-------|
| Character Development | {:.1}/10 |
| Dialogue Quality | {:.1}/10 |
| Story Concept & Originality | {:.1}/10 |

{}

{}
"#,
            scores.character,
            scores.dialogue,
            scores.originality,
            source,
            self.qualitative.narrative.trim()
        )
    }
}

fn metric_heading(index: usize, metric: &dyn Metric) -> String {
    format!("### {}. {}: {:.1}/100\n\n", index, metric.name(), metric.score())
}

fn push_bullets(md: &mut String, items: &[String]) {
    if items.is_empty() {
        return;
    }
    for item in items {
        md.push_str(&format!("- {}\n", item));
    }
    md.push('\n');
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `{Title_With_Underscores}_Evaluation.{ext}`
pub fn report_file_name(title: &str, format: ReportFormat) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    let stem = if stem.is_empty() { "Untitled_Script" } else { &stem };
    format!("{}_Evaluation.{}", stem, format.extension())
}

/// The user's Downloads folder, if the platform has one
pub fn default_report_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
}

/// Write a rendered report and return where it landed
///
/// An explicit `output_dir` must be writable. Without one the Downloads
/// folder is tried first and the current directory second.
pub fn write_report(
    contents: &str,
    title: &str,
    format: ReportFormat,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let file_name = report_file_name(title, format);

    if let Some(dir) = output_dir {
        return write_into(dir, &file_name, contents);
    }

    write_with_fallback(
        contents,
        &file_name,
        default_report_dir().as_deref(),
        Path::new("."),
    )
}

/// Write into `preferred` when that directory already exists, else `fallback`
fn write_with_fallback(
    contents: &str,
    file_name: &str,
    preferred: Option<&Path>,
    fallback: &Path,
) -> Result<PathBuf> {
    if let Some(dir) = preferred.filter(|dir| dir.is_dir()) {
        match write_file(dir, file_name, contents) {
            Ok(path) => return Ok(path),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "cannot write report, using fallback")
            }
        }
    }

    write_into(fallback, file_name, contents)
}

fn write_into(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    write_file(dir, file_name, contents)
}

fn write_file(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    info!(path = %path.display(), "report written");
    Ok(path)
}

const CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    background: #f8fafc;
    color: #1e293b;
    line-height: 1.6;
}

.container {
    max-width: 860px;
    margin: 2rem auto;
    padding: 2rem 3rem;
    background: white;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
}

h1 { text-align: center; }
h2 { border-bottom: 1px solid #e2e8f0; padding-bottom: 0.3rem; }

table { border-collapse: collapse; }
th, td { border: 1px solid #e2e8f0; padding: 0.4rem 0.8rem; }
"#;

//! File ingestion, qualitative analysis, reporting and terminal UI for NEKA

pub mod analyzer;
pub mod reader;
pub mod report;
pub mod summary;
pub mod ui;


pub use analyzer::{QualitativeAnalyzer, QualitativeReport, build_prompt, parse_scores};
pub use reader::{ScriptFormat, read_script_file};
pub use report::{EvaluationReport, ReportFormat, default_report_dir, write_report};
pub use summary::{ErrorSummary, EvaluationSummary, MetricScores};
pub use ui::display_banner;

// Re-export core types
pub use neka_core::{Error, Result};

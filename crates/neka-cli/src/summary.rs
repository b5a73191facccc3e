//! Machine-readable evaluation summary

use serde::{Deserialize, Serialize};

use neka_core::{Error, MetricsBundle, Recommendation, Result, ScoreBreakdown};

use crate::analyzer::QualitativeReport;

/// The five objective sub-scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricScores {
    pub format: f64,
    pub grammar: f64,
    pub dialogue: f64,
    pub scenes: f64,
    pub whitespace: f64,
}

impl From<&MetricsBundle> for MetricScores {
    fn from(bundle: &MetricsBundle) -> Self {
        Self {
            format: bundle.format.score,
            grammar: bundle.grammar.score,
            dialogue: bundle.dialogue.score,
            scenes: bundle.scenes.score,
            whitespace: bundle.whitespace.score,
        }
    }
}

/// JSON payload printed by `neka --json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSummary {
    pub success: bool,
    pub final_score: f64,
    pub recommendation: Recommendation,
    pub metrics: MetricScores,
    pub ai_analysis: String,
    pub page_count: f64,
    pub scene_count: usize,
    pub report_generated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
}

impl EvaluationSummary {
    pub fn new(
        metrics: &MetricsBundle,
        breakdown: &ScoreBreakdown,
        qualitative: &QualitativeReport,
    ) -> Self {
        Self {
            success: true,
            final_score: breakdown.final_score,
            recommendation: breakdown.recommendation(),
            metrics: MetricScores::from(metrics),
            ai_analysis: qualitative.narrative.clone(),
            page_count: metrics.page_count,
            scene_count: metrics.scene_count(),
            report_generated: false,
            report_path: None,
        }
    }

    pub fn with_report_path(mut self, path: impl Into<String>) -> Self {
        self.report_generated = true;
        self.report_path = Some(path.into());
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }
}

/// JSON payload printed when the evaluation fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorSummary {
    pub error: String,
}

impl ErrorSummary {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({ "error": self.error }).to_string()
    }
}

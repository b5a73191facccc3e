//! Final score aggregation
//!
//! ```text
//! objective   = (format×0.15 + grammar×0.10 + dialogue×0.10 + scenes×0.10 + whitespace×0.05) × 0.70
//! qualitative = (character×10×0.15 + dialogue_quality×10×0.10 + originality×10×0.05) × 0.30
//! final       = objective + qualitative
//! ```
//!
//! The inner weights sum to 0.50 and 0.30 rather than 1.0, so the nominal
//! 70/30 split is not what the arithmetic produces: with every input at its
//! maximum the final score is 35 + 9 = 44.

use serde::{Deserialize, Serialize};

use crate::metrics::MetricsBundle;
use crate::types::{QualitativeScores, Recommendation};

/// Weight table for the aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub format: f64,
    pub grammar: f64,
    pub dialogue: f64,
    pub scenes: f64,
    pub whitespace: f64,
    pub objective_share: f64,
    pub character: f64,
    pub dialogue_quality: f64,
    pub originality: f64,
    pub qualitative_share: f64,
    /// Converts a 0-10 qualitative score to the 0-100 scale
    pub qualitative_scale: f64,
}

pub const WEIGHTS: Weights = Weights {
    format: 0.15,
    grammar: 0.10,
    dialogue: 0.10,
    scenes: 0.10,
    whitespace: 0.05,
    objective_share: 0.70,
    character: 0.15,
    dialogue_quality: 0.10,
    originality: 0.05,
    qualitative_share: 0.30,
    qualitative_scale: 10.0,
};

/// Objective and qualitative contributions to the final score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub objective: f64,
    pub qualitative: f64,
    pub final_score: f64,
}

impl ScoreBreakdown {
    pub fn compute(metrics: &MetricsBundle, ai_scores: &QualitativeScores) -> Self {
        let w = &WEIGHTS;

        let objective = (metrics.format.score * w.format
            + metrics.grammar.score * w.grammar
            + metrics.dialogue.score * w.dialogue
            + metrics.scenes.score * w.scenes
            + metrics.whitespace.score * w.whitespace)
            * w.objective_share;

        let character_score = ai_scores.character * w.qualitative_scale;
        let dialogue_quality_score = ai_scores.dialogue * w.qualitative_scale;
        let originality_score = ai_scores.originality * w.qualitative_scale;

        let qualitative = (character_score * w.character
            + dialogue_quality_score * w.dialogue_quality
            + originality_score * w.originality)
            * w.qualitative_share;

        Self {
            objective,
            qualitative,
            final_score: objective + qualitative,
        }
    }

    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_score(self.final_score)
    }
}

/// Weighted final score in `[0, 100]` for qualitative inputs in `[0, 10]`
pub fn aggregate(metrics: &MetricsBundle, ai_scores: &QualitativeScores) -> f64 {
    ScoreBreakdown::compute(metrics, ai_scores).final_score
}

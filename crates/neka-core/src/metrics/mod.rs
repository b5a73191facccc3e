//! Quantitative screenplay metrics
//!
//! Five independent calculators, each a pure function of [`ScriptText`]
//! returning a score in `[0, 100]` plus human-readable feedback. Degenerate
//! inputs (no words, no lines, no scenes) produce defined defaults instead of
//! errors.

mod dialogue;
mod format;
mod grammar;
mod scenes;
mod whitespace;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, ScriptText};

pub use dialogue::{DialogueBalance, DialogueResult, analyze_dialogue_ratio};
pub use format::{FormatResult, check_format_compliance};
pub use grammar::{GrammarResult, check_grammar_spelling};
pub use scenes::{SceneResult, ScenePacing, analyze_scene_structure};
pub use whitespace::{WhitespaceBand, WhitespaceResult, analyze_white_space};

/// Common view over the five metric results
pub trait Metric {
    /// Display name used in reports
    fn name(&self) -> &'static str;

    /// Sub-score in `[0, 100]`
    fn score(&self) -> f64;

    /// Issues or feedback lines; an empty list means nothing to report
    fn feedback(&self) -> &[String];
}

/// All five metric results plus the estimated page count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsBundle {
    pub format: FormatResult,
    pub grammar: GrammarResult,
    pub dialogue: DialogueResult,
    pub scenes: SceneResult,
    pub whitespace: WhitespaceResult,
    pub page_count: f64,
}

impl MetricsBundle {
    /// The five metrics in report order
    pub fn metrics(&self) -> [&dyn Metric; 5] {
        [
            &self.format,
            &self.grammar,
            &self.dialogue,
            &self.scenes,
            &self.whitespace,
        ]
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.count
    }
}

/// Run every calculator over the script
pub fn compute_metrics(script: &ScriptText) -> MetricsBundle {
    MetricsBundle {
        format: check_format_compliance(script),
        grammar: check_grammar_spelling(script),
        dialogue: analyze_dialogue_ratio(script),
        scenes: analyze_scene_structure(script),
        whitespace: analyze_white_space(script),
        page_count: script.page_count(),
    }
}

/// Validate raw text and compute its metrics
pub fn evaluate_text(text: &str) -> Result<MetricsBundle> {
    let script = ScriptText::parse(text).map_err(|_| {
        Error::InvalidInput("cannot compute metrics for an empty script".to_string())
    })?;
    Ok(compute_metrics(&script))
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

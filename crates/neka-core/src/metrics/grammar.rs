//! Grammar and spelling heuristics

use serde::{Deserialize, Serialize};

use super::Metric;
use crate::ScriptText;
use crate::patterns;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarResult {
    pub score: f64,
    pub issues: Vec<String>,
    pub total_words: usize,
    pub errors: usize,
}

impl Metric for GrammarResult {
    fn name(&self) -> &'static str {
        "Grammar & Spelling"
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn feedback(&self) -> &[String] {
        &self.issues
    }
}

/// Count surface-level errors against the total word count
pub fn check_grammar_spelling(script: &ScriptText) -> GrammarResult {
    let text = script.as_str();
    let total_words = script.word_count();

    let mut errors = 0;
    let mut issues = Vec::new();

    let double_spaces = patterns::count_double_spaces(text);
    errors += double_spaces;
    if double_spaces > 0 {
        issues.push(format!("{} instances of double spacing", double_spaces));
    }

    let missing_periods = patterns::count_missing_periods(text);
    errors += missing_periods;
    if missing_periods > 0 {
        issues.push(format!("{} potential missing periods", missing_periods));
    }

    for (word, count) in patterns::count_misspellings(text) {
        if count > 0 {
            errors += count;
            issues.push(format!("'{}' appears {} time(s)", word, count));
        }
    }

    let score = if total_words > 0 {
        ((total_words as f64 - errors as f64) / total_words as f64 * 100.0).max(0.0)
    } else {
        0.0
    };

    GrammarResult {
        score,
        issues,
        total_words,
        errors,
    }
}

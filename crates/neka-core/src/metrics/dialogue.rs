//! Dialogue versus action balance

use serde::{Deserialize, Serialize};

use super::{Metric, percentage};
use crate::ScriptText;
use crate::patterns::{is_blank, is_character_cue, is_scene_heading};

/// Dialogue share the score is centred on
pub const IDEAL_DIALOGUE_RATIO: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueBalance {
    /// Under 30% dialogue
    ActionHeavy,
    Balanced,
    /// Over 50% dialogue
    DialogueHeavy,
}

impl DialogueBalance {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 30.0 {
            Self::ActionHeavy
        } else if ratio > 50.0 {
            Self::DialogueHeavy
        } else {
            Self::Balanced
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::ActionHeavy => "Script is action-heavy (less than 30% dialogue)",
            Self::DialogueHeavy => "Script is dialogue-heavy (more than 50% dialogue)",
            Self::Balanced => "Dialogue-to-action ratio is well-balanced (30-50%)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueResult {
    pub score: f64,
    /// Dialogue words as a percentage of all words
    pub ratio: f64,
    pub balance: DialogueBalance,
    pub feedback: Vec<String>,
    pub dialogue_words: usize,
    pub total_words: usize,
}

impl Metric for DialogueResult {
    fn name(&self) -> &'static str {
        "Dialogue Balance"
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn feedback(&self) -> &[String] {
        &self.feedback
    }
}

/// Count the words spoken under character cues
///
/// A cue line opens a dialogue block and is not itself counted. The block
/// ends at the first blank line, scene heading or further cue; the line that
/// ends it is not counted either. A cue that ends a block opens the next one.
pub fn count_dialogue_words(script: &ScriptText) -> usize {
    let mut dialogue_words = 0;
    let mut reading_dialogue = false;

    for line in script.lines() {
        if is_character_cue(line) {
            reading_dialogue = true;
            continue;
        }
        if reading_dialogue {
            if is_blank(line) || is_scene_heading(line) {
                reading_dialogue = false;
            } else {
                dialogue_words += line.split_whitespace().count();
            }
        }
    }

    dialogue_words
}

pub fn analyze_dialogue_ratio(script: &ScriptText) -> DialogueResult {
    let dialogue_words = count_dialogue_words(script);
    let total_words = script.word_count();
    let ratio = percentage(dialogue_words, total_words);

    let balance = DialogueBalance::from_ratio(ratio);
    let deviation = (ratio - IDEAL_DIALOGUE_RATIO).abs();
    let score = (100.0 - deviation * 2.0).max(0.0);

    DialogueResult {
        score,
        ratio,
        balance,
        feedback: vec![balance.message().to_string()],
        dialogue_words,
        total_words,
    }
}

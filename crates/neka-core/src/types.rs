//! Common types used across the NEKA evaluation system

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Configuration for retry behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_timeout: Duration,
    /// Added to the timeout on every further attempt
    pub timeout_step: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_timeout: Duration::from_secs(60),
            timeout_step: Duration::from_secs(15),
        }
    }
}

/// Qualitative sub-scores from the narrative analysis, nominally 1-10 each
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualitativeScores {
    pub character: f64,
    pub dialogue: f64,
    pub originality: f64,
}

impl QualitativeScores {
    /// Used whenever no scores could be read back from the analysis
    pub const FALLBACK: Self = Self {
        character: 7.0,
        dialogue: 7.0,
        originality: 7.0,
    };

    pub fn new(character: f64, dialogue: f64, originality: f64) -> Self {
        Self {
            character,
            dialogue,
            originality,
        }
    }
}

impl Default for QualitativeScores {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Coverage verdict derived from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Recommend,
    Consider,
    Pass,
}

impl Recommendation {
    pub fn from_score(final_score: f64) -> Self {
        if final_score >= 80.0 {
            Self::Recommend
        } else if final_score >= 60.0 {
            Self::Consider
        } else {
            Self::Pass
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recommend => "RECOMMEND",
            Self::Consider => "CONSIDER",
            Self::Pass => "PASS",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

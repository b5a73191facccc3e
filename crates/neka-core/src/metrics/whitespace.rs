//! White space density as a readability proxy

use serde::{Deserialize, Serialize};

use super::{Metric, percentage};
use crate::ScriptText;
use crate::patterns::is_blank;

/// Readability band for the blank-line ratio.
///
/// The boundaries belong to [`WhitespaceBand::Balanced`]: exactly 35% and
/// exactly 65% are both well-balanced. Dense pages are scored lower than
/// sparse ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhitespaceBand {
    Dense,
    Balanced,
    Sparse,
}

impl WhitespaceBand {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 35.0 {
            Self::Dense
        } else if ratio > 65.0 {
            Self::Sparse
        } else {
            Self::Balanced
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            Self::Dense => 60.0,
            Self::Sparse => 70.0,
            Self::Balanced => 100.0,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Dense => "Script is dense with text (may be hard to read)",
            Self::Sparse => "Script has too much white space (may waste pages)",
            Self::Balanced => "White space is well-balanced (easy to read)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhitespaceResult {
    pub score: f64,
    /// Blank lines as a percentage of all lines
    pub ratio: f64,
    pub band: WhitespaceBand,
    pub feedback: Vec<String>,
    pub blank_lines: usize,
    pub total_lines: usize,
}

impl Metric for WhitespaceResult {
    fn name(&self) -> &'static str {
        "Readability (White Space)"
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn feedback(&self) -> &[String] {
        &self.feedback
    }
}

pub fn analyze_white_space(script: &ScriptText) -> WhitespaceResult {
    let total_lines = script.line_count();
    let blank_lines = script.lines().filter(|line| is_blank(line)).count();
    let ratio = percentage(blank_lines, total_lines);
    let band = WhitespaceBand::from_ratio(ratio);

    WhitespaceResult {
        score: band.score(),
        ratio,
        band,
        feedback: vec![band.message().to_string()],
        blank_lines,
        total_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_balanced() {
        assert_eq!(WhitespaceBand::from_ratio(35.0), WhitespaceBand::Balanced);
        assert_eq!(WhitespaceBand::from_ratio(65.0), WhitespaceBand::Balanced);
        assert_eq!(WhitespaceBand::from_ratio(34.99), WhitespaceBand::Dense);
        assert_eq!(WhitespaceBand::from_ratio(65.01), WhitespaceBand::Sparse);
    }

    #[test]
    fn test_all_blank_lines_are_sparse() {
        let result = analyze_white_space(&ScriptText::new("\n".repeat(9)));
        assert_eq!(result.total_lines, 10);
        assert_eq!(result.blank_lines, 10);
        assert_eq!(result.ratio, 100.0);
        assert_eq!(result.score, 70.0);
        assert_eq!(result.feedback, vec!["Script has too much white space (may waste pages)"]);
    }

    #[test]
    fn test_dense_text() {
        let result = analyze_white_space(&ScriptText::new("one\ntwo\nthree\nfour"));
        assert_eq!(result.ratio, 0.0);
        assert_eq!(result.band, WhitespaceBand::Dense);
        assert_eq!(result.score, 60.0);
    }

    #[test]
    fn test_whitespace_only_lines_count_as_blank() {
        let result = analyze_white_space(&ScriptText::new("one\n   \n\t\ntwo"));
        assert_eq!(result.blank_lines, 2);
        assert_eq!(result.ratio, 50.0);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_exact_boundaries_from_text() {
        // 7 of 20 lines blank
        let mut lines = vec!["x"; 13];
        lines.extend(vec![""; 7]);
        let result = analyze_white_space(&ScriptText::new(lines.join("\n")));
        assert_eq!(result.ratio, 35.0);
        assert_eq!(result.score, 100.0);

        // 13 of 20 lines blank
        let mut lines = vec!["x"; 7];
        lines.extend(vec![""; 13]);
        let result = analyze_white_space(&ScriptText::new(lines.join("\n")));
        assert_eq!(result.ratio, 65.0);
        assert_eq!(result.score, 100.0);
    }
}

//! Format compliance: scene headings, character cues, present tense

use serde::{Deserialize, Serialize};

use super::{Metric, percentage};
use crate::ScriptText;
use crate::patterns;

/// Past-tense hits tolerated before the present-tense check fails
pub const PAST_TENSE_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatResult {
    pub score: f64,
    pub issues: Vec<String>,
    pub proper_headings: usize,
    pub improper_headings: usize,
    pub character_cues: usize,
    pub past_tense_verbs: usize,
    pub total_checks: usize,
    pub passed_checks: usize,
}

impl Metric for FormatResult {
    fn name(&self) -> &'static str {
        "Format Compliance"
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn feedback(&self) -> &[String] {
        &self.issues
    }
}

/// Check screenplay format adherence
///
/// Every proper heading and character cue is a passed check, every improper
/// heading a failed one. One extra check passes while past-tense verbs stay
/// under [`PAST_TENSE_LIMIT`].
pub fn check_format_compliance(script: &ScriptText) -> FormatResult {
    let text = script.as_str();
    let mut issues = Vec::new();

    let proper_headings = patterns::count_proper_headings(text);
    let improper_headings = patterns::count_improper_headings(text);
    let character_cues = patterns::count_character_cues(script.lines());
    let past_tense_verbs = patterns::count_past_tense_verbs(text);

    let mut total_checks = proper_headings + improper_headings + character_cues;
    let mut passed_checks = proper_headings + character_cues;

    if improper_headings > 0 {
        issues.push(format!(
            "Found {} improperly formatted scene headings (should be INT. or EXT. in caps)",
            improper_headings
        ));
    }

    total_checks += 1;
    if past_tense_verbs < PAST_TENSE_LIMIT {
        passed_checks += 1;
    } else {
        issues.push(format!(
            "Found {} potential past-tense verbs (should use present tense)",
            past_tense_verbs
        ));
    }

    FormatResult {
        score: percentage(passed_checks, total_checks),
        issues,
        proper_headings,
        improper_headings,
        character_cues,
        past_tense_verbs,
        total_checks,
        passed_checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_action_passes_tense_check() {
        let result = check_format_compliance(&ScriptText::new("She opens the door.\n"));
        assert_eq!(result.total_checks, 1);
        assert_eq!(result.passed_checks, 1);
        assert_eq!(result.score, 100.0);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_uppercase_heading_is_counted_twice() {
        let result = check_format_compliance(&ScriptText::new("INT. HOUSE - DAY\nJohn walked in.\n"));
        assert_eq!(result.proper_headings, 1);
        assert_eq!(result.improper_headings, 1);
        assert_eq!(result.past_tense_verbs, 1);
        assert_eq!(result.total_checks, 3);
        assert_eq!(result.passed_checks, 2);
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_lowercase_heading_reported() {
        let result = check_format_compliance(&ScriptText::new("int. house - day\nExterior garden\n"));
        assert_eq!(result.proper_headings, 0);
        assert_eq!(result.improper_headings, 2);
        assert_eq!(result.total_checks, 3);
        assert_eq!(result.passed_checks, 1);
        assert_eq!(
            result.issues,
            vec!["Found 2 improperly formatted scene headings (should be INT. or EXT. in caps)"]
        );
    }

    #[test]
    fn test_character_cues_count_as_passed() {
        let text = "                    ANNA\nHello.\n                    BEN\nHi.\n";
        let result = check_format_compliance(&ScriptText::new(text));
        assert_eq!(result.character_cues, 2);
        assert_eq!(result.total_checks, 3);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_tense_check_fails_at_limit() {
        let text = "He walked. ".repeat(PAST_TENSE_LIMIT);
        let result = check_format_compliance(&ScriptText::new(text));
        assert_eq!(result.past_tense_verbs, 10);
        assert_eq!(result.score, 0.0);
        assert_eq!(
            result.issues,
            vec!["Found 10 potential past-tense verbs (should use present tense)"]
        );

        let text = "He walked. ".repeat(PAST_TENSE_LIMIT - 1);
        assert_eq!(check_format_compliance(&ScriptText::new(text)).score, 100.0);
    }
}

//! Screenplay convention detectors
//!
//! Every detector is a pure predicate or counter over a single line or the
//! whole manuscript. Anchoring and case sensitivity differ per detector and
//! are part of the contract:
//!
//! | Detector | Pattern | Scope |
//! |----------|---------|-------|
//! | proper heading | `^(INT\.\|EXT\.)` | line start, case-sensitive |
//! | improper heading | `^(int\.\|ext\.\|Interior\|Exterior)` | line start, case-insensitive |
//! | scene line | `^(INT\.\|EXT\.)[^\n]+` | heading with text after it |
//! | character cue | `^\s{10,30}[A-Z\s]+$` | one line, trailing whitespace stripped |
//! | past tense | fixed verb list | whole word, case-insensitive |
//! | double space | `  +` | anywhere |
//! | missing period | `[a-z]\n[A-Z]` | across a line break |
//! | misspelling | fixed word list | whole word, case-insensitive |

use once_cell::sync::Lazy;
use regex::Regex;

/// Verbs that usually signal past-tense action lines
pub const PAST_TENSE_VERBS: &[&str] = &[
    "walked", "talked", "ran", "said", "went", "came", "saw", "looked",
];

/// Misspellings common enough to be worth flagging
pub const COMMON_MISSPELLINGS: &[&str] = &["teh", "recieve", "occured", "seperate", "definately"];

static PROPER_HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(INT\.|EXT\.)").unwrap());

static IMPROPER_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mi)^(int\.|ext\.|Interior|Exterior)").unwrap());

static SCENE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(INT\.|EXT\.)[^\n]+").unwrap());

static HEADING_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(INT\.|EXT\.)").unwrap());

static CHARACTER_CUE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s{10,30}[A-Z\s]+$").unwrap());

static PAST_TENSE_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"(?i)\b({})\b", PAST_TENSE_VERBS.join("|"));
    Regex::new(&pattern).unwrap()
});

static DOUBLE_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"  +").unwrap());

static MISSING_PERIOD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]\n[A-Z]").unwrap());

static MISSPELLING_RES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    COMMON_MISSPELLINGS
        .iter()
        .map(|word| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))).unwrap();
            (*word, re)
        })
        .collect()
});

/// Lines that open with an uppercase `INT.` or `EXT.`
pub fn count_proper_headings(text: &str) -> usize {
    PROPER_HEADING_RE.find_iter(text).count()
}

/// Lines that open with `int.`, `ext.`, `Interior` or `Exterior` in any case.
///
/// This overlaps with [`count_proper_headings`]: an `INT.` heading is counted
/// by both.
pub fn count_improper_headings(text: &str) -> usize {
    IMPROPER_HEADING_RE.find_iter(text).count()
}

/// Scene headings that carry text after the `INT.`/`EXT.` prefix
pub fn count_scene_lines(text: &str) -> usize {
    SCENE_LINE_RE.find_iter(text).count()
}

/// Whether a line, once surrounding whitespace is removed, opens a scene
pub fn is_scene_heading(line: &str) -> bool {
    HEADING_PREFIX_RE.is_match(line.trim())
}

/// Whether a line looks like an indented, capitalised speaker name
pub fn is_character_cue(line: &str) -> bool {
    CHARACTER_CUE_RE.is_match(line.trim_end())
}

pub fn count_character_cues<'a>(lines: impl IntoIterator<Item = &'a str>) -> usize {
    lines.into_iter().filter(|line| is_character_cue(line)).count()
}

pub fn count_past_tense_verbs(text: &str) -> usize {
    PAST_TENSE_RE.find_iter(text).count()
}

/// Runs of two or more spaces; a run counts once however long it is
pub fn count_double_spaces(text: &str) -> usize {
    DOUBLE_SPACE_RE.find_iter(text).count()
}

/// Lowercase letter, line break, uppercase letter: likely a dropped full stop
pub fn count_missing_periods(text: &str) -> usize {
    MISSING_PERIOD_RE.find_iter(text).count()
}

/// Occurrences of each known misspelling, in list order, zero counts included
pub fn count_misspellings(text: &str) -> Vec<(&'static str, usize)> {
    MISSPELLING_RES
        .iter()
        .map(|(word, re)| (*word, re.find_iter(text).count()))
        .collect()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proper_headings_are_case_sensitive_and_anchored() {
        let text = "INT. KITCHEN - NIGHT\nint. garage\n  EXT. YARD\nEXT. STREET";
        assert_eq!(count_proper_headings(text), 2);
    }

    #[test]
    fn test_improper_headings_overlap_proper_ones() {
        let text = "INT. KITCHEN\nint. garage\nInterior hallway\nEXTERIOR roof\nthe int. is";
        assert_eq!(count_improper_headings(text), 4);
    }

    #[test]
    fn test_scene_lines_need_text_after_prefix() {
        assert_eq!(count_scene_lines("INT.\nINT. HOUSE\nEXT. BEACH - DAY\n"), 2);
    }

    #[test]
    fn test_scene_heading_ignores_indentation() {
        assert!(is_scene_heading("   INT. OFFICE"));
        assert!(!is_scene_heading("int. office"));
        assert!(!is_scene_heading("INTERIOR"));
    }

    #[test]
    fn test_character_cue_shape() {
        assert!(is_character_cue("                    JOHN"));
        assert!(is_character_cue("          MARY JANE   "));
        assert!(!is_character_cue("         JOHN"));
        assert!(!is_character_cue("                    John"));
        assert!(!is_character_cue("                    JOHN (V.O.)"));
        assert!(!is_character_cue("JOHN"));
        assert!(!is_character_cue("                    "));
    }

    #[test]
    fn test_past_tense_whole_words_only() {
        let text = "He Walked in. She SAID no. They ran. Ranch, sawdust, overlooked.";
        assert_eq!(count_past_tense_verbs(text), 3);
    }

    #[test]
    fn test_double_space_runs() {
        assert_eq!(count_double_spaces("a  b     c d"), 2);
        assert_eq!(count_double_spaces("a b c"), 0);
    }

    #[test]
    fn test_missing_periods() {
        assert_eq!(count_missing_periods("she runs\nHe stops.\nThey go\nwe stay"), 1);
    }

    #[test]
    fn test_misspellings_counted_per_word() {
        let counts = count_misspellings("Teh cat. TEH dog. I recieve it. tehran");
        assert_eq!(counts[0], ("teh", 2));
        assert_eq!(counts[1], ("recieve", 1));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 3);
    }
}

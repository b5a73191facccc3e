//! Screenplay text and its line decomposition

use serde::Serialize;

use crate::{Error, Result};

/// Industry rule of thumb: one formatted screenplay page holds about 55 lines.
pub const LINES_PER_PAGE: f64 = 55.0;

/// Full manuscript content plus its physical lines.
///
/// Lines are produced by splitting on `\n` only. Nothing is trimmed or
/// dropped, so blank lines survive as empty strings and a trailing newline
/// yields a trailing empty line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptText {
    text: String,
    #[serde(skip)]
    line_spans: Vec<(usize, usize)>,
}

impl ScriptText {
    /// Wrap raw text without validating it
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_spans = split_spans(&text);
        Self { text, line_spans }
    }

    /// Wrap raw text, rejecting empty or whitespace-only input
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let script = Self::new(text);
        if script.is_blank() {
            return Err(Error::InvalidInput(
                "script text is empty or could not be read".to_string(),
            ));
        }
        Ok(script)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterate over the physical lines in order
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.line_spans
            .iter()
            .map(move |&(start, end)| &self.text[start..end])
    }

    pub fn line_count(&self) -> usize {
        self.line_spans.len()
    }

    /// Whitespace-delimited word count of the whole text
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }

    /// Estimated page count, not rounded
    pub fn page_count(&self) -> f64 {
        self.line_count() as f64 / LINES_PER_PAGE
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The first `max_chars` characters, cut on a char boundary
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}

impl From<&str> for ScriptText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ScriptText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Split on `\n`, keeping every segment including empty ones
fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn split_spans(text: &str) -> Vec<(usize, usize)> {
    let mut start = 0;
    split_lines(text)
        .into_iter()
        .map(|line| {
            let span = (start, start + line.len());
            start = span.1 + 1;
            span
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_kept() {
        let script = ScriptText::new("INT. ROOM - DAY\n\nShe waits.\n");
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines, vec!["INT. ROOM - DAY", "", "She waits.", ""]);
        assert_eq!(script.line_count(), 4);
    }

    #[test]
    fn test_lines_match_split_lines() {
        let text = "a\r\nb\n\n  c  \n";
        let script = ScriptText::new(text);
        assert_eq!(script.lines().collect::<Vec<_>>(), split_lines(text));
    }

    #[test]
    fn test_spans_cover_each_line() {
        assert_eq!(split_spans("ab\n\ncd"), vec![(0, 2), (3, 3), (4, 6)]);
        assert_eq!(split_spans("x\n"), vec![(0, 1), (2, 2)]);
        assert_eq!(split_spans(""), vec![(0, 0)]);
    }

    #[test]
    fn test_empty_text_is_one_line() {
        let script = ScriptText::new("");
        assert_eq!(script.line_count(), 1);
        assert_eq!(script.word_count(), 0);
    }

    #[test]
    fn test_page_count_is_not_rounded() {
        let script = ScriptText::new("x\n".repeat(54));
        assert_eq!(script.line_count(), 55);
        assert_eq!(script.page_count(), 1.0);

        let script = ScriptText::new("x\n".repeat(10));
        assert_eq!(script.page_count(), 11.0 / 55.0);
    }

    #[test]
    fn test_parse_rejects_blank_text() {
        assert!(matches!(
            ScriptText::parse("  \n\t\n"),
            Err(Error::InvalidInput(_))
        ));
        assert!(ScriptText::parse("FADE IN:").is_ok());
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let script = ScriptText::new("héllo wörld");
        assert_eq!(script.excerpt(4), "héll");
        assert_eq!(script.excerpt(100), "héllo wörld");
    }
}

//! Qualitative analysis of a screenplay through an LLM provider

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use neka_core::{
    GenerationConfig, LLMProvider, MetricsBundle, QualitativeScores, Result, RetryConfig,
    ScriptText,
};

/// Characters of script text sent along with the metrics
pub const EXCERPT_CHARS: usize = 3000;

static SCORE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)score:?\**\s*(\d+(?:\.\d+)?)\s*/\s*10").unwrap()
});

/// Narrative analysis plus the scores read back from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitativeReport {
    pub narrative: String,
    pub scores: QualitativeScores,
    /// False when the scores are the fallback rather than parsed values
    pub scores_parsed: bool,
}

impl QualitativeReport {
    /// Build a report from raw analysis text
    pub fn from_narrative(narrative: impl Into<String>) -> Self {
        let narrative = narrative.into();
        let parsed = parse_scores(&narrative);
        Self {
            scores: parsed.unwrap_or(QualitativeScores::FALLBACK),
            scores_parsed: parsed.is_some(),
            narrative,
        }
    }

    /// Report used when no analysis was run
    pub fn skipped(reason: &str) -> Self {
        Self {
            narrative: reason.to_string(),
            scores: QualitativeScores::FALLBACK,
            scores_parsed: false,
        }
    }
}

/// Runs the screenplay-analyst prompt against an LLM provider
pub struct QualitativeAnalyzer<L: LLMProvider> {
    llm: L,
    retry: RetryConfig,
}

impl<L: LLMProvider> QualitativeAnalyzer<L> {
    pub fn new(llm: L) -> Self {
        Self {
            llm,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn model_id(&self) -> &str {
        self.llm.model_id()
    }

    /// Ask the provider for the narrative analysis and parse its scores
    pub async fn analyze(
        &self,
        script: &ScriptText,
        metrics: &MetricsBundle,
    ) -> Result<QualitativeReport> {
        let prompt = build_prompt(script, metrics);
        let config = GenerationConfig {
            model_id: self.llm.model_id().to_string(),
            ..Default::default()
        };

        info!(model = %config.model_id, "requesting qualitative analysis");
        let result = self
            .llm
            .generate_with_retry(&prompt, &config, Some(self.retry.clone()))
            .await?;
        debug!(tokens_used = ?result.tokens_used, "qualitative analysis received");

        let report = QualitativeReport::from_narrative(result.text);
        if !report.scores_parsed {
            warn!("analysis did not contain three scores, using fallback");
        }
        Ok(report)
    }
}

/// Build the analyst prompt from the metrics and the opening of the script
pub fn build_prompt(script: &ScriptText, metrics: &MetricsBundle) -> String {
    format!(
        "You are a professional screenplay analyst. Below is the script and its quantitative metrics.

SCRIPT METRICS:
- Page Count: {page_count:.1}
- Scene Count: {scene_count}
- Average Scene Length: {avg_length:.1} pages
- Dialogue Ratio: {dialogue_ratio:.1}%

SCRIPT:
{excerpt}
[... script continues ...]

Please evaluate the screenplay on each category below and provide:

- A score between 1 and 10
- Specific strengths with quotes or references to the script
- Specific weaknesses with concrete examples

CATEGORIES:

1. CHARACTER DEVELOPMENT
- Are main characters properly motivated and growing?
- Are characters authentic and relatable?
- Provide examples.

2. DIALOGUE QUALITY
- Does dialogue sound natural and distinct for characters?
- Is subtext used instead of exposition?
- Does dialogue advance the plot?
- Provide examples.

3. STORY CONCEPT & ORIGINALITY
- Is the premise original and compelling?
- Does the story have a clear hook?
- Reference specific elements.

OUTPUT FORMAT (repeat for each category, in order):
Score: X/10
Strengths: <bullet points>
Weaknesses: <bullet points>

Be specific and concise. Reference exact script lines or scenes.
",
        page_count = metrics.page_count,
        scene_count = metrics.scenes.count,
        avg_length = metrics.scenes.avg_length,
        dialogue_ratio = metrics.dialogue.ratio,
        excerpt = script.excerpt(EXCERPT_CHARS),
    )
}

/// Read the first three `Score: X/10` values as character, dialogue, originality
pub fn parse_scores(narrative: &str) -> Option<QualitativeScores> {
    let values: Vec<f64> = SCORE_LINE
        .captures_iter(narrative)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .map(|value| value.clamp(0.0, 10.0))
        .take(3)
        .collect();

    match values.as_slice() {
        [character, dialogue, originality] => Some(QualitativeScores::new(
            *character,
            *dialogue,
            *originality,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use neka_core::{Error, GenerationResult, compute_metrics};
    use std::sync::Mutex;

    struct MockProvider {
        responses: Mutex<Vec<Result<String>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn new(responses: Vec<Result<String>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LLMProvider for MockProvider {
        async fn generate(&self, prompt: &str) -> Result<GenerationResult> {
            self.generate_with_config(prompt, &GenerationConfig::default())
                .await
        }

        async fn generate_with_config(
            &self,
            prompt: &str,
            config: &GenerationConfig,
        ) -> Result<GenerationResult> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let next = self.responses.lock().unwrap().remove(0);
            next.map(|text| GenerationResult {
                text,
                model_id: config.model_id.clone(),
                tokens_used: None,
            })
        }

        fn model_id(&self) -> &str {
            "mock-model"
        }
    }

    const ANALYSIS: &str = "\
1. CHARACTER DEVELOPMENT
Score: 8/10
Strengths: Maya is driven.

2. DIALOGUE QUALITY
**Score:** 6.5 / 10
Weaknesses: On the nose.

3. STORY CONCEPT & ORIGINALITY
Score: 9/10
";

    #[test]
    fn test_parse_scores_in_order() {
        let scores = parse_scores(ANALYSIS).unwrap();
        assert_eq!(scores, QualitativeScores::new(8.0, 6.5, 9.0));
    }

    #[test]
    fn test_parse_scores_clamps_and_requires_three() {
        let scores = parse_scores("Score: 12/10 Score: 0/10 score: 10/10").unwrap();
        assert_eq!(scores, QualitativeScores::new(10.0, 0.0, 10.0));

        assert!(parse_scores("Score: 8/10\nScore: 7/10").is_none());
        assert!(parse_scores("no numbers here").is_none());
    }

    #[test]
    fn test_report_falls_back_without_scores() {
        let report = QualitativeReport::from_narrative("A lovely script.");
        assert!(!report.scores_parsed);
        assert_eq!(report.scores, QualitativeScores::FALLBACK);
    }

    #[test]
    fn test_prompt_carries_metrics_and_excerpt() {
        let text = format!("INT. HOUSE - DAY\n{}", "x".repeat(5000));
        let script = ScriptText::new(text);
        let metrics = compute_metrics(&script);
        let prompt = build_prompt(&script, &metrics);

        assert!(prompt.contains("- Scene Count: 1\n"));
        assert!(prompt.contains("- Dialogue Ratio: 0.0%"));
        assert!(prompt.contains(&format!("INT. HOUSE - DAY\n{}", "x".repeat(2983))));
        assert!(!prompt.contains(&"x".repeat(2984)));
    }

    #[tokio::test]
    async fn test_analyze_uses_provider_output() {
        let provider = MockProvider::new(vec![Ok(ANALYSIS.to_string())]);
        let analyzer = QualitativeAnalyzer::new(provider);
        let script = ScriptText::new("INT. HOUSE - DAY\nJohn walks in.\n");
        let metrics = compute_metrics(&script);

        let report = analyzer.analyze(&script, &metrics).await.unwrap();
        assert!(report.scores_parsed);
        assert_eq!(report.scores.dialogue, 6.5);
        assert_eq!(report.narrative, ANALYSIS);
        assert_eq!(analyzer.model_id(), "mock-model");
    }

    #[tokio::test]
    async fn test_analyze_retries_transient_errors() {
        let provider = MockProvider::new(vec![
            Err(Error::Timeout("slow".to_string())),
            Ok("Score: 5/10 Score: 5/10 Score: 5/10".to_string()),
        ]);
        let analyzer = QualitativeAnalyzer::new(provider);
        let script = ScriptText::new("Some action.\n");
        let metrics = compute_metrics(&script);

        let report = analyzer.analyze(&script, &metrics).await.unwrap();
        assert_eq!(report.scores, QualitativeScores::new(5.0, 5.0, 5.0));
        assert_eq!(analyzer.llm.prompts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_analyze_stops_on_authentication_error() {
        let provider = MockProvider::new(vec![
            Err(Error::Authentication("bad key".to_string())),
            Ok("unused".to_string()),
        ]);
        let analyzer = QualitativeAnalyzer::new(provider);
        let script = ScriptText::new("Some action.\n");
        let metrics = compute_metrics(&script);

        let err = analyzer.analyze(&script, &metrics).await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
        assert_eq!(analyzer.llm.prompts.lock().unwrap().len(), 1);
    }
}

//! LLM provider trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::RetryConfig;
use crate::{Error, Result};

/// Configuration for text generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub seed: Option<u64>,
    pub timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model_id: "meta-llama/llama-4-scout-17b-16e-instruct".to_string(),
            max_tokens: 2000,
            temperature: Some(0.0),
            seed: Some(42),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Result of a text generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub text: String,
    pub model_id: String,
    pub tokens_used: Option<u32>,
}

/// Trait for LLM providers (e.g., Groq, OpenAI-compatible endpoints)
///
/// Implementations own network timeouts and retries; callers only see the
/// generated text or an [`Error`].
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generate text using the LLM with default configuration
    async fn generate(&self, prompt: &str) -> Result<GenerationResult>;

    /// Generate text with custom configuration
    async fn generate_with_config(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerationResult>;

    /// Generate with retries, widening the timeout on each attempt
    async fn generate_with_retry(
        &self,
        prompt: &str,
        config: &GenerationConfig,
        retry_config: Option<RetryConfig>,
    ) -> Result<GenerationResult> {
        let retry_cfg = retry_config.unwrap_or_default();
        let mut last_error = None;

        for attempt in 1..=retry_cfg.max_attempts.max(1) {
            let mut attempt_config = config.clone();
            attempt_config.timeout =
                retry_cfg.base_timeout + retry_cfg.timeout_step * (attempt - 1);

            match self.generate_with_config(prompt, &attempt_config).await {
                Ok(result) => return Ok(result),
                Err(e @ (Error::Authentication(_) | Error::Configuration(_))) => return Err(e),
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error
            .unwrap_or_else(|| Error::LLMProvider("All generation attempts failed".to_string())))
    }

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

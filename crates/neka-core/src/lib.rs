//! Core metrics engine and shared types for NEKA script evaluation
//!
//! Turns raw screenplay text into five deterministic sub-scores (format,
//! grammar, dialogue balance, scene structure, white space), and blends them
//! with qualitative sub-scores into one final score. Everything in
//! [`metrics`], [`patterns`] and [`scoring`] is pure and synchronous; the
//! [`LLMProvider`] trait is the seam to the asynchronous qualitative analysis.

pub mod error;
pub mod llm;
pub mod metrics;
pub mod patterns;
pub mod script;
pub mod scoring;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use llm::{GenerationConfig, GenerationResult, LLMProvider};
pub use metrics::{
    DialogueBalance, DialogueResult, FormatResult, GrammarResult, Metric, MetricsBundle,
    SceneResult, ScenePacing, WhitespaceBand, WhitespaceResult, compute_metrics, evaluate_text,
};
pub use script::ScriptText;
pub use scoring::{ScoreBreakdown, WEIGHTS, Weights, aggregate};
pub use types::*;

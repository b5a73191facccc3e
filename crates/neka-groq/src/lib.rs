//! Groq integration for NEKA
//!
//! This crate provides the Groq implementation of the LLMProvider trait.

mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::GroqClient;
pub use config::{DEFAULT_API_URL, DEFAULT_MODEL, GroqConfig};

// Re-export core types for convenience
pub use neka_core::{Error, GenerationConfig, GenerationResult, LLMProvider, Result, RetryConfig};

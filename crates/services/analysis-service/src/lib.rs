//! Analysis Service Library
//!
//! Pass-through to an OpenAI-compatible chat completion endpoint. The raw
//! model output is handed to the domain extractor, which recovers the
//! `HealthAnalysis` object from it.

pub mod client;
pub mod config;
pub mod service;

use std::sync::Arc;

use common::AppResult;

use crate::client::OpenAiClient;
use crate::config::OpenAiConfig;
use crate::service::Summarizer;

/// Build the summarizer backed by the configured provider.
pub fn build_summarizer(config: &OpenAiConfig) -> AppResult<Summarizer> {
    let provider = OpenAiClient::new(config.clone())?;
    Ok(Summarizer::new(Arc::new(provider)))
}

//! Summary service - provider call plus structured extraction.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{extract_json, HealthAnalysis};

use crate::client::TextAnalysisProvider;

/// Summary service trait for dependency injection.
#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Analyze `text` and return the recovered analysis
    async fn summarize(&self, text: &str) -> AppResult<HealthAnalysis>;
}

/// Concrete implementation of SummaryService.
pub struct Summarizer {
    provider: Arc<dyn TextAnalysisProvider>,
}

impl Summarizer {
    pub fn new(provider: Arc<dyn TextAnalysisProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl SummaryService for Summarizer {
    async fn summarize(&self, text: &str) -> AppResult<HealthAnalysis> {
        let raw = self.provider.complete(text).await?;

        extract_json::<HealthAnalysis>(&raw).map_err(|e| {
            tracing::warn!(error = %e, "Could not recover analysis from provider output");
            e.into()
        })
    }
}

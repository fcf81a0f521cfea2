//! Text-analysis provider clients.

mod openai_client;

pub use openai_client::{OpenAiClient, TextAnalysisProvider, SYSTEM_PROMPT};

#[cfg(any(test, feature = "test-utils"))]
pub use openai_client::MockTextAnalysisProvider;

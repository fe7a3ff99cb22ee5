//! Text-generation API access.

pub mod client;
pub mod provider;

use async_trait::async_trait;

use crate::error::OracleError;

pub use client::ChatClient;
pub use provider::Provider;

/// A single chat completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Trait for calling the text-generation service.
///
/// This abstraction allows mocking the HTTP API in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Send the request and return the completion text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, OracleError>;
}

//! Support chat gateway: the one network boundary in the application.
//!
//! A single logical operation — ask a question, get text back. The shell
//! treats every failure the same way (empty reply, no error state), so the
//! error enum here exists for logging and for the offline fallback
//! decision, not for user-facing handling.

mod canned;
mod gemini;

use async_trait::async_trait;

pub use canned::CannedGateway;
pub use gemini::GeminiGateway;

/// Errors that can occur when asking the support assistant.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = core::result::Result<T, GatewayError>;

/// Answers product questions for the chat panel.
///
/// Callers guarantee a non-empty question; implementations return
/// best-effort natural-language text.
#[async_trait]
pub trait SupportGateway: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Asks the assistant one question.
    async fn ask(&self, question: &str) -> Result<String>;
}

//! Generative text backed by the Gemini `generateContent` API.

mod client;
mod prompts;

use thiserror::Error;

pub use client::GeminiClient;
pub use prompts::{contract_analysis_prompt, property_description_prompt};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub(crate) const DESCRIBE_OPERATION: &str = "generate description";
pub(crate) const ANALYZE_OPERATION: &str = "analyze contract";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiServiceError {
    #[error("API_KEY for Gemini is not configured.")]
    MissingApiKey,
    #[error("The provided API key is not valid. Please check your configuration.")]
    InvalidApiKey,
    #[error("Failed to {operation}: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },
    #[error("The model returned no text for the request.")]
    EmptyResponse,
}

impl AiServiceError {
    /// Classifies a failure message from the service or transport.
    pub(crate) fn from_failure(operation: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("API key not valid") {
            Self::InvalidApiKey
        } else {
            Self::Request { operation, message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_keys_are_recognised_in_messages() {
        let rejected = AiServiceError::from_failure(
            DESCRIBE_OPERATION,
            "API key not valid. Please pass a valid API key.",
        );
        assert_eq!(rejected, AiServiceError::InvalidApiKey);

        let failed = AiServiceError::from_failure(ANALYZE_OPERATION, "quota exceeded");
        assert_eq!(
            failed.to_string(),
            "Failed to analyze contract: quota exceeded"
        );
    }
}

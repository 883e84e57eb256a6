use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

use super::prompts::{contract_analysis_prompt, property_description_prompt};
use super::{AiServiceError, ANALYZE_OPERATION, DESCRIBE_OPERATION};
use crate::config::AiConfig;
use crate::platform::PopulatedUnitDetail;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|part| part.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Thin client over `models/{model}:generateContent`.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(config: &AiConfig) -> Self {
        Self::with_http(Client::new(), config)
    }

    pub fn with_http(http: Client, config: &AiConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate_property_description(
        &self,
        unit: &PopulatedUnitDetail,
    ) -> Result<String, AiServiceError> {
        let api_key = self.api_key.as_deref().ok_or(AiServiceError::MissingApiKey)?;
        debug!(unit_id = %unit.id.0, project = %unit.project_name, "requesting property description");
        let parts = vec![Part::Text {
            text: property_description_prompt(unit),
        }];
        self.generate(api_key, DESCRIBE_OPERATION, parts).await
    }

    /// Asks a question about an inline document, typically a PDF contract.
    pub async fn analyze_contract(
        &self,
        file_base64: &str,
        mime_type: &str,
        query: &str,
    ) -> Result<String, AiServiceError> {
        let api_key = self.api_key.as_deref().ok_or(AiServiceError::MissingApiKey)?;
        debug!(%mime_type, bytes = file_base64.len(), "requesting contract analysis");
        let parts = vec![
            Part::InlineData {
                inline_data: InlineData {
                    mime_type,
                    data: file_base64,
                },
            },
            Part::Text {
                text: contract_analysis_prompt(query),
            },
        ];
        self.generate(api_key, ANALYZE_OPERATION, parts).await
    }

    async fn generate(
        &self,
        api_key: &str,
        operation: &'static str,
        parts: Vec<Part<'_>>,
    ) -> Result<String, AiServiceError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                error!(%operation, error = %err, "generative request failed");
                AiServiceError::from_failure(operation, err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body).unwrap_or_else(|| format!("HTTP {}", status));
            error!(%operation, %status, %message, "generative service rejected request");
            return Err(AiServiceError::from_failure(operation, message));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AiServiceError::from_failure(operation, err.to_string()))?;
        let text = body.text().ok_or(AiServiceError::EmptyResponse)?;
        info!(%operation, model = %self.model, chars = text.len(), "generative response received");
        Ok(text)
    }
}

/// Pulls `error.message` out of a Google API error body, falling back to the raw text.
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let message = serde_json::from_str::<Value>(trimmed)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| trimmed.to_string());
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_google_error_messages() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("API key not valid. Please pass a valid API key.")
        );
        assert_eq!(error_message("upstream down").as_deref(), Some("upstream down"));
        assert_eq!(error_message("  "), None);
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Sunny "},{"text":"corner unit."}]}}]}"#,
        )
        .expect("valid body");
        assert_eq!(body.text().as_deref(), Some("Sunny corner unit."));

        let empty: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).expect("valid body");
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = AiConfig {
            api_key: Some("secret".to_string()),
            ..AiConfig::default()
        };
        let client = GeminiClient::new(&config);
        assert!(client.is_configured());
        assert!(!format!("{:?}", client).contains("secret"));
    }
}

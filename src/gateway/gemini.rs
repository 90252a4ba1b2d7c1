//! Gemini-backed support gateway.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;

use super::{GatewayError, Result, SupportGateway};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const SYSTEM_INSTRUCTION: &str = "You are the product support assistant for Porta Systems, \
    a smart delivery box engineered in Valencia, Spain. Answer briefly and factually about \
    the product line: secure last-mile delivery, hardware specs, and the mobile app. \
    If a question is unrelated to Porta, politely steer back to the product.";

/// Calls the hosted `generateContent` endpoint.
///
/// No retry, no timeout policy, no streaming: one POST per question, and
/// the caller decides what a failure means.
pub struct GeminiGateway {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiGateway {
    pub fn new(api_key: String, config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: config.model.clone(),
            base_url: config
                .api_url
                .clone()
                .unwrap_or_else(|| GEMINI_API_URL.to_string()),
        }
    }

    /// Builds the API request body.
    fn build_request(question: &str) -> Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": question }],
            }],
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }],
            },
        })
    }

    /// Pulls the reply text out of a response, if there is any.
    fn parse_response(response: &ApiResponse) -> Option<String> {
        let content = response.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl SupportGateway for GeminiGateway {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn ask(&self, question: &str) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(GatewayError::MissingApiKey);
        }

        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        debug!(model = self.model, "sending support question");

        let mut api_key_header = reqwest::header::HeaderValue::try_from(&self.api_key)
            .map_err(|e| GatewayError::RequestFailed(format!("invalid API key characters: {e}")))?;
        api_key_header.set_sensitive(true);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key_header)
            .header("content-type", "application/json")
            .json(&Self::build_request(question))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Gemini API error");
            return Err(GatewayError::RequestFailed(format!("status {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Self::parse_response(&api_response)
            .ok_or_else(|| GatewayError::InvalidResponse("no text in candidates".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_question_and_system_instruction() {
        let request = GeminiGateway::build_request("How big is the box?");
        assert_eq!(
            request["contents"][0]["parts"][0]["text"],
            "How big is the box?"
        );
        assert_eq!(request["contents"][0]["role"], "user");
        let system = request["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(system.contains("Porta Systems"));
    }

    #[test]
    fn parse_concatenates_candidate_parts() {
        let response: ApiResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "The vault is "}, {"text": "42 liters."}]
                    }
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(
            GeminiGateway::parse_response(&response).as_deref(),
            Some("The vault is 42 liters.")
        );
    }

    #[test]
    fn parse_rejects_empty_candidates() {
        let response: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(GeminiGateway::parse_response(&response).is_none());

        let blank: ApiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "   "}]}}]}"#,
        )
        .unwrap();
        assert!(GeminiGateway::parse_response(&blank).is_none());
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_a_network_call() {
        let gateway = GeminiGateway::new(String::new(), &Config::default());
        let result = gateway.ask("hello").await;
        assert!(matches!(result, Err(GatewayError::MissingApiKey)));
    }
}

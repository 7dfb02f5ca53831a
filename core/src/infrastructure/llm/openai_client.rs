use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    food_guess::ports::LLMClient,
};

#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest {
    model: String,
    input: Vec<InputMessage>,
    text: TextConfig,
}

#[derive(Debug, Serialize)]
struct InputMessage {
    role: &'static str,
    content: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Part {
    InputText { text: String },
    InputImage { image_url: String },
}

#[derive(Debug, Serialize)]
struct TextConfig {
    format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

impl OpenAILLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            api_key: config.openai_api_key.filter(|key| !key.trim().is_empty()),
            model_name: config.openai_model,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn call_responses_api(&self, request: ResponsesRequest) -> Result<Value, CoreError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            tracing::error!("OpenAI API key is not configured");
            CoreError::MissingApiKey
        })?;

        let url = format!("{}/responses", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::Upstream {
                status: status.as_u16(),
                body: error_text,
            });
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response envelope: {}", e);
            CoreError::BadUpstreamFormat(format!("Failed to parse LLM response: {}", e))
        })
    }
}

impl LLMClient for OpenAILLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data_url: String,
    ) -> Result<String, CoreError> {
        let request = ResponsesRequest {
            model: self.model_name.clone(),
            input: vec![InputMessage {
                role: "user",
                content: vec![
                    Part::InputText { text: prompt },
                    Part::InputImage {
                        image_url: image_data_url,
                    },
                ],
            }],
            text: TextConfig {
                format: ResponseFormat {
                    kind: "json_object",
                },
            },
        };

        let envelope = self.call_responses_api(request).await?;

        Ok(extract_output_text(&envelope))
    }
}

/// Locates the model's text in a responses envelope.
///
/// Lookup order: the top-level `output_text`, then the first text part of the
/// first `output[]` entry typed `message`, then the empty string.
pub fn extract_output_text(envelope: &Value) -> String {
    let direct = || envelope.get("output_text").and_then(Value::as_str);

    let first_message = || {
        envelope
            .get("output")?
            .as_array()?
            .iter()
            .find(|entry| entry.get("type").and_then(Value::as_str) == Some("message"))?
            .get("content")?
            .as_array()?
            .iter()
            .find_map(|part| part.get("text").and_then(Value::as_str))
    };

    direct()
        .or_else(first_message)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extract_prefers_output_text() {
        let envelope = json!({
            "output_text": "{\"items\":[]}",
            "output": [{ "type": "message", "content": [{ "type": "output_text", "text": "other" }] }]
        });

        assert_eq!(extract_output_text(&envelope), "{\"items\":[]}");
    }

    #[test]
    fn test_extract_falls_back_to_first_message() {
        let envelope = json!({
            "output": [
                { "type": "reasoning", "summary": [] },
                { "type": "message", "content": [{ "type": "output_text", "text": "first" }] },
                { "type": "message", "content": [{ "type": "output_text", "text": "second" }] }
            ]
        });

        assert_eq!(extract_output_text(&envelope), "first");
    }

    #[test]
    fn test_extract_ignores_non_string_output_text() {
        let envelope = json!({
            "output_text": null,
            "output": [{ "type": "message", "content": [{ "type": "output_text", "text": "nested" }] }]
        });

        assert_eq!(extract_output_text(&envelope), "nested");
    }

    #[test]
    fn test_extract_defaults_to_empty() {
        assert_eq!(extract_output_text(&json!({})), "");
        assert_eq!(extract_output_text(&json!({ "output": [] })), "");
        assert_eq!(
            extract_output_text(&json!({ "output": [{ "type": "message", "content": [] }] })),
            ""
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = ResponsesRequest {
            model: "gpt-test".to_string(),
            input: vec![InputMessage {
                role: "user",
                content: vec![
                    Part::InputText {
                        text: "prompt".to_string(),
                    },
                    Part::InputImage {
                        image_url: "data:image/jpeg;base64,QUJD".to_string(),
                    },
                ],
            }],
            text: TextConfig {
                format: ResponseFormat {
                    kind: "json_object",
                },
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-test",
                "input": [{
                    "role": "user",
                    "content": [
                        { "type": "input_text", "text": "prompt" },
                        { "type": "input_image", "image_url": "data:image/jpeg;base64,QUJD" }
                    ]
                }],
                "text": { "format": { "type": "json_object" } }
            })
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_any_request() {
        let client = OpenAILLMClient::new(LLMConfig {
            openai_api_key: Some("   ".to_string()),
            // Unroutable on purpose: a request attempt would surface as a transport error.
            openai_base_url: "http://127.0.0.1:1".to_string(),
            ..LLMConfig::default()
        });

        let result = client
            .generate_with_image("prompt".to_string(), "data:image/jpeg;base64,QUJD".to_string())
            .await;

        assert!(matches!(result, Err(CoreError::MissingApiKey)));
    }
}

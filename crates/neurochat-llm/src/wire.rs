//! Wire types for the completions endpoint.
//!
//! The request is the plain completions shape (`model` + flattened
//! `prompt` string); the response resolves to `choices[0].text`.

use serde::{Deserialize, Serialize};

/// Stop sequences keeping the model from continuing the dialogue on its
/// own past the assistant turn.
pub const STOP_SEQUENCES: &[&str] = &["\nHuman:", "\n\nHuman:", "\nSystem:"];

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stop: Vec<String>,
}

impl CompletionRequest {
    pub fn stop_sequences() -> Vec<String> {
        STOP_SEQUENCES.iter().map(|s| s.to_string()).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub text: Option<String>,
}

impl CompletionResponse {
    /// The generated text, when the response carries one.
    pub fn text(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_expected_fields() {
        let request = CompletionRequest {
            model: "local-model".to_string(),
            prompt: "Human: hi\nAssistant:".to_string(),
            max_tokens: 512,
            temperature: 0.7,
            stop: CompletionRequest::stop_sequences(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], "local-model");
        assert_eq!(body["prompt"], "Human: hi\nAssistant:");
        assert_eq!(body["max_tokens"], 512);
        assert_eq!(body["stop"].as_array().unwrap().len(), 3);
        assert_eq!(body["stop"][0], "\nHuman:");
    }

    #[test]
    fn response_text_resolves_first_choice() {
        let response: CompletionResponse =
            serde_json::from_str(r#"{"choices":[{"text":" hello "},{"text":"ignored"}]}"#).unwrap();
        assert_eq!(response.text(), Some(" hello "));
    }

    #[test]
    fn response_without_choices_has_no_text() {
        let response: CompletionResponse = serde_json::from_str(r#"{"id":"cmpl-1"}"#).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn choice_without_text_field_has_no_text() {
        let response: CompletionResponse =
            serde_json::from_str(r#"{"choices":[{"finish_reason":"stop"}]}"#).unwrap();
        assert_eq!(response.text(), None);
    }
}

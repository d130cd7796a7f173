// OpenRouter chat-completions request/response types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub response_format: ResponseFormat,
}

impl ChatRequest {
    /// Build a request from the system instruction and the context window.
    pub fn new(
        model: impl Into<String>,
        system: String,
        context: Vec<Message>,
        temperature: f32,
    ) -> Self {
        let mut messages = Vec::with_capacity(context.len() + 1);
        messages.push(Message::new("system", system));
        messages.extend(context);

        Self {
            model: model.into(),
            messages,
            temperature,
            response_format: ResponseFormat::text(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    pub fn text() -> Self {
        Self {
            format_type: "text".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

impl ChatResponse {
    /// Reply text at `choices[0].message.content`, if present.
    pub fn text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_wire_shape() {
        let request = ChatRequest::new(
            "google/palm-2-chat-bison",
            "You are a financial assistant.".to_string(),
            vec![Message::new("user", "What bills do I owe?")],
            0.3,
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "google/palm-2-chat-bison");
        assert_eq!(value["response_format"]["type"], "text");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
    }

    #[test]
    fn test_response_text_extraction() {
        let body = r#"{"choices":[{"message":{"content":"Rent: $1200"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), Some("Rent: $1200"));
    }

    #[test]
    fn test_response_without_choices_has_no_text() {
        let body = r#"{"choices":[]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), None);
    }
}

// ABOUTME: Conversation value types - messages, content blocks, inference
// ABOUTME: configuration, and request/response shapes with validation.

use serde::{Deserialize, Serialize};

use crate::error::ConverseError;

/// Hard ceiling on requested output tokens.
const MAX_TOKENS_LIMIT: u32 = 8_192;

/// Default output budget, chosen to keep exploratory requests cheap.
const DEFAULT_MAX_TOKENS: u32 = 500;

/// Role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
}

/// A block of content within a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Image {
        media_type: String,
        data: String,
    },
    Document {
        source: serde_json::Value,
    },
}

impl ContentBlock {
    /// Create a text content block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a base64 image content block.
    pub fn image(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Image {
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    /// The text of this block, if it is a text block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// A conversation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

impl Message {
    /// Create a user message with text content.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::text(text)],
        }
    }

    /// Create an assistant message with text content.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: vec![ContentBlock::text(text)],
        }
    }
}

/// Token usage statistics reported by a vendor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Sampling configuration for a conversation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop_sequences: Vec<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            temperature: None,
            top_p: None,
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            stop_sequences: Vec::new(),
        }
    }
}

impl InferenceConfig {
    /// Validate sampling parameters.
    pub fn validate(&self) -> Result<(), ConverseError> {
        if let Some(temperature) = self.temperature {
            if !(0.0..=1.0).contains(&temperature) {
                return Err(ConverseError::InvalidTemperature(temperature));
            }
        }
        if let Some(top_p) = self.top_p {
            if !(0.0..=1.0).contains(&top_p) {
                return Err(ConverseError::InvalidTopP(top_p));
            }
        }
        if let Some(max_tokens) = self.max_tokens {
            if max_tokens == 0 || max_tokens > MAX_TOKENS_LIMIT {
                return Err(ConverseError::InvalidMaxTokens {
                    got: max_tokens,
                    max: MAX_TOKENS_LIMIT,
                });
            }
        }
        Ok(())
    }
}

/// A request for a model conversation.
///
/// `model_id` is the vendor wire id, resolved by the caller through the
/// registry; this type never talks to a vendor itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverseRequest {
    pub model_id: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default)]
    pub inference_config: InferenceConfig,
}

impl ConverseRequest {
    /// Create a request with default inference configuration.
    pub fn new(model_id: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model_id: model_id.into(),
            messages,
            system: None,
            inference_config: InferenceConfig::default(),
        }
    }

    /// Validate the whole request.
    pub fn validate(&self) -> Result<(), ConverseError> {
        if self.model_id.is_empty() {
            return Err(ConverseError::MissingModelId);
        }
        if self.messages.is_empty() {
            return Err(ConverseError::EmptyMessages);
        }
        if self.messages.iter().any(|m| m.content.is_empty()) {
            return Err(ConverseError::EmptyContent);
        }
        self.inference_config.validate()
    }

    /// Rough input token estimate, for pre-flight cost projection.
    ///
    /// Counts roughly one token per six characters of text, at least one
    /// per message. A heuristic, not a tokenizer.
    pub fn estimate_tokens(&self) -> u32 {
        let count = |text: &str| -> u32 { (text.len() as u32 / 6).max(1) };

        let message_tokens: u32 = self
            .messages
            .iter()
            .map(|message| {
                let text: Vec<&str> = message
                    .content
                    .iter()
                    .filter_map(ContentBlock::as_text)
                    .collect();
                count(&text.join(" "))
            })
            .sum();
        let system_tokens = self.system.as_deref().map_or(0, count);
        message_tokens + system_tokens
    }
}

/// A response from a model conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverseResponse {
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<StopReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

#[cfg(test)]
mod converse_test;

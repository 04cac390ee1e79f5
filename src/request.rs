//! Wire types for the chat-completion exchange.
//!
//! The request always has the same shape: a system message followed by a
//! user message whose content is a text part and then an image part. Only the
//! base64 payload changes between images.

use crate::config::ProbeConfig;
use crate::pipeline::encode::EncodedImage;
use serde::{Deserialize, Serialize};

/// Request body POSTed to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<RequestMessage>,
    pub model: String,
    pub max_tokens: u32,
}

/// One role-tagged message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMessage {
    pub role: Role,
    pub content: MessageContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// Message content: a bare string or an ordered list of parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// A single part of a multimodal user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

impl RequestMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    /// User turn carrying `text` first and the image second.
    pub fn user_with_image(text: impl Into<String>, image: &EncodedImage) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: text.into() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.data_uri(),
                    },
                },
            ]),
        }
    }
}

/// Assemble the request document for `image`.
///
/// The declared MIME type comes from the encoded image; it is not checked
/// against the actual bytes.
pub fn build_request(image: &EncodedImage, config: &ProbeConfig) -> ChatRequest {
    ChatRequest {
        messages: vec![
            RequestMessage::system(&config.system_prompt),
            RequestMessage::user_with_image(&config.prompt, image),
        ],
        model: config.model.clone(),
        max_tokens: config.max_tokens,
    }
}

// ── Response ─────────────────────────────────────────────────────────────

/// Successful response body. Fields beyond `choices[].message.content` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::encode::encode_image;
    use serde_json::{json, Value};

    fn request_json(bytes: &[u8]) -> Value {
        let config = ProbeConfig::default();
        let image = encode_image(bytes, &config.mime_type);
        serde_json::to_value(build_request(&image, &config)).expect("serialise")
    }

    #[test]
    fn matches_canonical_document() {
        let doc = request_json(b"\x89PNG");
        assert_eq!(
            doc,
            json!({
                "messages": [
                    {
                        "role": "system",
                        "content": "This is a chat between a user and an assistant. \
The assistant is helping the user to describe an image."
                    },
                    {
                        "role": "user",
                        "content": [
                            { "type": "text", "text": "What's in this image?" },
                            {
                                "type": "image_url",
                                "image_url": { "url": "data:image/png;base64,iVBORw==" }
                            }
                        ]
                    }
                ],
                "model": "llava",
                "max_tokens": 500
            })
        );
    }

    #[test]
    fn two_messages_text_part_before_image_part() {
        let doc = request_json(b"anything");
        let messages = doc["messages"].as_array().expect("messages array");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");

        let parts = messages[1]["content"].as_array().expect("parts array");
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[1]["type"], "image_url");
    }

    #[test]
    fn only_the_image_url_depends_on_bytes() {
        let mut a = request_json(b"first image");
        let mut b = request_json(b"second, longer image");
        let url_a = a["messages"][1]["content"][1]["image_url"]["url"].take();
        let url_b = b["messages"][1]["content"][1]["image_url"]["url"].take();

        assert_ne!(url_a, url_b);
        assert_eq!(a, b);
    }

    #[test]
    fn declared_mime_is_not_checked_against_bytes() {
        // JPEG magic bytes still go out labelled as PNG.
        let doc = request_json(&[0xFF, 0xD8, 0xFF, 0xE0]);
        let url = doc["messages"][1]["content"][1]["image_url"]["url"]
            .as_str()
            .unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn parses_llava_server_reply() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"a cat"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "a cat");
    }

    #[test]
    fn round_trips_request_through_serde() {
        let config = ProbeConfig::default();
        let req = build_request(&encode_image(b"xyz", "image/png"), &config);
        let text = serde_json::to_string(&req).unwrap();
        let back: ChatRequest = serde_json::from_str(&text).unwrap();
        assert_eq!(back, req);
    }
}

//! Prompt text sent to the llava server.
//!
//! Callers can override both via [`crate::config::ProbeConfig`]; the constants
//! here are what the probe sends when nothing is overridden.

/// System message placed first in every request.
pub const DEFAULT_SYSTEM_PROMPT: &str = "This is a chat between a user and an assistant. \
The assistant is helping the user to describe an image.";

/// Text part of the user message, sent ahead of the image.
pub const DEFAULT_USER_PROMPT: &str = "What's in this image?";

/// Label printed in front of the server's answer.
pub const RESULT_LABEL: &str = "Image description";

// src/generation/mod.rs
// Chat and image generation capabilities behind the HTTP layer

pub mod canned;

use async_trait::async_trait;

use crate::error::Result;

pub use canned::{CANNED_CHAT_REPLY, CannedChat, PLACEHOLDER_IMAGE_URL, PlaceholderImages};

/// Produces a companion reply for a user message
#[async_trait]
pub trait ChatResponder: Send + Sync {
    /// Responder name for logging/debugging
    fn name(&self) -> &'static str;

    async fn reply(&self, message: &str) -> Result<String>;
}

/// Produces image URLs for a requested style
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generator name for logging/debugging
    fn name(&self) -> &'static str;

    /// Render a persona avatar
    async fn avatar(&self, style: &str) -> Result<String>;

    /// Render a free-form image
    async fn image(&self, style: &str) -> Result<String>;
}

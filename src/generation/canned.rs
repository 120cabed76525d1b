// src/generation/canned.rs
// Fixed responses used until real chat and image backends are wired in

use async_trait::async_trait;
use tracing::debug;

use super::{ChatResponder, ImageGenerator};
use crate::error::Result;

pub const CANNED_CHAT_REPLY: &str = "Hey! I'm doing great, thanks for asking.";

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/512";

/// Answers every message with the same sentence
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedChat;

#[async_trait]
impl ChatResponder for CannedChat {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn reply(&self, message: &str) -> Result<String> {
        debug!(chars = message.len(), "Canned chat reply");
        Ok(CANNED_CHAT_REPLY.to_string())
    }
}

/// Returns a placeholder URL regardless of style
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderImages;

#[async_trait]
impl ImageGenerator for PlaceholderImages {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    async fn avatar(&self, style: &str) -> Result<String> {
        debug!(style, "Placeholder avatar");
        Ok(PLACEHOLDER_IMAGE_URL.to_string())
    }

    async fn image(&self, style: &str) -> Result<String> {
        debug!(style, "Placeholder image");
        Ok(PLACEHOLDER_IMAGE_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_chat_ignores_message() {
        let chat = CannedChat;
        let a = chat.reply("how are you?").await.unwrap();
        let b = chat.reply("").await.unwrap();
        assert_eq!(a, CANNED_CHAT_REPLY);
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_images_ignore_style() {
        let images = PlaceholderImages;
        assert_eq!(images.avatar("anime").await.unwrap(), PLACEHOLDER_IMAGE_URL);
        assert_eq!(images.avatar("watercolor").await.unwrap(), PLACEHOLDER_IMAGE_URL);
        assert_eq!(images.image("pixel art").await.unwrap(), PLACEHOLDER_IMAGE_URL);
    }
}

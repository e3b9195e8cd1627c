//! Assistant reply capability.
//!
//! The chat view talks to a `Responder` rather than a concrete backend, so a
//! real inference service can be swapped in without touching the view. The
//! only implementation today is [`CannedResponder`], which waits a fixed
//! delay and echoes a templated reply.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

const DEFAULT_REPLY_DELAY_MS: u64 = 1_000;

/// Produces an assistant reply for a prompt against a named document.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn reply(&self, document_name: &str, prompt: &str) -> Result<String>;
}

/// Placeholder backend: sleeps for a configurable delay and returns a canned
/// reply interpolating the document name and the prompt.
pub struct CannedResponder {
    delay: Duration,
}

impl CannedResponder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Reads the reply delay from `DOCCHAT_REPLY_DELAY_MS`, falling back to
    /// one second.
    pub fn from_env() -> Self {
        let millis = std::env::var("DOCCHAT_REPLY_DELAY_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REPLY_DELAY_MS);
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl Responder for CannedResponder {
    async fn reply(&self, document_name: &str, prompt: &str) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        Ok(format!(
            "I'm analyzing the document \"{document_name}\". \
             This is a simulated response to your query: \"{prompt}\""
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn canned_reply_references_document_and_prompt() {
        let responder = CannedResponder::new(Duration::from_secs(1));
        let reply = responder
            .reply("notes.txt", "what is this about?")
            .await
            .unwrap();
        assert!(reply.contains("notes.txt"));
        assert!(reply.contains("what is this about?"));
    }

    #[tokio::test(start_paused = true)]
    async fn reply_waits_for_configured_delay() {
        let responder = CannedResponder::new(Duration::from_millis(250));
        let started = tokio::time::Instant::now();
        responder.reply("a.txt", "hi").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}

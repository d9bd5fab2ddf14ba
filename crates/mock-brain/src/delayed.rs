//! Slow provider stand-in.

use std::time::Duration;

use brain_core::{async_trait, BrainError, ChatMessage, ChatModel};
use tokio::time::sleep;

/// Sleeps for a fixed latency before forwarding each completion.
///
/// Lets tests hold a turn open long enough to race a second turn, a reset,
/// or a cancellation against it.
pub struct DelayedModel<M: ChatModel> {
    inner: M,
    delay: Duration,
}

impl<M: ChatModel> DelayedModel<M> {
    /// Forward to `inner` after `delay`.
    pub fn new(inner: M, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Same as [`DelayedModel::new`] with the latency in milliseconds.
    pub fn with_millis(inner: M, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// The wrapped model.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

#[async_trait]
impl<M: ChatModel> ChatModel for DelayedModel<M> {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, BrainError> {
        sleep(self.delay).await;
        self.inner.complete(messages).await
    }

    fn name(&self) -> &str {
        "DelayedModel"
    }
}

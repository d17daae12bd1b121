use super::{Notifier, NotifyResult};
use async_trait::async_trait;

/// Writes notifications to the log instead of a topic. For local runs.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn publish(&self, topic: &str, message: &str) -> NotifyResult<()> {
        tracing::info!(topic = %topic, message = %message, "Notification (log backend)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_succeeds() {
        let notifier = LogNotifier::new();
        assert!(notifier.publish("local", "Resized a.jpg → resized/a.jpg").await.is_ok());
    }
}

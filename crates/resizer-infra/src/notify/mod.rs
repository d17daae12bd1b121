//! Notification collaborator
//!
//! After a derivative is stored the pipeline publishes one human-readable
//! message naming the source and destination keys.

mod factory;
mod logging;
#[cfg(feature = "notify-sns")]
mod sns;

use async_trait::async_trait;

pub use factory::create_notifier;
pub use logging::LogNotifier;
#[cfg(feature = "notify-sns")]
pub use sns::SnsNotifier;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Publish to {topic} failed: {message}")]
    PublishFailed { topic: String, message: String },

    #[error("Notifier configuration error: {0}")]
    ConfigError(String),
}

pub type NotifyResult<T> = Result<T, NotifyError>;

/// Publishes pipeline notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish `message` to `topic`.
    async fn publish(&self, topic: &str, message: &str) -> NotifyResult<()>;
}

/// Message body announcing a finished resize.
pub fn notification_message(source_key: &str, dest_key: &str) -> String {
    format!("Resized {} → {}", source_key, dest_key)
}

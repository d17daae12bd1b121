use super::{Notifier, NotifyError, NotifyResult};
use async_trait::async_trait;
use aws_sdk_sns::config::Region;
use aws_sdk_sns::Client as SnsClient;
use std::time::Instant;

/// Publishes notifications to an SNS topic.
#[derive(Clone, Debug)]
pub struct SnsNotifier {
    client: SnsClient,
}

impl SnsNotifier {
    pub fn new(client: SnsClient) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS credential and region chain.
    ///
    /// `region` overrides the region found in the environment.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;
        Self::new(SnsClient::new(&config))
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, topic: &str, message: &str) -> NotifyResult<()> {
        let start = Instant::now();

        let result = self
            .client
            .publish()
            .topic_arn(topic)
            .message(message)
            .send()
            .await;

        match result {
            Ok(output) => {
                tracing::info!(
                    topic = %topic,
                    message_id = ?output.message_id(),
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Notification published"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    topic = %topic,
                    error = %e,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Failed to publish notification"
                );
                Err(NotifyError::PublishFailed {
                    topic: topic.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}

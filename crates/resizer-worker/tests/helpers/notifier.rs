use async_trait::async_trait;
use resizer_infra::{Notifier, NotifyError, NotifyResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Notifier that keeps every published `(topic, message)` pair.
#[derive(Default)]
pub struct RecordingNotifier {
    published: Mutex<Vec<(String, String)>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent publish fail.
    pub fn fail_publishes(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn published(&self) -> Vec<(String, String)> {
        self.published.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.published().into_iter().map(|(_, m)| m).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn publish(&self, topic: &str, message: &str) -> NotifyResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(NotifyError::PublishFailed {
                topic: topic.to_string(),
                message: "injected failure".to_string(),
            });
        }
        self.published
            .lock()
            .unwrap()
            .push((topic.to_string(), message.to_string()));
        Ok(())
    }
}

#![allow(dead_code)]

pub mod fixtures;
pub mod notifier;
pub mod storage;

use resizer_core::{PipelineConfig, Settings};
use resizer_infra::Notifier;
use resizer_storage::Storage;
use std::sync::Arc;

pub use notifier::RecordingNotifier;
pub use storage::RecordingStorage;

pub const SOURCE_BUCKET: &str = "uploads";
pub const DEST_BUCKET: &str = "thumbnails";
pub const TOPIC: &str = "arn:aws:sns:us-east-1:123456789012:resized";

/// Test pipeline with recording collaborators
pub struct TestPipeline {
    pub storage: Arc<RecordingStorage>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestPipeline {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RecordingStorage::new()),
            notifier: Arc::new(RecordingNotifier::new()),
        }
    }

    pub fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        self.notifier.clone()
    }
}

pub fn config(resize_width: u32) -> PipelineConfig {
    PipelineConfig {
        source_bucket: SOURCE_BUCKET.to_string(),
        dest_bucket: DEST_BUCKET.to_string(),
        sns_topic_arn: TOPIC.to_string(),
        resize_width,
        jpeg_quality: 85,
    }
}

/// Settings built from the given variables only; the process environment is never read.
pub fn settings(vars: &[(&str, &str)]) -> Settings {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(move |name| {
        vars.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    })
}

pub fn complete_settings() -> Settings {
    settings(&[
        ("SOURCE_BUCKET", SOURCE_BUCKET),
        ("DEST_BUCKET", DEST_BUCKET),
        ("SNS_TOPIC_ARN", TOPIC),
        ("RESIZE_WIDTH", "100"),
    ])
}

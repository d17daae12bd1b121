//! Record processor
//!
//! Takes one eligible record through fetch → resize → store → notify. Every
//! stage failure comes back as a [`RecordError`]; nothing here aborts the
//! batch, and nothing is retried.

use resizer_core::PipelineConfig;
use resizer_infra::{notification_message, Notifier, NotifyError};
use resizer_processing::{CodecError, EligibleRecord, ImageTransformer, SkipReason};
use resizer_storage::{destination_key, Storage, StorageError};
use std::sync::Arc;
use std::time::Instant;

/// Per-record failure, one kind per pipeline stage.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Failed to fetch {key}: {source}")]
    FetchFailure {
        key: String,
        #[source]
        source: StorageError,
    },

    #[error("Cannot identify image file: {key} ({reason})")]
    UnidentifiedImage { key: String, reason: String },

    #[error("Unsupported format for {key}: {format}")]
    UnsupportedFormat { key: String, format: String },

    /// Encoder failure, or a panic on the codec's blocking thread.
    #[error("Failed to encode {key}: {reason}")]
    EncodeFailure { key: String, reason: String },

    #[error("Failed to store {dest_key} for {key}: {source}")]
    StoreFailure {
        key: String,
        dest_key: String,
        #[source]
        source: StorageError,
    },

    #[error("Failed to publish notification for {key}: {source}")]
    PublishFailure {
        key: String,
        #[source]
        source: NotifyError,
    },
}

impl RecordError {
    fn from_codec(key: &str, err: CodecError) -> Self {
        let key = key.to_string();
        match err {
            CodecError::UnidentifiedImage(reason) => RecordError::UnidentifiedImage { key, reason },
            CodecError::UnsupportedFormat(format) => RecordError::UnsupportedFormat { key, format },
            CodecError::Encode(reason) => RecordError::EncodeFailure { key, reason },
        }
    }

    /// Source object key the failure belongs to.
    pub fn key(&self) -> &str {
        match self {
            RecordError::FetchFailure { key, .. }
            | RecordError::UnidentifiedImage { key, .. }
            | RecordError::UnsupportedFormat { key, .. }
            | RecordError::EncodeFailure { key, .. }
            | RecordError::StoreFailure { key, .. }
            | RecordError::PublishFailure { key, .. } => key,
        }
    }
}

/// A derivative that was stored and announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedRecord {
    pub source_key: String,
    pub dest_key: String,
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
    pub content_type: Option<String>,
}

/// What happened to one record of a batch.
#[derive(Debug)]
pub enum RecordOutcome {
    Processed(ProcessedRecord),
    Skipped(SkipReason),
    Failed(RecordError),
    /// Processing panicked; the panic was contained at the record boundary.
    Panicked(String),
}

impl RecordOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RecordOutcome::Processed(_))
    }
}

/// Runs the per-record pipeline against injected collaborators.
#[derive(Clone)]
pub struct RecordProcessor {
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    config: Arc<PipelineConfig>,
}

impl RecordProcessor {
    pub fn new(
        config: PipelineConfig,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            storage,
            notifier,
            config: Arc::new(config),
        }
    }

    pub async fn process(&self, record: &EligibleRecord) -> Result<ProcessedRecord, RecordError> {
        let start = Instant::now();
        let key = record.key.as_str();

        tracing::info!(bucket = %record.bucket, key = %key, "Processing record");

        let object = self
            .storage
            .get_object(&record.bucket, key)
            .await
            .map_err(|source| RecordError::FetchFailure {
                key: key.to_string(),
                source,
            })?;

        let data = object.data;
        let hint = record.extension.clone();
        let width = self.config.resize_width;
        let quality = self.config.jpeg_quality;
        let output = tokio::task::spawn_blocking(move || {
            ImageTransformer::transform(&data, width, Some(hint.as_str()), quality)
        })
        .await
        .map_err(|e| RecordError::EncodeFailure {
            key: key.to_string(),
            reason: format!("codec task failed: {}", e),
        })?
        .map_err(|e| RecordError::from_codec(key, e))?;

        // Keep the original content type; fall back to the encoded format's
        let content_type = object
            .content_type
            .or_else(|| output.format.mime_type().map(str::to_string));

        let dest_key = destination_key(key);
        let size_bytes = output.data.len();
        self.storage
            .put_object(
                &self.config.dest_bucket,
                &dest_key,
                output.data,
                content_type.as_deref(),
            )
            .await
            .map_err(|source| RecordError::StoreFailure {
                key: key.to_string(),
                dest_key: dest_key.clone(),
                source,
            })?;

        self.notifier
            .publish(
                &self.config.sns_topic_arn,
                &notification_message(key, &dest_key),
            )
            .await
            .map_err(|source| RecordError::PublishFailure {
                key: key.to_string(),
                source,
            })?;

        tracing::info!(
            key = %key,
            dest_key = %dest_key,
            width = output.width,
            height = output.height,
            size_bytes = size_bytes as u64,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Record processed"
        );

        Ok(ProcessedRecord {
            source_key: key.to_string(),
            dest_key,
            width: output.width,
            height: output.height,
            size_bytes,
            content_type,
        })
    }
}

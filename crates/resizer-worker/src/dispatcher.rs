//! Batch dispatcher
//!
//! Records are handled strictly in batch order, one at a time. Whatever a
//! single record does (skip, fail, panic) the rest of the batch still runs;
//! only an incomplete configuration stops an invocation, and it does so before
//! the first record is looked at.

use futures::FutureExt;
use resizer_core::{EventRecord, InvocationResult, PipelineConfig, S3Notification, Settings};
use resizer_infra::Notifier;
use resizer_processing::RecordValidator;
use resizer_storage::Storage;
use std::any::Any;
use std::convert::Infallible;
use std::fmt::Display;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use crate::processor::{RecordOutcome, RecordProcessor};

/// Tally of one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &RecordOutcome) {
        self.total += 1;
        match outcome {
            RecordOutcome::Processed(_) => self.processed += 1,
            RecordOutcome::Skipped(_) => self.skipped += 1,
            RecordOutcome::Failed(_) | RecordOutcome::Panicked(_) => self.failed += 1,
        }
    }

    /// Records that passed validation, whether or not they then succeeded.
    pub fn eligible(&self) -> usize {
        self.processed + self.failed
    }
}

impl From<BatchSummary> for InvocationResult {
    fn from(summary: BatchSummary) -> Self {
        InvocationResult::processed(summary.processed)
    }
}

pub struct Dispatcher {
    validator: RecordValidator,
    processor: RecordProcessor,
}

impl Dispatcher {
    pub fn new(
        config: PipelineConfig,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            validator: RecordValidator::from_config(&config),
            processor: RecordProcessor::new(config, storage, notifier),
        }
    }

    /// Validate and process every record of `batch`, in order.
    pub async fn process_batch(&self, batch: &S3Notification) -> BatchSummary {
        let start = Instant::now();
        let mut summary = BatchSummary::default();

        for record in &batch.records {
            let outcome = self.process_record_contained(record).await;
            summary.record(&outcome);
        }

        tracing::info!(
            total = summary.total,
            processed = summary.processed,
            skipped = summary.skipped,
            failed = summary.failed,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Batch finished"
        );

        summary
    }

    /// Validate one record and, when eligible, run it through the processor.
    pub async fn process_record(&self, record: &EventRecord) -> RecordOutcome {
        let eligible = match self.validator.validate(record) {
            Ok(eligible) => eligible,
            Err(reason) => {
                tracing::info!(
                    bucket = record.bucket_name().unwrap_or_default(),
                    key = record.raw_key().unwrap_or_default(),
                    reason = %reason,
                    "Record skipped"
                );
                return RecordOutcome::Skipped(reason);
            }
        };

        match self.processor.process(&eligible).await {
            Ok(processed) => RecordOutcome::Processed(processed),
            Err(e) => {
                tracing::error!(
                    bucket = %eligible.bucket,
                    key = %e.key(),
                    error = %e,
                    "Record processing failed"
                );
                RecordOutcome::Failed(e)
            }
        }
    }

    async fn process_record_contained(&self, record: &EventRecord) -> RecordOutcome {
        match AssertUnwindSafe(self.process_record(record))
            .catch_unwind()
            .await
        {
            Ok(outcome) => outcome,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(
                    key = record.raw_key().unwrap_or_default(),
                    error = %message,
                    "Record processing panicked"
                );
                RecordOutcome::Panicked(message)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run one invocation: check configuration, then process the whole batch.
///
/// Missing or invalid configuration yields a fatal result without touching
/// any record or collaborator.
pub async fn dispatch(
    settings: &Settings,
    batch: &S3Notification,
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
) -> InvocationResult {
    dispatch_with(settings, batch, || async move {
        Ok::<_, Infallible>((storage, notifier))
    })
    .await
}

/// Like [`dispatch`], but the collaborators are built by `build` once the
/// configuration has been accepted.
///
/// A failing `build` is fatal for the invocation.
pub async fn dispatch_with<F, Fut, E>(
    settings: &Settings,
    batch: &S3Notification,
    build: F,
) -> InvocationResult
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(Arc<dyn Storage>, Arc<dyn Notifier>), E>>,
    E: Display,
{
    let config = match settings.require() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, records = batch.records.len(), "Invocation aborted");
            return InvocationResult::fatal(e.to_string());
        }
    };

    let (storage, notifier) = match build().await {
        Ok(collaborators) => collaborators,
        Err(e) => {
            tracing::error!(error = %e, records = batch.records.len(), "Collaborator setup failed");
            return InvocationResult::fatal(e.to_string());
        }
    };

    Dispatcher::new(config, storage, notifier)
        .process_batch(batch)
        .await
        .into()
}

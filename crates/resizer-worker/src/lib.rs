//! Resizer Worker Library
//!
//! Runs one invocation's batch of storage events:
//! - `RecordProcessor` takes one eligible record through fetch, resize, store and notify
//! - `Dispatcher` validates each record, drives the processor and tallies the batch

pub mod dispatcher;
pub mod processor;

pub use dispatcher::{dispatch, dispatch_with, BatchSummary, Dispatcher};
pub use processor::{ProcessedRecord, RecordError, RecordOutcome, RecordProcessor};

//! Domain models for the resize pipeline.

pub mod event;
pub mod invocation;

pub use event::{EventRecord, S3Bucket, S3Entity, S3Notification, S3Object};
pub use invocation::InvocationResult;

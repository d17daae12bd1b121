//! Resizer Core Library
//!
//! This crate provides the configuration surface, the inbound event model, the
//! invocation result and the error types shared by every resizer component.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{LogFormat, PipelineConfig, Settings};
pub use error::ConfigError;
pub use models::{EventRecord, InvocationResult, S3Notification};
pub use storage_types::{NotifierBackend, StorageBackend};

//! Resizer Infrastructure Library
//!
//! This crate provides the infrastructure the pipeline talks to:
//! - Notification publishing (SNS, or tracing for local runs)
//! - Tracing initialization

pub mod notify;

#[cfg(feature = "observability-basic")]
pub mod telemetry;

// Re-export commonly used types
pub use notify::{
    create_notifier, notification_message, LogNotifier, Notifier, NotifyError, NotifyResult,
};

#[cfg(feature = "notify-sns")]
pub use notify::SnsNotifier;

#[cfg(feature = "observability-basic")]
pub use telemetry::init_telemetry;

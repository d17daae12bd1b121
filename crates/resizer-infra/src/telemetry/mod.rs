//! Tracing initialization
//!
//! One subscriber per process. Lambda reuses the process across invocations,
//! so initialization happens in `main`, never per invocation.

mod init_basic;

pub use init_basic::{default_filter, init_telemetry};

use serde::{Deserialize, Serialize};

/// The single value an invocation hands back to its harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResult {
    pub const OK: u16 = 200;
    pub const FATAL: u16 = 500;

    /// Summary for a batch that ran to completion.
    pub fn processed(count: usize) -> Self {
        Self {
            status_code: Self::OK,
            body: format!("Successfully processed {} images", count),
        }
    }

    /// Invocation aborted before any record was touched.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            status_code: Self::FATAL,
            body: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == Self::OK
    }
}

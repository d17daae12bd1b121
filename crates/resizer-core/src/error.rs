//! Error types module
//!
//! Configuration errors are the only invocation-level failures: every other
//! failure is contained at the record boundary by the worker.

/// Configuration problems detected before any record is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// One or more required variables are absent (or empty).
    #[error("Missing environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// A variable is present but cannot be used.
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_names_in_order() {
        let err = ConfigError::Missing(vec!["SOURCE_BUCKET", "SNS_TOPIC_ARN"]);
        assert_eq!(
            err.to_string(),
            "Missing environment variables: SOURCE_BUCKET, SNS_TOPIC_ARN"
        );
    }

    #[test]
    fn invalid_mentions_variable() {
        let err = ConfigError::Invalid {
            name: "RESIZE_WIDTH",
            value: "wide".to_string(),
            reason: "must be a positive integer",
        };
        assert!(err.to_string().contains("RESIZE_WIDTH"));
        assert!(err.to_string().contains("\"wide\""));
    }
}

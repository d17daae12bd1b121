//! Configuration module
//!
//! Settings are read from the environment once per invocation. Loading never
//! fails on absent values: required fields stay `None` until
//! [`Settings::require`] turns them into a [`PipelineConfig`], which is where
//! the batch dispatcher decides whether the invocation can run at all.

use std::env;

use crate::constants::{DEFAULT_JPEG_QUALITY, DEFAULT_RESIZE_WIDTH};
use crate::error::ConfigError;
use crate::storage_types::{NotifierBackend, StorageBackend};

pub const SOURCE_BUCKET: &str = "SOURCE_BUCKET";
pub const DEST_BUCKET: &str = "DEST_BUCKET";
pub const SNS_TOPIC_ARN: &str = "SNS_TOPIC_ARN";
pub const RESIZE_WIDTH: &str = "RESIZE_WIDTH";
pub const JPEG_QUALITY: &str = "JPEG_QUALITY";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Everything the environment says about the pipeline, required or not.
#[derive(Clone, Debug)]
pub struct Settings {
    pub source_bucket: Option<String>,
    pub dest_bucket: Option<String>,
    pub sns_topic_arn: Option<String>,
    /// Raw `RESIZE_WIDTH`; parsed by [`Settings::require`].
    pub resize_width: Option<String>,
    pub jpeg_quality: u8,
    // Collaborator selection
    pub storage_backend: StorageBackend,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
    pub notifier_backend: NotifierBackend,
    // Observability
    pub environment: String,
    pub log_format: LogFormat,
}

/// The immutable configuration one invocation runs with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub source_bucket: String,
    pub dest_bucket: String,
    pub sns_topic_arn: String,
    pub resize_width: u32,
    pub jpeg_quality: u8,
}

impl Settings {
    /// Read settings from the process environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as absent
        let var = |name: &str| lookup(name).filter(|s| !s.trim().is_empty());

        let storage_backend = var("STORAGE_BACKEND")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let notifier_backend = var("NOTIFIER_BACKEND")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let jpeg_quality = var(JPEG_QUALITY)
            .and_then(|s| s.trim().parse::<u8>().ok())
            .unwrap_or(DEFAULT_JPEG_QUALITY)
            .clamp(1, 100);

        let log_format = match var("LOG_FORMAT").map(|s| s.to_lowercase()) {
            Some(ref f) if f == "json" => LogFormat::Json,
            Some(ref f) if f == "pretty" || f == "text" => LogFormat::Pretty,
            // JSON lines by default inside Lambda
            _ if var("AWS_LAMBDA_FUNCTION_NAME").is_some() => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Settings {
            source_bucket: var(SOURCE_BUCKET),
            dest_bucket: var(DEST_BUCKET),
            sns_topic_arn: var(SNS_TOPIC_ARN),
            resize_width: var(RESIZE_WIDTH),
            jpeg_quality,
            storage_backend,
            s3_region: var("S3_REGION").or_else(|| var("AWS_REGION")),
            s3_endpoint: var("S3_ENDPOINT"),
            notifier_backend,
            environment: var("ENVIRONMENT")
                .or_else(|| var("APP_ENV"))
                .unwrap_or_else(|| "development".to_string()),
            log_format,
        }
    }

    /// Names of required variables that are absent, in declaration order.
    ///
    /// A variable that is set but empty or whitespace-only (`SOURCE_BUCKET=""`)
    /// counts as absent here, so such an environment is reported as
    /// incomplete rather than running against a bucket with no name.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (SOURCE_BUCKET, self.source_bucket.is_none()),
            (DEST_BUCKET, self.dest_bucket.is_none()),
            (SNS_TOPIC_ARN, self.sns_topic_arn.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect()
    }

    /// Check completeness and produce the configuration for one invocation.
    pub fn require(&self) -> Result<PipelineConfig, ConfigError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let resize_width = match self.resize_width.as_deref() {
            None => DEFAULT_RESIZE_WIDTH,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(width) if width > 0 => width,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: RESIZE_WIDTH,
                        value: raw.to_string(),
                        reason: "must be a positive integer",
                    })
                }
            },
        };

        Ok(PipelineConfig {
            source_bucket: self.source_bucket.clone().unwrap_or_default(),
            dest_bucket: self.dest_bucket.clone().unwrap_or_default(),
            sns_topic_arn: self.sns_topic_arn.clone().unwrap_or_default(),
            resize_width,
            jpeg_quality: self.jpeg_quality,
        })
    }

    /// Check if the pipeline is running in production mode
    pub fn is_production(&self) -> bool {
        matches!(
            self.environment.to_lowercase().as_str(),
            "production" | "prod"
        )
    }
}

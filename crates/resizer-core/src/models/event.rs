//! Inbound S3 object notification.
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! notification document is ignored. Every field is optional so that one
//! malformed record is skipped on its own instead of failing the whole batch.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

use crate::constants::EVENT_SOURCE_S3;

/// A batch of event records delivered to one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Notification {
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(default)]
    pub event_source: Option<String>,
    #[serde(default)]
    pub s3: Option<S3Entity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Entity {
    #[serde(default)]
    pub bucket: Option<S3Bucket>,
    #[serde(default)]
    pub object: Option<S3Object>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Bucket {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Object {
    /// Percent-encoded object key, as S3 delivers it.
    #[serde(default)]
    pub key: Option<String>,
}

impl EventRecord {
    /// Build an S3 object-created record.
    pub fn s3(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            event_source: Some(EVENT_SOURCE_S3.to_string()),
            s3: Some(S3Entity {
                bucket: Some(S3Bucket {
                    name: Some(bucket.into()),
                }),
                object: Some(S3Object {
                    key: Some(key.into()),
                }),
            }),
        }
    }

    pub fn event_source(&self) -> Option<&str> {
        self.event_source.as_deref()
    }

    pub fn bucket_name(&self) -> Option<&str> {
        self.s3.as_ref()?.bucket.as_ref()?.name.as_deref()
    }

    /// The object key exactly as delivered (still percent-encoded).
    pub fn raw_key(&self) -> Option<&str> {
        self.s3.as_ref()?.object.as_ref()?.key.as_deref()
    }

    /// The object key with percent-escapes decoded. `+` is left untouched.
    pub fn decoded_key(&self) -> Option<String> {
        self.raw_key().map(decode_key)
    }
}

/// Percent-decode an object key; invalid UTF-8 sequences become U+FFFD.
pub fn decode_key(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTIFICATION: &str = r#"{
        "Records": [
            {
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "bucket": { "name": "uploads", "arn": "arn:aws:s3:::uploads" },
                    "object": { "key": "photos/summer%202024/beach.jpg", "size": 1024 }
                }
            },
            { "eventSource": "aws:sqs" }
        ]
    }"#;

    #[test]
    fn deserializes_s3_notification() {
        let batch: S3Notification = serde_json::from_str(NOTIFICATION).unwrap();
        assert_eq!(batch.records.len(), 2);

        let first = &batch.records[0];
        assert_eq!(first.event_source(), Some("aws:s3"));
        assert_eq!(first.bucket_name(), Some("uploads"));
        assert_eq!(first.raw_key(), Some("photos/summer%202024/beach.jpg"));
        assert_eq!(
            first.decoded_key().as_deref(),
            Some("photos/summer 2024/beach.jpg")
        );

        let second = &batch.records[1];
        assert_eq!(second.event_source(), Some("aws:sqs"));
        assert_eq!(second.bucket_name(), None);
        assert_eq!(second.decoded_key(), None);
    }

    #[test]
    fn missing_records_is_an_empty_batch() {
        let batch: S3Notification = serde_json::from_str("{}").unwrap();
        assert!(batch.records.is_empty());
    }

    #[test]
    fn plus_sign_is_not_treated_as_space() {
        assert_eq!(decode_key("a+b%2Bc.png"), "a+b+c.png");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(decode_key("bad%FF.png"), "bad\u{FFFD}.png");
    }

    #[test]
    fn s3_constructor_round_trips_through_json() {
        let record = EventRecord::s3("uploads", "cat.png");
        let json = serde_json::to_string(&record).unwrap();
        let parsed: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert!(json.contains("\"eventSource\":\"aws:s3\""));
    }
}

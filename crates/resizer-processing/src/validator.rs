use resizer_core::constants::{ALLOWED_EXTENSIONS, EVENT_SOURCE_S3};
use resizer_core::{EventRecord, PipelineConfig};

/// Why a record was excluded from processing.
///
/// These are expected outcomes, not failures: the caller logs them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("Not a storage event: {0}")]
    NotStorageEvent(String),

    #[error("Record has no {0}")]
    MissingField(&'static str),

    #[error("Skipping record from unexpected bucket: {actual} (expected {expected})")]
    SourceMismatch { expected: String, actual: String },

    #[error("Skipping non-image file: {key}")]
    UnsupportedExtension { key: String, extension: String },
}

/// A record that passed validation, with its key already percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleRecord {
    pub bucket: String,
    pub key: String,
    /// Lower-cased extension including the leading dot (`.jpg`).
    pub extension: String,
}

/// Decides which event records the pipeline should act on.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    source_bucket: String,
}

impl RecordValidator {
    pub fn new(source_bucket: impl Into<String>) -> Self {
        Self {
            source_bucket: source_bucket.into(),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.source_bucket.clone())
    }

    pub fn validate(&self, record: &EventRecord) -> Result<EligibleRecord, SkipReason> {
        match record.event_source() {
            Some(EVENT_SOURCE_S3) => {}
            Some(other) => return Err(SkipReason::NotStorageEvent(other.to_string())),
            None => return Err(SkipReason::NotStorageEvent("<none>".to_string())),
        }

        let key = record
            .decoded_key()
            .ok_or(SkipReason::MissingField("object key"))?;
        let bucket = record
            .bucket_name()
            .ok_or(SkipReason::MissingField("bucket name"))?;

        if bucket != self.source_bucket {
            return Err(SkipReason::SourceMismatch {
                expected: self.source_bucket.clone(),
                actual: bucket.to_string(),
            });
        }

        let extension = file_extension(&key);
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(SkipReason::UnsupportedExtension { key, extension });
        }

        Ok(EligibleRecord {
            bucket: bucket.to_string(),
            key,
            extension,
        })
    }
}

/// Lower-cased extension of the key's last path segment, including the dot.
///
/// Leading dots of the file name do not start an extension, so `.png` and
/// `photos/..jpg` have none. Returns an empty string when there is no extension.
pub fn file_extension(key: &str) -> String {
    let name = key.rsplit('/').next().unwrap_or(key);
    let stem = name.trim_start_matches('.');
    match stem.rfind('.') {
        Some(idx) => stem[idx..].to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resizer_core::models::{S3Bucket, S3Entity, S3Object};

    fn validator() -> RecordValidator {
        RecordValidator::new("uploads")
    }

    #[test]
    fn accepts_allowed_extensions_case_insensitively() {
        for key in ["a.jpg", "b.JPEG", "dir/c.Png"] {
            let eligible = validator().validate(&EventRecord::s3("uploads", key)).unwrap();
            assert_eq!(eligible.bucket, "uploads");
            assert_eq!(eligible.key, key);
        }
    }

    #[test]
    fn decodes_key_before_checking() {
        let record = EventRecord::s3("uploads", "summer%202024/beach%2EJPG");
        let eligible = validator().validate(&record).unwrap();
        assert_eq!(eligible.key, "summer 2024/beach.JPG");
        assert_eq!(eligible.extension, ".jpg");
    }

    #[test]
    fn rejects_other_buckets() {
        let err = validator()
            .validate(&EventRecord::s3("someone-else", "a.jpg"))
            .unwrap_err();
        assert_eq!(
            err,
            SkipReason::SourceMismatch {
                expected: "uploads".to_string(),
                actual: "someone-else".to_string(),
            }
        );
    }

    #[test]
    fn rejects_gif() {
        let err = validator()
            .validate(&EventRecord::s3("uploads", "anim.gif"))
            .unwrap_err();
        assert!(matches!(
            err,
            SkipReason::UnsupportedExtension { ref extension, .. } if extension == ".gif"
        ));
    }

    #[test]
    fn rejects_non_storage_events() {
        let mut record = EventRecord::s3("uploads", "a.jpg");
        record.event_source = Some("aws:sqs".to_string());
        assert_eq!(
            validator().validate(&record).unwrap_err(),
            SkipReason::NotStorageEvent("aws:sqs".to_string())
        );

        record.event_source = None;
        assert!(matches!(
            validator().validate(&record),
            Err(SkipReason::NotStorageEvent(_))
        ));
    }

    #[test]
    fn reports_missing_fields() {
        let record = EventRecord {
            event_source: Some("aws:s3".to_string()),
            s3: Some(S3Entity {
                bucket: Some(S3Bucket {
                    name: Some("uploads".to_string()),
                }),
                object: Some(S3Object { key: None }),
            }),
        };
        assert_eq!(
            validator().validate(&record).unwrap_err(),
            SkipReason::MissingField("object key")
        );

        let record = EventRecord {
            event_source: Some("aws:s3".to_string()),
            s3: Some(S3Entity {
                bucket: None,
                object: Some(S3Object {
                    key: Some("a.jpg".to_string()),
                }),
            }),
        };
        assert_eq!(
            validator().validate(&record).unwrap_err(),
            SkipReason::MissingField("bucket name")
        );
    }

    #[test]
    fn extension_rules() {
        assert_eq!(file_extension("a/b/photo.JPG"), ".jpg");
        assert_eq!(file_extension("archive.tar.png"), ".png");
        assert_eq!(file_extension("noext"), "");
        assert_eq!(file_extension(".png"), "");
        assert_eq!(file_extension("dir.d/file"), "");
        assert_eq!(file_extension("x/..jpg"), "");
        assert_eq!(file_extension(".hidden.jpeg"), ".jpeg");
        assert_eq!(file_extension("trailing."), ".");
    }
}

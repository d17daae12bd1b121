//! Constants shared across the pipeline.

/// Event source tag carried by S3 object notifications.
pub const EVENT_SOURCE_S3: &str = "aws:s3";

/// Prefix under which resized derivatives are written in the destination bucket.
pub const RESIZED_PREFIX: &str = "resized/";

/// Extensions (lower-cased, with leading dot) accepted for processing.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png"];

/// Width used when `RESIZE_WIDTH` is not set.
pub const DEFAULT_RESIZE_WIDTH: u32 = 300;

/// JPEG quality used when `JPEG_QUALITY` is not set.
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

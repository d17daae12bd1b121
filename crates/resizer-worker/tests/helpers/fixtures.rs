use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use resizer_core::{EventRecord, S3Notification};
use std::io::Cursor;

/// Encode a gradient test image of the given size and format.
pub fn create_test_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
    }));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), format)
        .expect("Failed to encode test image");
    buffer
}

pub fn batch(records: Vec<EventRecord>) -> S3Notification {
    S3Notification { records }
}

pub fn record(bucket: &str, key: &str) -> EventRecord {
    EventRecord::s3(bucket, key)
}

//! Effective format resolution.
//!
//! The decoder's own detection wins; the file extension is only consulted
//! when the bytes did not identify themselves.

use image::ImageFormat;

/// The encoding chosen for the derivative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectiveFormat {
    Jpeg,
    Png,
    /// Anything else, named the way it was detected or hinted (upper-cased).
    Unsupported(String),
}

impl EffectiveFormat {
    /// Decoder format to force when detection found nothing.
    pub fn image_format(&self) -> Option<ImageFormat> {
        match self {
            EffectiveFormat::Jpeg => Some(ImageFormat::Jpeg),
            EffectiveFormat::Png => Some(ImageFormat::Png),
            EffectiveFormat::Unsupported(_) => None,
        }
    }

    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            EffectiveFormat::Jpeg => Some("image/jpeg"),
            EffectiveFormat::Png => Some("image/png"),
            EffectiveFormat::Unsupported(_) => None,
        }
    }

    /// Interpret a format name or extension such as `jpg`, `.JPEG` or `png`.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().trim_start_matches('.').to_uppercase();
        match normalized.as_str() {
            "JPEG" | "JPG" => EffectiveFormat::Jpeg,
            "PNG" => EffectiveFormat::Png,
            _ => EffectiveFormat::Unsupported(normalized),
        }
    }
}

/// Resolve the effective format from decoder detection, falling back to the extension hint.
pub fn resolve_format(detected: Option<ImageFormat>, hint: Option<&str>) -> EffectiveFormat {
    match detected {
        Some(ImageFormat::Jpeg) => EffectiveFormat::Jpeg,
        Some(ImageFormat::Png) => EffectiveFormat::Png,
        Some(other) => EffectiveFormat::Unsupported(format!("{:?}", other).to_uppercase()),
        None => match hint {
            Some(hint) => EffectiveFormat::from_name(hint),
            None => EffectiveFormat::Unsupported("UNKNOWN".to_string()),
        },
    }
}

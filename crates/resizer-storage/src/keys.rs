//! Shared key derivation for destination objects.
//!
//! Key format: `resized/{basename}` where basename is the part of the source
//! key after its last `/`.

use resizer_core::constants::RESIZED_PREFIX;

/// Final path segment of an object key. A key ending in `/` has an empty basename.
pub fn basename(key: &str) -> &str {
    match key.rfind('/') {
        Some(idx) => &key[idx + 1..],
        None => key,
    }
}

/// Destination key for the resized derivative of `source_key`.
pub fn destination_key(source_key: &str) -> String {
    format!("{}{}", RESIZED_PREFIX, basename(source_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_key() {
        assert_eq!(destination_key("cat.jpg"), "resized/cat.jpg");
    }

    #[test]
    fn nested_key_keeps_only_basename() {
        assert_eq!(destination_key("a/b/c/dog.png"), "resized/dog.png");
        assert_eq!(destination_key("photos/summer 2024/beach.JPEG"), "resized/beach.JPEG");
    }

    #[test]
    fn derivation_is_stable_for_already_resized_keys() {
        let once = destination_key("uploads/x.png");
        assert_eq!(destination_key(&once), once);
    }

    #[test]
    fn trailing_slash_yields_empty_basename() {
        assert_eq!(basename("folder/"), "");
        assert_eq!(destination_key("folder/"), "resized/");
    }
}

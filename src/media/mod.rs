// SPDX-License-Identifier: MPL-2.0
//! Media loading for the comparison.
//!
//! Only still images are supported; both sides of a comparison go through
//! [`load_image`].

pub mod image;

pub use image::{load_image, load_image_async, ImageData};

/// File extensions offered by the open dialogs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "tif", "tiff", "webp", "bmp", "ico",
];

/// Returns true when `path` has an extension the decoder handles.
pub fn is_supported<P: AsRef<std::path::Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported("shot.PNG"));
        assert!(is_supported("/tmp/a/b.webp"));
        assert!(!is_supported("notes.txt"));
        assert!(!is_supported("no_extension"));
    }
}

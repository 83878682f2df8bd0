// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(ImageError),
    Config(String),
}

/// Specific error types for image loading.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ImageError {
    /// File could not be read (missing, permission denied, ...)
    Unreadable(String),

    /// Bytes are not in a format the decoder understands
    UnsupportedFormat(String),

    /// Decoder recognized the format but the data is broken
    Corrupted(String),

    /// Decoded image has a zero dimension
    Empty,
}

impl ImageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::Unreadable(_) => "error-load-image-unreadable",
            ImageError::UnsupportedFormat(_) => "error-load-image-unsupported-format",
            ImageError::Corrupted(_) => "error-load-image-corrupted",
            ImageError::Empty => "error-load-image-empty",
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Unreadable(msg) => write!(f, "Cannot read image: {}", msg),
            ImageError::UnsupportedFormat(msg) => write!(f, "Unsupported image format: {}", msg),
            ImageError::Corrupted(msg) => write!(f, "Image data is corrupted: {}", msg),
            ImageError::Empty => write!(f, "Image has no pixels"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Returns the i18n message key used when this error surfaces while
    /// loading an image.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Image(e) => e.i18n_key(),
            Error::Io(_) => "error-load-image-unreadable",
            Error::Config(_) => "notification-config-load-error",
        }
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn image_error_wraps_into_error() {
        let err: Error = ImageError::Empty.into();
        assert!(matches!(err, Error::Image(ImageError::Empty)));
        assert_eq!(format!("{}", err), "Image Error: Image has no pixels");
    }

    #[test]
    fn image_error_i18n_keys() {
        assert_eq!(
            ImageError::Unreadable(String::new()).i18n_key(),
            "error-load-image-unreadable"
        );
        assert_eq!(
            ImageError::UnsupportedFormat(String::new()).i18n_key(),
            "error-load-image-unsupported-format"
        );
        assert_eq!(ImageError::Empty.i18n_key(), "error-load-image-empty");
    }

    #[test]
    fn io_errors_read_as_unreadable_images() {
        let err = Error::Io("denied".into());
        assert_eq!(err.i18n_key(), "error-load-image-unreadable");
        let err: Error = ImageError::Corrupted("crc".into()).into();
        assert_eq!(err.i18n_key(), "error-load-image-corrupted");
    }
}

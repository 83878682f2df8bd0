// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding (PNG, JPEG, GIF, WebP, ...).

use crate::error::{Error, ImageError, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded image ready for the renderer.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Loads and decodes the image at `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`ImageError::Unreadable`])
/// - The format cannot be recognized ([`ImageError::UnsupportedFormat`])
/// - The data cannot be decoded ([`ImageError::Corrupted`])
/// - The decoded image has no pixels ([`ImageError::Empty`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ImageError::Unreadable(e.to_string()))?;

    let img = image_rs::load_from_memory(&bytes)?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::Empty.into());
    }

    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Decodes the image at `path` on tokio's blocking pool.
///
/// Decoding large images is CPU-bound and must not stall the executor that
/// drives the UI tasks.
pub async fn load_image_async(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        let image_error = match &err {
            image_rs::ImageError::IoError(e) => ImageError::Unreadable(e.to_string()),
            image_rs::ImageError::Unsupported(_) => ImageError::UnsupportedFormat(err.to_string()),
            _ => ImageError::Corrupted(err.to_string()),
        };
        Error::Image(image_error)
    }
}

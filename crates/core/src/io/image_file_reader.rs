//! Decodes capture images from disk into interleaved RGB.

use std::path::Path;

use crate::shared::image::Image;

#[derive(Debug, thiserror::Error)]
pub enum ImageReadError {
    #[error("failed to read {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Loads an image file and converts it to 3-channel RGB, dropping any
/// alpha channel.
pub fn read_rgb_image(path: &Path) -> Result<Image, ImageReadError> {
    let decoded = image::open(path).map_err(|source| ImageReadError::Decode {
        path: path.display().to_string(),
        source,
    })?;
    let rgb = decoded.into_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Image::new(rgb.into_raw(), width, height, 3))
}

use std::path::PathBuf;

use thiserror::Error;

use crate::raster::RasterImage;

#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("failed to load image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("image {path} has an inconsistent pixel buffer: {detail}")]
    InvalidBuffer { path: String, detail: String },
}

/// Resolves a frame identifier to a decoded raster. The identifier
/// format (path, template, ...) is owned by the caller, not by the
/// export engine.
pub trait ImageSource {
    fn load(&self, identifier: &str) -> Result<RasterImage, ImageLoadError>;
}

/// Loads frames from the filesystem, optionally relative to a base
/// directory, via the `image` crate.
pub struct FileImageSource {
    pub base_dir: Option<PathBuf>,
}

impl FileImageSource {
    pub fn new() -> Self {
        FileImageSource { base_dir: None }
    }

    fn resolve(&self, identifier: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(identifier),
            None => PathBuf::from(identifier),
        }
    }
}

impl Default for FileImageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSource for FileImageSource {
    fn load(&self, identifier: &str) -> Result<RasterImage, ImageLoadError> {
        let path = self.resolve(identifier);
        let decoded = image::open(&path).map_err(|source| ImageLoadError::Decode {
            path: path.display().to_string(),
            source,
        })?;

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        RasterImage::from_rgba8(width, height, rgba.into_raw()).map_err(|detail| {
            ImageLoadError::InvalidBuffer {
                path: path.display().to_string(),
                detail,
            }
        })
    }
}

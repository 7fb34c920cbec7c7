// downscale/src/processors/loader.rs
use crate::core::{ResizeError, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;

        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image)
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ResizeError::InvalidParameter(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let metadata = path.metadata()?;
        if metadata.len() == 0 {
            return Err(ResizeError::InvalidParameter(format!(
                "File is empty: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

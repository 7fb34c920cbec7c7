// downscale/src/core/processor.rs
use super::{ComputedSize, ResizeError, ResizeSpec, Result};
use crate::processors::{Loader, Resizer};
use image::GenericImageView;
use std::path::{Path, PathBuf};

/// Per-image pipeline: load, compute the target size, resample, persist.
///
/// One processor is built per run and applied to each image independently;
/// it holds no state across images.
pub struct ImageProcessor {
    spec: ResizeSpec,
    output_prefix: String,
    loader: Loader,
    resizer: Resizer,
}

#[derive(Debug)]
pub enum Outcome {
    Resized { path: PathBuf, size: ComputedSize },
    Skipped,
}

impl ImageProcessor {
    pub fn new(spec: ResizeSpec, output_prefix: impl Into<String>) -> Self {
        Self {
            spec,
            output_prefix: output_prefix.into(),
            loader: Loader::new(),
            resizer: Resizer::new(),
        }
    }

    pub fn spec(&self) -> ResizeSpec {
        self.spec
    }

    pub fn process(&self, input_path: &Path) -> Result<Outcome> {
        let image = self.loader.load(input_path)?;

        let Some(size) = self
            .resizer
            .compute_size(image.width(), image.height(), self.spec)
        else {
            return Ok(Outcome::Skipped);
        };

        // Truncation can collapse an extreme aspect ratio to a zero edge.
        if size.width == 0 || size.height == 0 {
            return Err(ResizeError::InvalidParameter(format!(
                "Computed size {} has an empty dimension",
                size
            )));
        }

        let resized = self.resizer.resample(&image, size);
        let output_path = self.output_location(input_path, size)?;

        // Format follows the output extension, which is the input's own.
        resized.save(&output_path)?;

        log::debug!("Saved resized image to {}", output_path.display());

        Ok(Outcome::Resized {
            path: output_path,
            size,
        })
    }

    /// Folder `{prefix}-{W}x{H}`, file `{stem}-1.{ext}`. The folder is
    /// created if absent; the `-1` suffix is fixed, so a later run at the
    /// same size overwrites the file.
    fn output_location(&self, input_path: &Path, size: ComputedSize) -> Result<PathBuf> {
        let folder = PathBuf::from(format!("{}-{}", self.output_prefix, size));
        std::fs::create_dir_all(&folder)?;

        let stem = input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        let file_name = match input_path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("{}-1.{}", stem, ext),
            None => format!("{}-1", stem),
        };

        Ok(folder.join(file_name))
    }
}

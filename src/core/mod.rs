// downscale/src/core/mod.rs
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub mod processor;

pub use processor::{ImageProcessor, Outcome};

/// Target dimensions for a run. At least one of width/height must be set
/// for processing to proceed; this is checked once per run, not per image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeSpec {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ResizeSpec {
    pub fn new(width: Option<u32>, height: Option<u32>) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ResizeError::MissingDimensions);
        }

        if self.width == Some(0) || self.height == Some(0) {
            return Err(ResizeError::InvalidParameter(
                "Target dimensions must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Output dimensions computed for one image by the resize policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedSize {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for ComputedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("You must specify at least --width or --height")]
    MissingDimensions,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Path not found: {}", .0.display())]
    SourceNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ResizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spec_fails_validation() {
        let spec = ResizeSpec::default();
        assert!(matches!(
            spec.validate(),
            Err(ResizeError::MissingDimensions)
        ));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let spec = ResizeSpec::new(Some(0), None);
        assert!(matches!(
            spec.validate(),
            Err(ResizeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn single_dimension_is_enough() {
        assert!(ResizeSpec::new(Some(800), None).validate().is_ok());
        assert!(ResizeSpec::new(None, Some(600)).validate().is_ok());
    }

    #[test]
    fn computed_size_displays_as_w_x_h() {
        let size = ComputedSize {
            width: 800,
            height: 450,
        };
        assert_eq!(size.to_string(), "800x450");
    }
}

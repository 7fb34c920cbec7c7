mod cli;
mod core;
mod processors;
mod report;
mod utils;

pub use crate::cli::Cli;
pub use crate::core::{
    ComputedSize, ImageProcessor, Outcome, ResizeError, ResizeSpec, Result,
};
pub use crate::processors::{BatchRunner, BatchSummary, Loader, Resizer};
pub use crate::report::{image_error, run_error, skip_no_dimensions, status_line, success, Status};
pub use crate::utils::{is_supported_image, SUPPORTED_EXTENSIONS};

pub mod prelude {
    pub use crate::{BatchRunner, BatchSummary, ImageProcessor, ResizeSpec, Resizer};
}

// Re-export commonly used types
pub use image::DynamicImage;

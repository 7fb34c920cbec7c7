// downscale/src/processors/batch.rs
use crate::core::{ImageProcessor, Outcome, ResizeError, ResizeSpec, Result};
use crate::report;
use crate::utils::is_supported_image;
use std::path::Path;
use walkdir::WalkDir;

/// Drives one run: classifies the source, enumerates eligible images and
/// processes each independently. A failed image is reported and counted,
/// never allowed to abort the rest of the batch.
pub struct BatchRunner {
    processor: ImageProcessor,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub resized: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchRunner {
    pub fn new(spec: ResizeSpec, output_prefix: impl Into<String>) -> Self {
        Self {
            processor: ImageProcessor::new(spec, output_prefix),
        }
    }

    pub fn run(&self, source: &Path) -> Result<BatchSummary> {
        // Checked before any enumeration or I/O.
        self.processor.spec().validate()?;

        let mut summary = BatchSummary::default();

        if source.is_file() {
            // A single file with an unsupported extension is a silent no-op.
            if is_supported_image(source) {
                self.process_one(source, &mut summary);
            }
        } else if source.is_dir() {
            self.process_directory(source, &mut summary);
        } else {
            return Err(ResizeError::SourceNotFound(source.to_path_buf()));
        }

        log::debug!(
            "Batch complete: {} resized, {} skipped, {} failed",
            summary.resized,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }

    /// Immediate entries only, in whatever order the listing yields.
    fn process_directory(&self, dir: &Path, summary: &mut BatchSummary) {
        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| is_supported_image(entry.path()));

        let mut seen = 0usize;
        for entry in entries {
            seen += 1;
            self.process_one(entry.path(), summary);
        }

        if seen == 0 {
            log::warn!("No image files found in {}", dir.display());
        }
    }

    fn process_one(&self, path: &Path, summary: &mut BatchSummary) {
        match self.processor.process(path) {
            Ok(Outcome::Resized { path, size }) => {
                println!("{}", report::success(&path, size));
                summary.resized += 1;
            }
            Ok(Outcome::Skipped) => {
                println!("{}", report::skip_no_dimensions());
                summary.skipped += 1;
            }
            Err(err) => {
                println!("{}", report::image_error(path, err));
                summary.failed += 1;
            }
        }
    }
}

// downscale/src/report.rs
//! Colored per-image status lines. Pure string formatting, no state.

use crate::core::ComputedSize;
use std::fmt::Display;
use std::path::Path;

const RED: &str = "\x1b[91m";
const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Skip,
    Error,
}

impl Status {
    fn tag(self) -> String {
        match self {
            Status::Success => format!("{GREEN}[SUCCESS]{RESET}"),
            Status::Skip => format!("{YELLOW}[SKIP]{RESET}"),
            Status::Error => format!("{RED}[ERROR]{RESET}"),
        }
    }
}

pub fn status_line(status: Status, message: impl Display) -> String {
    format!("{} {}", status.tag(), message)
}

pub fn success(output_path: &Path, size: ComputedSize) -> String {
    status_line(
        Status::Success,
        format!("{} -> {}", output_path.display(), size),
    )
}

pub fn skip_no_dimensions() -> String {
    status_line(Status::Skip, "No dimensions provided.")
}

pub fn image_error(source_path: &Path, error: impl Display) -> String {
    status_line(
        Status::Error,
        format!("Could not process {}: {}", source_path.display(), error),
    )
}

pub fn run_error(error: impl Display) -> String {
    status_line(Status::Error, error)
}

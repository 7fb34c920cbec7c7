// downscale/src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "downscale",
    version,
    about = "Resize images to a target width/height, preserving aspect ratio"
)]
pub struct Cli {
    /// Path to an image file or a folder of images
    pub source: PathBuf,

    /// Target width in pixels
    #[arg(short = 'w', long, alias = "wt")]
    pub width: Option<u32>,

    /// Target height in pixels
    #[arg(short = 'H', long, alias = "ht")]
    pub height: Option<u32>,

    /// Output folder prefix; the computed dimensions are appended
    #[arg(short, long, default_value = "resized")]
    pub output: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

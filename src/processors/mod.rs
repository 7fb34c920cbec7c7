// downscale/src/processors/mod.rs
mod batch;
mod loader;
mod resizer;

pub use batch::{BatchRunner, BatchSummary};
pub use loader::Loader;
pub use resizer::Resizer;

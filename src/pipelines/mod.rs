//! Batch pipelines.
//!
//! One pipeline per subcommand, all batch-sequential: a file is fully
//! read, transformed and emitted before the next one starts. A failing
//! file is logged and skipped; the batch continues. The module provides a
//! light [pipeline::Pipeline] trait shared by all of them.
mod captions;
mod count;
mod extract;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use captions::Eaf2Vtt;
pub use count::SignCount;
pub use extract::{GlossExtract, RunMode};
pub use pipeline::Pipeline;

//! Annotation sources: EAF reading and batch file discovery.
pub mod discovery;
pub mod eaf;

pub use eaf::EafFile;

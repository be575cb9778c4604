//! Pipeline trait.
use crate::error::Error;

/// Implemented by each batch pipeline. Generic over the return type so
/// that pipelines producing a report can use the trait as well.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}

/*!
# CNGT tools

Batch tools for sign language corpus annotation files (ELAN EAF):
sign/gloss frequency counting, video fragment extraction and caption
conversion.

The crate can be used as a command line tool (one subcommand per batch
job) or as a library: the merge algorithms in [units] and the overlap
predicate in [overlap] are pure and independent of any file handling.
!*/
pub mod counts;
pub mod error;
pub mod fragment;
pub mod metadata;
pub mod overlap;
pub mod pipelines;
pub mod sources;
pub mod units;
pub mod vtt;

//! Annotation records and unit merging.
//!
//! An [Annotation] is one time-aligned gloss on one hand tier. Two merge
//! policies turn annotation streams into [Unit]s / [extraction::Span]s:
//!
//! * [counting::merge_hands] interleaves the two hand streams of one signer
//!   into units of mutually overlapping annotations, for frequency counting.
//! * [extraction::extract_spans] re-segments one flattened, begin-sorted
//!   stream into maximal same-value spans with precise cut points, for
//!   fragment extraction and caption generation.

use crate::overlap::Interval;

pub mod counting;
pub mod extraction;

/// Channel identifier for the two hand tiers of one signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Right,
    Left,
}

impl Hand {
    /// The single-letter tag used in tier ids (`GlossR S1`, `GlossL S1`).
    pub fn tag(&self) -> char {
        match self {
            Hand::Right => 'R',
            Hand::Left => 'L',
        }
    }
}

/// Subject identifier: corpus sessions record up to two signers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signer {
    S1,
    S2,
}

impl Signer {
    pub const ALL: [Signer; 2] = [Signer::S1, Signer::S2];

    pub fn label(&self) -> &'static str {
        match self {
            Signer::S1 => "S1",
            Signer::S2 => "S2",
        }
    }
}

/// One time-aligned annotation. Times are milliseconds; `begin <= end` is
/// expected from the source and not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub begin: i64,
    pub end: i64,
    /// The gloss text. Empty when the source annotation had no value.
    pub value: String,
    pub participant: String,
    pub hand: Hand,
}

impl Annotation {
    pub fn interval(&self) -> Interval {
        Interval::new(self.begin, self.end)
    }
}

/// A maximal run of mutually overlapping annotations, treated as one
/// combined (possibly two-handed) event. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit(Vec<Annotation>);

impl Unit {
    pub fn new(annotations: Vec<Annotation>) -> Self {
        debug_assert!(!annotations.is_empty());
        Self(annotations)
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.0
    }

    /// Smallest member begin. Members arrive in begin order, so this is the
    /// begin of the first one.
    pub fn begin(&self) -> i64 {
        self.0.iter().map(|a| a.begin).min().unwrap_or(0)
    }

    /// Largest member end.
    pub fn end(&self) -> i64 {
        self.0.iter().map(|a| a.end).max().unwrap_or(0)
    }
}

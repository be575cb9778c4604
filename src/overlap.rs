//! Time interval overlap predicate.
//!
//! Decides whether two annotation intervals belong to the same event,
//! honoring a minimal overlap tolerance. An interval that lies completely
//! within the other always overlaps, no matter the amount of overlap:
//! a very short annotation nested inside a long one is the same event even
//! when the shared length is below the configured tolerance.

/// A `(begin, end)` pair in milliseconds. `end` is exclusive, so intervals
/// that merely touch at a boundary do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub begin: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(begin: i64, end: i64) -> Self {
        Self { begin, end }
    }

    pub fn length(&self) -> i64 {
        self.end - self.begin
    }
}

/// Determines whether `first` and `second` overlap by at least `min_overlap`
/// milliseconds.
///
/// Disjoint or touching intervals never overlap, even with `min_overlap = 0`
/// (zero-length intervals therefore never overlap anything). If one interval
/// contains the other, the pair overlaps unconditionally. `min_overlap` may
/// be negative, which lets small gaps still count as overlapping in the
/// unit-boundary decisions of the callers.
pub fn overlaps(first: Interval, second: Interval, min_overlap: i64) -> bool {
    if first.begin >= second.end || second.begin >= first.end {
        return false;
    }
    let shared = Interval::new(first.begin.max(second.begin), first.end.min(second.end));
    if shared == first || shared == second {
        return true;
    }
    shared.length() >= min_overlap
}

//! Interleaving merge of the two hand streams of one signer.
//!
//! Signs can be two-handed: the same event then shows up as overlapping
//! annotations on both hand tiers. The merge walks both streams in begin
//! order and groups annotations into a unit for as long as each next
//! annotation still overlaps the running end of the unit by at least
//! `min_overlap` milliseconds.

use super::{Annotation, Unit};

/// Merges two begin-sorted annotation streams into units of overlapping
/// annotations.
///
/// When both heads start at the same time the right hand goes first; this
/// tie-break determines unit membership and mirrors the established
/// counting behavior. A new unit starts when the candidate begins after
/// `last_end - min_overlap`, where `last_end` is the largest end seen so
/// far in the current unit. `min_overlap` may be negative to let small
/// gaps keep a unit together.
///
/// Both streams must be sorted ascending by `begin`; unit boundaries are
/// undefined otherwise.
pub fn merge_hands(right: &[Annotation], left: &[Annotation], min_overlap: i64) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut unit: Vec<Annotation> = Vec::new();
    let mut last_end: Option<i64> = None;

    let (mut r, mut l) = (0, 0);
    while r < right.len() || l < left.len() {
        let take_right = match (right.get(r), left.get(l)) {
            (Some(rh), Some(lh)) => rh.begin <= lh.begin,
            (Some(_), None) => true,
            _ => false,
        };
        let candidate = if take_right {
            r += 1;
            &right[r - 1]
        } else {
            l += 1;
            &left[l - 1]
        };

        // last_end is only ever set together with a push, so the current
        // unit is never empty here
        if let Some(end) = last_end {
            if candidate.begin > end - min_overlap {
                units.push(Unit::new(std::mem::take(&mut unit)));
            }
        }

        unit.push(candidate.clone());
        last_end = Some(last_end.map_or(candidate.end, |end| end.max(candidate.end)));
    }

    // the trailing unit; empty only when both streams were empty
    if !unit.is_empty() {
        units.push(Unit::new(unit));
    }
    units
}

//! Re-segmentation of one annotation stream into same-value spans.
//!
//! Consecutively overlapping annotations with the same gloss are one sign,
//! produced by both hands at once or repeated without a real break. The
//! segmentation walks a flattened, begin-sorted stream and grows a current
//! span until a non-overlapping or different-valued annotation arrives.

use super::Annotation;
use crate::overlap::{overlaps, Interval};

/// A contiguous same-value span, the unit of fragment extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub begin: i64,
    pub end: i64,
    pub value: String,
}

impl Span {
    /// The empty sentinel the segmentation starts from. It is emitted like
    /// any other span; consumers discard spans with an empty value.
    pub fn sentinel() -> Self {
        Self {
            begin: -1,
            end: -1,
            value: String::new(),
        }
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.begin, self.end)
    }
}

impl From<&Annotation> for Span {
    fn from(annotation: &Annotation) -> Self {
        Self {
            begin: annotation.begin,
            end: annotation.end,
            value: annotation.value.clone(),
        }
    }
}

/// Segments a begin-sorted stream into spans.
///
/// For each annotation against the current span:
/// * no overlap: the current span is emitted and the annotation starts a
///   new one;
/// * overlap, same value: the span is extended to the larger end;
/// * overlap, different value, fully nested in time: the annotation is
///   emitted as a standalone span, the current span is untouched;
/// * overlap, different value, extending past the span: the span is emitted
///   and the annotation starts a new one.
///
/// The initial sentinel and the final span are emitted too, so the result
/// contains empty-valued spans that callers must skip.
pub fn extract_spans(stream: &[Annotation], min_overlap: i64) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut current = Span::sentinel();

    for annotation in stream {
        if !overlaps(annotation.interval(), current.interval(), min_overlap) {
            spans.push(current);
            current = Span::from(annotation);
        } else if annotation.value == current.value {
            current.end = current.end.max(annotation.end);
        } else if annotation.end <= current.end {
            spans.push(Span::from(annotation));
        } else {
            spans.push(current);
            current = Span::from(annotation);
        }
    }

    spans.push(current);
    spans
}

//! Label anchoring for paths.

use corridor_core::{Point, Segment};

/// Midpoint of the middle segment, picking the later one for even counts.
pub(crate) fn label_position(segments: &[Segment]) -> Option<Point> {
    segments.get(segments.len() / 2).map(Segment::midpoint)
}

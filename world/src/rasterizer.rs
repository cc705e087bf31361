//! Converts segments into painted grid cells.

use std::collections::BTreeSet;

use corridor_core::{Axis, BuildError, CellCoord, CellState, ElbowOrder, Point, Segment};
use rand::Rng;

use crate::canvas::GridCanvas;

/// Paints every cell between the clamped endpoints of the segment.
///
/// Cells that hold `Path` after the paint attempt are recorded in `cells`,
/// whether this call opened them or an earlier path did.
pub(crate) fn draw_straight(
    canvas: &mut GridCanvas,
    segment: &Segment,
    cells: &mut BTreeSet<CellCoord>,
) {
    let start = canvas.clamp(segment.start());
    let end = canvas.clamp(segment.end());

    let run: Vec<CellCoord> = match segment.axis() {
        Axis::Horizontal => span(start.x(), end.x())
            .map(|x| CellCoord::new(x, start.y()))
            .collect(),
        Axis::Vertical => span(start.y(), end.y())
            .map(|y| CellCoord::new(start.x(), y))
            .collect(),
    };

    for cell in run {
        let _ = canvas.paint_if_wall(cell.to_point());
        if canvas.state(cell) == Some(CellState::Path) {
            let _ = cells.insert(cell);
        }
    }
}

fn span(a: u32, b: u32) -> std::ops::RangeInclusive<u32> {
    a.min(b)..=a.max(b)
}

/// Splits an elbow request into two axis-aligned segments meeting at a corner.
///
/// Endpoints that already share an axis still produce two segments, one of
/// which covers a single cell.
pub fn elbow_segments(
    from: Point,
    to: Point,
    order: ElbowOrder,
) -> Result<[Segment; 2], BuildError> {
    let corner = order.corner(from, to);
    Ok([Segment::new(from, corner)?, Segment::new(corner, to)?])
}

/// Draws the corner order for one elbow from the build's random source.
pub fn choose_elbow_order<R: Rng + ?Sized>(rng: &mut R) -> ElbowOrder {
    if rng.gen_bool(0.5) {
        ElbowOrder::HorizontalFirst
    } else {
        ElbowOrder::VerticalFirst
    }
}

//! Dense cell-state storage with a bounds-clamped paint primitive.

use corridor_core::{CellCoord, CellState, GridView, Point};

/// Square grid of cell states stored row-major.
#[derive(Clone, Debug)]
pub(crate) struct GridCanvas {
    size: u32,
    cells: Vec<CellState>,
}

impl GridCanvas {
    /// Creates a canvas filled with walls.
    pub(crate) fn new(size: u32) -> Self {
        let width = usize::try_from(size).unwrap_or(0);
        Self {
            size,
            cells: vec![CellState::Wall; width.saturating_mul(width)],
        }
    }

    /// Turns every cell back into a wall.
    pub(crate) fn reset(&mut self) {
        self.cells.fill(CellState::Wall);
    }

    /// Marks the fixed entrance and exit cells.
    pub(crate) fn mark_entrance_exit(&mut self, entrance: CellCoord, exit: CellCoord) {
        self.set(entrance, CellState::Entrance);
        self.set(exit, CellState::Exit);
    }

    /// Opens the square of half-width `radius` around `center`.
    ///
    /// Cells of the square that fall outside the grid are skipped.
    pub(crate) fn carve_center(&mut self, center: CellCoord, radius: u32) {
        let last = i64::from(self.size) - 1;
        if last < 0 {
            return;
        }

        let radius = i64::from(radius);
        let clip = |value: i64| value.clamp(0, last);
        let (cx, cy) = (i64::from(center.x()), i64::from(center.y()));

        for y in clip(cy - radius)..=clip(cy + radius) {
            for x in clip(cx - radius)..=clip(cx + radius) {
                let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                    continue;
                };
                self.set(CellCoord::new(x, y), CellState::Path);
            }
        }
    }

    /// Snaps a point onto the grid.
    pub(crate) fn clamp(&self, point: Point) -> CellCoord {
        CellCoord::clamped(point, self.size)
    }

    /// Opens the clamped cell if it is still a wall.
    ///
    /// Returns whether the cell changed. Fixtures and open cells are left as
    /// they are.
    pub(crate) fn paint_if_wall(&mut self, point: Point) -> bool {
        let cell = self.clamp(point);
        match self.index(cell) {
            Some(index) if self.cells[index] == CellState::Wall => {
                self.cells[index] = CellState::Path;
                true
            }
            _ => false,
        }
    }

    /// State of the cell, if it lies on the grid.
    pub(crate) fn state(&self, cell: CellCoord) -> Option<CellState> {
        self.index(cell).map(|index| self.cells[index])
    }

    /// Read-only view of the cells.
    pub(crate) fn view(&self) -> GridView<'_> {
        GridView::new(&self.cells, self.size)
    }

    fn set(&mut self, cell: CellCoord, state: CellState) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = state;
        }
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.x() >= self.size || cell.y() >= self.size {
            return None;
        }
        let width = usize::try_from(self.size).ok()?;
        let column = usize::try_from(cell.x()).ok()?;
        let row = usize::try_from(cell.y()).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }
}

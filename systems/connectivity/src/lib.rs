#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Flood-fill reachability checks over a rasterized maze grid.
//!
//! The system never mutates the grid. It walks open cells with 4-neighbour
//! moves starting at the entrance and reports which fixtures can be reached.

use std::collections::VecDeque;

use corridor_core::{CellCoord, GridView};

/// Breadth-first step counts from a single origin cell.
///
/// Distances default to `u32::MAX` for walls and for open cells that the
/// search never reached.
#[derive(Clone, Debug, Default)]
pub struct ReachabilityField {
    size: u32,
    distances: Vec<u32>,
}

impl ReachabilityField {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the field for the provided grid and origin.
    ///
    /// A wall or off-grid origin leaves every cell unreachable.
    pub fn rebuild(&mut self, grid: GridView<'_>, origin: CellCoord) {
        let size = grid.size();
        let width = usize::try_from(size).unwrap_or(0);
        let cell_count = width.checked_mul(width).unwrap_or(0);

        self.size = size;
        if self.distances.len() != cell_count {
            self.distances = vec![u32::MAX; cell_count];
        } else {
            self.distances.fill(u32::MAX);
        }

        let is_open = |cell: CellCoord| grid.state(cell).map_or(false, |state| state.is_open());
        if !is_open(origin) {
            return;
        }
        let Some(origin_index) = index(width, origin) else {
            return;
        };

        self.distances[origin_index] = 0;
        let mut queue = VecDeque::from([origin]);

        while let Some(cell) = queue.pop_front() {
            let Some(current_index) = index(width, cell) else {
                continue;
            };
            let next_distance = self.distances[current_index].saturating_add(1);

            for neighbor in neighbors(cell, size) {
                if !is_open(neighbor) {
                    continue;
                }

                let Some(neighbor_index) = index(width, neighbor) else {
                    continue;
                };

                if self.distances[neighbor_index] <= next_distance {
                    continue;
                }

                self.distances[neighbor_index] = next_distance;
                queue.push_back(neighbor);
            }
        }
    }

    /// Edge length of the grid the field was built for.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Step count from the origin, if the cell lies within the field.
    #[must_use]
    pub fn distance(&self, cell: CellCoord) -> Option<u32> {
        if cell.x() >= self.size || cell.y() >= self.size {
            return None;
        }

        let width = usize::try_from(self.size).ok()?;
        index(width, cell).and_then(|offset| self.distances.get(offset).copied())
    }

    /// Reports whether the search reached the cell.
    #[must_use]
    pub fn is_reachable(&self, cell: CellCoord) -> bool {
        self.distance(cell).map_or(false, |distance| distance != u32::MAX)
    }

    /// Number of cells the search reached, origin included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|distance| **distance != u32::MAX)
            .count()
    }
}

/// Summary of a reachability check from the entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectivityReport {
    /// Whether a walk from the entrance reaches the exit.
    pub exit_reachable: bool,
    /// Whether a walk from the entrance reaches the center cell.
    pub center_reachable: bool,
    /// Number of open cells reached from the entrance.
    pub reachable_cells: usize,
    /// Number of open cells in the grid.
    pub open_cells: usize,
}

impl ConnectivityReport {
    /// Reports whether every open cell is reachable from the entrance.
    #[must_use]
    pub const fn is_fully_connected(&self) -> bool {
        self.reachable_cells == self.open_cells
    }
}

/// Checks which fixtures can be reached from the entrance.
#[must_use]
pub fn verify(
    grid: GridView<'_>,
    entrance: CellCoord,
    exit: CellCoord,
    center: CellCoord,
) -> ConnectivityReport {
    let mut field = ReachabilityField::new();
    field.rebuild(grid, entrance);

    let open_cells = grid.iter().filter(|(_, state)| state.is_open()).count();

    ConnectivityReport {
        exit_reachable: field.is_reachable(exit),
        center_reachable: field.is_reachable(center),
        reachable_cells: field.reachable_count(),
        open_cells,
    }
}

fn neighbors(cell: CellCoord, size: u32) -> impl Iterator<Item = CellCoord> {
    let mut candidates = [None; 4];
    let mut count = 0;

    if let Some(y) = cell.y().checked_sub(1) {
        candidates[count] = Some(CellCoord::new(cell.x(), y));
        count += 1;
    }

    if let Some(x) = cell.x().checked_add(1) {
        if x < size {
            candidates[count] = Some(CellCoord::new(x, cell.y()));
            count += 1;
        }
    }

    if let Some(y) = cell.y().checked_add(1) {
        if y < size {
            candidates[count] = Some(CellCoord::new(cell.x(), y));
            count += 1;
        }
    }

    if let Some(x) = cell.x().checked_sub(1) {
        candidates[count] = Some(CellCoord::new(x, cell.y()));
        count += 1;
    }

    candidates.into_iter().take(count).flatten()
}

fn index(width: usize, cell: CellCoord) -> Option<usize> {
    let column = usize::try_from(cell.x()).ok()?;
    let row = usize::try_from(cell.y()).ok()?;
    row.checked_mul(width)?.checked_add(column)
}

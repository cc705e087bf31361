//! Lock-guarded handle for sharing one maze between threads.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use corridor_core::{CellState, Command, Event, GridView, PathId, PathSnapshot, ToggleOutcome};

use crate::Maze;

/// Owned copy of the grid taken under the read lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    size: u32,
    cells: Vec<CellState>,
}

impl GridSnapshot {
    /// Edge length of the captured grid.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Read-only view over the captured cells.
    #[must_use]
    pub fn view(&self) -> GridView<'_> {
        GridView::new(&self.cells, self.size)
    }
}

/// Cloneable session handle around a single maze.
///
/// Every mutation holds the write lock across the flip and the rebuild, so
/// readers never observe a half-drawn grid.
#[derive(Clone, Debug)]
pub struct SharedMaze {
    inner: Arc<RwLock<Maze>>,
}

impl SharedMaze {
    /// Wraps a maze for shared access.
    #[must_use]
    pub fn new(maze: Maze) -> Self {
        Self {
            inner: Arc::new(RwLock::new(maze)),
        }
    }

    /// Runs a closure with shared access to the maze.
    pub fn read<T>(&self, f: impl FnOnce(&Maze) -> T) -> T {
        f(&self.read_guard())
    }

    /// Runs a closure with exclusive access to the maze.
    pub fn write<T>(&self, f: impl FnOnce(&mut Maze) -> T) -> T {
        f(&mut self.write_guard())
    }

    /// Copies the current grid.
    #[must_use]
    pub fn grid_snapshot(&self) -> GridSnapshot {
        self.read(|maze| {
            let grid = maze.grid();
            GridSnapshot {
                size: grid.size(),
                cells: grid.iter().map(|(_, state)| state).collect(),
            }
        })
    }

    /// Snapshots of every path in catalog order.
    #[must_use]
    pub fn list_paths(&self) -> Vec<PathSnapshot> {
        self.read(Maze::list_paths)
    }

    /// Resolves a label, ignoring case.
    #[must_use]
    pub fn resolve_label(&self, label: &str) -> Option<PathId> {
        self.read(|maze| maze.resolve_label(label).cloned())
    }

    /// Flips a path's visibility and rebuilds under one write lock.
    pub fn toggle(&self, target: &str) -> ToggleOutcome {
        self.write(|maze| maze.toggle(target))
    }

    /// Forces every path's visibility and rebuilds under one write lock.
    pub fn set_all_visibility(&self, visible: bool) -> Vec<PathId> {
        self.write(|maze| maze.set_all_visibility(visible))
    }

    /// Applies a command under the write lock.
    pub fn apply(&self, command: Command, out_events: &mut Vec<Event>) {
        self.write(|maze| crate::apply(maze, command, out_events));
    }

    // Poisoning is recovered: every mutation redraws the grid from scratch.
    fn read_guard(&self) -> RwLockReadGuard<'_, Maze> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Maze> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

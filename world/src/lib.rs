#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative maze state for Corridor.
//!
//! A [`Maze`] owns the cell grid, the registry of named paths, and the fixed
//! entrance, exit, and center cells. The grid is derived state: every
//! visibility change runs [`Maze::rebuild_grid`], which redraws the fixtures
//! and every visible path from scratch in catalog order.

mod canvas;
mod labels;
mod rasterizer;
mod registry;
mod session;

pub use rasterizer::{choose_elbow_order, elbow_segments};
pub use registry::{Path, PathRegistry};
pub use session::{GridSnapshot, SharedMaze};

use corridor_core::{
    BuildError, CellCoord, Command, Event, GridView, LayoutParams, LookupError, PathId,
    PathSnapshot, Segment, ToggleOutcome,
};
use corridor_system_layout::{Catalog, Leg};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use canvas::GridCanvas;

/// Seed used by [`Maze::build`] for elbow corner choices.
pub const DEFAULT_LAYOUT_SEED: u64 = 0x42f0_e1eb_d4a5_3c21;

/// The maze aggregate: grid, paths, and fixtures.
#[derive(Clone, Debug)]
pub struct Maze {
    catalog: Catalog,
    canvas: GridCanvas,
    registry: PathRegistry,
    entrance: CellCoord,
    exit: CellCoord,
    center: CellCoord,
    seed: Option<u64>,
}

impl Maze {
    /// Builds a maze with every path visible using [`DEFAULT_LAYOUT_SEED`].
    pub fn build(params: LayoutParams) -> Result<Self, BuildError> {
        Self::build_seeded(params, DEFAULT_LAYOUT_SEED)
    }

    /// Builds a maze whose elbow corners are drawn from a seeded ChaCha8 stream.
    pub fn build_seeded(params: LayoutParams, seed: u64) -> Result<Self, BuildError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut maze = Self::assemble(params, &mut rng)?;
        maze.seed = Some(seed);
        log::info!(
            "built {}x{} maze with {} paths (seed {seed:#x})",
            params.size,
            params.size,
            maze.registry.len()
        );
        Ok(maze)
    }

    /// Builds a maze drawing elbow corners from the provided random source.
    pub fn build_with_rng<R: Rng + ?Sized>(
        params: LayoutParams,
        rng: &mut R,
    ) -> Result<Self, BuildError> {
        let maze = Self::assemble(params, rng)?;
        log::info!(
            "built {}x{} maze with {} paths",
            params.size,
            params.size,
            maze.registry.len()
        );
        Ok(maze)
    }

    fn assemble<R: Rng + ?Sized>(params: LayoutParams, rng: &mut R) -> Result<Self, BuildError> {
        let catalog = Catalog::new(params)?;
        if u64::from(params.size) < params.roomy_size() {
            log::warn!(
                "grid size {} is below {}; paths will be clamped onto the border",
                params.size,
                params.roomy_size()
            );
        }

        let frame = catalog.frame();
        let entrance = CellCoord::clamped(frame.entrance(), params.size);
        let exit = CellCoord::clamped(frame.exit(), params.size);
        let center = CellCoord::clamped(frame.center(), params.size);

        let mut registry = PathRegistry::new();
        for spec in catalog.paths() {
            let segments = resolve_legs(spec.legs(), rng)?;
            let _ = registry.register(PathId::new(spec.id()), spec.label(), segments)?;
        }

        let mut maze = Self {
            canvas: GridCanvas::new(params.size),
            catalog,
            registry,
            entrance,
            exit,
            center,
            seed: None,
        };
        maze.rebuild_grid();
        Ok(maze)
    }

    /// Redraws the grid from the fixtures and every visible path.
    ///
    /// This is the only operation that writes to the grid. Hidden paths end up
    /// with an empty cell set.
    pub fn rebuild_grid(&mut self) {
        let radius = self.catalog.params().center_radius;

        self.canvas.reset();
        self.canvas.carve_center(self.center, radius);
        self.canvas.mark_entrance_exit(self.entrance, self.exit);

        let canvas = &mut self.canvas;
        for path in self.registry.iter_mut() {
            let visible = path.is_visible();
            let (segments, cells) = path.drawing_parts();
            cells.clear();
            if !visible {
                continue;
            }
            for segment in segments {
                rasterizer::draw_straight(canvas, segment, cells);
            }
        }

        log::debug!(
            "rebuilt grid with {} visible paths and {} open cells",
            self.registry.visible_count(),
            self.open_cells()
        );
    }

    /// Read-only view of the current grid.
    #[must_use]
    pub fn grid(&self) -> GridView<'_> {
        self.canvas.view()
    }

    /// Snapshots of every path in catalog order.
    #[must_use]
    pub fn list_paths(&self) -> Vec<PathSnapshot> {
        self.registry
            .iter()
            .map(|path| PathSnapshot {
                id: path.id().clone(),
                label: path.label().to_owned(),
                visible: path.is_visible(),
                color: path.color(),
                label_position: labels::label_position(path.segments()),
            })
            .collect()
    }

    /// Flips the visibility of the path matching an id or label and rebuilds.
    ///
    /// On failure the outcome echoes the query and the maze is unchanged.
    pub fn toggle(&mut self, target: &str) -> ToggleOutcome {
        match self.flip(target) {
            Ok(id) => ToggleOutcome {
                success: true,
                resolved_id: id.to_string(),
            },
            Err(LookupError::NotFound { query }) => ToggleOutcome {
                success: false,
                resolved_id: query,
            },
        }
    }

    /// Forces every path to the provided visibility and rebuilds.
    ///
    /// Returns the ids whose flag changed.
    pub fn set_all_visibility(&mut self, visible: bool) -> Vec<PathId> {
        let changed = self.registry.set_all_visibility(visible);
        self.rebuild_grid();
        changed
    }

    /// Resolves a label, ignoring case.
    #[must_use]
    pub fn resolve_label(&self, label: &str) -> Option<&PathId> {
        self.registry.resolve_label(label)
    }

    /// Number of cells that are not walls.
    #[must_use]
    pub fn open_cells(&self) -> usize {
        self.grid()
            .iter()
            .filter(|(_, state)| state.is_open())
            .count()
    }

    fn flip(&mut self, target: &str) -> Result<PathId, LookupError> {
        match self.registry.toggle(target) {
            Ok(id) => {
                self.rebuild_grid();
                Ok(id)
            }
            Err(error) => {
                log::warn!("toggle ignored: {error}");
                Err(error)
            }
        }
    }

    fn rebuilt_event(&self) -> Event {
        Event::GridRebuilt {
            visible_paths: self.registry.visible_count(),
            open_cells: self.open_cells(),
        }
    }
}

fn resolve_legs<R: Rng + ?Sized>(legs: &[Leg], rng: &mut R) -> Result<Vec<Segment>, BuildError> {
    let mut segments = Vec::with_capacity(legs.len());
    for leg in legs {
        match *leg {
            Leg::Straight { from, to } => segments.push(Segment::new(from, to)?),
            Leg::Elbow { from, to } => {
                let order = choose_elbow_order(rng);
                segments.extend(elbow_segments(from, to, order)?);
            }
        }
    }
    Ok(segments)
}

/// Applies the provided command to the maze, appending the resulting events.
pub fn apply(maze: &mut Maze, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::TogglePath { target } => match maze.flip(&target) {
            Ok(id) => {
                let visible = maze.registry.get(&id).map_or(false, Path::is_visible);
                out_events.push(Event::PathVisibilityChanged { path: id, visible });
                out_events.push(maze.rebuilt_event());
            }
            Err(LookupError::NotFound { query }) => {
                out_events.push(Event::PathNotFound { query });
            }
        },
        Command::SetAllVisibility { visible } => {
            for path in maze.set_all_visibility(visible) {
                out_events.push(Event::PathVisibilityChanged { path, visible });
            }
            out_events.push(maze.rebuilt_event());
        }
    }
}

/// Query functions that expose read-only maze state.
pub mod query {
    use std::collections::BTreeSet;

    use corridor_core::{CellCoord, CellState, GridView, LayoutParams, PathId, Segment};
    use corridor_system_layout::Catalog;

    use super::{Maze, Path, PathRegistry};

    /// Entrance cell on the west edge.
    #[must_use]
    pub fn entrance(maze: &Maze) -> CellCoord {
        maze.entrance
    }

    /// Exit cell on the east edge.
    #[must_use]
    pub fn exit(maze: &Maze) -> CellCoord {
        maze.exit
    }

    /// Center cell of the always-open square.
    #[must_use]
    pub fn center(maze: &Maze) -> CellCoord {
        maze.center
    }

    /// Parameters the maze was built from.
    #[must_use]
    pub fn params(maze: &Maze) -> &LayoutParams {
        maze.catalog.params()
    }

    /// Seed used for elbow choices, when the maze was built from one.
    #[must_use]
    pub fn seed(maze: &Maze) -> Option<u64> {
        maze.seed
    }

    /// Layout catalog the maze was instantiated from.
    #[must_use]
    pub fn catalog(maze: &Maze) -> &Catalog {
        &maze.catalog
    }

    /// Registry holding every path.
    #[must_use]
    pub fn registry(maze: &Maze) -> &PathRegistry {
        &maze.registry
    }

    /// Path matching an exact id or a label.
    #[must_use]
    pub fn path<'a>(maze: &'a Maze, query: &str) -> Option<&'a Path> {
        maze.registry
            .resolve(query)
            .and_then(|id| maze.registry.get(id))
    }

    /// Segments of the path matching an exact id or a label.
    #[must_use]
    pub fn path_segments<'a>(maze: &'a Maze, query: &str) -> Option<&'a [Segment]> {
        path(maze, query).map(Path::segments)
    }

    /// Cells drawn for the path during the most recent rebuild.
    #[must_use]
    pub fn path_cells<'a>(maze: &'a Maze, query: &str) -> Option<&'a BTreeSet<CellCoord>> {
        path(maze, query).map(Path::cells)
    }

    /// Ids of the visible paths in catalog order.
    #[must_use]
    pub fn visible_paths(maze: &Maze) -> Vec<PathId> {
        maze.registry
            .iter()
            .filter(|path| path.is_visible())
            .map(|path| path.id().clone())
            .collect()
    }

    /// State of a single cell, if it lies on the grid.
    #[must_use]
    pub fn cell_state(maze: &Maze, cell: CellCoord) -> Option<CellState> {
        maze.grid().state(cell)
    }

    /// Read-only view of the current grid.
    #[must_use]
    pub fn grid(maze: &Maze) -> GridView<'_> {
        maze.grid()
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Corridor adapters.

use anyhow::Result as AnyResult;
use corridor_core::{CellCoord, CellState, GridView, PathColor, PathId, PathSnapshot, Point};
use glam::Vec2;
use std::{error::Error, fmt};

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE_PX: f32 = 10.0;

/// Display class assigned to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellClass {
    /// Solid wall.
    Wall,
    /// Open corridor.
    Path,
    /// Maze entrance.
    Entrance,
    /// Maze exit.
    Exit,
}

impl CellClass {
    /// Class name used by markup-based front ends.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Path => "path",
            Self::Entrance => "entrance",
            Self::Exit => "exit",
        }
    }

    /// Single-character glyph used by text front ends.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Path => '.',
            Self::Entrance => 'E',
            Self::Exit => 'X',
        }
    }
}

impl From<CellState> for CellClass {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Wall => Self::Wall,
            CellState::Path => Self::Path,
            CellState::Entrance => Self::Entrance,
            CellState::Exit => Self::Exit,
        }
    }
}

/// Square grid of cell classes ready to be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct GridPresentation {
    size: u32,
    cell_size: f32,
    classes: Vec<CellClass>,
}

impl GridPresentation {
    /// Captures the classes of every cell in the grid.
    ///
    /// Returns an error when `cell_size` is not a positive finite number.
    pub fn new(grid: GridView<'_>, cell_size: f32) -> Result<Self, RenderingError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(RenderingError::InvalidCellSize { cell_size });
        }

        Ok(Self {
            size: grid.size(),
            cell_size,
            classes: grid.iter().map(|(_, state)| CellClass::from(state)).collect(),
        })
    }

    /// Edge length of the grid in cells.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Edge length of one cell in pixels.
    #[must_use]
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Edge length of the whole grid in pixels.
    #[must_use]
    pub fn side_px(&self) -> f32 {
        self.size as f32 * self.cell_size
    }

    /// Class of the provided cell, if it lies on the grid.
    #[must_use]
    pub fn class(&self, cell: CellCoord) -> Option<CellClass> {
        if cell.x() >= self.size || cell.y() >= self.size {
            return None;
        }
        let width = usize::try_from(self.size).ok()?;
        let row = usize::try_from(cell.y()).ok()?;
        let column = usize::try_from(cell.x()).ok()?;
        self.classes.get(row * width + column).copied()
    }

    /// Iterator over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellClass]> {
        let width = usize::try_from(self.size).unwrap_or(0).max(1);
        self.classes.chunks(width)
    }

    /// Pixel offset of the top-left corner of a cell position.
    #[must_use]
    pub fn offset_of(&self, position: Point) -> Vec2 {
        Vec2::new(position.x() as f32, position.y() as f32) * self.cell_size
    }
}

/// Label drawn on top of the grid for one visible path.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelOverlay {
    /// Identifier of the labelled path.
    pub path: PathId,
    /// Text of the label.
    pub text: String,
    /// Grid position the label is anchored to.
    pub cell: Point,
    /// Pixel offset of the anchor from the grid origin.
    pub offset: Vec2,
    /// Display color of the path.
    pub color: PathColor,
}

/// Scene description combining the grid and its label overlays.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Cell classes of the grid.
    pub grid: GridPresentation,
    /// One label per visible path that has a label position.
    pub labels: Vec<LabelOverlay>,
}

impl Scene {
    /// Creates a scene, keeping labels only for visible paths.
    #[must_use]
    pub fn new(grid: GridPresentation, paths: &[PathSnapshot]) -> Self {
        let labels = paths
            .iter()
            .filter(|path| path.visible)
            .filter_map(|path| {
                let cell = path.label_position?;
                Some(LabelOverlay {
                    path: path.id.clone(),
                    text: path.label.clone(),
                    cell,
                    offset: grid.offset_of(cell),
                    color: path.color,
                })
            })
            .collect();

        Self { grid, labels }
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title shown above the rendered maze.
    pub title: String,
    /// Scene content that should be displayed.
    pub scene: Scene,
    /// Every path in catalog order, hidden ones included.
    pub paths: Vec<PathSnapshot>,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(title: T, scene: Scene, paths: Vec<PathSnapshot>) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            scene,
            paths,
        }
    }
}

/// Rendering backend capable of presenting Corridor scenes.
pub trait RenderingBackend {
    /// Emits one presentation.
    fn present(&mut self, presentation: &Presentation) -> AnyResult<()>;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// Cells must have a positive finite size.
    InvalidCellSize {
        /// Provided size that failed validation.
        cell_size: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize { cell_size } => {
                write!(f, "cell size must be positive (received {cell_size})")
            }
        }
    }
}

impl Error for RenderingError {}

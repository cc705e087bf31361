#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Corridor maze engine.
//!
//! This crate defines the vocabulary that connects the layout catalog, the
//! authoritative maze aggregate, and the adapters that present it. Adapters
//! submit [`Command`] values describing visibility changes, the world executes
//! those commands through its `apply` entry point, and then reports [`Event`]
//! values describing what changed. Geometry travels as unclamped [`Point`]
//! values until the rasterizer snaps it onto the grid as [`CellCoord`]s.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest grid edge length that still separates the entrance from the exit.
pub const MIN_GRID_SIZE: u32 = 2;

/// Upper bound accepted for every layout parameter.
pub const MAX_LAYOUT_PARAMETER: u32 = 4096;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// Solid cell that no path has opened.
    Wall,
    /// Open cell carved by a path or by the center region.
    Path,
    /// The maze entrance.
    Entrance,
    /// The maze exit.
    Exit,
}

impl CellState {
    /// Reports whether a walker may stand on the cell.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Unclamped geometric point produced by the layout catalog.
///
/// Points may lie outside the grid, including at negative coordinates, for
/// grids that are small relative to the layout offsets. They are clamped only
/// when rasterized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate (column).
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate (row).
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Averages two points, truncating toward zero on each axis.
    #[must_use]
    pub const fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Location of a single on-grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: u32,
    y: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based column of the cell.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based row of the cell.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Clamps a point onto a square grid with the provided edge length.
    ///
    /// Each axis is clamped independently into `0..=size - 1`. A zero-sized
    /// grid clamps everything onto the origin.
    #[must_use]
    pub fn clamped(point: Point, size: u32) -> Self {
        let last = i64::from(size.saturating_sub(1));
        let clamp = |value: i32| -> u32 {
            let clamped = i64::from(value).clamp(0, last);
            u32::try_from(clamped).unwrap_or(0)
        };
        Self::new(clamp(point.x()), clamp(point.y()))
    }

    /// Converts the cell back into geometric space.
    #[must_use]
    pub fn to_point(self) -> Point {
        let x = i32::try_from(self.x).unwrap_or(i32::MAX);
        let y = i32::try_from(self.y).unwrap_or(i32::MAX);
        Point::new(x, y)
    }
}

/// Axis followed by a straight segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Both endpoints share the same row.
    Horizontal,
    /// Both endpoints share the same column.
    Vertical,
}

/// Ordered pair of points that differ along at most one axis.
///
/// A segment whose endpoints coincide is a single cell and reports
/// [`Axis::Horizontal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    /// Creates an axis-aligned segment.
    ///
    /// Returns [`BuildError::DiagonalSegment`] when the endpoints differ on
    /// both axes; such requests must be decomposed as an elbow first.
    pub fn new(start: Point, end: Point) -> Result<Self, BuildError> {
        if start.x() != end.x() && start.y() != end.y() {
            return Err(BuildError::DiagonalSegment { start, end });
        }
        Ok(Self { start, end })
    }

    /// First endpoint of the segment.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Second endpoint of the segment.
    #[must_use]
    pub const fn end(&self) -> Point {
        self.end
    }

    /// Axis along which the segment runs.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        if self.start.y == self.end.y {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Midpoint of the segment, truncated toward zero on each axis.
    #[must_use]
    pub const fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Reports whether the point lies on the segment, endpoints included.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let within = |value: i32, a: i32, b: i32| a.min(b) <= value && value <= a.max(b);
        match self.axis() {
            Axis::Horizontal => {
                point.y() == self.start.y() && within(point.x(), self.start.x(), self.end.x())
            }
            Axis::Vertical => {
                point.x() == self.start.x() && within(point.y(), self.start.y(), self.end.y())
            }
        }
    }
}

/// Order in which an elbow covers its two axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElbowOrder {
    /// Run horizontally from the start, then vertically into the end.
    HorizontalFirst,
    /// Run vertically from the start, then horizontally into the end.
    VerticalFirst,
}

impl ElbowOrder {
    /// Corner visited between the two legs of an elbow from `from` to `to`.
    #[must_use]
    pub const fn corner(self, from: Point, to: Point) -> Point {
        match self {
            Self::HorizontalFirst => Point::new(to.x(), from.y()),
            Self::VerticalFirst => Point::new(from.x(), to.y()),
        }
    }
}

/// Unique identifier of a path in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathId(String);

impl PathId {
    /// Creates a new path identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Retrieves the textual identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display color assigned to a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl PathColor {
    /// Color assigned to every path when it is registered.
    pub const DEFAULT: Self = Self::from_rgb(0x2f, 0x95, 0x32);

    /// Creates a new path color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

impl Default for PathColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PathColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Parameters from which the whole maze topology is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutParams {
    /// Edge length of the square grid.
    pub size: u32,
    /// Distance kept between the outermost paths and the grid border.
    pub border_offset: u32,
    /// Half-width of the always-open center square.
    pub center_radius: u32,
    /// Minimum length of the first straight run leaving a fixture.
    pub min_straight: u32,
}

impl LayoutParams {
    /// Creates a new parameter set.
    #[must_use]
    pub const fn new(size: u32, border_offset: u32, center_radius: u32, min_straight: u32) -> Self {
        Self {
            size,
            border_offset,
            center_radius,
            min_straight,
        }
    }

    /// Smallest grid size for which the layout fits without clamping.
    #[must_use]
    pub fn roomy_size(&self) -> u64 {
        2 * (u64::from(self.center_radius)
            + u64::from(self.border_offset)
            + u64::from(self.min_straight))
    }

    /// Checks the parameters against the supported ranges.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.size < MIN_GRID_SIZE {
            return Err(BuildError::GridTooSmall {
                size: self.size,
                minimum: MIN_GRID_SIZE,
            });
        }

        let checks = [
            ("size", self.size),
            ("border_offset", self.border_offset),
            ("center_radius", self.center_radius),
            ("min_straight", self.min_straight),
        ];
        for (name, value) in checks {
            if value > MAX_LAYOUT_PARAMETER {
                return Err(BuildError::ParameterTooLarge {
                    name,
                    value,
                    maximum: MAX_LAYOUT_PARAMETER,
                });
            }
        }

        Ok(())
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::new(64, 3, 10, 5)
    }
}

/// Commands that express every permissible maze mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Flips the visibility of the path matching an id or label.
    TogglePath {
        /// Path id, or a label matched case-insensitively.
        target: String,
    },
    /// Forces every path to the provided visibility.
    SetAllVisibility {
        /// Visibility applied to every path.
        visible: bool,
    },
}

/// Events reported by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a path changed visibility.
    PathVisibilityChanged {
        /// Identifier of the affected path.
        path: PathId,
        /// Visibility after the change.
        visible: bool,
    },
    /// Reports that a toggle target matched no path.
    PathNotFound {
        /// Target exactly as it was submitted.
        query: String,
    },
    /// Confirms that the grid was recomputed from the visible paths.
    GridRebuilt {
        /// Number of paths drawn into the grid.
        visible_paths: usize,
        /// Number of cells that are not walls after the rebuild.
        open_cells: usize,
    },
}

/// Result of a visibility toggle as reported to adapters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    /// Indicates whether a path was found and flipped.
    pub success: bool,
    /// Identifier of the flipped path, or the query when nothing matched.
    pub resolved_id: String,
}

/// Immutable representation of a path used for listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSnapshot {
    /// Unique identifier of the path.
    pub id: PathId,
    /// Human-readable label.
    pub label: String,
    /// Whether the path is currently drawn.
    pub visible: bool,
    /// Display color of the path.
    pub color: PathColor,
    /// Cell at which the path label is anchored, if the path has segments.
    pub label_position: Option<Point>,
}

/// Read-only view into a square grid of cell states stored row-major.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    cells: &'a [CellState],
    size: u32,
}

impl<'a> GridView<'a> {
    /// Captures a new grid view backed by the provided cell slice.
    #[must_use]
    pub fn new(cells: &'a [CellState], size: u32) -> Self {
        Self { cells, size }
    }

    /// Edge length of the grid.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// State of the provided cell, if it lies on the grid.
    #[must_use]
    pub fn state(&self, cell: CellCoord) -> Option<CellState> {
        if cell.x() >= self.size || cell.y() >= self.size {
            return None;
        }
        let width = usize::try_from(self.size).ok()?;
        let row = usize::try_from(cell.y()).ok()?;
        let column = usize::try_from(cell.x()).ok()?;
        self.cells.get(row * width + column).copied()
    }

    /// Iterator over the grid rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [CellState]> + 'a {
        let width = usize::try_from(self.size).unwrap_or(0).max(1);
        self.cells.chunks(width)
    }

    /// Iterator over every cell paired with its coordinate in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, CellState)> + 'a {
        let size = self.size.max(1);
        self.cells.iter().enumerate().map(move |(index, state)| {
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            (CellCoord::new(index % size, index / size), *state)
        })
    }

    /// Number of cells currently in the provided state.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }
}

/// Fatal configuration problems detected while building a maze.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The grid cannot hold distinct entrance and exit cells.
    #[error("grid size {size} is below the minimum of {minimum}")]
    GridTooSmall {
        /// Requested edge length.
        size: u32,
        /// Smallest accepted edge length.
        minimum: u32,
    },
    /// A layout parameter exceeds the supported range.
    #[error("layout parameter `{name}` is {value}, above the maximum of {maximum}")]
    ParameterTooLarge {
        /// Name of the offending parameter.
        name: &'static str,
        /// Requested value.
        value: u32,
        /// Largest accepted value.
        maximum: u32,
    },
    /// A straight segment was requested between points that differ on both axes.
    #[error("segment from {start} to {end} is not axis-aligned")]
    DiagonalSegment {
        /// First endpoint of the rejected segment.
        start: Point,
        /// Second endpoint of the rejected segment.
        end: Point,
    },
    /// Two catalog entries share an id.
    #[error("path id `{id}` is registered twice")]
    DuplicatePathId {
        /// The repeated identifier.
        id: PathId,
    },
    /// Two catalog entries share a label, ignoring case.
    #[error("path label `{label}` is registered twice")]
    DuplicateLabel {
        /// The repeated label as written by the second entry.
        label: String,
    },
}

/// Failures reported when resolving a path by id or label.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No path id or label matched the query.
    #[error("no path matches `{query}`")]
    NotFound {
        /// Query exactly as it was submitted.
        query: String,
    },
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Declarative layout catalog describing the maze's fixed topology.
//!
//! The catalog is a pure function of [`LayoutParams`]. It yields a table of
//! named [`Anchor`] points and an ordered list of [`PathSpec`] values whose
//! legs are expressed in terms of those anchors, the frame fixtures, and fixed
//! offsets. Paths are stitched together only by sharing coordinates; the
//! catalog never builds an explicit graph. Elbow legs are left unresolved here
//! so the world can choose their corner once, at build time.

mod anchors;
mod paths;

pub use anchors::{Anchor, AnchorTable, Frame};

use corridor_core::{BuildError, LayoutParams, Point, Segment};

/// A single connection request inside a path specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    /// Axis-aligned run between two points.
    Straight {
        /// Start of the run.
        from: Point,
        /// End of the run.
        to: Point,
    },
    /// Two-segment connection through a corner chosen at build time.
    Elbow {
        /// Start of the connection.
        from: Point,
        /// End of the connection.
        to: Point,
    },
}

impl Leg {
    /// Reports whether the leg passes through the provided point.
    ///
    /// Elbows are only known to touch their endpoints before the corner is
    /// chosen.
    #[must_use]
    pub fn touches(&self, point: Point) -> bool {
        match *self {
            Self::Straight { from, to } => {
                Segment::new(from, to).map_or(false, |segment| segment.contains(point))
            }
            Self::Elbow { from, to } => from == point || to == point,
        }
    }
}

/// Definition of one named path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSpec {
    id: &'static str,
    label: &'static str,
    legs: Vec<Leg>,
}

impl PathSpec {
    /// Starts a path definition with no legs.
    #[must_use]
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            legs: Vec::new(),
        }
    }

    /// Appends a straight leg.
    #[must_use]
    pub fn straight(mut self, from: Point, to: Point) -> Self {
        self.legs.push(Leg::Straight { from, to });
        self
    }

    /// Appends an elbow leg.
    #[must_use]
    pub fn elbow(mut self, from: Point, to: Point) -> Self {
        self.legs.push(Leg::Elbow { from, to });
        self
    }

    /// Appends one straight leg per consecutive pair of points.
    #[must_use]
    pub fn polyline(mut self, points: &[Point]) -> Self {
        self.legs.extend(
            points
                .windows(2)
                .map(|pair| Leg::Straight {
                    from: pair[0],
                    to: pair[1],
                }),
        );
        self
    }

    /// Unique identifier of the path.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Display label of the path.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Legs in drawing order.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Reports whether any leg passes through the point.
    #[must_use]
    pub fn touches(&self, point: Point) -> bool {
        self.legs.iter().any(|leg| leg.touches(point))
    }
}

/// Anchor table and ordered path specifications for one set of parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    params: LayoutParams,
    frame: Frame,
    anchors: AnchorTable,
    paths: Vec<PathSpec>,
}

impl Catalog {
    /// Derives the catalog for the provided parameters.
    pub fn new(params: LayoutParams) -> Result<Self, BuildError> {
        params.validate()?;
        let frame = Frame::new(&params);
        let anchors = AnchorTable::new(&frame);
        let paths = paths::path_specs(&frame, &anchors);
        Ok(Self {
            params,
            frame,
            anchors,
            paths,
        })
    }

    /// Parameters the catalog was derived from.
    #[must_use]
    pub const fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Fixtures and distances of the grid.
    #[must_use]
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Named anchor coordinates.
    #[must_use]
    pub const fn anchors(&self) -> &AnchorTable {
        &self.anchors
    }

    /// Path specifications in catalog order.
    #[must_use]
    pub fn paths(&self) -> &[PathSpec] {
        &self.paths
    }

    /// Looks up a path specification by id.
    #[must_use]
    pub fn path(&self, id: &str) -> Option<&PathSpec> {
        self.paths.iter().find(|spec| spec.id() == id)
    }

    /// Paths whose legs pass through the anchor, in catalog order.
    #[must_use]
    pub fn paths_through(&self, anchor: Anchor) -> Vec<&PathSpec> {
        let point = self.anchors[anchor];
        self.paths
            .iter()
            .filter(|spec| spec.touches(point))
            .collect()
    }
}

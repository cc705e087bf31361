//! Grid frame and the named anchor points derived from it.

use std::ops::Index;

use corridor_core::{LayoutParams, Point};

/// Fixed reference points and distances derived from the layout parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    size: i32,
    border: i32,
    radius: i32,
    straight: i32,
    center: Point,
    entrance: Point,
    exit: Point,
}

impl Frame {
    /// Derives the frame for validated parameters.
    #[must_use]
    pub(crate) fn new(params: &LayoutParams) -> Self {
        let size = signed(params.size);
        let middle = size / 2;
        Self {
            size,
            border: signed(params.border_offset),
            radius: signed(params.center_radius),
            straight: signed(params.min_straight),
            center: Point::new(middle, middle),
            entrance: Point::new(0, middle),
            exit: Point::new(size - 1, middle),
        }
    }

    /// Edge length of the grid.
    #[must_use]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// Distance kept from the grid border.
    #[must_use]
    pub const fn border(&self) -> i32 {
        self.border
    }

    /// Half-width of the center square.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Minimum straight run length.
    #[must_use]
    pub const fn straight(&self) -> i32 {
        self.straight
    }

    /// Geometric center of the grid.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Entrance cell on the west edge.
    #[must_use]
    pub const fn entrance(&self) -> Point {
        self.entrance
    }

    /// Exit cell on the east edge.
    #[must_use]
    pub const fn exit(&self) -> Point {
        self.exit
    }

    /// Coordinate of the border lane on the far (east or south) side.
    #[must_use]
    pub const fn far(&self) -> i32 {
        self.size - self.border
    }

    /// Column just west of the center square.
    #[must_use]
    pub const fn west_mouth(&self) -> i32 {
        self.center.x() - self.radius - 1
    }

    /// Column just east of the center square.
    #[must_use]
    pub const fn east_mouth(&self) -> i32 {
        self.center.x() + self.radius + 1
    }
}

// Parameters are validated against MAX_LAYOUT_PARAMETER before a frame exists.
fn signed(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Named intersection points shared between path definitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Anchor {
    /// First cell east of the entrance.
    EntranceStep,
    /// Corner where both main paths leave the entrance corridor.
    EntranceTurn,
    /// Point along the southern border lane.
    LeftBottom,
    /// Point along the western border lane, north of center.
    LeftVertical,
    /// Point on the western approach to the center.
    LeftApproach,
    /// Point along the northern border lane.
    RightTop,
    /// Point along the eastern border lane, south of center.
    RightVertical,
    /// Point on the eastern approach to the center.
    RightApproach,
    /// Point on the column of the center-to-exit run.
    ExitVertical,
    /// Point on the final run into the exit.
    ExitHorizontal,
    /// Corner of the north-west spur.
    NorthWestJunction,
    /// Point on the north-east spur.
    NorthEastJunction,
    /// Point on the south-west spur.
    SouthWestJunction,
    /// Point on the south-east spur.
    SouthEastJunction,
    /// Corner where the western switchback turns south.
    WestSwitchbackStart,
    /// Corner where the eastern switchback turns west.
    EastSwitchbackTurn,
}

impl Anchor {
    /// Number of anchors in the table.
    pub const COUNT: usize = 16;

    /// Every anchor in table order.
    pub const ALL: [Anchor; Self::COUNT] = [
        Self::EntranceStep,
        Self::EntranceTurn,
        Self::LeftBottom,
        Self::LeftVertical,
        Self::LeftApproach,
        Self::RightTop,
        Self::RightVertical,
        Self::RightApproach,
        Self::ExitVertical,
        Self::ExitHorizontal,
        Self::NorthWestJunction,
        Self::NorthEastJunction,
        Self::SouthWestJunction,
        Self::SouthEastJunction,
        Self::WestSwitchbackStart,
        Self::EastSwitchbackTurn,
    ];

    /// Stable snake_case name of the anchor.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EntranceStep => "entrance_step",
            Self::EntranceTurn => "entrance_turn",
            Self::LeftBottom => "left_bottom",
            Self::LeftVertical => "left_vertical",
            Self::LeftApproach => "left_approach",
            Self::RightTop => "right_top",
            Self::RightVertical => "right_vertical",
            Self::RightApproach => "right_approach",
            Self::ExitVertical => "exit_vertical",
            Self::ExitHorizontal => "exit_horizontal",
            Self::NorthWestJunction => "north_west_junction",
            Self::NorthEastJunction => "north_east_junction",
            Self::SouthWestJunction => "south_west_junction",
            Self::SouthEastJunction => "south_east_junction",
            Self::WestSwitchbackStart => "west_switchback_start",
            Self::EastSwitchbackTurn => "east_switchback_turn",
        }
    }

    /// Looks an anchor up by its snake_case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|anchor| anchor.name() == name)
    }

    fn position(self, frame: &Frame) -> Point {
        let b = frame.border();
        let r = frame.radius();
        let s = frame.straight();
        let far = frame.far();
        let cx = frame.center().x();
        let cy = frame.center().y();
        let entrance = frame.entrance();

        match self {
            Self::EntranceStep => Point::new(entrance.x() + 1, entrance.y()),
            Self::EntranceTurn => Point::new(entrance.x() + 1 + s, entrance.y()),
            Self::LeftBottom => Point::new(b + 15, far),
            Self::LeftVertical => Point::new(b, cy - 10),
            Self::LeftApproach => Point::new(cx - r - 8, cy + s),
            Self::RightTop => Point::new(far - 15, b),
            Self::RightVertical => Point::new(far, cy + 10),
            Self::RightApproach => Point::new(cx + r + 8, cy - s),
            Self::ExitVertical => Point::new(cx + r + s, cy + 10),
            Self::ExitHorizontal => Point::new(cx + r + s + 7, frame.exit().y()),
            Self::NorthWestJunction => Point::new(b + 10, b + 15),
            Self::NorthEastJunction => Point::new(far - 10, b + 15),
            Self::SouthWestJunction => Point::new(b + 20, far - 10),
            Self::SouthEastJunction => Point::new(far - 15, far - 10),
            Self::WestSwitchbackStart => Point::new(b + 12, cy - 15),
            Self::EastSwitchbackTurn => Point::new(far - 12, cy + 5),
        }
    }
}

/// Immutable coordinates of every anchor for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorTable {
    positions: [Point; Anchor::COUNT],
}

impl AnchorTable {
    pub(crate) fn new(frame: &Frame) -> Self {
        Self {
            positions: Anchor::ALL.map(|anchor| anchor.position(frame)),
        }
    }

    /// Coordinates of the anchor with the provided name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Point> {
        Anchor::from_name(name).map(|anchor| self[anchor])
    }

    /// Iterator over every anchor and its coordinates in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Anchor, Point)> + '_ {
        Anchor::ALL.into_iter().zip(self.positions.iter().copied())
    }
}

impl Index<Anchor> for AnchorTable {
    type Output = Point;

    fn index(&self, anchor: Anchor) -> &Point {
        &self.positions[anchor as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_names_round_trip() {
        for anchor in Anchor::ALL {
            assert_eq!(Anchor::from_name(anchor.name()), Some(anchor));
        }
        assert_eq!(Anchor::from_name("nowhere"), None);
    }

    #[test]
    fn anchors_follow_frame_arithmetic() {
        let frame = Frame::new(&LayoutParams::default());
        let table = AnchorTable::new(&frame);

        assert_eq!(frame.far(), 61);
        assert_eq!(frame.west_mouth(), 21);
        assert_eq!(frame.east_mouth(), 43);
        assert_eq!(table[Anchor::EntranceStep], Point::new(1, 32));
        assert_eq!(table[Anchor::EntranceTurn], Point::new(6, 32));
        assert_eq!(table[Anchor::RightTop], Point::new(46, 3));
        assert_eq!(table[Anchor::ExitVertical], Point::new(47, 42));
        assert_eq!(table.get("east_switchback_turn"), Some(Point::new(49, 37)));
    }

    #[test]
    fn table_order_matches_enum_discriminants() {
        for (index, anchor) in Anchor::ALL.into_iter().enumerate() {
            assert_eq!(anchor as usize, index);
        }
    }
}

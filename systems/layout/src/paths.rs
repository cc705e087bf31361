//! The fixed catalog of named paths.
//!
//! Offsets that are not derived from the layout parameters are fixed cell
//! counts. Paths only connect where their legs share coordinates, so the
//! anchors referenced here must not be replaced by equivalent literals that
//! could drift apart.

use corridor_core::Point;

use crate::{Anchor, AnchorTable, Frame, PathSpec};

pub(crate) fn path_specs(frame: &Frame, anchors: &AnchorTable) -> Vec<PathSpec> {
    let b = frame.border();
    let r = frame.radius();
    let s = frame.straight();
    let far = frame.far();
    let cx = frame.center().x();
    let cy = frame.center().y();
    let wm = frame.west_mouth();
    let em = frame.east_mouth();
    let exit = frame.exit();
    let p = Point::new;

    let step = anchors[Anchor::EntranceStep];
    let turn = anchors[Anchor::EntranceTurn];
    let north_west = anchors[Anchor::NorthWestJunction];
    let north_east = anchors[Anchor::NorthEastJunction];
    let south_west = anchors[Anchor::SouthWestJunction];
    let south_east = anchors[Anchor::SouthEastJunction];
    let switchback_start = anchors[Anchor::WestSwitchbackStart];
    let switchback_turn = anchors[Anchor::EastSwitchbackTurn];

    vec![
        PathSpec::new("main_left", "Alpha").polyline(&[
            step,
            turn,
            p(turn.x(), far),
            p(b, far),
            p(b, cy + s),
            p(wm, cy + s),
        ]),
        PathSpec::new("main_right", "Bravo").polyline(&[
            step,
            turn,
            p(turn.x(), b),
            p(far, b),
            p(far, cy - s),
            p(em, cy - s),
        ]),
        PathSpec::new("center_exit", "Charlie").polyline(&[
            p(em, cy),
            p(cx + r + s, cy),
            p(cx + r + s, exit.y()),
            p(exit.x() - 1, exit.y()),
        ]),
        PathSpec::new("top_left_spur", "Delta")
            .polyline(&[p(b + 10, b), north_west, p(wm, north_west.y())])
            .straight(p(b + 10, b), p(anchors[Anchor::RightTop].x(), b)),
        PathSpec::new("top_right_spur", "Echo")
            .polyline(&[p(far - 10, b), p(far - 10, b + 25), p(em, b + 25)])
            .straight(p(far - 10, b + 25), p(far - 10, cy - s)),
        PathSpec::new("bottom_left_spur", "Foxtrot")
            .polyline(&[p(b + 20, far), p(b + 20, far - 15), p(wm, far - 15)])
            .straight(p(b + 20, far), p(anchors[Anchor::LeftBottom].x(), far)),
        PathSpec::new("bottom_right_spur", "Golf")
            .polyline(&[p(far - 15, far), p(far - 15, far - 25), p(em, far - 25)])
            .straight(p(far - 15, far), p(far, far)),
        PathSpec::new("west_switchback", "Hotel").polyline(&[
            p(b, switchback_start.y()),
            switchback_start,
            p(switchback_start.x(), cy - 5),
            p(wm, cy - 5),
        ]),
        PathSpec::new("east_switchback", "India")
            .polyline(&[
                p(far, cy + 15),
                p(switchback_turn.x(), cy + 15),
                switchback_turn,
                p(em, switchback_turn.y()),
            ])
            .straight(
                p(switchback_turn.x(), cy + 15),
                p(anchors[Anchor::ExitVertical].x(), cy + 15),
            ),
        PathSpec::new("cross_links", "Juliet")
            .elbow(north_west, switchback_start)
            .elbow(south_west, south_east)
            .elbow(north_east, switchback_turn),
        PathSpec::new("north_left_approach", "Kilo")
            .polyline(&[p(cx - 20, b), p(cx - 20, b + 15), p(wm, b + 15)])
            .straight(p(cx - 20, b), p(b + 20, b)),
        PathSpec::new("north_right_approach", "Lima")
            .polyline(&[p(cx + 20, b), p(cx + 20, b + 15), p(em, b + 15)])
            .straight(p(cx + 20, b), p(far - 20, b)),
        PathSpec::new("south_left_approach", "Mike")
            .polyline(&[p(cx - 15, far), p(cx - 15, far - 15), p(wm, far - 15)])
            .straight(p(cx - 15, far), p(b + 20, far)),
        PathSpec::new("south_right_approach", "November")
            .polyline(&[p(cx + 15, far), p(cx + 15, far - 15), p(em, far - 15)])
            .straight(p(cx + 15, far), p(far - 15, far)),
        PathSpec::new("west_upper_approach", "Oscar").polyline(&[
            p(b, cy - 20),
            p(b + 15, cy - 20),
            p(wm, cy - 20),
        ]),
        PathSpec::new("west_lower_approach", "Papa").polyline(&[
            p(b, cy + 20),
            p(b + 15, cy + 20),
            p(wm, cy + 20),
        ]),
        PathSpec::new("east_upper_approach", "Quebec").polyline(&[
            p(far, cy - 20),
            p(far - 15, cy - 20),
            p(em, cy - 20),
        ]),
        PathSpec::new("east_lower_approach", "Romeo").polyline(&[
            p(far, cy + 20),
            p(far - 15, cy + 20),
            p(em, cy + 20),
        ]),
        PathSpec::new("north_west_stairs", "Sierra")
            .polyline(&[
                p(b + 25, b + 5),
                p(b + 25, b + 30),
                p(b + 40, b + 30),
                p(b + 40, cy - r - 5),
                p(wm, cy - r - 5),
            ])
            .straight(p(b + 25, b + 5), p(b + 10, b + 5)),
        PathSpec::new("north_east_stairs", "Tango")
            .polyline(&[
                p(far - 25, b + 5),
                p(far - 25, b + 30),
                p(far - 40, b + 30),
                p(far - 40, cy - r - 5),
                p(em, cy - r - 5),
            ])
            .straight(p(far - 25, b + 5), p(far - 10, b + 5)),
        PathSpec::new("south_west_stairs", "Uniform")
            .polyline(&[
                p(b + 30, far - 5),
                p(b + 30, far - 30),
                p(b + 45, far - 30),
                p(b + 45, cy + r + 5),
                p(wm, cy + r + 5),
            ])
            .straight(p(b + 30, far - 5), p(b + 20, far - 5)),
        PathSpec::new("south_east_stairs", "Victor")
            .polyline(&[
                p(far - 30, far - 5),
                p(far - 30, far - 30),
                p(far - 45, far - 30),
                p(far - 45, cy + r + 5),
                p(em, cy + r + 5),
            ])
            .straight(p(far - 30, far - 5), p(far - 15, far - 5)),
        PathSpec::new("north_crossing", "Whiskey")
            .straight(p(b + 20, cy - 30), p(far - 20, cy - 30))
            .straight(p(b + 20, cy - 30), p(b + 20, b + 20))
            .straight(p(far - 20, cy - 30), p(far - 20, b + 20)),
        PathSpec::new("south_crossing", "X-ray")
            .straight(p(b + 20, cy + 30), p(far - 20, cy + 30))
            .straight(p(b + 20, cy + 30), p(b + 20, far - 20))
            .straight(p(far - 20, cy + 30), p(far - 20, far - 20)),
        PathSpec::new("west_grid", "Yankee")
            .straight(p(b + 15, cy - 40), p(cx - r - 10, cy - 40))
            .straight(p(b + 15, cy - 40), p(b + 15, b + 15))
            .straight(p(cx - r - 10, cy - 40), p(cx - r - 10, cy - 20)),
        PathSpec::new("grid_links", "Zulu")
            .straight(p(b + 30, b + 30), p(b + 30, cy - 30))
            .straight(p(far - 30, b + 30), p(far - 30, cy - 30))
            .straight(p(b + 30, far - 30), p(b + 30, cy + 30))
            .straight(p(far - 30, far - 30), p(far - 30, cy + 30))
            .straight(p(cx - 20, b + 20), p(cx - 20, cy - 30))
            .straight(p(cx + 20, b + 20), p(cx + 20, cy - 30))
            .straight(p(cx - 20, far - 20), p(cx - 20, cy + 30))
            .straight(p(cx + 20, far - 20), p(cx + 20, cy + 30))
            .straight(p(cx - r - 15, cy - 10), p(cx - r - 15, cy + 10))
            .straight(p(cx + r + 15, cy - 10), p(cx + r + 15, cy + 10)),
    ]
}

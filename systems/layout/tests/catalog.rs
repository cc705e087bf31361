use std::collections::HashSet;

use corridor_core::{LayoutParams, Point};
use corridor_system_layout::{Anchor, Catalog, Leg};

fn default_catalog() -> Catalog {
    Catalog::new(LayoutParams::default()).expect("default parameters are valid")
}

fn ids_through(catalog: &Catalog, anchor: Anchor) -> Vec<&'static str> {
    catalog
        .paths_through(anchor)
        .into_iter()
        .map(|spec| spec.id())
        .collect()
}

#[test]
fn catalog_lists_every_path_in_order() {
    let catalog = default_catalog();
    let ids: Vec<_> = catalog.paths().iter().map(|spec| spec.id()).collect();

    assert_eq!(ids.len(), 26);
    assert_eq!(ids[0], "main_left");
    assert_eq!(ids[1], "main_right");
    assert_eq!(ids[2], "center_exit");
    assert_eq!(ids[9], "cross_links");
    assert_eq!(ids[25], "grid_links");
    assert_eq!(catalog.path("main_left").map(|spec| spec.label()), Some("Alpha"));
}

#[test]
fn ids_and_labels_are_unique() {
    let catalog = default_catalog();
    let mut ids = HashSet::new();
    let mut labels = HashSet::new();

    for spec in catalog.paths() {
        assert!(ids.insert(spec.id()), "duplicate id {}", spec.id());
        assert!(
            labels.insert(spec.label().to_lowercase()),
            "duplicate label {}",
            spec.label()
        );
    }
}

#[test]
fn straight_legs_are_axis_aligned() {
    for size in [36, 48, 64, 100] {
        let catalog =
            Catalog::new(LayoutParams::new(size, 3, 10, 5)).expect("parameters are valid");
        for spec in catalog.paths() {
            for leg in spec.legs() {
                if let Leg::Straight { from, to } = leg {
                    assert!(
                        from.x() == to.x() || from.y() == to.y(),
                        "{} has a diagonal leg from {from} to {to}",
                        spec.id()
                    );
                }
            }
        }
    }
}

#[test]
fn only_cross_links_request_elbows() {
    let catalog = default_catalog();
    for spec in catalog.paths() {
        let elbows = spec
            .legs()
            .iter()
            .filter(|leg| matches!(leg, Leg::Elbow { .. }))
            .count();
        let expected = if spec.id() == "cross_links" { 3 } else { 0 };
        assert_eq!(elbows, expected, "unexpected elbow count for {}", spec.id());
    }
}

#[test]
fn main_left_runs_from_entrance_to_west_mouth() {
    let catalog = default_catalog();
    let spec = catalog.path("main_left").expect("main_left exists");

    assert_eq!(
        spec.legs(),
        &[
            Leg::Straight {
                from: Point::new(1, 32),
                to: Point::new(6, 32),
            },
            Leg::Straight {
                from: Point::new(6, 32),
                to: Point::new(6, 61),
            },
            Leg::Straight {
                from: Point::new(6, 61),
                to: Point::new(3, 61),
            },
            Leg::Straight {
                from: Point::new(3, 61),
                to: Point::new(3, 37),
            },
            Leg::Straight {
                from: Point::new(3, 37),
                to: Point::new(21, 37),
            },
        ]
    );
}

#[test]
fn entrance_anchors_are_shared_by_both_main_paths() {
    let catalog = default_catalog();

    assert_eq!(
        ids_through(&catalog, Anchor::EntranceStep),
        vec!["main_left", "main_right"]
    );
    assert_eq!(
        ids_through(&catalog, Anchor::EntranceTurn),
        vec!["main_left", "main_right"]
    );
}

#[test]
fn junction_anchors_stitch_cross_links_into_the_spurs() {
    let catalog = default_catalog();

    assert_eq!(
        ids_through(&catalog, Anchor::NorthWestJunction),
        vec!["top_left_spur", "cross_links", "north_left_approach"]
    );
    assert_eq!(
        ids_through(&catalog, Anchor::NorthEastJunction),
        vec!["top_right_spur", "cross_links", "north_right_approach"]
    );
    assert_eq!(
        ids_through(&catalog, Anchor::SouthWestJunction),
        vec!["bottom_left_spur", "cross_links", "south_crossing"]
    );
    assert_eq!(
        ids_through(&catalog, Anchor::SouthEastJunction),
        vec!["bottom_right_spur", "cross_links"]
    );
    assert_eq!(
        ids_through(&catalog, Anchor::WestSwitchbackStart),
        vec!["west_switchback", "cross_links"]
    );
    assert_eq!(
        ids_through(&catalog, Anchor::EastSwitchbackTurn),
        vec!["east_switchback", "cross_links"]
    );
}

#[test]
fn border_anchors_join_spurs_to_main_paths() {
    let catalog = default_catalog();

    assert_eq!(
        ids_through(&catalog, Anchor::RightTop),
        vec!["main_right", "top_left_spur", "north_right_approach"]
    );
    assert_eq!(
        ids_through(&catalog, Anchor::LeftBottom),
        vec!["bottom_left_spur", "south_left_approach"]
    );
    assert_eq!(
        ids_through(&catalog, Anchor::ExitHorizontal),
        vec!["center_exit"]
    );
}

#[test]
fn anchors_scale_with_parameters() {
    let small = Catalog::new(LayoutParams::new(40, 2, 6, 4)).expect("valid");
    let anchors = small.anchors();

    assert_eq!(anchors[Anchor::EntranceStep], Point::new(1, 20));
    assert_eq!(anchors[Anchor::EntranceTurn], Point::new(5, 20));
    assert_eq!(anchors[Anchor::RightTop], Point::new(23, 2));
    assert_eq!(anchors[Anchor::ExitHorizontal], Point::new(37, 20));
    assert_eq!(small.frame().exit(), Point::new(39, 20));
    assert_eq!(anchors.iter().count(), Anchor::COUNT);
}

#[test]
fn entrance_turn_sits_one_straight_run_past_the_step() {
    for min_straight in [0, 4, 5, 12] {
        let catalog = Catalog::new(LayoutParams::new(48, 3, 10, min_straight)).expect("valid");
        let anchors = catalog.anchors();
        let step = anchors[Anchor::EntranceStep];
        let turn = anchors[Anchor::EntranceTurn];

        assert_eq!(step, Point::new(1, 24));
        assert_eq!(turn, Point::new(1 + min_straight as i32, 24));
    }
}

use std::thread;

use corridor_core::{CellState, Command, Event, LayoutParams, PathId};
use corridor_world::{Maze, SharedMaze};

fn shared() -> SharedMaze {
    SharedMaze::new(Maze::build(LayoutParams::default()).expect("default maze builds"))
}

#[test]
fn readers_never_observe_a_torn_grid() {
    let session = shared();
    let full = session.grid_snapshot();
    let _ = session.toggle("main_left");
    let without_main_left = session.grid_snapshot();
    let _ = session.toggle("main_left");

    let writer = {
        let session = session.clone();
        thread::spawn(move || {
            for _ in 0..50 {
                assert!(session.toggle("Alpha").success);
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let session = session.clone();
            let full = full.clone();
            let without_main_left = without_main_left.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    let snapshot = session.grid_snapshot();
                    assert!(
                        snapshot == full || snapshot == without_main_left,
                        "observed a grid that no visibility state produces"
                    );
                }
            })
        })
        .collect();

    writer.join().expect("writer finished");
    for reader in readers {
        reader.join().expect("reader finished");
    }

    assert_eq!(session.grid_snapshot(), full);
}

#[test]
fn session_forwards_queries_and_commands() {
    let session = shared();

    assert_eq!(session.resolve_label("ALPHA"), Some(PathId::new("main_left")));
    assert_eq!(session.set_all_visibility(false).len(), 26);
    assert!(session.list_paths().iter().all(|path| !path.visible));

    let mut events = Vec::new();
    session.apply(
        Command::TogglePath {
            target: "Charlie".to_owned(),
        },
        &mut events,
    );
    assert_eq!(
        events.first(),
        Some(&Event::PathVisibilityChanged {
            path: PathId::new("center_exit"),
            visible: true,
        })
    );

    let snapshot = session.grid_snapshot();
    assert_eq!(snapshot.size(), 64);
    assert_eq!(snapshot.view().count(CellState::Exit), 1);
    let open = snapshot
        .view()
        .iter()
        .filter(|(_, state)| state.is_open())
        .count();
    assert_eq!(session.read(Maze::open_cells), open);
}

// ABOUTME: End-to-end drag scenarios against the demo grid.
// ABOUTME: Drives ResizableGrid the way a host would and checks merged track state.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use grid_core::{ContainerRect, GridConfig};
use grid_drag::{GridProps, PointerDelta, ResizableGrid, TrackUpdate};
use grid_layout::{Orientation, SplitKey};

#[derive(Debug, Default)]
struct Host {
    rows: Vec<f64>,
    cols: Vec<f64>,
    changes: usize,
}

const HORIZONTAL_2: SplitKey = SplitKey {
    orientation: Orientation::Horizontal,
    index: 2,
};

fn tick(start: Instant, n: u64) -> Instant {
    start + Duration::from_millis(n * 25)
}

#[test]
fn row_drag_then_rejected_overshoot() {
    let config = GridConfig::default();
    let props = GridProps::from(&config.layout);
    let host = Rc::new(RefCell::new(Host {
        rows: props.rows.clone(),
        cols: props.cols.clone(),
        changes: 0,
    }));

    let sink = Rc::clone(&host);
    let mut grid = ResizableGrid::new(props, &config, move |update: TrackUpdate| {
        let mut host = sink.borrow_mut();
        let Host { rows, cols, changes } = &mut *host;
        update.merge_into(rows, cols);
        *changes += 1;
    });
    // 200px tall: every 2px of vertical movement is 1%
    grid.mount(ContainerRect::sized(400.0, 200.0));
    let start = Instant::now();

    assert!(grid.pointer_down(HORIZONTAL_2));

    // 5% moves from row track 1 into row track 0
    assert!(grid.pointer_move(PointerDelta::new(0.0, 10.0), tick(start, 0)));
    {
        let host = host.borrow();
        assert_eq!(host.rows, vec![35.0, 25.0, 40.0]);
        assert_eq!(host.cols, vec![30.0, 50.0, 20.0]);
    }
    let (rows, cols) = {
        let host = host.borrow();
        (host.rows.clone(), host.cols.clone())
    };
    grid.set_tracks(rows, cols);

    // -30% would leave row track 0 at exactly 5
    assert!(grid.pointer_move(PointerDelta::new(0.0, -60.0), tick(start, 1)));
    assert_eq!(host.borrow().rows, vec![35.0, 25.0, 40.0]);
    assert!(grid.is_dragging());

    assert!(grid.pointer_up());
    assert!(!grid.pointer_move(PointerDelta::new(0.0, 10.0), tick(start, 2)));
    assert_eq!(host.borrow().changes, 2);
}

#[test]
fn burst_of_moves_emits_once_per_window() {
    let config = GridConfig::default();
    let changes = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&changes);
    let mut grid = ResizableGrid::new(GridProps::from(&config.layout), &config, move |_| {
        *sink.borrow_mut() += 1;
    });
    grid.mount(ContainerRect::sized(1000.0, 1000.0));
    grid.pointer_down(SplitKey {
        orientation: Orientation::Vertical,
        index: 3,
    });

    let start = Instant::now();
    for ms in 0..24 {
        grid.pointer_move(PointerDelta::new(1.0, 0.0), start + Duration::from_millis(ms));
    }
    assert_eq!(*changes.borrow(), 1);

    grid.pointer_move(PointerDelta::new(1.0, 0.0), start + Duration::from_millis(24));
    assert_eq!(*changes.borrow(), 2);
}

#[test]
fn accepted_steps_conserve_adjacent_sum() {
    let config = GridConfig::default();
    let last = Rc::new(RefCell::new(None::<TrackUpdate>));
    let sink = Rc::clone(&last);
    let mut grid = ResizableGrid::new(GridProps::from(&config.layout), &config, move |update| {
        *sink.borrow_mut() = Some(update);
    });
    grid.mount(ContainerRect::sized(1000.0, 1000.0));
    grid.pointer_down(SplitKey {
        orientation: Orientation::Vertical,
        index: 3,
    });

    let start = Instant::now();
    for (n, dx) in [37.0, -120.0, 64.0, 3.0, -9.0].into_iter().enumerate() {
        let before = grid.cols().to_vec();
        assert!(grid.pointer_move(PointerDelta::new(dx, 0.0), tick(start, n as u64)));

        let cols = last
            .borrow_mut()
            .take()
            .and_then(|update| update.cols)
            .expect("vertical drag reports cols");
        assert_eq!(cols[0], before[0]);
        assert!((cols[1] + cols[2] - (before[1] + before[2])).abs() < 1e-9);
        assert!(cols.iter().all(|c| *c > 5.0));

        let rows = grid.rows().to_vec();
        grid.set_tracks(rows, cols);
    }
}

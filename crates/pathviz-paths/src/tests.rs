//! Scenario tests shared by all three searches.

use pathviz_core::{CellState, Grid, Point, Role};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Control, SearchKind, SearchOutcome, run_search};

fn grid_with(rows: i32, barriers: &[(i32, i32)]) -> Grid {
    let mut g = Grid::new(rows, rows * 10);
    for &(x, y) in barriers {
        g.set_role(Point::new(x, y), Role::Barrier).unwrap();
    }
    g
}

fn run(kind: SearchKind, g: &mut Grid, start: Point, end: Point) -> SearchOutcome {
    g.set_role(start, Role::Start).unwrap();
    g.set_role(end, Role::End).unwrap();
    g.recompute_neighbors();
    run_search(kind, g, start, end, |_: &Grid| Control::Continue)
        .unwrap()
}

fn assert_valid_path(g: &Grid, path: &[Point]) {
    for w in path.windows(2) {
        let d = w[1] - w[0];
        let (from, to) = (w[0], w[1]);
        assert_eq!(d.x.abs() + d.y.abs(), 1, "{from} -> {to} is not a step");
    }
    for &p in path {
        assert!(!g.cell(p).unwrap().is_barrier(), "{p} is a barrier");
    }
}

// Every neighbour link runs both ways, and rebuilding changes nothing.
fn assert_adjacency_is_consistent(g: &mut Grid) {
    let before: Vec<Vec<Point>> = g.iter().map(|c| c.neighbors().to_vec()).collect();
    for cell in g.iter() {
        let p = cell.pos();
        for &n in cell.neighbors() {
            let other = g.cell(n).unwrap();
            assert!(!cell.is_barrier() && !other.is_barrier());
            assert!(other.neighbors().contains(&p), "{n} -/-> {p}");
        }
    }
    g.recompute_neighbors();
    let after: Vec<Vec<Point>> = g.iter().map(|c| c.neighbors().to_vec()).collect();
    assert_eq!(before, after);
}

#[test]
fn empty_5x5_corner_to_corner() {
    for kind in SearchKind::ALL {
        let mut g = grid_with(5, &[]);
        let out = run(kind, &mut g, Point::new(0, 0), Point::new(4, 4));
        assert!(out.is_found(), "{kind}");
        assert_eq!(out.path_len(), Some(8), "{kind}");
        let path = out.path().unwrap();
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(4, 4)));
        assert_valid_path(&g, path);
        assert_eq!(g.count(CellState::Path), 7, "{kind}");
        assert_eq!(g.state(Point::new(0, 0)), Some(CellState::Start));
        assert_eq!(g.state(Point::new(4, 4)), Some(CellState::End));
    }
}

#[test]
fn wall_forces_path_through_gap() {
    let wall = [(2, 0), (2, 1), (2, 2), (2, 3)];
    for kind in SearchKind::ALL {
        let mut g = grid_with(5, &wall);
        let out = run(kind, &mut g, Point::new(0, 0), Point::new(4, 4));
        assert_eq!(out.path_len(), Some(8), "{kind}");
        let path = out.path().unwrap();
        assert!(path.contains(&Point::new(2, 4)), "{kind}");
        assert_valid_path(&g, path);
        for &(x, y) in &wall {
            assert_eq!(g.state(Point::new(x, y)), Some(CellState::Barrier));
        }
    }
}

#[test]
fn start_equals_end_is_zero_length() {
    for kind in SearchKind::ALL {
        let mut g = grid_with(5, &[]);
        let p = Point::new(2, 2);
        g.set_role(p, Role::Start).unwrap();
        g.recompute_neighbors();
        let mut calls = 0;
        let out = run_search(kind, &mut g, p, p, |_: &Grid| {
            calls += 1;
            Control::Continue
        })
        .unwrap();
        assert_eq!(out, SearchOutcome::Found { path: vec![p] }, "{kind}");
        assert_eq!(out.path_len(), Some(0));
        assert_eq!(calls, 0);
        assert_eq!(g.count(CellState::Path), 0);
        assert_eq!(g.state(p), Some(CellState::Start));
    }
}

#[test]
fn walled_off_end_fails_everywhere() {
    let ring = [(3, 2), (2, 3), (4, 3), (3, 4)];
    for kind in SearchKind::ALL {
        let mut g = grid_with(6, &ring);
        let out = run(kind, &mut g, Point::new(0, 0), Point::new(3, 3));
        assert_eq!(out, SearchOutcome::Exhausted, "{kind}");
        assert_eq!(g.count(CellState::Path), 0, "{kind}");
        assert!(!out.is_found());
    }
}

#[test]
fn enclosed_start_expands_only_itself() {
    let ring = [(1, 0), (0, 1)];
    for kind in SearchKind::ALL {
        let mut g = grid_with(4, &ring);
        let mut calls = 0;
        let (start, end) = (Point::new(0, 0), Point::new(3, 3));
        g.set_role(start, Role::Start).unwrap();
        g.set_role(end, Role::End).unwrap();
        g.recompute_neighbors();
        let out = run_search(kind, &mut g, start, end, |_: &Grid| {
            calls += 1;
            Control::Continue
        })
        .unwrap();
        assert_eq!(out, SearchOutcome::Exhausted);
        assert_eq!(calls, 1, "{kind}");
        assert_eq!(g.count(CellState::Open), 0);
        assert_eq!(g.count(CellState::Closed), 0);
    }
}

#[test]
fn cancel_is_distinct_from_exhausted() {
    for kind in SearchKind::ALL {
        let mut g = grid_with(6, &[]);
        let (start, end) = (Point::new(0, 0), Point::new(5, 5));
        g.set_role(start, Role::Start).unwrap();
        g.set_role(end, Role::End).unwrap();
        g.recompute_neighbors();
        let mut calls = 0;
        let out = run_search(kind, &mut g, start, end, |_: &Grid| {
            calls += 1;
            if calls == 3 {
                Control::Cancel
            } else {
                Control::Continue
            }
        })
        .unwrap();
        assert_eq!(out, SearchOutcome::Cancelled, "{kind}");
        assert_eq!(calls, 3);
        assert_eq!(g.count(CellState::Path), 0);
        // Partial marks stay where they were: the start is never closed and
        // the cell being expanded when the cancel arrived is left open.
        assert!(g.count(CellState::Open) > 0);
        assert_eq!(g.count(CellState::Closed), 1);
    }
}

#[test]
fn cancel_during_reconstruction() {
    for kind in SearchKind::ALL {
        let mut g = grid_with(5, &[]);
        let (start, end) = (Point::new(0, 0), Point::new(4, 0));
        g.set_role(start, Role::Start).unwrap();
        g.set_role(end, Role::End).unwrap();
        g.recompute_neighbors();
        let out = run_search(kind, &mut g, start, end, |g: &Grid| {
            if g.count(CellState::Path) > 0 {
                Control::Cancel
            } else {
                Control::Continue
            }
        })
        .unwrap();
        assert_eq!(out, SearchOutcome::Cancelled, "{kind}");
        assert_eq!(g.count(CellState::Path), 1);
    }
}

#[test]
fn step_callback_sees_marks_as_they_happen() {
    let mut g = grid_with(3, &[]);
    g.set_role(Point::new(0, 0), Role::Start).unwrap();
    g.set_role(Point::new(2, 0), Role::End).unwrap();
    g.recompute_neighbors();
    let mut snapshots = Vec::new();
    let out = run_search(
        SearchKind::Bfs,
        &mut g,
        Point::new(0, 0),
        Point::new(2, 0),
        |g: &Grid| {
            snapshots.push((g.count(CellState::Open), g.count(CellState::Closed)));
            Control::Continue
        },
    )
    .unwrap();
    assert_eq!(out.path_len(), Some(2));
    // First step: start expanded, its two neighbours opened, nothing closed
    // yet since the start is never closed.
    assert_eq!(snapshots[0], (2, 0));
    // Second step: (1, 0) expanded and still open during its own step.
    assert_eq!(snapshots[1], (3, 0));
}

#[test]
fn astar_expands_no_more_than_dijkstra() {
    let count_steps = |kind: SearchKind| {
        let mut g = grid_with(12, &[(5, 3), (5, 4), (5, 5), (5, 6), (5, 7)]);
        let (start, end) = (Point::new(1, 5), Point::new(10, 5));
        g.set_role(start, Role::Start).unwrap();
        g.set_role(end, Role::End).unwrap();
        g.recompute_neighbors();
        let mut steps = 0;
        let out = run_search(kind, &mut g, start, end, |_: &Grid| {
            steps += 1;
            Control::Continue
        })
        .unwrap();
        (out.path_len(), steps)
    };
    let (d_len, d_steps) = count_steps(SearchKind::Dijkstra);
    let (a_len, a_steps) = count_steps(SearchKind::AStar);
    assert_eq!(d_len, a_len);
    assert!(a_steps <= d_steps, "a* {a_steps} vs dijkstra {d_steps}");
}

#[test]
fn runs_are_deterministic() {
    for kind in SearchKind::ALL {
        let (start, end) = (Point::new(0, 0), Point::new(6, 6));
        let first = run(kind, &mut grid_with(7, &[(3, 3)]), start, end);
        let second = run(kind, &mut grid_with(7, &[(3, 3)]), start, end);
        assert_eq!(first, second, "{kind}");
    }
}

#[test]
fn random_grids_agree_on_path_length() {
    let mut rng = StdRng::seed_from_u64(0x9a7f);
    for _ in 0..60 {
        let rows = rng.random_range(2..14);
        let mut barriers = Vec::new();
        for y in 0..rows {
            for x in 0..rows {
                if rng.random_bool(0.3) {
                    barriers.push((x, y));
                }
            }
        }
        let start = Point::new(rng.random_range(0..rows), rng.random_range(0..rows));
        let end = Point::new(rng.random_range(0..rows), rng.random_range(0..rows));
        barriers.retain(|&(x, y)| ![start, end].contains(&Point::new(x, y)));

        let results: Vec<_> = SearchKind::ALL
            .iter()
            .map(|&kind| {
                let mut g = grid_with(rows, &barriers);
                let out = run(kind, &mut g, start, end);
                assert_adjacency_is_consistent(&mut g);
                if let Some(path) = out.path() {
                    assert_valid_path(&g, path);
                    let marked = g.count(CellState::Path);
                    assert_eq!(marked, path.len().saturating_sub(2), "{kind}");
                } else {
                    assert_eq!(g.count(CellState::Path), 0);
                }
                out.path_len()
            })
            .collect();
        assert_eq!(results[0], results[1], "dijkstra vs a* on {rows}x{rows}");
        assert_eq!(results[0], results[2], "dijkstra vs bfs on {rows}x{rows}");
    }
}

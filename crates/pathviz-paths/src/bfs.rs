use std::collections::VecDeque;

use pathviz_core::{CellState, Grid, Point};

use crate::path::{CameFrom, found};
use crate::search::{SearchError, endpoints};
use crate::step::{Control, SearchOutcome, mark, step};

/// Shortest path (fewest steps) from `start` to `end` with breadth-first
/// search.
///
/// A cell is marked visited the moment it is queued, so it is reached at most
/// once and no relaxation is needed.
pub fn bfs<F>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    mut on_step: F,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(&Grid) -> Control,
{
    let (start_idx, end_idx) = endpoints(grid, start, end)?;

    let mut visited = vec![false; grid.len()];
    let mut came_from = CameFrom::new(grid.len());
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start_idx] = true;
    queue.push_back(start_idx);

    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        if ci == end_idx {
            return Ok(found(grid, &came_from, end_idx, &mut on_step));
        }
        log::trace!("bfs: expanding {}", grid.point(ci));

        nbuf.clear();
        nbuf.extend_from_slice(grid.cell_at(ci).neighbors());

        for &np in &nbuf {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if visited[ni] {
                continue;
            }
            visited[ni] = true;
            queue.push_back(ni);
            came_from.set(ni, ci);
            mark(grid, ni, CellState::Open);
        }

        if step(grid, &mut on_step).is_err() {
            return Ok(SearchOutcome::Cancelled);
        }

        if ci != start_idx {
            mark(grid, ci, CellState::Closed);
        }
    }

    Ok(SearchOutcome::Exhausted)
}

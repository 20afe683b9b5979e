use pathviz_core::{CellState, Grid, Point};

use crate::UNREACHABLE;
use crate::frontier::Frontier;
use crate::path::{CameFrom, found};
use crate::search::{SearchError, endpoints};
use crate::step::{Control, SearchOutcome, mark, step};

/// Shortest path from `start` to `end` with Dijkstra's algorithm.
///
/// Every edge costs 1. The frontier pops the lowest distance first and, among
/// equal distances, the cell queued earliest. Discovered cells are marked
/// [`CellState::Open`] and expanded ones [`CellState::Closed`]; `on_step` runs
/// after each expansion.
pub fn dijkstra<F>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    mut on_step: F,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(&Grid) -> Control,
{
    let (start_idx, end_idx) = endpoints(grid, start, end)?;

    let mut dist = vec![UNREACHABLE; grid.len()];
    let mut came_from = CameFrom::new(grid.len());
    let mut open = Frontier::new(grid.len());

    dist[start_idx] = 0;
    open.push(start_idx, 0);

    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(ci) = open.pop() {
        if ci == end_idx {
            return Ok(found(grid, &came_from, end_idx, &mut on_step));
        }
        log::trace!(
            "dijkstra: expanding {} at distance {}",
            grid.point(ci),
            dist[ci]
        );

        nbuf.clear();
        nbuf.extend_from_slice(grid.cell_at(ci).neighbors());

        for &np in &nbuf {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            let tentative = dist[ci] + 1;
            if tentative < dist[ni] {
                came_from.set(ni, ci);
                dist[ni] = tentative;
                if open.push(ni, tentative) {
                    mark(grid, ni, CellState::Open);
                }
            }
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

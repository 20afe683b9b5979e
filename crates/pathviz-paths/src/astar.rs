use pathviz_core::{CellState, Grid, Point};

use crate::UNREACHABLE;
use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::path::{CameFrom, found};
use crate::search::{SearchError, endpoints};
use crate::step::{Control, SearchOutcome, mark, step};

/// Shortest path from `start` to `end` using A* with the Manhattan heuristic.
///
/// Same control flow as [`dijkstra`](crate::dijkstra), but the frontier is
/// ordered by `f = g + manhattan(cell, end)`. `g` and `f` are updated
/// together whenever a shorter route to a cell is found.
pub fn astar<F>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    mut on_step: F,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(&Grid) -> Control,
{
    let (start_idx, end_idx) = endpoints(grid, start, end)?;

    let mut g_score = vec![UNREACHABLE; grid.len()];
    let mut f_score = vec![UNREACHABLE; grid.len()];
    let mut came_from = CameFrom::new(grid.len());
    let mut open = Frontier::new(grid.len());

    g_score[start_idx] = 0;
    f_score[start_idx] = manhattan(start, end);
    open.push(start_idx, f_score[start_idx]);

    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(ci) = open.pop() {
        if ci == end_idx {
            return Ok(found(grid, &came_from, end_idx, &mut on_step));
        }
        log::trace!(
            "astar: expanding {} g={} f={}",
            grid.point(ci),
            g_score[ci],
            f_score[ci]
        );

        nbuf.clear();
        nbuf.extend_from_slice(grid.cell_at(ci).neighbors());

        for &np in &nbuf {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            let tentative_g = g_score[ci] + 1;
            if tentative_g < g_score[ni] {
                came_from.set(ni, ci);
                g_score[ni] = tentative_g;
                f_score[ni] = tentative_g + manhattan(np, end);
                if open.push(ni, f_score[ni]) {
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

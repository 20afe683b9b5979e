use pathviz_core::{CellState, Grid, Point};

use crate::step::{Cancelled, Control, SearchOutcome, mark, step};

/// Backpointer map: for each flat cell index, the index it was reached from.
#[derive(Clone, Debug)]
pub struct CameFrom {
    links: Vec<Option<usize>>,
}

impl CameFrom {
    /// An empty map for a grid of `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            links: vec![None; len],
        }
    }

    /// Record that `to` was reached from `from`.
    #[inline]
    pub fn set(&mut self, to: usize, from: usize) {
        self.links[to] = Some(from);
    }

    /// Predecessor of `idx`, if any.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<usize> {
        self.links.get(idx).copied().flatten()
    }
}

/// Walk the backpointers from `end` back to the start, marking every
/// intermediate cell as [`CellState::Path`] and calling `on_step` after each.
///
/// Cells are marked from the end's predecessor towards the start's
/// successor. The start (the first cell with no predecessor) and the end keep
/// their own markers. Returns the full path, start first.
pub fn reconstruct_path<F>(
    grid: &mut Grid,
    came_from: &CameFrom,
    end: usize,
    on_step: &mut F,
) -> Result<Vec<Point>, Cancelled>
where
    F: FnMut(&Grid) -> Control,
{
    let mut path = vec![grid.point(end)];
    let mut current = end;
    while let Some(prev) = came_from.get(current) {
        path.push(grid.point(prev));
        if came_from.get(prev).is_some() {
            mark(grid, prev, CellState::Path);
            step(grid, on_step)?;
        }
        current = prev;
    }
    path.reverse();
    log::trace!("reconstructed path of {} cells", path.len());
    Ok(path)
}

/// Reconstruct the path to `end` and wrap it as the outcome of a search.
pub(crate) fn found<F>(
    grid: &mut Grid,
    came_from: &CameFrom,
    end: usize,
    on_step: &mut F,
) -> SearchOutcome
where
    F: FnMut(&Grid) -> Control,
{
    match reconstruct_path(grid, came_from, end, on_step) {
        Ok(path) => SearchOutcome::Found { path },
        Err(Cancelled) => SearchOutcome::Cancelled,
    }
}

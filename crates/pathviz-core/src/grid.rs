//! The [`Grid`] type: a square board of [`Cell`]s with 4-way adjacency.
//!
//! Cells live in a single row-major buffer. Adjacency is stored per cell as a
//! list of neighbour positions and must be refreshed with
//! [`Grid::recompute_neighbors`] after barriers change.

use crate::cell::{Cell, CellState, Role};
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Translate pixel coordinates to a cell position on a `rows`×`rows` grid
/// drawn `pixel_width` pixels wide.
///
/// Returns [`GridError::OutOfBounds`] rather than clamping, so the caller can
/// simply drop the edit.
pub fn grid_coordinates_from_pixel(
    px: i32,
    py: i32,
    rows: i32,
    pixel_width: i32,
) -> Result<Point, GridError> {
    let rows = rows.max(0);
    let gap = if rows > 0 { pixel_width / rows } else { 0 };
    if gap <= 0 {
        return Err(GridError::ZeroCellSize {
            rows,
            width: pixel_width,
        });
    }
    // div_euclid so that small negative offsets do not collapse onto row 0.
    let p = Point::new(px.div_euclid(gap), py.div_euclid(gap));
    if Range::square(rows).contains(p) {
        Ok(p)
    } else {
        Err(GridError::OutOfBounds {
            pos: p,
            size: Point::new(rows, rows),
        })
    }
}

/// A square grid of [`Cell`]s.
///
/// The grid tracks which cells hold the start and end roles. The role-aware
/// editor [`set_role`](Grid::set_role) keeps at most one of each; the raw
/// [`set_state`](Grid::set_state) does not.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: i32,
    width: i32,
    cell_size: i32,
    bounds: Range,
    cells: Vec<Cell>,
    start: Option<Point>,
    end: Option<Point>,
}

impl Grid {
    /// Build a `rows`×`rows` grid drawn `pixel_width` pixels wide. Each cell
    /// is `pixel_width / rows` pixels square.
    pub fn new(rows: i32, pixel_width: i32) -> Self {
        let rows = rows.max(0);
        let cell_size = if rows > 0 { pixel_width / rows } else { 0 };
        let bounds = Range::square(rows);
        let cells = bounds
            .iter()
            .map(|p| Cell::new(p, cell_size, rows))
            .collect();
        log::debug!("built {rows}x{rows} grid, cell size {cell_size}px");
        Self {
            rows,
            width: pixel_width,
            cell_size,
            bounds,
            cells,
            start: None,
            end: None,
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Pixel width the grid was built for.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.rows as usize + p.x as usize)
    }

    /// Position of flat index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.rows as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.bounds.size(),
        })
    }

    /// Translate a pixel position into the cell under it.
    pub fn pixel_to_cell(&self, px: i32, py: i32) -> Result<Point, GridError> {
        grid_coordinates_from_pixel(px, py, self.rows, self.width)
    }

    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Cell at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    pub fn state(&self, p: Point) -> Option<CellState> {
        self.cell(p).map(Cell::state)
    }

    pub fn role(&self, p: Point) -> Option<Role> {
        self.cell(p).map(Cell::role)
    }

    /// Position of the start cell, if one is placed.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the end cell, if one is placed.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Overwrite the state of the cell at `p`.
    ///
    /// Start/end tracking follows the write, but uniqueness is not enforced:
    /// writing `Start` while another start exists leaves two start cells.
    /// Use [`set_role`](Grid::set_role) for user edits.
    pub fn set_state(&mut self, p: Point, state: CellState) -> Result<(), GridError> {
        let idx = self.checked_index(p)?;
        self.set_state_at(idx, state);
        Ok(())
    }

    /// Index-based form of [`set_state`](Grid::set_state).
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    pub fn set_state_at(&mut self, idx: usize, state: CellState) {
        let p = self.point(idx);
        match self.cells[idx].state() {
            CellState::Start if self.start == Some(p) => self.start = None,
            CellState::End if self.end == Some(p) => self.end = None,
            _ => {}
        }
        self.cells[idx].set_state(state);
        match state {
            CellState::Start => self.start = Some(p),
            CellState::End => self.end = Some(p),
            _ => {}
        }
    }

    /// Return the cell at `p` to empty, dropping any role it held.
    pub fn reset(&mut self, p: Point) -> Result<(), GridError> {
        self.set_state(p, CellState::Empty)
    }

    /// Give the cell at `p` a role.
    ///
    /// Placing a start or end first clears the cell currently holding that
    /// role, so the grid never has more than one of each.
    pub fn set_role(&mut self, p: Point, role: Role) -> Result<(), GridError> {
        let idx = self.checked_index(p)?;
        let previous = match role {
            Role::Start => self.start,
            Role::End => self.end,
            Role::Empty | Role::Barrier => None,
        };
        if let Some(old_idx) = previous
            .filter(|&old| old != p)
            .and_then(|old| self.index(old))
        {
            self.set_state_at(old_idx, CellState::Empty);
        }
        self.set_state_at(idx, role.into());
        Ok(())
    }

    /// Rebuild every cell's neighbour list from the in-bounds cardinal
    /// neighbours that are not barriers. Barrier cells get no neighbours.
    pub fn recompute_neighbors(&mut self) {
        let mut buf = Vec::with_capacity(4);
        for idx in 0..self.cells.len() {
            buf.clear();
            if !self.cells[idx].is_barrier() {
                let p = self.point(idx);
                for n in p.neighbors_4() {
                    match self.index(n) {
                        Some(ni) if !self.cells[ni].is_barrier() => buf.push(n),
                        _ => {}
                    }
                }
            }
            let neighbors = self.cells[idx].neighbors_mut();
            neighbors.clear();
            neighbors.extend_from_slice(&buf);
        }
    }

    /// Wipe open, closed and path marks left by a previous search, keeping
    /// start, end and barriers.
    pub fn clear_search(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.state().is_search_mark()) {
            cell.reset();
        }
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! The [`Cell`] type, one square of the pathfinding grid.

use std::fmt;

use crate::geom::Point;

/// Visual and logical state of a cell. Exactly one applies at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    /// Discovered, waiting in the frontier.
    Open,
    /// Fully expanded.
    Closed,
    /// Part of the reconstructed path.
    Path,
}

impl CellState {
    /// Whether this state was written by a search rather than by the user.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }
}

/// The user-editable roles a cell can hold.
///
/// Search marks (open, closed, path) are not roles: a cell carrying one
/// reports [`Role::Empty`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Empty,
    Barrier,
    Start,
    End,
}

impl From<Role> for CellState {
    fn from(role: Role) -> Self {
        match role {
            Role::Empty => CellState::Empty,
            Role::Barrier => CellState::Barrier,
            Role::Start => CellState::Start,
            Role::End => CellState::End,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Empty => "empty",
            Self::Barrier => "barrier",
            Self::Start => "start",
            Self::End => "end",
        };
        f.write_str(s)
    }
}

/// A single grid square.
///
/// Neighbors are stored as positions into the owning [`Grid`](crate::Grid),
/// never as references, and are only valid until the next barrier edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    size: i32,
    total_rows: i32,
    state: CellState,
    neighbors: Vec<Point>,
}

impl Cell {
    /// Create an empty cell at `pos`, `size` pixels wide, in a grid of
    /// `total_rows` rows.
    pub fn new(pos: Point, size: i32, total_rows: i32) -> Self {
        Self {
            pos,
            size,
            total_rows,
            state: CellState::Empty,
            neighbors: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.x
    }

    /// Side length in pixels.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn total_rows(&self) -> i32 {
        self.total_rows
    }

    /// Top-left pixel corner of this cell.
    #[inline]
    pub fn pixel_origin(&self) -> Point {
        self.pos * self.size
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Overwrite the state. No grid-wide invariants are checked here.
    #[inline]
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Return to [`CellState::Empty`].
    #[inline]
    pub fn reset(&mut self) {
        self.state = CellState::Empty;
    }

    /// The role this cell currently holds.
    pub fn role(&self) -> Role {
        match self.state {
            CellState::Barrier => Role::Barrier,
            CellState::Start => Role::Start,
            CellState::End => Role::End,
            CellState::Empty | CellState::Open | CellState::Closed | CellState::Path => {
                Role::Empty
            }
        }
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    /// Non-barrier cardinal neighbours, as computed by the last
    /// [`Grid::recompute_neighbors`](crate::Grid::recompute_neighbors).
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    pub(crate) fn neighbors_mut(&mut self) -> &mut Vec<Point> {
        &mut self.neighbors
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn state_serializes_by_name() {
        let json = serde_json::to_string(&CellState::Barrier).unwrap();
        assert_eq!(json, "\"Barrier\"");
        let back: CellState = serde_json::from_str("\"Path\"").unwrap();
        assert_eq!(back, CellState::Path);
    }

    #[test]
    fn point_serializes_as_struct() {
        let json = serde_json::to_string(&Point::new(4, 2)).unwrap();
        assert_eq!(json, r#"{"x":4,"y":2}"#);
    }
}

use std::fmt;

use pathviz_core::{CellState, Grid, Point};

/// What the step callback tells a running search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Abandon the search now. Cells keep whatever marks they already have.
    Cancel,
}

/// Terminal result of a search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A shortest path was found. `path` runs from start to end inclusive.
    Found { path: Vec<Point> },
    /// The frontier emptied without reaching the end: no path exists.
    Exhausted,
    /// The step callback returned [`Control::Cancel`]. Says nothing about
    /// whether a path exists.
    Cancelled,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Number of edges in the found path.
    pub fn path_len(&self) -> Option<usize> {
        match self {
            Self::Found { path } => Some(path.len().saturating_sub(1)),
            Self::Exhausted | Self::Cancelled => None,
        }
    }

    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found { path } => Some(path),
            Self::Exhausted | Self::Cancelled => None,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { path } => {
                write!(f, "path found, {} steps", path.len().saturating_sub(1))
            }
            Self::Exhausted => f.write_str("no path exists"),
            Self::Cancelled => f.write_str("search cancelled"),
        }
    }
}

/// Marker error: the step callback asked to stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cancelled by step callback")
    }
}

impl std::error::Error for Cancelled {}

/// Invoke the step callback once.
#[inline]
pub(crate) fn step<F>(grid: &Grid, on_step: &mut F) -> Result<(), Cancelled>
where
    F: FnMut(&Grid) -> Control,
{
    match on_step(grid) {
        Control::Continue => Ok(()),
        Control::Cancel => Err(Cancelled),
    }
}

/// Write a search mark, leaving start and end markers untouched.
#[inline]
pub(crate) fn mark(grid: &mut Grid, idx: usize, state: CellState) {
    if !matches!(grid.cell_at(idx).state(), CellState::Start | CellState::End) {
        grid.set_state_at(idx, state);
    }
}

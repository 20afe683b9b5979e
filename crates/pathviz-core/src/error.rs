use std::fmt;

use crate::geom::Point;

/// Errors reported by [`Grid`](crate::Grid) lookups and pixel translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A position resolved outside the grid. `size` is the grid's
    /// (columns, rows).
    OutOfBounds { pos: Point, size: Point },
    /// The pixel width is smaller than the row count, so cells have no area.
    ZeroCellSize { rows: i32, width: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, size } => {
                write!(f, "cell {pos} is outside the {}x{} grid", size.x, size.y)
            }
            Self::ZeroCellSize { rows, width } => {
                write!(f, "{rows} rows do not fit in {width} pixels")
            }
        }
    }
}

impl std::error::Error for GridError {}

//! Step-by-step shortest-path searches over a [`pathviz_core::Grid`].
//!
//! Three textbook algorithms share one contract:
//!
//! - **Dijkstra** ([`dijkstra`]): priority frontier ordered by distance
//! - **A\*** ([`astar`]): priority frontier ordered by distance + [`manhattan`]
//! - **BFS** ([`bfs`]): FIFO frontier
//!
//! Each search marks cells as it goes ([`CellState::Open`] when discovered,
//! [`CellState::Closed`] when expanded, [`CellState::Path`] for the result)
//! and calls a step callback after every expansion and every path cell, so a
//! front-end can redraw. The callback returns [`Control`]; returning
//! [`Control::Cancel`] abandons the run. All three hand their backpointers to
//! the same [`reconstruct_path`].
//!
//! [`CellState::Open`]: pathviz_core::CellState::Open
//! [`CellState::Closed`]: pathviz_core::CellState::Closed
//! [`CellState::Path`]: pathviz_core::CellState::Path

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod frontier;
mod path;
mod search;
mod step;

#[cfg(test)]
mod tests;

pub use astar::astar;
pub use bfs::bfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use path::{CameFrom, reconstruct_path};
pub use search::{ParseSearchKindError, SearchError, SearchKind, run_search};
pub use step::{Cancelled, Control, SearchOutcome};

/// Sentinel distance for cells not reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

//! **pathviz-core**: grid model for the pathfinding visualizer.
//!
//! This crate provides the types shared by every part of *pathviz*:
//! geometry primitives, the [`Cell`] and its [`CellState`], the square
//! [`Grid`] with 4-way neighbour adjacency, and front-end independent input
//! messages with the [`Driver`] trait front-ends implement.

pub mod cell;
pub mod driver;
pub mod error;
pub mod geom;
pub mod grid;
pub mod messages;

pub use cell::{Cell, CellState, Role};
pub use driver::{Driver, DriverError, DriverResult};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Grid, grid_coordinates_from_pixel};
pub use messages::*;

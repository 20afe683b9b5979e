//! The [`Driver`] trait: what a front-end must provide to host the
//! interaction loop.

use std::time::Duration;

use crate::grid::Grid;
use crate::messages::Msg;

/// Error type returned by driver operations.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

/// Convenience alias for driver results.
pub type DriverResult<T = ()> = Result<T, DriverError>;

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> DriverResult;

    /// Collect pending input into `out`, waiting at most `timeout` for the
    /// first event. Mouse positions are reported in canvas pixels of the
    /// grid last passed to [`draw`](Driver::draw).
    fn poll_msgs(&mut self, timeout: Duration, out: &mut Vec<Msg>) -> DriverResult;

    /// Render `grid` together with a one-line status text.
    fn draw(&mut self, grid: &Grid, status: &str) -> DriverResult;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

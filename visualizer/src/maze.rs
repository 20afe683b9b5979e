//! Random barrier placement.

use pathviz_core::{CellState, Grid, Point, Role};
use rand::Rng;

/// Turn roughly `density` of the empty cells into barriers. Start, end and
/// existing barriers are left alone. Returns how many barriers were added.
pub fn scatter_barriers<R: Rng>(grid: &mut Grid, rng: &mut R, density: f64) -> usize {
    let density = density.clamp(0.0, 1.0);
    let candidates: Vec<Point> = grid
        .iter()
        .filter(|c| c.state() == CellState::Empty)
        .map(|c| c.pos())
        .collect();
    let mut added = 0;
    for p in candidates {
        if rng.random_bool(density) && grid.set_role(p, Role::Barrier).is_ok() {
            added += 1;
        }
    }
    log::debug!("scattered {added} barriers at density {density}");
    added
}

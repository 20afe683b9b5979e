use std::fmt;
use std::str::FromStr;

use pathviz_core::{Grid, Point};

use crate::step::{Control, SearchOutcome};

/// The three available search algorithms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchKind {
    #[default]
    Dijkstra,
    AStar,
    Bfs,
}

impl SearchKind {
    pub const ALL: [SearchKind; 3] = [Self::Dijkstra, Self::AStar, Self::Bfs];

    /// Map a free-form selection to an algorithm: `"a*"` is A*, `"bfs"` is
    /// breadth-first search, anything else falls back to Dijkstra.
    /// Matching is case-sensitive.
    pub fn from_selection(s: &str) -> Self {
        match s.trim() {
            "a*" => Self::AStar,
            "bfs" => Self::Bfs,
            _ => Self::Dijkstra,
        }
    }

    /// Short identifier, as accepted by [`from_selection`](Self::from_selection).
    pub fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar => "a*",
            Self::Bfs => "bfs",
        }
    }

    /// One-paragraph explanation shown before the visualizer opens.
    pub fn description(self) -> &'static str {
        match self {
            Self::Dijkstra => {
                "Dijkstra's algorithm always expands the discovered cell with the smallest \
                 known distance from the start, so the first time it reaches the end it has \
                 the shortest path. With a binary heap it runs in O((n + m) log n) for n cells \
                 and m edges."
            }
            Self::AStar => {
                "A* orders its frontier by g + h: the cost paid so far plus the Manhattan \
                 estimate of what is left. The estimate never overshoots on a 4-way grid, so \
                 the path is still shortest, but the search leans towards the goal and usually \
                 expands far fewer cells than Dijkstra."
            }
            Self::Bfs => {
                "Breadth-first search visits cells in rings of equal step count using a FIFO \
                 queue. Every move costs the same, so the first time the end is reached the \
                 path has the fewest steps. It runs in O(n + m)."
            }
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSearchKindError(pub String);

impl fmt::Display for ParseSearchKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm {:?} (expected a*, astar, bfs or dijkstra)",
            self.0
        )
    }
}

impl std::error::Error for ParseSearchKindError {}

impl FromStr for SearchKind {
    type Err = ParseSearchKindError;

    /// Strict parse: unlike [`SearchKind::from_selection`], unknown names are
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a*" | "astar" => Ok(Self::AStar),
            "bfs" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            other => Err(ParseSearchKindError(other.to_string())),
        }
    }
}

/// Precondition failures for a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start or end lies outside the grid.
    OutOfBounds(Point),
    /// The start or end sits on a barrier.
    Barrier(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "search endpoint {p} is outside the grid"),
            Self::Barrier(p) => write!(f, "search endpoint {p} is a barrier"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Resolve and validate the flat indices of `start` and `end`.
pub(crate) fn endpoints(
    grid: &Grid,
    start: Point,
    end: Point,
) -> Result<(usize, usize), SearchError> {
    let resolve = |p: Point| -> Result<usize, SearchError> {
        let idx = grid.index(p).ok_or(SearchError::OutOfBounds(p))?;
        if grid.cell_at(idx).is_barrier() {
            return Err(SearchError::Barrier(p));
        }
        Ok(idx)
    };
    Ok((resolve(start)?, resolve(end)?))
}

/// Run the search selected by `kind` from `start` to `end`.
///
/// Neighbour lists are used as they are: call
/// [`Grid::recompute_neighbors`] after editing barriers. `on_step` is called
/// once per expanded cell and once per path cell marked; returning
/// [`Control::Cancel`] stops the run with [`SearchOutcome::Cancelled`].
pub fn run_search<F>(
    kind: SearchKind,
    grid: &mut Grid,
    start: Point,
    end: Point,
    on_step: F,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(&Grid) -> Control,
{
    log::debug!("running {kind} from {start} to {end}");
    let outcome = match kind {
        SearchKind::Dijkstra => crate::dijkstra(grid, start, end, on_step),
        SearchKind::AStar => crate::astar(grid, start, end, on_step),
        SearchKind::Bfs => crate::bfs(grid, start, end, on_step),
    }?;
    log::debug!("{kind}: {outcome}");
    Ok(outcome)
}

//! The editing state behind the visualizer: which cells are start, end and
//! barriers, and what a key press or click does to them.

use pathviz_core::{Grid, Key, MouseAction, Msg, Point, Role};
use pathviz_paths::{Control, SearchError, SearchKind, SearchOutcome, run_search};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::VisualizerConfig;
use crate::maze::scatter_barriers;

/// Share of empty cells the `r` key turns into barriers.
pub const SCATTER_DENSITY: f64 = 0.3;

/// What the loop should do after a message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    /// Run the selected search between these cells.
    Run { start: Point, end: Point },
    Quit,
}

pub struct Editor {
    grid: Grid,
    kind: SearchKind,
    rows: i32,
    width: i32,
    status: String,
    rng: StdRng,
}

impl Editor {
    pub fn new(config: &VisualizerConfig, kind: SearchKind) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut ed = Self {
            grid: Grid::new(config.rows, config.width),
            kind,
            rows: config.rows,
            width: config.width,
            status: String::new(),
            rng,
        };
        ed.idle_status();
        ed
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    fn idle_status(&mut self) {
        let hint = match (self.grid.start(), self.grid.end()) {
            (None, _) => "click to place the start",
            (Some(_), None) => "click to place the end",
            _ => "draw barriers, Enter to run",
        };
        self.status = format!(
            "{}: {hint} | right click clears | r random | c reset | q quit",
            self.kind
        );
    }

    /// Apply one input message.
    pub fn update(&mut self, msg: Msg) -> Action {
        if msg.is_quit() {
            return Action::Quit;
        }
        match msg {
            Msg::Mouse { action, pos } => {
                // Clicks outside the grid are dropped.
                let Ok(p) = self.grid.pixel_to_cell(pos.x, pos.y) else {
                    return Action::None;
                };
                match action {
                    MouseAction::Main | MouseAction::DragMain => self.paint(p),
                    MouseAction::Secondary | MouseAction::DragSecondary => self.erase(p),
                    MouseAction::Release => return Action::None,
                }
                self.idle_status();
                Action::None
            }
            Msg::KeyDown { key, .. } => self.key(key),
            Msg::Screen { .. } | Msg::Quit => Action::None,
        }
    }

    fn key(&mut self, key: Key) -> Action {
        match key {
            Key::Enter => match (self.grid.start(), self.grid.end()) {
                (Some(start), Some(end)) => return Action::Run { start, end },
                _ => self.status = format!("{}: place a start and an end first", self.kind),
            },
            Key::Char('c') => {
                self.grid = Grid::new(self.rows, self.width);
                self.idle_status();
            }
            Key::Char('r') => {
                self.grid.clear_search();
                let added = scatter_barriers(&mut self.grid, &mut self.rng, SCATTER_DENSITY);
                self.idle_status();
                log::debug!("r: {added} new barriers");
            }
            _ => {}
        }
        Action::None
    }

    // Left button: start first, then end, then barriers. Start and end are
    // never painted over.
    fn paint(&mut self, p: Point) {
        let start = self.grid.start();
        let end = self.grid.end();
        let role = if start.is_none() && end != Some(p) {
            Role::Start
        } else if end.is_none() && start != Some(p) {
            Role::End
        } else if start != Some(p) && end != Some(p) {
            Role::Barrier
        } else {
            return;
        };
        if let Err(e) = self.grid.set_role(p, role) {
            log::warn!("placing {role} at {p}: {e}");
        }
    }

    fn erase(&mut self, p: Point) {
        if let Err(e) = self.grid.reset(p) {
            log::warn!("clearing {p}: {e}");
        }
    }

    /// Wipe the previous run's marks, rebuild adjacency and run the selected
    /// search. The status line is updated with the result.
    pub fn search<F>(
        &mut self,
        start: Point,
        end: Point,
        on_step: F,
    ) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(&Grid) -> Control,
    {
        self.grid.clear_search();
        self.grid.recompute_neighbors();
        let result = run_search(self.kind, &mut self.grid, start, end, on_step);
        self.status = match &result {
            Ok(outcome) => format!(
                "{}: {outcome} | Enter runs again | c reset | q quit",
                self.kind
            ),
            Err(e) => {
                log::warn!("search refused: {e}");
                format!("{}: {e}", self.kind)
            }
        };
        result
    }
}

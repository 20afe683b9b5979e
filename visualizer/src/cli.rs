use std::path::PathBuf;
use std::time::Duration;

use anyhow::ensure;
use clap::{ArgAction, Parser};
use pathviz_paths::SearchKind;

#[derive(Parser, Debug)]
#[command(name = "pathviz")]
#[command(author, version, about)]
#[command(long_about = "Watch Dijkstra, A* and breadth-first search explore a grid.\n\n\
    Left click places the start, then the end, then barriers. Right click clears a cell.\n\
    Enter runs the search, r scatters random barriers, c clears the board, q quits.\n\n\
    Examples:\n  \
    pathviz                      Ask for an algorithm, then open the grid\n  \
    pathviz -a bfs --rows 30     Breadth-first search on a 30x30 grid\n  \
    pathviz -a astar -vv --log-file trace.log")]
pub struct Cli {
    /// Search algorithm: a* (or astar), bfs or dijkstra. Prompts when omitted
    #[arg(short, long)]
    pub algorithm: Option<SearchKind>,

    /// Cells per side
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i32).range(2..=100))]
    pub rows: i32,

    /// Width of the virtual canvas in pixels
    #[arg(long, default_value_t = 700, value_parser = clap::value_parser!(i32).range(2..))]
    pub width: i32,

    /// Pause after every search step, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    /// Seed for random barriers (r key)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Settings the visualizer runs with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub rows: i32,
    pub width: i32,
    pub step_delay: Duration,
    pub seed: Option<u64>,
}

impl Cli {
    /// Validate the grid geometry and gather the runtime settings.
    pub fn config(&self) -> anyhow::Result<VisualizerConfig> {
        ensure!(
            self.width >= self.rows,
            "canvas width {} is smaller than the row count {}; cells would have no size",
            self.width,
            self.rows
        );
        Ok(VisualizerConfig {
            rows: self.rows,
            width: self.width,
            step_delay: Duration::from_millis(self.delay_ms),
            seed: self.seed,
        })
    }

    /// Log level selected by `-v`.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

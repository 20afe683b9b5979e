//! pathviz: watch Dijkstra, A* and BFS explore a grid in the terminal.

use std::io;

use anyhow::{Context, anyhow};
use clap::Parser;
use pathviz_crossterm::CrosstermDriver;

use visualizer_lib::banner::prompt_algorithm;
use visualizer_lib::logging::file_builder;
use visualizer_lib::{Cli, Editor, app};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    if let Some(path) = &cli.log_file {
        file_builder(path, cli.log_level())
            .with_context(|| format!("cannot open log file {}", path.display()))?
            .try_init()
            .context("a logger is already installed")?;
    }

    let kind = match cli.algorithm {
        Some(kind) => kind,
        None => prompt_algorithm(&mut io::stdin().lock(), &mut io::stdout())
            .context("reading the algorithm choice")?,
    };
    let (rows, width) = (config.rows, config.width);
    log::info!("{kind} on a {rows}x{rows} grid, {width}px canvas");

    let mut editor = Editor::new(&config, kind);
    let mut driver = CrosstermDriver::new();
    app::session(&mut driver, &mut editor, config.step_delay)
        .map_err(|e| anyhow!(e))
        .context("running the visualizer")
}

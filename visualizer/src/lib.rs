//! The pathviz terminal visualizer: command line, startup prompt, editing
//! state and the loop that animates a search.

pub mod app;
pub mod banner;
pub mod cli;
pub mod editor;
pub mod logging;
pub mod maze;

pub use cli::{Cli, VisualizerConfig};
pub use editor::{Action, Editor};

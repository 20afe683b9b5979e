//! Log setup. The terminal is in raw alternate-screen mode while the grid is
//! shown, so records go to a file instead of stderr.

use std::fs::File;
use std::io;
use std::path::Path;

use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;

/// An `env_logger` builder writing plain, uncoloured lines to `path`.
pub fn file_builder(path: &Path, level: LevelFilter) -> io::Result<Builder> {
    let file = File::create(path)?;
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_millis()
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(file)));
    Ok(builder)
}

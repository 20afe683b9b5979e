//! The interaction loop: poll input, update the editor, redraw, and run a
//! search with a redraw after every step when asked to.

use std::thread;
use std::time::Duration;

use pathviz_core::{Driver, DriverError, DriverResult, Grid, Msg, Point};
use pathviz_paths::Control;

use crate::editor::{Action, Editor};

/// How long an idle poll waits for input before redrawing.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run until the user quits. The driver must already be initialised; it is
/// not closed here.
pub fn run<D: Driver>(driver: &mut D, editor: &mut Editor, step_delay: Duration) -> DriverResult {
    let mut msgs = Vec::new();
    loop {
        driver.draw(editor.grid(), editor.status())?;
        driver.poll_msgs(POLL_TIMEOUT, &mut msgs)?;
        for msg in msgs.drain(..) {
            match editor.update(msg) {
                Action::None => {}
                Action::Quit => return Ok(()),
                Action::Run { start, end } => {
                    if !animate(driver, editor, start, end, step_delay)? {
                        return Ok(());
                    }
                    // Input that arrived before the run is stale now.
                    break;
                }
            }
        }
    }
}

/// Initialise the driver, [`run`] the editor and close the driver again,
/// whatever the outcome. Errors are logged and the logger flushed before
/// they are returned, so nothing buffered is lost on a failed run.
pub fn session<D: Driver>(
    driver: &mut D,
    editor: &mut Editor,
    step_delay: Duration,
) -> DriverResult {
    let result = driver.init().and_then(|()| run(driver, editor, step_delay));
    driver.close();
    if let Err(e) = &result {
        log::error!("visualizer stopped: {e}");
    }
    log::logger().flush();
    result
}

/// Run one search, redrawing after every step. Returns `false` if the user
/// asked to quit while it ran.
fn animate<D: Driver>(
    driver: &mut D,
    editor: &mut Editor,
    start: Point,
    end: Point,
    step_delay: Duration,
) -> Result<bool, DriverError> {
    let status = format!("{}: searching... (q to stop)", editor.kind());
    let mut pending = Vec::new();
    let mut quit = false;
    let mut failure = None;

    let result = editor.search(start, end, |grid: &Grid| {
        let polled = driver
            .draw(grid, &status)
            .and_then(|()| {
                if !step_delay.is_zero() {
                    thread::sleep(step_delay);
                }
                pending.clear();
                driver.poll_msgs(Duration::ZERO, &mut pending)
            });
        match polled {
            Err(e) => {
                failure = Some(e);
                Control::Cancel
            }
            Ok(()) if pending.iter().any(Msg::is_quit) => {
                quit = true;
                Control::Cancel
            }
            Ok(()) => Control::Continue,
        }
    });

    if let Some(e) = failure {
        return Err(e);
    }
    match result {
        Ok(outcome) => log::info!("{}: {outcome}", editor.kind()),
        Err(e) => log::warn!("{}: {e}", editor.kind()),
    }
    Ok(!quit)
}

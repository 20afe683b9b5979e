//! Crossterm terminal driver for pathviz.
//!
//! Provides a [`CrosstermDriver`] that implements [`pathviz_core::Driver`].
//! Each grid cell is drawn as two terminal columns by one row so that it looks
//! roughly square, below a one-line status bar.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{self, Color as CtColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{CellState, Driver, DriverResult, Grid, Key, ModMask, MouseAction, Msg, Point};

/// Terminal columns used per grid cell.
pub const CELL_COLUMNS: i32 = 2;

/// Background colour for each cell state.
pub fn state_color(state: CellState) -> CtColor {
    let (r, g, b) = match state {
        CellState::Empty => (255, 255, 255),
        CellState::Barrier => (0, 0, 0),
        CellState::Start => (255, 165, 0),
        CellState::End => (64, 224, 208),
        CellState::Open => (0, 255, 0),
        CellState::Closed => (255, 0, 0),
        CellState::Path => (128, 0, 128),
    };
    CtColor::Rgb { r, g, b }
}

/// Maps crossterm key modifiers to a [`ModMask`].
fn to_mod_mask(mods: KeyModifiers) -> ModMask {
    let mut m = ModMask::NONE;
    if mods.contains(KeyModifiers::SHIFT) {
        m = m | ModMask::SHIFT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        m = m | ModMask::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        m = m | ModMask::ALT;
    }
    m
}

/// Maps a crossterm [`KeyCode`] to a [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Where the grid sits on the terminal and how big its cells are in canvas
/// pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Terminal position of the grid's top-left cell.
    pub origin: Point,
    /// Canvas pixels per cell, as in [`Grid::cell_size`].
    pub cell_size: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            origin: Point::new(0, 1),
            cell_size: 1,
        }
    }
}

impl Layout {
    /// Terminal position of the left column of cell `p`.
    #[inline]
    pub fn cell_origin(&self, p: Point) -> Point {
        Point::new(self.origin.x + p.x * CELL_COLUMNS, self.origin.y + p.y)
    }

    /// Translate a terminal position to canvas pixels. Positions left of or
    /// above the grid map to negative pixels.
    pub fn to_canvas(&self, column: i32, row: i32) -> Point {
        let rel = Point::new(column, row) - self.origin;
        Point::new(
            rel.x * self.cell_size / CELL_COLUMNS - i32::from(rel.x < 0),
            rel.y * self.cell_size,
        )
    }
}

/// A terminal back-end for pathviz using crossterm.
pub struct CrosstermDriver {
    layout: Layout,
    // Last drawn state per cell; empty forces a full redraw.
    drawn: Vec<CellState>,
    status: String,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            layout: Layout::default(),
            drawn: Vec::new(),
            status: String::new(),
        }
    }

    fn translate(&mut self, ev: Event) -> Option<Msg> {
        match ev {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) => {
                if kind != KeyEventKind::Press {
                    return None;
                }
                to_key(code).map(|key| Msg::KeyDown {
                    key,
                    modifiers: to_mod_mask(modifiers),
                })
            }
            Event::Mouse(me) => {
                let (column, row) = (i32::from(me.column), i32::from(me.row));
                let pos = self.layout.to_canvas(column, row);
                let action = match me.kind {
                    MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
                    MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
                    MouseEventKind::Drag(MouseButton::Left) => MouseAction::DragMain,
                    MouseEventKind::Drag(MouseButton::Right) => MouseAction::DragSecondary,
                    MouseEventKind::Up(_) => MouseAction::Release,
                    _ => return None,
                };
                Some(Msg::Mouse { action, pos })
            }
            Event::Resize(w, h) => {
                self.drawn.clear();
                self.status.clear();
                Some(Msg::Screen {
                    width: i32::from(w),
                    height: i32::from(h),
                })
            }
            _ => None,
        }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> DriverResult {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            terminal::Clear(ClearType::All)
        )?;
        log::debug!("terminal initialised");
        Ok(())
    }

    fn poll_msgs(&mut self, timeout: Duration, out: &mut Vec<Msg>) -> DriverResult {
        if !event::poll(timeout)? {
            return Ok(());
        }
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Some(msg) = self.translate(ev) {
                out.push(msg);
            }
        }
        Ok(())
    }

    fn draw(&mut self, grid: &Grid, status: &str) -> DriverResult {
        let mut stdout = io::stdout().lock();
        self.layout.cell_size = grid.cell_size().max(1);

        if self.drawn.len() != grid.len() {
            queue!(stdout, style::ResetColor, terminal::Clear(ClearType::All))?;
            self.drawn.clear();
            self.status.clear();
        }

        if self.status != status {
            queue!(
                stdout,
                cursor::MoveTo(0, 0),
                style::ResetColor,
                terminal::Clear(ClearType::CurrentLine),
                style::Print(status)
            )?;
            self.status = status.to_owned();
        }

        let full = self.drawn.is_empty();
        for (i, cell) in grid.iter().enumerate() {
            let state = cell.state();
            if !full && self.drawn[i] == state {
                continue;
            }
            let at = self.layout.cell_origin(cell.pos());
            queue!(
                stdout,
                cursor::MoveTo(at.x as u16, at.y as u16),
                SetBackgroundColor(state_color(state)),
                style::Print("  ")
            )?;
        }
        if full {
            self.drawn = grid.iter().map(|c| c.state()).collect();
        } else {
            for (slot, cell) in self.drawn.iter_mut().zip(grid.iter()) {
                *slot = cell.state();
            }
        }

        queue!(stdout, style::ResetColor)?;
        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};
    use pathviz_core::grid_coordinates_from_pixel;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn every_state_has_its_own_color() {
        let states = [
            CellState::Empty,
            CellState::Barrier,
            CellState::Start,
            CellState::End,
            CellState::Open,
            CellState::Closed,
            CellState::Path,
        ];
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(state_color(*a), state_color(*b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn terminal_positions_land_in_the_right_cell() {
        let layout = Layout {
            origin: Point::new(0, 1),
            cell_size: 35,
        };
        let cell = |c: i32, r: i32| {
            let px = layout.to_canvas(c, r);
            grid_coordinates_from_pixel(px.x, px.y, 20, 700)
        };
        assert_eq!(cell(0, 1), Ok(Point::new(0, 0)));
        assert_eq!(cell(1, 1), Ok(Point::new(0, 0)));
        assert_eq!(cell(2, 1), Ok(Point::new(1, 0)));
        assert_eq!(cell(5, 4), Ok(Point::new(2, 3)));
        assert_eq!(cell(39, 20), Ok(Point::new(19, 19)));
        // Status bar row and the column past the grid are out of bounds.
        assert!(cell(0, 0).is_err());
        assert!(cell(40, 1).is_err());
    }

    #[test]
    fn cell_origin_inverts_to_canvas() {
        let layout = Layout {
            origin: Point::new(3, 2),
            cell_size: 14,
        };
        for p in [Point::new(0, 0), Point::new(4, 7), Point::new(9, 1)] {
            let at = layout.cell_origin(p);
            assert_eq!(layout.to_canvas(at.x, at.y) / 14, p);
        }
        assert!(layout.to_canvas(2, 2).x < 0);
    }

    #[test]
    fn translates_mouse_and_keys() {
        let mut d = CrosstermDriver::new();
        d.layout.cell_size = 10;
        assert_eq!(
            d.translate(mouse(MouseEventKind::Down(MouseButton::Left), 4, 3)),
            Some(Msg::Mouse {
                action: MouseAction::Main,
                pos: Point::new(20, 20),
            })
        );
        assert_eq!(
            d.translate(mouse(MouseEventKind::Drag(MouseButton::Right), 0, 1)),
            Some(Msg::Mouse {
                action: MouseAction::DragSecondary,
                pos: Point::new(0, 0),
            })
        );
        assert_eq!(d.translate(mouse(MouseEventKind::Moved, 0, 1)), None);

        let key = |code, modifiers, kind| {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                state: KeyEventState::NONE,
            })
        };
        let ctrl_c = key(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );
        assert_eq!(
            d.translate(ctrl_c),
            Some(Msg::KeyDown {
                key: Key::Char('c'),
                modifiers: ModMask::CTRL,
            })
        );
        let release = key(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(d.translate(release), None);
        let f1 = key(KeyCode::F(1), KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(d.translate(f1), None);
    }

    #[test]
    fn resize_forces_full_redraw() {
        let mut d = CrosstermDriver::new();
        d.drawn = vec![CellState::Empty; 4];
        d.status = "x".into();
        let msg = d.translate(Event::Resize(80, 24));
        assert_eq!(
            msg,
            Some(Msg::Screen {
                width: 80,
                height: 24,
            })
        );
        assert!(d.drawn.is_empty());
        assert!(d.status.is_empty());
    }
}

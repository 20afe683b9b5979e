//! Input events: [`Msg`], [`Key`], [`MouseAction`], [`ModMask`].
//!
//! Front-ends translate their native events into these so that the editing
//! logic never depends on a terminal library.

use std::ops::BitOr;

use crate::geom::Point;

/// Keys the visualizer reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Char(char),
}

/// Modifier keys held with a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ModMask(pub u8);

impl ModMask {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(0b001);
    pub const CTRL: Self = Self(0b010);
    pub const ALT: Self = Self(0b100);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ModMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Mouse button transitions. Drags are reported per button so that painting
/// can continue while a button is held.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Left button down.
    Main,
    /// Right button down.
    Secondary,
    DragMain,
    DragSecondary,
    Release,
}

/// One input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    KeyDown { key: Key, modifiers: ModMask },
    /// `pos` is in canvas pixels, the same space as [`Grid::pixel_to_cell`].
    ///
    /// [`Grid::pixel_to_cell`]: crate::Grid::pixel_to_cell
    Mouse { action: MouseAction, pos: Point },
    /// The terminal was resized to `width`×`height` columns and rows.
    Screen { width: i32, height: i32 },
    Quit,
}

impl Msg {
    /// A key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: ModMask::NONE,
        }
    }

    /// `q`, Escape, Ctrl-C and [`Msg::Quit`] all end the program.
    pub fn is_quit(&self) -> bool {
        match *self {
            Self::Quit => true,
            Self::KeyDown {
                key: Key::Escape | Key::Char('q'),
                ..
            } => true,
            Self::KeyDown {
                key: Key::Char('c'),
                modifiers,
            } => modifiers.contains(ModMask::CTRL),
            _ => false,
        }
    }
}

//! Input event types wrapping crossterm for decoupling.
//!
//! Defines [`InputEvent`], [`KeyEvent`] and supporting types. Crossterm events
//! are converted via `From` impls so the rest of the crate never depends on
//! crossterm directly.

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// Any key crossterm reports that has no variant here.
    Unsupported,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key event with no modifiers held.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event as seen by a trap host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// The terminal window gained focus.
    FocusGained,
    /// The terminal window lost focus.
    FocusLost,
    /// Mouse, resize, paste and key-release events. Traps never react to these.
    Other,
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if m.contains(crossterm::event::KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(crossterm::event::KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(crossterm::event::KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    out
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyCode;

        let code = match ct.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unsupported,
        };
        KeyEvent {
            code,
            modifiers: convert_modifiers(ct.modifiers),
        }
    }
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(ct: crossterm::event::Event) -> Self {
        match ct {
            crossterm::event::Event::Key(ke) if ke.kind == crossterm::event::KeyEventKind::Release => {
                InputEvent::Other
            }
            crossterm::event::Event::Key(ke) => InputEvent::Key(KeyEvent::from(ke)),
            crossterm::event::Event::FocusGained => InputEvent::FocusGained,
            crossterm::event::Event::FocusLost => InputEvent::FocusLost,
            _ => InputEvent::Other,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

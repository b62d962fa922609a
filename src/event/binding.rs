//! Key binding registry and resolution.
//!
//! [`KeyBindingRegistry`] maps key+modifier combinations to [`TrapAction`]s.
//! The `with_defaults()` constructor installs the standard trap keys
//! (Tab, Shift+Tab, Escape).

use std::collections::HashMap;

use super::input::{Key, KeyEvent, Modifiers};

// ---------------------------------------------------------------------------
// TrapAction
// ---------------------------------------------------------------------------

/// What a key does while a trap is intercepting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrapAction {
    /// Move focus to the next focusable element, wrapping at the end.
    FocusNext,
    /// Move focus to the previous focusable element, wrapping at the start.
    FocusPrevious,
    /// Close the trap.
    Cancel,
}

// ---------------------------------------------------------------------------
// KeyBindingRegistry
// ---------------------------------------------------------------------------

/// Registry of key bindings, mapping (Key, Modifiers) -> TrapAction.
#[derive(Debug, Clone)]
pub struct KeyBindingRegistry {
    bindings: HashMap<(Key, Modifiers), TrapAction>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a registry with the standard trap bindings.
    ///
    /// Defaults:
    /// - `Tab` -> FocusNext
    /// - `Shift+Tab`, `BackTab`, `Shift+BackTab` -> FocusPrevious
    /// - `Escape` -> Cancel
    ///
    /// Terminals disagree on whether Shift+Tab arrives as `BackTab` with or
    /// without the shift bit, so both are bound.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.bind(Key::Tab, Modifiers::NONE, TrapAction::FocusNext);
        registry.bind(Key::Tab, Modifiers::SHIFT, TrapAction::FocusPrevious);
        registry.bind(Key::BackTab, Modifiers::NONE, TrapAction::FocusPrevious);
        registry.bind(Key::BackTab, Modifiers::SHIFT, TrapAction::FocusPrevious);
        registry.bind(Key::Escape, Modifiers::NONE, TrapAction::Cancel);
        registry
    }

    /// Register a key binding, replacing any existing one for the same keys.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers, action: TrapAction) {
        self.bindings.insert((key, modifiers), action);
    }

    /// Remove a key binding. Returns the removed action, if any.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> Option<TrapAction> {
        self.bindings.remove(&(key, modifiers))
    }

    /// Look up the action for a given key event (exact key + modifiers).
    pub fn resolve(&self, event: &KeyEvent) -> Option<TrapAction> {
        self.bindings.get(&(event.code, event.modifiers)).copied()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindingRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

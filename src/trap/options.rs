//! Per-activation trap options.

/// Options for a single [`TrapManager::activate`](super::TrapManager::activate) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrapOptions {
    /// Re-focus the previous focus owner when the trap closes.
    pub restore_focus: bool,
    /// Selector for the element to focus first, overriding the tab order.
    pub initial_focus: Option<String>,
    /// Whether the cancel key closes the trap.
    pub escape_deactivates: bool,
}

impl Default for TrapOptions {
    fn default() -> Self {
        Self {
            restore_focus: true,
            initial_focus: None,
            escape_deactivates: true,
        }
    }
}

impl TrapOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether focus is restored on close (builder).
    pub fn with_restore_focus(mut self, restore: bool) -> Self {
        self.restore_focus = restore;
        self
    }

    /// Set the initial focus selector (builder).
    pub fn with_initial_focus(mut self, selector: impl Into<String>) -> Self {
        self.initial_focus = Some(selector.into());
        self
    }

    /// Set whether the cancel key closes the trap (builder).
    pub fn with_escape_deactivates(mut self, enabled: bool) -> Self {
        self.escape_deactivates = enabled;
        self
    }
}

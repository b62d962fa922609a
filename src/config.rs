//! Manager-wide configuration.

use crate::event::binding::KeyBindingRegistry;
use crate::trap::options::TrapOptions;

/// Configuration for a [`TrapManager`](crate::trap::TrapManager).
#[derive(Debug, Clone, Default)]
pub struct ManagerConfig {
    /// Keys the interceptor reacts to.
    pub bindings: KeyBindingRegistry,
    /// Options handed out by `TrapManager::default_options`.
    pub trap_defaults: TrapOptions,
}

impl ManagerConfig {
    /// Create a new default config: standard keys, default trap options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the key bindings (builder).
    pub fn with_bindings(mut self, bindings: KeyBindingRegistry) -> Self {
        self.bindings = bindings;
        self
    }

    /// Replace the default trap options (builder).
    pub fn with_trap_defaults(mut self, defaults: TrapOptions) -> Self {
        self.trap_defaults = defaults;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::input::{Key, KeyEvent};

    #[test]
    fn config_defaults() {
        let config = ManagerConfig::new();
        assert_eq!(config.bindings.len(), 5);
        assert_eq!(config.trap_defaults, TrapOptions::default());
    }

    #[test]
    fn config_builder() {
        let config = ManagerConfig::new()
            .with_bindings(KeyBindingRegistry::new())
            .with_trap_defaults(TrapOptions::new().with_restore_focus(false));
        assert!(config.bindings.resolve(&KeyEvent::plain(Key::Tab)).is_none());
        assert!(!config.trap_defaults.restore_focus);
    }
}

//! Event system: input events and key bindings.

pub mod binding;
pub mod input;

pub use binding::{KeyBindingRegistry, TrapAction};
pub use input::{InputEvent, Key, KeyEvent, Modifiers};

//! # gilt-focus
//!
//! Focus containment for modal and overlay regions on a retained widget DOM.
//!
//! A *trap* keeps keyboard focus inside a container while a dialog is open:
//! Tab and Shift+Tab cycle through the container's focusable descendants,
//! Escape closes the dialog, and the element that had focus before it opened
//! gets focus back once it closes. Traps nest; only the most recent one
//! reacts to keys.
//!
//! ## Core Systems
//!
//! - **[`dom`]** — Slotmap-backed DOM arena with tree operations and selector queries
//! - **[`selector`]** — Locator tokenizer, parser and matching for `initial_focus`
//! - **[`focus`]** — Focus owner trait, focusable-element scanner, snapshot/restore
//! - **[`trap`]** — Trap state machine, LIFO stack, keyboard interception, manager
//! - **[`schedule`]** — Next-turn scheduler with cancellation tokens
//! - **[`event`]** — Input events (crossterm conversion) and key bindings
//! - **[`config`]** — Manager configuration
//! - **[`testing`]** — Headless Pilot and snapshot helpers
//!
//! ## Host loop
//!
//! ```
//! use gilt_focus::dom::{Dom, NodeData};
//! use gilt_focus::event::{InputEvent, Key, KeyEvent};
//! use gilt_focus::focus::DocumentFocus;
//! use gilt_focus::trap::TrapManager;
//!
//! let mut dom = Dom::new();
//! let screen = dom.insert(NodeData::new("Screen"));
//! let open = dom.insert_child(screen, NodeData::new("Button").focusable(true));
//! let dialog = dom.insert_child(screen, NodeData::new("Dialog"));
//! dom.insert_child(dialog, NodeData::new("Button").with_id("save").focusable(true));
//!
//! let mut traps = TrapManager::with_focus(DocumentFocus::with_focus(open));
//! traps.activate(&dom, dialog, traps.default_options()).unwrap();
//!
//! // Each loop iteration: deliver input, then run the deferred work.
//! let escape = InputEvent::Key(KeyEvent::plain(Key::Escape));
//! traps.run_turn(&mut dom);
//! assert!(traps.handle_input(&mut dom, &escape).is_consumed());
//! traps.run_turn(&mut dom);
//! assert_eq!(traps.focused(), Some(open));
//! ```

// Foundation
pub mod error;
pub mod schedule;

// Tree
pub mod dom;
pub mod selector;

// Input
pub mod event;

// Focus containment
pub mod config;
pub mod focus;
pub mod trap;

// Headless testing
pub mod testing;

pub use config::ManagerConfig;
pub use error::TrapError;
pub use trap::{TrapHandle, TrapManager, TrapOptions};

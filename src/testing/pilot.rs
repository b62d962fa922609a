//! Pilot: programmatic interaction with a headless DOM and trap manager.
//!
//! The `Pilot` owns a [`Dom`] and a [`TrapManager`] and provides methods to
//! simulate key presses, run scheduler turns and inspect where focus landed.

use crate::config::ManagerConfig;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::error::TrapError;
use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers};
use crate::focus::owner::{DocumentFocus, FocusOwner};
use crate::trap::{KeyDisposition, TrapHandle, TrapManager, TrapOptions};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless driver for testing focus traps.
///
/// # Examples
///
/// ```
/// use gilt_focus::dom::{Dom, NodeData};
/// use gilt_focus::event::Key;
/// use gilt_focus::testing::Pilot;
/// use gilt_focus::trap::TrapOptions;
///
/// let mut dom = Dom::new();
/// let screen = dom.insert(NodeData::new("Screen"));
/// let dialog = dom.insert_child(screen, NodeData::new("Dialog"));
/// dom.insert_child(dialog, NodeData::new("Button").with_id("ok").focusable(true));
///
/// let mut pilot = Pilot::new(dom);
/// pilot.activate(dialog, TrapOptions::default()).unwrap();
/// pilot.tick();
/// assert_eq!(pilot.focused_label().as_deref(), Some("Button#ok"));
/// assert!(pilot.press_key(Key::Tab).is_consumed());
/// ```
pub struct Pilot<F: FocusOwner = DocumentFocus> {
    dom: Dom,
    traps: TrapManager<F>,
}

impl Pilot<DocumentFocus> {
    /// Create a pilot over `dom` with a default manager and nothing focused.
    pub fn new(dom: Dom) -> Self {
        Self::with_manager(dom, TrapManager::new())
    }

    /// Create a pilot from a [`ManagerConfig`].
    pub fn with_config(dom: Dom, config: ManagerConfig) -> Self {
        Self::with_manager(dom, TrapManager::with_config(config, DocumentFocus::new()))
    }
}

impl<F: FocusOwner> Pilot<F> {
    /// Create a pilot from an already configured manager.
    pub fn with_manager(dom: Dom, traps: TrapManager<F>) -> Self {
        Self { dom, traps }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) -> KeyDisposition {
        self.press_key_with(key, Modifiers::NONE)
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> KeyDisposition {
        let event = KeyEvent::new(key, modifiers);
        self.traps.handle_key(&mut self.dom, &event)
    }

    /// Feed an arbitrary input event.
    pub fn press_input(&mut self, event: InputEvent) -> KeyDisposition {
        self.traps.handle_input(&mut self.dom, &event)
    }

    // ── Processing ───────────────────────────────────────────────────

    /// Run one scheduler turn. Returns how many tasks ran.
    pub fn tick(&mut self) -> usize {
        self.traps.run_turn(&mut self.dom)
    }

    /// Run turns until nothing is scheduled.
    pub fn settle(&mut self) -> usize {
        self.traps.run_until_idle(&mut self.dom)
    }

    // ── Trap control ─────────────────────────────────────────────────

    /// Activate a trap over `container`.
    pub fn activate(
        &mut self,
        container: NodeId,
        options: TrapOptions,
    ) -> Result<TrapHandle, TrapError> {
        self.traps.activate(&self.dom, container, options)
    }

    /// Deactivate `handle`. Returns whether anything happened.
    pub fn deactivate(&mut self, handle: TrapHandle) -> bool {
        self.traps.deactivate(handle)
    }

    /// Move focus as the host would on a click.
    pub fn focus_node(&mut self, node: Option<NodeId>) {
        self.traps.focus_mut().set_focused(node);
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn focused(&self) -> Option<NodeId> {
        self.traps.focused()
    }

    /// Label (`Type#id`) of the focused node, if it still exists.
    pub fn focused_label(&self) -> Option<String> {
        self.focused()
            .and_then(|node| self.dom.get(node))
            .map(|data| data.label())
    }

    /// Look a node up by its `id` attribute.
    pub fn node(&self, id: &str) -> Option<NodeId> {
        self.dom.query_by_id(id)
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    pub fn traps(&self) -> &TrapManager<F> {
        &self.traps
    }

    pub fn traps_mut(&mut self) -> &mut TrapManager<F> {
        &mut self.traps
    }

    /// Text dump of the trap stack and the focus owner.
    pub fn snapshot(&self) -> String {
        super::snapshot::stack_to_string(&self.traps, &self.dom)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeData;
    use crate::event::binding::{KeyBindingRegistry, TrapAction};
    use crate::testing::RecordingFocus;
    use crate::trap::TrapState;

    /// Screen > [Open, Dialog#dialog > [A, B]].
    fn pilot() -> Pilot {
        let mut dom = Dom::new();
        let screen = dom.insert(NodeData::new("Screen"));
        dom.insert_child(screen, NodeData::new("Button").with_id("open").focusable(true));
        let dialog = dom.insert_child(screen, NodeData::new("Dialog").with_id("dialog"));
        dom.insert_child(dialog, NodeData::new("Button").with_id("a").focusable(true));
        dom.insert_child(dialog, NodeData::new("Button").with_id("b").focusable(true));
        Pilot::new(dom)
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_starts_untrapped_and_unfocused() {
        let pilot = pilot();
        assert!(!pilot.traps().is_trapped());
        assert!(pilot.focused().is_none());
        assert!(pilot.focused_label().is_none());
    }

    #[test]
    fn with_config_applies_bindings() {
        let mut bindings = KeyBindingRegistry::new();
        bindings.bind(Key::Char('n'), Modifiers::CTRL, TrapAction::FocusNext);
        let mut dom = Dom::new();
        let screen = dom.insert(NodeData::new("Screen"));
        dom.insert_child(screen, NodeData::new("Button").focusable(true));

        let mut pilot = Pilot::with_config(dom, ManagerConfig::new().with_bindings(bindings));
        pilot.activate(screen, TrapOptions::default()).unwrap();
        pilot.tick();
        assert_eq!(pilot.press_key(Key::Tab), KeyDisposition::Ignored);
        assert!(pilot.press_key_with(Key::Char('n'), Modifiers::CTRL).is_consumed());
    }

    #[test]
    fn with_manager_keeps_focus_owner() {
        let mut dom = Dom::new();
        let screen = dom.insert(NodeData::new("Screen"));
        let only = dom.insert_child(screen, NodeData::new("Button").focusable(true));

        let mut pilot = Pilot::with_manager(dom, TrapManager::with_focus(RecordingFocus::new()));
        pilot.activate(screen, TrapOptions::default()).unwrap();
        pilot.tick();
        assert_eq!(pilot.traps().focus().writes(), &[Some(only)]);
    }

    // ── Keys and turns ───────────────────────────────────────────────

    #[test]
    fn press_key_cycles_inside_dialog() {
        let mut pilot = pilot();
        let dialog = pilot.node("dialog").unwrap();
        pilot.activate(dialog, TrapOptions::default()).unwrap();
        assert_eq!(pilot.tick(), 1);
        assert_eq!(pilot.focused_label().as_deref(), Some("Button#a"));

        pilot.press_key(Key::Tab);
        assert_eq!(pilot.focused_label().as_deref(), Some("Button#b"));
        pilot.press_key(Key::Tab);
        assert_eq!(pilot.focused_label().as_deref(), Some("Button#a"));
        pilot.press_key_with(Key::Tab, Modifiers::SHIFT);
        assert_eq!(pilot.focused_label().as_deref(), Some("Button#b"));
    }

    #[test]
    fn press_input_routes_keys() {
        let mut pilot = pilot();
        let dialog = pilot.node("dialog").unwrap();
        let handle = pilot.activate(dialog, TrapOptions::default()).unwrap();
        pilot.tick();

        let disposition = pilot.press_input(InputEvent::Key(KeyEvent::plain(Key::Escape)));
        assert!(disposition.is_consumed());
        assert_eq!(pilot.traps().state(handle), TrapState::Closing);
    }

    #[test]
    fn settle_drains_everything() {
        let mut pilot = pilot();
        let dialog = pilot.node("dialog").unwrap();
        let handle = pilot.activate(dialog, TrapOptions::default()).unwrap();
        assert!(pilot.deactivate(handle));
        assert_eq!(pilot.settle(), 1);
        assert_eq!(pilot.traps().pending_tasks(), 0);
        assert_eq!(pilot.tick(), 0);
    }

    #[test]
    fn focus_node_restored_after_close() {
        let mut pilot = pilot();
        let open = pilot.node("open").unwrap();
        let dialog = pilot.node("dialog").unwrap();
        pilot.focus_node(Some(open));

        let handle = pilot.activate(dialog, TrapOptions::default()).unwrap();
        pilot.tick();
        pilot.deactivate(handle);
        pilot.tick();
        assert_eq!(pilot.focused(), Some(open));
    }

    #[test]
    fn focused_label_of_removed_node_is_none() {
        let mut pilot = pilot();
        let open = pilot.node("open").unwrap();
        pilot.focus_node(Some(open));
        pilot.dom_mut().remove(open);
        assert_eq!(pilot.focused(), Some(open));
        assert!(pilot.focused_label().is_none());
    }

    #[test]
    fn activate_detached_container_errors() {
        let mut pilot = pilot();
        let dialog = pilot.node("dialog").unwrap();
        pilot.dom_mut().detach(dialog);
        assert_eq!(
            pilot.activate(dialog, TrapOptions::default()),
            Err(TrapError::ContainerDetached(dialog))
        );
        assert!(pilot.traps_mut().drain_events().is_empty());
    }
}

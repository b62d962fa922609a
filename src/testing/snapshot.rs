//! Snapshot helpers.
//!
//! Functions for converting the trap stack and focus owner into plain-text
//! strings suitable for snapshot testing and assertions.

use std::fmt::Write as _;

use crate::dom::tree::Dom;
use crate::focus::owner::FocusOwner;
use crate::trap::TrapManager;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render the live traps (bottom first) and the current focus owner.
///
/// Each trap becomes one line `[index] Label state`, with ` (top)` appended to
/// the interception target. The last line is `focus: Label`, or `focus:
/// <none>` / `focus: <removed>` when nothing or a deleted node holds focus.
/// Lines are separated by `'\n'` with no trailing newline.
///
/// # Examples
///
/// ```
/// use gilt_focus::dom::{Dom, NodeData};
/// use gilt_focus::testing::stack_to_string;
/// use gilt_focus::trap::TrapManager;
///
/// let mut dom = Dom::new();
/// dom.insert(NodeData::new("Screen"));
/// assert_eq!(stack_to_string(&TrapManager::new(), &dom), "focus: <none>");
/// ```
pub fn stack_to_string<F: FocusOwner>(traps: &TrapManager<F>, dom: &Dom) -> String {
    let mut out = String::new();
    let top = traps.top();

    for (index, trap) in traps.traps().enumerate() {
        let label = dom
            .get(trap.container())
            .map_or_else(|| "<removed>".to_owned(), |data| data.label());
        let _ = write!(out, "[{index}] {label} {}", trap.state());
        if Some(trap.handle()) == top {
            out.push_str(" (top)");
        }
        out.push('\n');
    }

    let focus = match traps.focused() {
        None => "<none>".to_owned(),
        Some(node) => dom
            .get(node)
            .map_or_else(|| "<removed>".to_owned(), |data| data.label()),
    };
    let _ = write!(out, "focus: {focus}");
    out
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::{NodeData, NodeId};
    use crate::focus::owner::DocumentFocus;
    use crate::trap::TrapOptions;

    /// Screen > [Open, Dialog#settings > [Save, Confirm#confirm > [Yes]]].
    fn setup() -> (Dom, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let screen = dom.insert(NodeData::new("Screen"));
        let open = dom.insert_child(screen, NodeData::new("Button").with_id("open").focusable(true));
        let settings = dom.insert_child(screen, NodeData::new("Dialog").with_id("settings"));
        dom.insert_child(settings, NodeData::new("Button").with_id("save").focusable(true));
        let confirm = dom.insert_child(settings, NodeData::new("Dialog").with_id("confirm"));
        dom.insert_child(confirm, NodeData::new("Button").with_id("yes").focusable(true));
        (dom, open, settings, confirm)
    }

    #[test]
    fn empty_manager() {
        let (dom, open, _, _) = setup();
        let traps = TrapManager::with_focus(DocumentFocus::with_focus(open));
        insta::assert_snapshot!(stack_to_string(&traps, &dom), @"focus: Button#open");
    }

    #[test]
    fn pending_trap_keeps_previous_focus() {
        let (dom, open, settings, _) = setup();
        let mut traps = TrapManager::with_focus(DocumentFocus::with_focus(open));
        traps.activate(&dom, settings, TrapOptions::default()).unwrap();
        insta::assert_snapshot!(stack_to_string(&traps, &dom), @r"
        [0] Dialog#settings pending (top)
        focus: Button#open
        ");
    }

    #[test]
    fn nested_traps() {
        let (mut dom, open, settings, confirm) = setup();
        let mut traps = TrapManager::with_focus(DocumentFocus::with_focus(open));
        traps.activate(&dom, settings, TrapOptions::default()).unwrap();
        traps.run_turn(&mut dom);
        traps.activate(&dom, confirm, TrapOptions::default()).unwrap();
        traps.run_turn(&mut dom);
        insta::assert_snapshot!(stack_to_string(&traps, &dom), @r"
        [0] Dialog#settings active
        [1] Dialog#confirm active (top)
        focus: Button#yes
        ");
    }

    #[test]
    fn removed_focus_owner() {
        let (mut dom, open, _, _) = setup();
        let traps = TrapManager::with_focus(DocumentFocus::with_focus(open));
        dom.remove(open);
        insta::assert_snapshot!(stack_to_string(&traps, &dom), @"focus: <removed>");
    }
}

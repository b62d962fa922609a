//! Snapshot and restore of the focus owner around a trap's lifetime.

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;

use super::owner::FocusOwner;
use super::scanner::is_focusable;

/// Why a restoration did not move focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The trap was activated with restoration turned off.
    Disabled,
    /// Nothing held focus when the trap activated.
    NothingCaptured,
    /// The captured node was removed, detached, hidden or disabled since.
    NoLongerFocusable,
    /// A trap is still live above the closing one, so focus stays there.
    Superseded,
}

/// Result of a restoration attempt. Skipping is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored(NodeId),
    Skipped(SkipReason),
}

/// Snapshot whatever holds focus right now.
///
/// Must be called synchronously at activation time, before the overlay moves
/// focus anywhere.
pub fn capture<F: FocusOwner + ?Sized>(focus: &F) -> Option<NodeId> {
    focus.focused()
}

/// Re-apply `snapshot` if restoration is wanted and the node is still usable.
pub fn restore<F: FocusOwner + ?Sized>(
    dom: &Dom,
    focus: &mut F,
    snapshot: Option<NodeId>,
    enabled: bool,
) -> RestoreOutcome {
    if !enabled {
        return RestoreOutcome::Skipped(SkipReason::Disabled);
    }
    let Some(node) = snapshot else {
        return RestoreOutcome::Skipped(SkipReason::NothingCaptured);
    };
    if !is_focusable(dom, node) {
        return RestoreOutcome::Skipped(SkipReason::NoLongerFocusable);
    }
    focus.set_focused(Some(node));
    RestoreOutcome::Restored(node)
}

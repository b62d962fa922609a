//! Trap record and lifecycle state.

use std::fmt;

use slotmap::new_key_type;

use crate::dom::node::NodeId;
use crate::schedule::TaskToken;
use crate::selector::SelectorList;

new_key_type! {
    /// Identity of one activation. Generational, so a discarded trap's id is
    /// never handed out again.
    pub struct TrapId;
}

/// Caller-held handle returned by `activate`, used to deactivate later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrapHandle(pub(crate) TrapId);

impl TrapHandle {
    /// The underlying trap id.
    pub fn id(self) -> TrapId {
        self.0
    }
}

/// Lifecycle of a trap.
///
/// ```text
/// Pending --placement--> Active --close--> Closing --restore--> Closed
///    \______________________close_____________^
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrapState {
    /// Created; initial focus placement not yet run.
    Pending,
    /// Placement done; intercepts keys while on top of the stack.
    Active,
    /// Deactivation issued; restoration pending.
    Closing,
    /// Terminal. The record has been discarded.
    Closed,
}

impl TrapState {
    /// Whether the trap is still on the stack (pending or active).
    pub fn is_live(self) -> bool {
        matches!(self, TrapState::Pending | TrapState::Active)
    }
}

impl fmt::Display for TrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrapState::Pending => "pending",
            TrapState::Active => "active",
            TrapState::Closing => "closing",
            TrapState::Closed => "closed",
        })
    }
}

/// One activation of focus containment over a container node.
#[derive(Debug, Clone)]
pub struct Trap {
    pub(crate) id: TrapId,
    pub(crate) container: NodeId,
    pub(crate) restore_focus: bool,
    pub(crate) escape_deactivates: bool,
    pub(crate) initial_focus: Option<SelectorList>,
    /// Focus owner captured at activation. Owned by this trap until restore
    /// or discard.
    pub(crate) previous_focus: Option<NodeId>,
    pub(crate) state: TrapState,
    /// Set when the container got a `-1` tab index so it could take focus.
    pub(crate) container_patched: bool,
    /// Pending initial-placement task, cancelled on early deactivation.
    pub(crate) placement: Option<TaskToken>,
    /// The trap directly above this one when it was closed out of order.
    pub(crate) closed_beneath: Option<TrapId>,
}

impl Trap {
    pub fn id(&self) -> TrapId {
        self.id
    }

    pub fn handle(&self) -> TrapHandle {
        TrapHandle(self.id)
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn state(&self) -> TrapState {
        self.state
    }

    pub fn previous_focus(&self) -> Option<NodeId> {
        self.previous_focus
    }

    pub fn restore_focus(&self) -> bool {
        self.restore_focus
    }

    pub fn escape_deactivates(&self) -> bool {
        self.escape_deactivates
    }
}

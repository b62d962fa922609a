//! Trap lifecycle notifications.
//!
//! The manager records [`TrapEvent`]s as transitions happen; the host drains
//! them with [`TrapManager::drain_events`](super::TrapManager::drain_events),
//! e.g. to announce a dialog or to log.

use crate::dom::node::NodeId;
use crate::focus::restorer::SkipReason;

use super::model::TrapHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapEvent {
    /// A trap was pushed; placement will run on the next turn.
    Activated { trap: TrapHandle, container: NodeId },
    /// Initial placement moved focus.
    FocusPlaced { trap: TrapHandle, node: NodeId },
    /// A trap was removed from the stack; restoration will run on the next turn.
    Deactivated { trap: TrapHandle },
    /// The previous focus owner got focus back.
    Restored { trap: TrapHandle, node: NodeId },
    /// Restoration did not move focus.
    RestoreSkipped { trap: TrapHandle, reason: SkipReason },
}

impl TrapEvent {
    /// The trap this event concerns.
    pub fn trap(&self) -> TrapHandle {
        match *self {
            TrapEvent::Activated { trap, .. }
            | TrapEvent::FocusPlaced { trap, .. }
            | TrapEvent::Deactivated { trap }
            | TrapEvent::Restored { trap, .. }
            | TrapEvent::RestoreSkipped { trap, .. } => trap,
        }
    }
}

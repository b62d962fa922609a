//! Keyboard interception for the top-of-stack trap.
//!
//! The interceptor resolves keys to [`TrapAction`]s, cycles focus through the
//! container's tab order and reports when the trap asked to close. The
//! manager only hands it the trap currently on top, which is what keeps
//! suspended traps inert.

use tracing::trace;

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::binding::{KeyBindingRegistry, TrapAction};
use crate::event::input::KeyEvent;
use crate::focus::owner::FocusOwner;
use crate::focus::scanner::{is_focusable, scan};

use super::model::{Trap, TrapState};

/// Direction of cyclic navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Whether a key event was swallowed by a trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The trap handled the key; the host must suppress its default behavior
    /// and stop propagation.
    Consumed,
    /// No trap reacted; the host processes the key as usual.
    Ignored,
}

impl KeyDisposition {
    pub fn is_consumed(self) -> bool {
        self == KeyDisposition::Consumed
    }
}

/// Outcome of offering one key to a trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interception {
    /// Not a trap key, the trap is not active, or cancel is disabled.
    PassThrough,
    /// Navigation key handled; holds the node focus moved to, if any.
    Cycled(Option<NodeId>),
    /// The trap wants to close. The caller performs the deactivation.
    Cancel,
}

impl Interception {
    /// How the host should treat the key.
    pub fn disposition(self) -> KeyDisposition {
        match self {
            Interception::PassThrough => KeyDisposition::Ignored,
            Interception::Cycled(_) | Interception::Cancel => KeyDisposition::Consumed,
        }
    }
}

/// Maps keys to trap actions and applies navigation.
#[derive(Debug, Clone, Default)]
pub struct KeyboardInterceptor {
    bindings: KeyBindingRegistry,
}

impl KeyboardInterceptor {
    /// Create an interceptor over the given bindings.
    pub fn new(bindings: KeyBindingRegistry) -> Self {
        Self { bindings }
    }

    /// The trap action bound to `event`, if any.
    pub fn resolve(&self, event: &KeyEvent) -> Option<TrapAction> {
        self.bindings.resolve(event)
    }

    /// Read access to the key bindings.
    pub fn bindings(&self) -> &KeyBindingRegistry {
        &self.bindings
    }

    /// Mutable access to the key bindings, for rebinding at runtime.
    pub fn bindings_mut(&mut self) -> &mut KeyBindingRegistry {
        &mut self.bindings
    }

    /// Offer `event` to `trap`, which must be the top of the stack.
    ///
    /// Navigation keys move focus through a fresh scan of the container and
    /// fall back to the container itself when nothing inside can take focus.
    /// A pending or closing trap lets every key through.
    pub fn intercept<F: FocusOwner + ?Sized>(
        &self,
        dom: &mut Dom,
        trap: &mut Trap,
        focus: &mut F,
        event: &KeyEvent,
    ) -> Interception {
        if trap.state != TrapState::Active {
            trace!(trap = ?trap.id, state = %trap.state, "key ignored: trap not active");
            return Interception::PassThrough;
        }
        let Some(action) = self.resolve(event) else {
            return Interception::PassThrough;
        };
        trace!(trap = ?trap.id, key = ?event.code, action = ?action, "key intercepted");

        match action {
            TrapAction::Cancel if trap.escape_deactivates => Interception::Cancel,
            TrapAction::Cancel => Interception::PassThrough,
            TrapAction::FocusNext => Interception::Cycled(cycle(dom, trap, focus, Direction::Forward)),
            TrapAction::FocusPrevious => {
                Interception::Cycled(cycle(dom, trap, focus, Direction::Backward))
            }
        }
    }
}

fn cycle<F: FocusOwner + ?Sized>(
    dom: &mut Dom,
    trap: &mut Trap,
    focus: &mut F,
    direction: Direction,
) -> Option<NodeId> {
    let sequence = scan(dom, trap.container);
    let target = match next_target(&sequence, focus.focused(), direction) {
        Some(node) => Some(node),
        None => focus_container(dom, trap),
    };
    if let Some(node) = target {
        focus.set_focused(Some(node));
    }
    target
}

/// Make the container itself the target, giving it a `-1` tab index when it
/// cannot take focus on its own.
pub(crate) fn focus_container(dom: &mut Dom, trap: &mut Trap) -> Option<NodeId> {
    if let Some(data) = dom.get_mut(trap.container) {
        if !data.focusable && data.tab_index.is_none() {
            data.tab_index = Some(-1);
            trap.container_patched = true;
        }
    }
    is_focusable(dom, trap.container).then_some(trap.container)
}

/// Compute the next focus target within `sequence`.
///
/// - forward from the last element wraps to the first
/// - backward from the first element wraps to the last
/// - a `current` outside the sequence (focus escaped) snaps to the first
///
/// Returns `None` only for an empty sequence.
pub fn next_target(
    sequence: &[NodeId],
    current: Option<NodeId>,
    direction: Direction,
) -> Option<NodeId> {
    let first = *sequence.first()?;
    let Some(pos) = current.and_then(|c| sequence.iter().position(|&n| n == c)) else {
        return Some(first);
    };
    let next = match direction {
        Direction::Forward => (pos + 1) % sequence.len(),
        Direction::Backward => pos.checked_sub(1).unwrap_or(sequence.len() - 1),
    };
    sequence.get(next).copied()
}

//! The trap manager: owns every trap, sequences activation and deactivation,
//! and routes keys to the top of the stack.
//!
//! All focus writes go through the manager's [`FocusOwner`]. Placement and
//! restoration are deferred to the next turn of the host loop: the host calls
//! [`TrapManager::run_turn`] once per loop iteration, after the DOM mutations
//! that opened or closed an overlay have been applied.

use slotmap::SlotMap;
use tracing::{debug, trace, warn};

use crate::config::ManagerConfig;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::error::TrapError;
use crate::event::input::{InputEvent, KeyEvent};
use crate::focus::owner::{DocumentFocus, FocusOwner};
use crate::focus::restorer::{self, RestoreOutcome, SkipReason};
use crate::focus::scanner::{is_focusable, scan};
use crate::schedule::Scheduler;
use crate::selector::{parse_selector_list, SelectorList};

use super::event::TrapEvent;
use super::interceptor::{focus_container, Interception, KeyDisposition, KeyboardInterceptor};
use super::model::{Trap, TrapHandle, TrapId, TrapState};
use super::options::TrapOptions;
use super::stack::TrapStack;

/// Work the manager defers to the next turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    /// Initial focus placement for a freshly activated trap.
    Place(TrapId),
    /// Focus restoration and discard for a closed trap.
    Restore(TrapId),
}

/// Owns the live traps and the single focus owner.
///
/// ```
/// use gilt_focus::dom::{Dom, NodeData};
/// use gilt_focus::focus::{DocumentFocus, FocusOwner};
/// use gilt_focus::trap::{TrapManager, TrapOptions};
///
/// let mut dom = Dom::new();
/// let screen = dom.insert(NodeData::new("Screen"));
/// let dialog = dom.insert_child(screen, NodeData::new("Dialog"));
/// let save = dom.insert_child(dialog, NodeData::new("Button").focusable(true));
///
/// let mut traps = TrapManager::new();
/// let handle = traps.activate(&dom, dialog, TrapOptions::default()).unwrap();
/// traps.run_turn(&mut dom);
/// assert_eq!(traps.focus().focused(), Some(save));
///
/// traps.deactivate(handle);
/// traps.run_turn(&mut dom);
/// assert!(!traps.is_trapped());
/// ```
#[derive(Debug)]
pub struct TrapManager<F: FocusOwner = DocumentFocus> {
    traps: SlotMap<TrapId, Trap>,
    stack: TrapStack,
    scheduler: Scheduler<Deferred>,
    interceptor: KeyboardInterceptor,
    defaults: TrapOptions,
    focus: F,
    events: Vec<TrapEvent>,
}

impl TrapManager<DocumentFocus> {
    /// Create a manager over a plain in-memory focus owner.
    pub fn new() -> Self {
        Self::with_focus(DocumentFocus::new())
    }
}

impl Default for TrapManager<DocumentFocus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FocusOwner> TrapManager<F> {
    /// Create a manager writing focus through `focus`, with default config.
    pub fn with_focus(focus: F) -> Self {
        Self::with_config(ManagerConfig::default(), focus)
    }

    /// Create a manager from an explicit config.
    pub fn with_config(config: ManagerConfig, focus: F) -> Self {
        Self {
            traps: SlotMap::with_key(),
            stack: TrapStack::new(),
            scheduler: Scheduler::new(),
            interceptor: KeyboardInterceptor::new(config.bindings),
            defaults: config.trap_defaults,
            focus,
            events: Vec::new(),
        }
    }

    /// The configured default options, ready to be tweaked per activation.
    pub fn default_options(&self) -> TrapOptions {
        self.defaults.clone()
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Start containing focus inside `container`.
    ///
    /// The current focus owner is captured immediately. The trap starts out
    /// [`Pending`](TrapState::Pending) and moves focus on the next
    /// [`run_turn`](Self::run_turn).
    pub fn activate(
        &mut self,
        dom: &Dom,
        container: NodeId,
        options: TrapOptions,
    ) -> Result<TrapHandle, TrapError> {
        if !dom.contains(container) {
            return Err(TrapError::ContainerNotFound(container));
        }
        if !dom.is_connected(container) {
            return Err(TrapError::ContainerDetached(container));
        }

        let initial_focus = options
            .initial_focus
            .as_deref()
            .and_then(parse_initial_focus);
        let previous_focus = restorer::capture(&self.focus);

        let id = self.traps.insert_with_key(|id| Trap {
            id,
            container,
            restore_focus: options.restore_focus,
            escape_deactivates: options.escape_deactivates,
            initial_focus,
            previous_focus,
            state: TrapState::Pending,
            container_patched: false,
            placement: None,
            closed_beneath: None,
        });
        let token = self.scheduler.run_next_turn(Deferred::Place(id));
        if let Some(trap) = self.traps.get_mut(id) {
            trap.placement = Some(token);
        }
        self.stack.push(id);

        debug!(trap = ?id, container = ?container, previous = ?previous_focus, depth = self.stack.len(), "trap activated");
        let handle = TrapHandle(id);
        self.events.push(TrapEvent::Activated {
            trap: handle,
            container,
        });
        Ok(handle)
    }

    /// Close the trap behind `handle`.
    ///
    /// The trap leaves the stack right away, wherever it sits, and any
    /// placement still waiting is cancelled. Restoration runs on the next
    /// turn. Returns `false` for a trap that is already closing, closed or
    /// unknown.
    pub fn deactivate(&mut self, handle: TrapHandle) -> bool {
        let id = handle.0;
        let Some(trap) = self.traps.get_mut(id) else {
            trace!(trap = ?id, "deactivate: unknown trap");
            return false;
        };
        if !trap.state.is_live() {
            trace!(trap = ?id, state = %trap.state, "deactivate: already closing");
            return false;
        }

        if let Some(token) = trap.placement.take() {
            if self.scheduler.cancel(token).is_some() {
                trace!(trap = ?id, "pending placement cancelled");
            }
        }
        // Whatever sat directly above now occupies the vacated position.
        trap.closed_beneath = self.stack.remove(id).and_then(|pos| self.stack.get(pos));
        trap.state = TrapState::Closing;
        self.scheduler.run_next_turn(Deferred::Restore(id));

        debug!(trap = ?id, out_of_order = trap.closed_beneath.is_some(), "trap deactivated");
        self.events.push(TrapEvent::Deactivated { trap: handle });
        true
    }

    /// Run the tasks that were scheduled before this call. Returns how many
    /// ran.
    ///
    /// Anything scheduled while the turn runs waits for the next call.
    pub fn run_turn(&mut self, dom: &mut Dom) -> usize {
        let due = self.scheduler.take_turn();
        if !due.is_empty() {
            trace!(tasks = due.len(), "running turn");
        }
        let count = due.len();
        for task in due {
            match task {
                Deferred::Place(id) => self.place_initial_focus(dom, id),
                Deferred::Restore(id) => self.finish_close(dom, id),
            }
        }
        count
    }

    /// Run turns until nothing is scheduled. Returns the total task count.
    pub fn run_until_idle(&mut self, dom: &mut Dom) -> usize {
        let mut total = 0;
        while !self.scheduler.is_empty() {
            total += self.run_turn(dom);
        }
        total
    }

    fn place_initial_focus(&mut self, dom: &mut Dom, id: TrapId) {
        let Some(trap) = self.traps.get_mut(id) else {
            return;
        };
        trap.placement = None;
        if trap.state != TrapState::Pending {
            trace!(trap = ?id, state = %trap.state, "placement skipped");
            return;
        }
        trap.state = TrapState::Active;

        if !self.stack.is_top(id) {
            debug!(trap = ?id, "placement superseded by a newer trap");
            return;
        }
        if !dom.is_connected(trap.container) {
            debug!(trap = ?id, container = ?trap.container, "container left the tree before placement");
            return;
        }

        let target = match initial_target(dom, trap) {
            Some(node) => Some(node),
            None => focus_container(dom, trap),
        };
        match target {
            Some(node) => {
                self.focus.set_focused(Some(node));
                debug!(trap = ?id, node = ?node, "initial focus placed");
                self.events.push(TrapEvent::FocusPlaced {
                    trap: TrapHandle(id),
                    node,
                });
            }
            None => debug!(trap = ?id, "nothing in the container can take focus"),
        }
    }

    fn finish_close(&mut self, dom: &mut Dom, id: TrapId) {
        let Some(trap) = self.traps.remove(id) else {
            return;
        };

        if trap.container_patched {
            self.release_container_patch(dom, &trap);
        }

        let outcome = match trap.closed_beneath {
            Some(above) => {
                if trap.restore_focus {
                    self.hand_off_snapshot(dom, &trap, above);
                }
                RestoreOutcome::Skipped(SkipReason::Superseded)
            }
            None => restorer::restore(dom, &mut self.focus, trap.previous_focus, trap.restore_focus),
        };

        let handle = TrapHandle(id);
        match outcome {
            RestoreOutcome::Restored(node) => {
                debug!(trap = ?id, node = ?node, "focus restored");
                self.events.push(TrapEvent::Restored { trap: handle, node });
            }
            RestoreOutcome::Skipped(reason) => {
                debug!(trap = ?id, reason = ?reason, "restore skipped");
                self.events.push(TrapEvent::RestoreSkipped {
                    trap: handle,
                    reason,
                });
            }
        }
    }

    /// Undo the `-1` tab index on a closed trap's container, unless another
    /// trap still covers the same container; that trap takes over the patch.
    fn release_container_patch(&mut self, dom: &mut Dom, closed: &Trap) {
        if let Some(sharer) = self
            .traps
            .values_mut()
            .find(|other| other.container == closed.container)
        {
            trace!(from = ?closed.id, to = ?sharer.id, "container patch handed over");
            sharer.container_patched = true;
            return;
        }
        if let Some(data) = dom.get_mut(closed.container) {
            if data.tab_index == Some(-1) {
                data.tab_index = None;
            }
        }
    }

    /// A trap closed beneath `above` passes its snapshot up when the upper
    /// trap's own snapshot points into the closing container or is unusable.
    fn hand_off_snapshot(&mut self, dom: &Dom, closing: &Trap, above: TrapId) {
        let Some(upper) = self.traps.get_mut(above) else {
            return;
        };
        let stale = upper.previous_focus.map_or(true, |node| {
            !is_focusable(dom, node) || dom.is_inclusive_descendant(node, closing.container)
        });
        if stale {
            trace!(from = ?closing.id, to = ?above, snapshot = ?closing.previous_focus, "snapshot handed off");
            upper.previous_focus = closing.previous_focus;
        }
    }

    // ── Keyboard ─────────────────────────────────────────────────────

    /// Offer a key to the top trap.
    ///
    /// Only an active trap on top of the stack reacts. A
    /// [`Consumed`](KeyDisposition::Consumed) key must not reach the host's
    /// default handling.
    pub fn handle_key(&mut self, dom: &mut Dom, event: &KeyEvent) -> KeyDisposition {
        let Some(id) = self.stack.top() else {
            return KeyDisposition::Ignored;
        };
        let Some(trap) = self.traps.get_mut(id) else {
            return KeyDisposition::Ignored;
        };
        let interception = self.interceptor.intercept(dom, trap, &mut self.focus, event);
        if interception == Interception::Cancel {
            self.deactivate(TrapHandle(id));
        }
        interception.disposition()
    }

    /// Offer any input event. Only key events can be consumed.
    pub fn handle_input(&mut self, dom: &mut Dom, event: &InputEvent) -> KeyDisposition {
        match event {
            InputEvent::Key(key) => self.handle_key(dom, key),
            _ => KeyDisposition::Ignored,
        }
    }

    // ── Introspection ────────────────────────────────────────────────

    /// The trap currently intercepting keys (or about to, once placed).
    pub fn top(&self) -> Option<TrapHandle> {
        self.stack.top().map(TrapHandle)
    }

    /// Whether any trap is on the stack.
    pub fn is_trapped(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Number of traps on the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether no trap is on the stack.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Lifecycle state of `handle`. Discarded traps report
    /// [`Closed`](TrapState::Closed).
    pub fn state(&self, handle: TrapHandle) -> TrapState {
        self.traps
            .get(handle.0)
            .map_or(TrapState::Closed, |trap| trap.state)
    }

    /// The trap record, while it has not been discarded.
    pub fn trap(&self, handle: TrapHandle) -> Option<&Trap> {
        self.traps.get(handle.0)
    }

    /// Live traps, bottom to top.
    pub fn traps(&self) -> impl Iterator<Item = &Trap> + '_ {
        self.stack.iter().filter_map(|id| self.traps.get(id))
    }

    /// The stack of live traps.
    pub fn stack(&self) -> &TrapStack {
        &self.stack
    }

    /// Number of placement or restoration tasks waiting for a turn.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// The focus owner the manager writes through.
    pub fn focus(&self) -> &F {
        &self.focus
    }

    /// Mutable access to the focus owner, for the host's own focus changes
    /// (mouse clicks, programmatic focus).
    pub fn focus_mut(&mut self) -> &mut F {
        &mut self.focus
    }

    /// Shorthand for `self.focus().focused()`.
    pub fn focused(&self) -> Option<NodeId> {
        self.focus.focused()
    }

    /// The key interceptor.
    pub fn interceptor(&self) -> &KeyboardInterceptor {
        &self.interceptor
    }

    /// Mutable access to the key interceptor, e.g. to rebind keys.
    pub fn interceptor_mut(&mut self) -> &mut KeyboardInterceptor {
        &mut self.interceptor
    }

    /// Take the lifecycle events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<TrapEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Parse an `initial_focus` locator. A broken locator degrades to the default
/// placement.
fn parse_initial_focus(source: &str) -> Option<SelectorList> {
    match parse_selector_list(source) {
        Ok(list) if !list.is_empty() => Some(list),
        Ok(_) => None,
        Err(err) => {
            warn!(selector = source, error = %err, "ignoring unparseable initial_focus");
            None
        }
    }
}

/// First choice for initial placement: the locator's first focusable match,
/// else the head of the tab order.
fn initial_target(dom: &Dom, trap: &Trap) -> Option<NodeId> {
    trap.initial_focus
        .as_ref()
        .and_then(|selectors| {
            dom.query_selector_all(trap.container, selectors)
                .into_iter()
                .find(|&node| is_focusable(dom, node))
        })
        .or_else(|| scan(dom, trap.container).first().copied())
}

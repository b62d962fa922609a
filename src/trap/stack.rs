//! LIFO ordering of live traps.

use super::model::TrapId;

/// Ordered stack of live traps, bottom first.
///
/// Only the top entry intercepts keys. Removal happens at the trap's current
/// position, so a lower overlay can close out of order.
#[derive(Debug, Clone, Default)]
pub struct TrapStack {
    order: Vec<TrapId>,
}

impl TrapStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a trap on top.
    pub fn push(&mut self, id: TrapId) {
        debug_assert!(!self.order.contains(&id), "trap pushed twice");
        self.order.push(id);
    }

    /// Remove `id` wherever it sits. Returns the position it held.
    ///
    /// After removal, the entry previously above it (if any) sits at the
    /// returned position.
    pub fn remove(&mut self, id: TrapId) -> Option<usize> {
        let pos = self.position(id)?;
        self.order.remove(pos);
        Some(pos)
    }

    /// The interception target: the most recently pushed live trap.
    pub fn top(&self) -> Option<TrapId> {
        self.order.last().copied()
    }

    /// Whether `id` is the current top.
    pub fn is_top(&self, id: TrapId) -> bool {
        self.top() == Some(id)
    }

    /// Trap at `pos`, counting from the bottom.
    pub fn get(&self, pos: usize) -> Option<TrapId> {
        self.order.get(pos).copied()
    }

    /// Position of `id`, counting from the bottom.
    pub fn position(&self, id: TrapId) -> Option<usize> {
        self.order.iter().position(|&t| t == id)
    }

    pub fn contains(&self, id: TrapId) -> bool {
        self.order.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = TrapId> + '_ {
        self.order.iter().copied()
    }
}

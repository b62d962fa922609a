//! A focus owner that remembers every write.

use crate::dom::node::NodeId;
use crate::focus::owner::FocusOwner;

/// [`FocusOwner`] double that logs each `set_focused` call, so tests can
/// assert how often the manager touched focus and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingFocus {
    current: Option<NodeId>,
    writes: Vec<Option<NodeId>>,
}

impl RecordingFocus {
    /// Create a recorder with nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that starts on `node`. The initial value is not
    /// counted as a write.
    pub fn with_focus(node: NodeId) -> Self {
        Self {
            current: Some(node),
            writes: Vec::new(),
        }
    }

    /// Every value written, oldest first.
    pub fn writes(&self) -> &[Option<NodeId>] {
        &self.writes
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Forget the history, keeping the current value.
    pub fn clear_history(&mut self) {
        self.writes.clear();
    }
}

impl FocusOwner for RecordingFocus {
    fn focused(&self) -> Option<NodeId> {
        self.current
    }

    fn set_focused(&mut self, node: Option<NodeId>) {
        self.writes.push(node);
        self.current = node;
    }
}

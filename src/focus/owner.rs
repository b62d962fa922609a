//! The single current focus owner.
//!
//! Every component reads and writes focus through [`FocusOwner`], never by
//! poking at host state directly. Hosts plug in their real focus state; tests
//! can substitute a recording double such as
//! [`RecordingFocus`](crate::testing::RecordingFocus).

use crate::dom::node::NodeId;

/// Accessor/mutator pair for the element currently holding input focus.
pub trait FocusOwner {
    /// The node holding focus, if any.
    fn focused(&self) -> Option<NodeId>;

    /// Move focus to `node`, or clear it with `None`.
    fn set_focused(&mut self, node: Option<NodeId>);
}

/// Plain in-memory focus owner: just remembers the last node focused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentFocus {
    current: Option<NodeId>,
}

impl DocumentFocus {
    /// Create a focus owner with nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a focus owner that starts on `node`.
    pub fn with_focus(node: NodeId) -> Self {
        Self {
            current: Some(node),
        }
    }
}

impl FocusOwner for DocumentFocus {
    fn focused(&self) -> Option<NodeId> {
        self.current
    }

    fn set_focused(&mut self, node: Option<NodeId>) {
        self.current = node;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeData;
    use crate::dom::tree::Dom;

    #[test]
    fn starts_unfocused() {
        assert!(DocumentFocus::new().focused().is_none());
    }

    #[test]
    fn set_and_clear() {
        let mut dom = Dom::new();
        let node = dom.insert(NodeData::new("Button"));

        let mut focus = DocumentFocus::new();
        focus.set_focused(Some(node));
        assert_eq!(focus.focused(), Some(node));

        focus.set_focused(None);
        assert!(focus.focused().is_none());
    }

    #[test]
    fn with_focus_constructor() {
        let mut dom = Dom::new();
        let node = dom.insert(NodeData::new("Button"));
        assert_eq!(DocumentFocus::with_focus(node).focused(), Some(node));
    }
}

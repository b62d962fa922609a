//! Focusable-element scanning.
//!
//! [`scan`] returns the tab order of a container's descendants. It is
//! recomputed on every call: callers must never hold on to a previous result
//! across DOM mutations.

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;

/// Collect the descendants of `container` that take part in Tab navigation.
///
/// Ordering follows the usual tab-index rules: nodes with a positive tab index
/// come first in ascending index order (ties keep document order), then every
/// node with no tab index or a zero tab index in document order.
///
/// Skipped entirely:
/// - nodes that are not focusable or carry a negative tab index
/// - disabled nodes
/// - hidden nodes together with their whole subtree
///
/// The container itself is never part of the sequence. A hidden, missing or
/// detached container yields an empty sequence.
pub fn scan(dom: &Dom, container: NodeId) -> Vec<NodeId> {
    if !dom.is_connected(container) || !dom.is_rendered(container) {
        return Vec::new();
    }

    let mut positive: Vec<(i32, NodeId)> = Vec::new();
    let mut natural = Vec::new();

    // Pre-order walk that prunes hidden subtrees.
    let mut stack: Vec<NodeId> = dom.children(container).iter().rev().copied().collect();
    while let Some(current) = stack.pop() {
        let Some(data) = dom.get(current) else {
            continue;
        };
        if !data.visible {
            continue;
        }
        if data.in_tab_order() {
            match data.tab_index {
                Some(idx) if idx > 0 => positive.push((idx, current)),
                _ => natural.push(current),
            }
        }
        stack.extend(dom.children(current).iter().rev());
    }

    // Stable sort: equal indices stay in document order.
    positive.sort_by_key(|&(idx, _)| idx);

    positive
        .into_iter()
        .map(|(_, id)| id)
        .chain(natural)
        .collect()
}

/// Whether `node` can receive focus at all, programmatically or by Tab.
///
/// The node must be connected to the document, rendered (no hidden
/// ancestor), enabled, and either natively focusable or carry a tab index.
pub fn is_focusable(dom: &Dom, node: NodeId) -> bool {
    dom.get(node).is_some_and(|data| data.accepts_focus())
        && dom.is_connected(node)
        && dom.is_rendered(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeData;
    use pretty_assertions::assert_eq;

    fn button(id: &str) -> NodeData {
        NodeData::new("Button").with_id(id).focusable(true)
    }

    /// Screen with a dialog container; returns (dom, dialog).
    fn dialog_dom() -> (Dom, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Screen"));
        let dialog = dom.insert_child(root, NodeData::new("Dialog"));
        (dom, dialog)
    }

    #[test]
    fn document_order() {
        let (mut dom, dialog) = dialog_dom();
        let save = dom.insert_child(dialog, button("save"));
        let row = dom.insert_child(dialog, NodeData::new("Row"));
        let cancel = dom.insert_child(row, button("cancel"));
        let close = dom.insert_child(dialog, button("close"));

        assert_eq!(scan(&dom, dialog), vec![save, cancel, close]);
    }

    #[test]
    fn skips_disabled_unfocusable_and_negative_tab_index() {
        let (mut dom, dialog) = dialog_dom();
        let a = dom.insert_child(dialog, button("a"));
        dom.insert_child(dialog, button("b").disabled(true));
        dom.insert_child(dialog, NodeData::new("Label"));
        dom.insert_child(dialog, button("c").with_tab_index(-1));
        let d = dom.insert_child(dialog, NodeData::new("Panel").with_tab_index(0));

        assert_eq!(scan(&dom, dialog), vec![a, d]);
    }

    #[test]
    fn hidden_subtree_is_pruned() {
        let (mut dom, dialog) = dialog_dom();
        let hidden = dom.insert_child(dialog, NodeData::new("Panel").visible(false));
        dom.insert_child(hidden, button("inner"));
        let outer = dom.insert_child(dialog, button("outer"));

        assert_eq!(scan(&dom, dialog), vec![outer]);
    }

    #[test]
    fn positive_tab_index_first() {
        let (mut dom, dialog) = dialog_dom();
        let plain = dom.insert_child(dialog, button("plain"));
        let second = dom.insert_child(dialog, button("second").with_tab_index(2));
        let first_a = dom.insert_child(dialog, button("first-a").with_tab_index(1));
        let first_b = dom.insert_child(dialog, button("first-b").with_tab_index(1));

        assert_eq!(scan(&dom, dialog), vec![first_a, first_b, second, plain]);
    }

    #[test]
    fn container_is_excluded() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Screen"));
        let dialog = dom.insert_child(root, NodeData::new("Dialog").with_tab_index(0));
        assert!(scan(&dom, dialog).is_empty());
    }

    #[test]
    fn hidden_or_detached_container_is_empty() {
        let (mut dom, dialog) = dialog_dom();
        dom.insert_child(dialog, button("a"));

        dom.get_mut(dialog).unwrap().visible = false;
        assert!(scan(&dom, dialog).is_empty());

        dom.get_mut(dialog).unwrap().visible = true;
        dom.detach(dialog);
        assert!(scan(&dom, dialog).is_empty());
    }

    #[test]
    fn rescan_reflects_mutations() {
        let (mut dom, dialog) = dialog_dom();
        let a = dom.insert_child(dialog, button("a"));
        assert_eq!(scan(&dom, dialog), vec![a]);

        let b = dom.insert_child(dialog, button("b"));
        dom.get_mut(a).unwrap().disabled = true;
        assert_eq!(scan(&dom, dialog), vec![b]);
    }

    #[test]
    fn is_focusable_rules() {
        let (mut dom, dialog) = dialog_dom();
        let a = dom.insert_child(dialog, button("a"));
        let programmatic = dom.insert_child(dialog, NodeData::new("Panel").with_tab_index(-1));
        let label = dom.insert_child(dialog, NodeData::new("Label"));

        assert!(is_focusable(&dom, a));
        assert!(is_focusable(&dom, programmatic));
        assert!(!is_focusable(&dom, label));

        dom.get_mut(dialog).unwrap().visible = false;
        assert!(!is_focusable(&dom, a));
        dom.get_mut(dialog).unwrap().visible = true;

        dom.remove(a);
        assert!(!is_focusable(&dom, a));
    }
}

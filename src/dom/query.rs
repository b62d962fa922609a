//! DOM queries: id lookup and scoped selector matching.

use super::node::NodeId;
use super::tree::Dom;
use crate::selector::SelectorList;

impl Dom {
    /// Find the first node whose `id` field matches the given string.
    ///
    /// Iterates all nodes in the arena, attached or not.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// All descendants of `scope` matching `selectors`, in document order.
    ///
    /// `scope` itself is never part of the result.
    pub fn query_selector_all(&self, scope: NodeId, selectors: &SelectorList) -> Vec<NodeId> {
        self.walk_depth_first(scope)
            .into_iter()
            .skip(1)
            .filter(|&node| selectors.matches(node, self))
            .collect()
    }

    /// The first descendant of `scope` matching `selectors`, in document order.
    pub fn query_selector(&self, scope: NodeId, selectors: &SelectorList) -> Option<NodeId> {
        self.query_selector_all(scope, selectors).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::node::NodeData;
    use crate::dom::tree::Dom;
    use crate::selector::parse_selector_list;

    /// ```text
    ///       root (Screen)
    ///      /    \
    ///   open     dialog (Dialog #confirm)
    ///  (Button    /    \
    ///   #open)  save   cancel
    ///          (Button (Button
    ///           #save)  #cancel)
    /// ```
    fn build_query_tree() -> Dom {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Screen"));
        dom.insert_child(root, NodeData::new("Button").with_id("open"));
        let dialog = dom.insert_child(root, NodeData::new("Dialog").with_id("confirm"));
        dom.insert_child(dialog, NodeData::new("Button").with_id("save"));
        dom.insert_child(dialog, NodeData::new("Button").with_id("cancel"));
        dom
    }

    #[test]
    fn query_by_id_found_and_missing() {
        let dom = build_query_tree();
        let id = dom.query_by_id("confirm").unwrap();
        assert_eq!(dom.get(id).unwrap().widget_type, "Dialog");
        assert!(dom.query_by_id("nonexistent").is_none());
    }

    #[test]
    fn query_selector_all_is_scoped_and_ordered() {
        let dom = build_query_tree();
        let dialog = dom.query_by_id("confirm").unwrap();
        let buttons = parse_selector_list("Button").unwrap();

        let found = dom.query_selector_all(dialog, &buttons);
        assert_eq!(
            found,
            vec![
                dom.query_by_id("save").unwrap(),
                dom.query_by_id("cancel").unwrap(),
            ]
        );
    }

    #[test]
    fn query_selector_excludes_scope() {
        let dom = build_query_tree();
        let dialog = dom.query_by_id("confirm").unwrap();
        let selectors = parse_selector_list("Dialog").unwrap();
        assert!(dom.query_selector(dialog, &selectors).is_none());
    }

    #[test]
    fn query_selector_outside_scope_is_none() {
        let dom = build_query_tree();
        let dialog = dom.query_by_id("confirm").unwrap();
        let selectors = parse_selector_list("#open").unwrap();
        assert!(dom.query_selector(dialog, &selectors).is_none());
    }

    #[test]
    fn query_on_empty_dom() {
        let dom = Dom::new();
        assert!(dom.query_by_id("x").is_none());
    }
}

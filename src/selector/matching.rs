//! Selector matching against the DOM.

use crate::dom::node::{NodeData, NodeId};
use crate::dom::tree::Dom;
use crate::selector::model::{
    Combinator, CompoundSelector, Selector, SelectorComponent, SelectorList, SelectorPart,
};

impl SelectorList {
    /// Whether any selector in the list matches `node_id`.
    pub fn matches(&self, node_id: NodeId, dom: &Dom) -> bool {
        self.selectors
            .iter()
            .any(|selector| matches_selector(selector, node_id, dom))
    }
}

/// Check whether a full selector matches a given node.
///
/// Walks the selector parts from right to left, matching compound selectors
/// and navigating the DOM tree via combinators. Ancestors outside any query
/// scope still take part, as with `querySelector` on an element.
pub fn matches_selector(selector: &Selector, node_id: NodeId, dom: &Dom) -> bool {
    let mut parts = selector.parts.iter().rev();

    match parts.next() {
        Some(SelectorPart::Compound(compound)) => {
            if !dom.get(node_id).is_some_and(|node| matches_compound(compound, node)) {
                return false;
            }
        }
        _ => return false,
    }

    let mut current_node = node_id;

    loop {
        let combinator = match parts.next() {
            None => return true,
            Some(SelectorPart::Combinator(c)) => *c,
            Some(SelectorPart::Compound(_)) => return false,
        };
        let compound = match parts.next() {
            Some(SelectorPart::Compound(c)) => c,
            // Combinator without a preceding compound.
            _ => return false,
        };

        let found = match combinator {
            Combinator::Child => dom
                .parent(current_node)
                .filter(|&p| dom.get(p).is_some_and(|n| matches_compound(compound, n))),
            Combinator::Descendant => dom.ancestors(current_node).into_iter().find(|&a| {
                dom.get(a).is_some_and(|n| matches_compound(compound, n))
            }),
        };

        match found {
            Some(next) => current_node = next,
            None => return false,
        }
    }
}

/// Check whether a compound selector matches a single node's data.
fn matches_compound(compound: &CompoundSelector, node: &NodeData) -> bool {
    compound.components.iter().all(|component| match component {
        SelectorComponent::Type(name) => node.widget_type == *name,
        SelectorComponent::Class(name) => node.has_class(name),
        SelectorComponent::Id(name) => node.id.as_deref() == Some(name.as_str()),
        SelectorComponent::Universal => true,
        SelectorComponent::PseudoClass(name) => match name.as_str() {
            "enabled" => !node.disabled,
            "disabled" => node.disabled,
            _ => false,
        },
    })
}

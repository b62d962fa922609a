//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a DOM node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single DOM node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Widget type name (e.g. "Button", "Dialog").
    pub widget_type: String,
    /// Optional unique id (`#id` selector).
    pub id: Option<String>,
    /// Classes (for `.class` selector).
    pub classes: Vec<String>,
    /// Whether this node is visible. A hidden node hides its whole subtree.
    pub visible: bool,
    /// Whether this node is natively focusable (buttons, inputs, links).
    pub focusable: bool,
    /// Whether this node is disabled.
    pub disabled: bool,
    /// Explicit tab-order override.
    ///
    /// `None` keeps the natural order. A negative value makes the node
    /// focusable programmatically but removes it from tab order; a positive
    /// value moves it ahead of every node in natural order.
    pub tab_index: Option<i32>,
}

impl NodeData {
    /// Create a new `NodeData` with the given widget type and sensible defaults.
    pub fn new(widget_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            id: None,
            classes: Vec::new(),
            visible: true,
            focusable: false,
            disabled: false,
            tab_index: None,
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set whether this node can receive focus (builder).
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Set whether this node is disabled (builder).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether this node is visible (builder).
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set an explicit tab index (builder).
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Check whether this node has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Whether the node accepts focus on its own, ignoring ancestors.
    ///
    /// Any explicit tab index, including a negative one, makes a node
    /// focusable.
    pub fn accepts_focus(&self) -> bool {
        (self.focusable || self.tab_index.is_some()) && self.visible && !self.disabled
    }

    /// Whether the node takes part in sequential (Tab) navigation.
    pub fn in_tab_order(&self) -> bool {
        self.accepts_focus() && self.tab_index.map_or(true, |idx| idx >= 0)
    }

    /// Short human-readable label: `Type#id`, or just `Type`.
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => format!("{}#{}", self.widget_type, id),
            None => self.widget_type.clone(),
        }
    }
}

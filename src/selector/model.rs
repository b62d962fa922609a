//! Selector AST: SelectorComponent, CompoundSelector, Selector, SelectorList.

/// A single selector component.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorComponent {
    /// Type selector: matches widget type name (e.g. `Button`).
    Type(String),
    /// Universal selector: `*`.
    Universal,
    /// Class selector: `.classname`.
    Class(String),
    /// ID selector: `#id`.
    Id(String),
    /// Pseudo-class: `:enabled`, `:disabled`.
    PseudoClass(String),
}

/// A combinator between compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (whitespace): `A B`.
    Descendant,
    /// Child combinator: `A > B`.
    Child,
}

/// A sequence of components without combinators, e.g. `Button.primary`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundSelector {
    pub components: Vec<SelectorComponent>,
}

impl CompoundSelector {
    /// Create an empty compound selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component to this compound selector.
    pub fn push(&mut self, component: SelectorComponent) {
        self.components.push(component);
    }
}

/// One element in a selector chain: either a compound selector or a combinator.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorPart {
    Compound(CompoundSelector),
    Combinator(Combinator),
}

/// A full selector: compound selectors joined by combinators.
///
/// `Dialog > Button.primary` has parts
/// `[Compound(Dialog), Combinator(Child), Compound(Button.primary)]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    /// Alternating compound selectors and combinators.
    /// Always starts and ends with a `SelectorPart::Compound`.
    pub parts: Vec<SelectorPart>,
}

/// Comma-separated selector group. Matches when any member matches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectorList {
    pub selectors: Vec<Selector>,
}

impl SelectorList {
    /// Whether the list holds no selectors.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

//! Element locators: a small CSS-selector dialect for picking trap targets.
//!
//! Supports type (`Button`), class (`.primary`), id (`#save`), universal
//! (`*`) and the `:enabled` / `:disabled` pseudo-classes, combined with the
//! descendant (whitespace) and child (`>`) combinators. Comma-separated lists
//! match if any member matches.

pub mod matching;
pub mod model;
pub mod parser;
pub mod tokenizer;

pub use model::{Combinator, CompoundSelector, Selector, SelectorComponent, SelectorList, SelectorPart};
pub use parser::{parse_selector_list, ParseError};

//! Focus primitives: the page-wide focus owner, the focusable-element scanner
//! and snapshot/restore of the previous owner.

pub mod owner;
pub mod restorer;
pub mod scanner;

pub use owner::{DocumentFocus, FocusOwner};
pub use restorer::{RestoreOutcome, SkipReason};

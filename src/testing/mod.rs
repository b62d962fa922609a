//! Headless testing helpers: Pilot, a recording focus owner, stack dumps.
//!
//! Use the [`Pilot`] to drive a [`Dom`](crate::dom::Dom) and a
//! [`TrapManager`](crate::trap::TrapManager) without a terminal. Use
//! [`stack_to_string`] to capture the trap stack as plain text for
//! snapshot-style assertions.

pub mod pilot;
pub mod recording;
pub mod snapshot;

pub use pilot::Pilot;
pub use recording::RecordingFocus;
pub use snapshot::stack_to_string;

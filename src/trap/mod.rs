//! Focus traps: the per-activation state machine, the LIFO stack of live
//! traps, keyboard interception and the manager that sequences them.

pub mod event;
pub mod interceptor;
pub mod manager;
pub mod model;
pub mod options;
pub mod stack;

pub use event::TrapEvent;
pub use interceptor::{Direction, KeyDisposition, KeyboardInterceptor};
pub use manager::TrapManager;
pub use model::{Trap, TrapHandle, TrapId, TrapState};
pub use options::TrapOptions;
pub use stack::TrapStack;

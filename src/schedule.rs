//! Next-turn scheduling with cancellation tokens.
//!
//! [`Scheduler`] replaces ad-hoc zero-delay timers with an explicit queue the
//! host drains once per event-loop turn. A task scheduled while a turn is
//! being processed always lands on the following turn, which keeps ordering
//! deterministic and testable.

use std::collections::VecDeque;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled task, used to cancel it before it runs.
    pub struct TaskToken;
}

/// FIFO queue of deferred tasks.
#[derive(Debug)]
pub struct Scheduler<T> {
    tasks: SlotMap<TaskToken, T>,
    order: VecDeque<TaskToken>,
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            order: VecDeque::new(),
        }
    }

    /// Queue `task` to run on the next turn.
    pub fn run_next_turn(&mut self, task: T) -> TaskToken {
        let token = self.tasks.insert(task);
        self.order.push_back(token);
        token
    }

    /// Cancel a queued task. Returns the task if it had not run yet.
    pub fn cancel(&mut self, token: TaskToken) -> Option<T> {
        self.tasks.remove(token)
    }

    /// Whether `token` is still waiting to run.
    pub fn is_pending(&self, token: TaskToken) -> bool {
        self.tasks.contains_key(token)
    }

    /// Take every live task queued before this call, in scheduling order.
    ///
    /// Cancelled tasks are dropped. Tasks queued after this returns wait for
    /// the next call.
    pub fn take_turn(&mut self) -> Vec<T> {
        let due: Vec<TaskToken> = self.order.drain(..).collect();
        due.into_iter()
            .filter_map(|token| self.tasks.remove(token))
            .collect()
    }

    /// Number of live tasks waiting to run.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no live task is waiting.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

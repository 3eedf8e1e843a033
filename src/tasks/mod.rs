//! Deferred setup queue.
//!
//! Sequences actions that must wait for a readiness signal from the host
//! (typically: the window and its render surface exist). Actions receive
//! exclusive access to a context value of the caller's choosing, run in
//! FIFO order, and anything queued after the queue has drained runs
//! immediately.

use std::collections::VecDeque;

type Action<C> = Box<dyn FnOnce(&mut C)>;

/// FIFO buffer of one-shot setup actions over a context `C`.
pub struct ReadyQueue<C> {
    actions: VecDeque<Action<C>>,
    drained: bool,
    paused: bool,
}

impl<C> Default for ReadyQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ReadyQueue<C> {
    /// Create an empty, un-drained queue.
    pub fn new() -> Self {
        Self {
            actions: VecDeque::new(),
            drained: false,
            paused: false,
        }
    }

    /// Queue an action, or run it immediately if the queue has already
    /// drained.
    pub fn queue<F>(&mut self, ctx: &mut C, action: F) -> &mut Self
    where
        F: FnOnce(&mut C) + 'static,
    {
        if self.drained {
            action(ctx);
        } else {
            self.actions.push_back(Box::new(action));
        }
        self
    }

    /// Drain queued actions in FIFO order, respecting the pause flag. Once
    /// the buffer empties the queue counts as drained and later `queue`
    /// calls run their action on the spot.
    pub fn execute(&mut self, ctx: &mut C) {
        while !self.paused {
            match self.actions.pop_front() {
                Some(action) => action(ctx),
                None => {
                    self.drained = true;
                    break;
                }
            }
        }
    }

    /// Stop draining. Queued actions stay queued until [`resume`].
    ///
    /// [`resume`]: ReadyQueue::resume
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue draining if paused.
    pub fn resume(&mut self, ctx: &mut C) {
        if self.paused {
            self.paused = false;
            self.execute(ctx);
        }
    }

    /// Whether the queue has finished draining at least once.
    pub fn is_drained(&self) -> bool {
        self.drained
    }

    /// Number of actions still waiting.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no actions are waiting.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_drains_in_fifo_order() {
        let mut queue = ReadyQueue::new();
        let mut seen: Vec<&str> = Vec::new();

        queue.queue(&mut seen, |s| s.push("first"));
        queue.queue(&mut seen, |s| s.push("second"));
        assert!(seen.is_empty());

        queue.execute(&mut seen);

        assert_eq!(seen, vec!["first", "second"]);
        assert!(queue.is_drained());
    }

    #[test]
    fn test_queue_after_drain_runs_immediately() {
        let mut queue = ReadyQueue::new();
        let mut seen: Vec<&str> = Vec::new();

        queue.execute(&mut seen);
        queue.queue(&mut seen, |s| s.push("late"));

        assert_eq!(seen, vec!["late"]);
    }

    #[test]
    fn test_pause_holds_the_buffer() {
        let mut queue = ReadyQueue::new();
        let mut seen: Vec<&str> = Vec::new();

        queue.queue(&mut seen, |s| s.push("held"));
        queue.pause();
        queue.execute(&mut seen);

        assert!(seen.is_empty());
        assert!(!queue.is_drained());
        assert_eq!(queue.len(), 1);

        queue.resume(&mut seen);
        assert_eq!(seen, vec!["held"]);
        assert!(queue.is_drained());
    }

    #[test]
    fn test_resume_without_pause_is_a_no_op() {
        let mut queue = ReadyQueue::new();
        let mut seen: Vec<&str> = Vec::new();

        queue.queue(&mut seen, |s| s.push("waiting"));
        queue.resume(&mut seen);

        // Still queued: resume only continues a paused drain.
        assert!(seen.is_empty());
        assert_eq!(queue.len(), 1);
    }
}

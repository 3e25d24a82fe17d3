//! Single-threaded store of cancellable delayed tasks

use std::collections::{BTreeMap, HashMap};

use tokio::time::Instant;
use tracing::trace;

/// Handle returned by [`Scheduler::schedule`], used to cancel the task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

/// Delayed one-shot tasks ordered by deadline.
///
/// Tasks sharing a deadline run in the order they were scheduled. Recurring
/// behaviour is expressed by a task scheduling its successor when it runs.
#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BTreeMap<(Instant, u64), T>,
    pending: HashMap<u64, Instant>,
    next_id: u64,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            pending: HashMap::new(),
            next_id: 0,
        }
    }

    /// Schedule `task` to become due at `at`
    pub fn schedule(&mut self, at: Instant, task: T) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.insert((at, id), task);
        self.pending.insert(id, at);
        trace!("Scheduled task {}", id);
        TaskHandle(id)
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.pending.remove(&handle.0) {
            Some(at) => {
                self.queue.remove(&(at, handle.0));
                trace!("Cancelled task {}", handle.0);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.contains_key(&handle.0)
    }

    /// Deadline of the earliest pending task
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Remove and return the earliest task if it is due at `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<(TaskHandle, T)> {
        let key = *self.queue.keys().next()?;
        if key.0 > now {
            return None;
        }
        let task = self.queue.remove(&key)?;
        self.pending.remove(&key.1);
        Some((TaskHandle(key.1), task))
    }

    /// Remove every task due at `now`, earliest first.
    ///
    /// Tasks scheduled while the returned batch is being handled are left for
    /// the next call, even if they are already due.
    pub fn drain_due(&mut self, now: Instant) -> Vec<(TaskHandle, T)> {
        let mut due = Vec::new();
        while let Some(entry) = self.pop_due(now) {
            due.push(entry);
        }
        due
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.pending.clear();
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn ms(m: u64) -> Duration {
        Duration::from_millis(m)
    }

    #[test]
    fn due_tasks_pop_in_deadline_order() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0 + ms(300), "c");
        scheduler.schedule(t0 + ms(100), "a");
        scheduler.schedule(t0 + ms(200), "b");

        assert_eq!(scheduler.next_deadline(), Some(t0 + ms(100)));
        let due: Vec<_> = scheduler
            .drain_due(t0 + ms(250))
            .into_iter()
            .map(|(_, task)| task)
            .collect();
        assert_eq!(due, vec!["a", "b"]);
        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.pop_due(t0 + ms(299)).is_none());
    }

    #[test]
    fn ties_keep_insertion_order() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0, 1);
        scheduler.schedule(t0, 2);
        scheduler.schedule(t0, 3);

        let due: Vec<_> = scheduler.drain_due(t0).into_iter().map(|(_, t)| t).collect();
        assert_eq!(due, vec![1, 2, 3]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn cancelled_tasks_never_pop() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let stale = scheduler.schedule(t0 + ms(10), "stale");
        let fresh = scheduler.schedule(t0 + ms(20), "fresh");

        assert!(scheduler.cancel(stale));
        assert!(!scheduler.is_pending(stale));
        assert!(scheduler.is_pending(fresh));
        assert_eq!(scheduler.next_deadline(), Some(t0 + ms(20)));

        let due = scheduler.drain_due(t0 + ms(50));
        assert_eq!(due, vec![(fresh, "fresh")]);
    }

    #[test]
    fn cancel_after_run_is_a_noop() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(t0, ());
        assert!(scheduler.pop_due(t0).is_some());
        assert!(!scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
    }

    #[test]
    fn clear_drops_everything() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(t0, ());
        scheduler.schedule(t0 + ms(5), ());
        scheduler.clear();
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.next_deadline(), None);
        assert!(!scheduler.cancel(handle));
    }
}

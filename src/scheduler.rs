//! One-shot deferred actions over a virtual clock.
//!
//! The host environment is single-threaded and cooperative: nothing runs
//! until the clock is advanced, and a queued task fires exactly once or never
//! (the queue is dropped with the scheduler on page teardown).

use crate::dom::Dom;
use crate::error::{Error, Result};

pub type TimerId = i64;

type TimerCallback = Box<dyn FnOnce(&mut Dom)>;

struct ScheduledTask {
    id: TimerId,
    due_at: i64,
    order: u64,
    callback: TimerCallback,
}

#[derive(Default)]
pub struct Scheduler {
    now_ms: i64,
    next_id: TimerId,
    next_order: u64,
    queue: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queue a one-shot task. Negative delays clamp to zero.
    pub fn set_timeout(
        &mut self,
        delay_ms: i64,
        callback: impl FnOnce(&mut Dom) + 'static,
    ) -> TimerId {
        let due_at = self.now_ms.saturating_add(delay_ms.max(0));
        self.next_id += 1;
        let id = self.next_id;
        let order = self.next_order;
        self.next_order += 1;
        self.queue.push(ScheduledTask {
            id,
            due_at,
            order,
            callback: Box::new(callback),
        });
        log::debug!("timer scheduled: id={id} due_at={due_at}");
        id
    }

    /// Drop a queued task. Returns whether the id was still pending.
    pub fn clear(&mut self, timer_id: TimerId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|task| task.id != timer_id);
        before != self.queue.len()
    }

    /// Advance the clock and run every task due by the new instant, in
    /// `(due_at, insertion order)` order. Returns the number of tasks run.
    pub(crate) fn advance(&mut self, delta_ms: i64, dom: &mut Dom) -> Result<usize> {
        if delta_ms < 0 {
            return Err(Error::InvalidArgument {
                message: format!("advance_time requires non-negative milliseconds, got {delta_ms}"),
            });
        }
        self.now_ms = self.now_ms.saturating_add(delta_ms);
        Ok(self.run_due(dom))
    }

    fn run_due(&mut self, dom: &mut Dom) -> usize {
        let mut ran = 0;
        while let Some(idx) = self.next_due_index() {
            let task = self.queue.swap_remove(idx);
            log::debug!("timer fired: id={} due_at={}", task.id, task.due_at);
            (task.callback)(dom);
            ran += 1;
        }
        ran
    }

    fn next_due_index(&self) -> Option<usize> {
        self.queue
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_at <= self.now_ms)
            .min_by_key(|(_, task)| (task.due_at, task.order))
            .map(|(idx, _)| idx)
    }
}

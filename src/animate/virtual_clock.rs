use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{Scheduler, Task};

struct Entry {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    queue: Vec<Entry>,
}

/// Deterministic scheduler for tests. Time only moves when `advance` is called.
#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Arc<Mutex<ClockState>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.lock().unwrap().now
    }

    pub fn pending(&self) -> usize {
        self.state.lock().unwrap().queue.len()
    }

    /// Run every task due within `by`, in due order (ties in schedule order).
    /// Tasks run without the clock locked so they can schedule more work.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut state = self.state.lock().unwrap();
                let found = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(_, e)| (e.due, e.id))
                    .map(|(i, _)| i);
                found.map(|i| {
                    let entry = state.queue.remove(i);
                    state.now = entry.due;
                    entry.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.lock().unwrap().now = target;
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Scheduler for VirtualClock {
    type Handle = u64;

    fn schedule(&self, delay: Duration, task: Task) -> u64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.queue.push(Entry { id, due, task });
        id
    }

    fn cancel(&self, handle: u64) {
        self.state.lock().unwrap().queue.retain(|e| e.id != handle);
    }
}

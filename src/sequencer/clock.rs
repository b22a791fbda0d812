use super::Sequencer;
use std::collections::{BTreeSet, HashMap};
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

/// Timers with equal deadlines fire in the order they were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    queue: BTreeSet<(Duration, u64)>,
    deadlines: HashMap<u64, Duration>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn pop_due(&mut self) -> Option<(Duration, TimerHandle)> {
        let (deadline, id) = self.queue.pop_first()?;
        self.deadlines.remove(&id);
        self.now = deadline;
        Some((deadline, TimerHandle(id)))
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let deadline = self.now + delay;
        self.queue.insert((deadline, id));
        self.deadlines.insert(id, deadline);
        trace!(id, deadline_ms = deadline.as_millis() as u64, "timer scheduled");
        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.queue.remove(&(deadline, handle.0)),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Virtual,
    Realtime,
}

/// Returns the number of timers delivered.
pub fn run_until_idle(
    sequencer: &mut Sequencer<'_>,
    queue: &mut TimerQueue,
    pace: Pace,
) -> usize {
    let mut delivered = 0;
    while sequencer.is_active() {
        let before = queue.now();
        let Some((deadline, handle)) = queue.pop_due() else {
            break;
        };
        if pace == Pace::Realtime {
            std::thread::sleep(deadline.saturating_sub(before));
        }
        sequencer.fire(handle, queue);
        trace!(
            phase = sequencer.phase_label(),
            pending = queue.pending(),
            "timer delivered"
        );
        delivered += 1;
    }
    delivered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_deadline_then_schedule_order() {
        let mut queue = TimerQueue::new();
        let late = queue.schedule(Duration::from_millis(300));
        let first = queue.schedule(Duration::from_millis(100));
        let second = queue.schedule(Duration::from_millis(100));

        assert_eq!(queue.pop_due(), Some((Duration::from_millis(100), first)));
        assert_eq!(queue.pop_due(), Some((Duration::from_millis(100), second)));
        assert_eq!(queue.pop_due(), Some((Duration::from_millis(300), late)));
        assert_eq!(queue.pop_due(), None);
        assert_eq!(queue.now(), Duration::from_millis(300));
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::from_millis(200));
        queue.pop_due();
        let next = queue.schedule(Duration::from_millis(200));
        assert_eq!(queue.pop_due(), Some((Duration::from_millis(400), next)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(Duration::from_millis(50));
        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
        assert_eq!(queue.pending(), 0);
        assert_eq!(queue.pop_due(), None);
    }
}

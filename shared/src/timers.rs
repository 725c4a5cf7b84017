/// Identifies a scheduled timer so it can be cancelled later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Deferred work for single-threaded components.
///
/// Components never block: they ask for an event to be delivered back to
/// them after a delay (or every period) and react when it arrives. The
/// browser drives this with gloo timers, tests drive it with
/// [`VirtualTimers`].
pub trait Timers<E: Clone> {
    /// Deliver `event` once, `delay_ms` from now.
    fn after(&mut self, delay_ms: u32, event: E) -> TimerId;

    /// Deliver `event` every `period_ms` until cancelled.
    fn every(&mut self, period_ms: u32, event: E) -> TimerId;

    /// Cancel a pending timer. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Clone)]
struct Scheduled<E> {
    id: TimerId,
    due_ms: u64,
    period_ms: Option<u32>,
    event: E,
}

/// A virtual clock with a timer queue.
///
/// Events come out ordered by due time, then by the order they were
/// scheduled in, which is the ordering a browser event loop gives timers
/// with equal deadlines.
#[derive(Debug, Clone)]
pub struct VirtualTimers<E> {
    now_ms: u64,
    next_id: u64,
    queue: Vec<Scheduled<E>>,
    cancellations: u32,
}

impl<E: Clone> Default for VirtualTimers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> VirtualTimers<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            queue: Vec::new(),
            cancellations: 0,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of successful `cancel` calls so far.
    pub fn cancellations(&self) -> u32 {
        self.cancellations
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.queue.iter().any(|s| s.id == id)
    }

    /// Pops the next event due at or before `until_ms` and moves the clock
    /// to its deadline. Periodic timers are re-armed.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<E> {
        let position = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= until_ms)
            .min_by_key(|(_, s)| (s.due_ms, s.id))
            .map(|(i, _)| i)?;

        let due_ms = self.queue[position].due_ms;
        self.now_ms = self.now_ms.max(due_ms);

        match self.queue[position].period_ms {
            Some(period) => {
                let entry = &mut self.queue[position];
                entry.due_ms += u64::from(period.max(1));
                Some(entry.event.clone())
            }
            None => Some(self.queue.remove(position).event),
        }
    }

    /// Delivers every event due up to `until_ms` to `handler`, then leaves
    /// the clock at `until_ms`. The handler may schedule or cancel timers;
    /// anything it schedules inside the window fires in the same run.
    pub fn run_until<F>(&mut self, until_ms: u64, mut handler: F)
    where
        F: FnMut(E, &mut Self),
    {
        while let Some(event) = self.pop_due(until_ms) {
            handler(event, self);
        }
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Same as [`run_until`](Self::run_until) with a deadline relative to now.
    pub fn advance<F>(&mut self, by_ms: u64, handler: F)
    where
        F: FnMut(E, &mut Self),
    {
        let until = self.now_ms + by_ms;
        self.run_until(until, handler);
    }

    fn push(&mut self, delay_ms: u32, period_ms: Option<u32>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.push(Scheduled {
            id,
            due_ms: self.now_ms + u64::from(delay_ms),
            period_ms,
            event,
        });
        id
    }
}

impl<E: Clone> Timers<E> for VirtualTimers<E> {
    fn after(&mut self, delay_ms: u32, event: E) -> TimerId {
        self.push(delay_ms, None, event)
    }

    fn every(&mut self, period_ms: u32, event: E) -> TimerId {
        self.push(period_ms, Some(period_ms), event)
    }

    fn cancel(&mut self, id: TimerId) {
        let before = self.queue.len();
        self.queue.retain(|s| s.id != id);
        if self.queue.len() != before {
            self.cancellations += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_fire_in_deadline_then_schedule_order() {
        let mut timers = VirtualTimers::new();
        timers.after(300, "late");
        timers.after(100, "first");
        timers.after(100, "second");

        let mut seen = Vec::new();
        timers.run_until(1000, |event, _| seen.push(event));
        assert_eq!(seen, vec!["first", "second", "late"]);
        assert_eq!(timers.now_ms(), 1000);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_interval_rearms_until_cancelled() {
        let mut timers = VirtualTimers::new();
        let id = timers.every(1000, ());

        let mut ticks = 0;
        timers.run_until(3500, |_, _| ticks += 1);
        assert_eq!(ticks, 3);

        timers.cancel(id);
        timers.cancel(id);
        assert_eq!(timers.cancellations(), 1);

        timers.run_until(10_000, |_, _| ticks += 1);
        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_handler_can_schedule_follow_ups() {
        let mut timers = VirtualTimers::new();
        timers.after(100, 1u32);

        let mut seen = Vec::new();
        timers.run_until(500, |event, t| {
            seen.push((event, t.now_ms()));
            if event < 3 {
                t.after(100, event + 1);
            }
        });
        assert_eq!(seen, vec![(1, 100), (2, 200), (3, 300)]);
    }

    #[test]
    fn test_events_past_deadline_stay_queued() {
        let mut timers = VirtualTimers::new();
        let id = timers.after(2000, ());
        timers.advance(1999, |_, _| panic!("fired early"));
        assert!(timers.is_scheduled(id));

        let mut fired = false;
        timers.advance(1, |_, _| fired = true);
        assert!(fired);
        assert!(!timers.is_scheduled(id));
    }
}

// core/schedule.rs
//
// Deferred one-shot actions keyed by simulation time.
// Replaces host timers: entries are checked once per tick, never re-entrantly.
//
// Usage:
//   let mut schedule = Schedule::new();
//   schedule.after(100, Action::EndDash(id));
//   for action in schedule.advance(elapsed_ms) { ... }

/// A pending action and the simulation time it becomes due.
#[derive(Debug, Clone, PartialEq)]
struct Scheduled<A> {
    deadline_ms: u64,
    seq: u64,
    action: A,
}

/// Ordered list of `(deadline, action)` entries.
#[derive(Debug, Clone)]
pub struct Schedule<A> {
    now_ms: u64,
    next_seq: u64,
    entries: Vec<Scheduled<A>>,
}

impl<A> Schedule<A> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            entries: Vec::new(),
        }
    }

    /// Current simulation time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `action` to fire `delay_ms` after the current time.
    pub fn after(&mut self, delay_ms: u32, action: A) {
        let entry = Scheduled {
            deadline_ms: self.now_ms + delay_ms as u64,
            seq: self.next_seq,
            action,
        };
        self.next_seq += 1;
        self.entries.push(entry);
    }

    /// Advance time and return every action that became due,
    /// ordered by deadline, then by scheduling order.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<A> {
        self.now_ms += elapsed_ms as u64;
        let now = self.now_ms;

        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| e.deadline_ms <= now);
        self.entries = pending;

        due.sort_by_key(|e| (e.deadline_ms, e.seq));
        due.into_iter().map(|e| e.action).collect()
    }

    /// Drop every pending entry matching the predicate.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&A) -> bool) {
        self.entries.retain(|e| !pred(&e.action));
    }

    /// Drop all pending entries. Time keeps running.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A> Default for Schedule<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_when_deadline_reached() {
        let mut s = Schedule::new();
        s.after(100, "dash");
        assert!(s.advance(99).is_empty());
        assert_eq!(s.advance(1), vec!["dash"]);
        assert!(s.is_empty());
    }

    #[test]
    fn due_actions_come_out_in_deadline_order() {
        let mut s = Schedule::new();
        s.after(30, "late");
        s.after(10, "early");
        s.after(10, "early-second");
        assert_eq!(s.advance(50), vec!["early", "early-second", "late"]);
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let mut s = Schedule::new();
        s.advance(1000);
        s.after(5, 1);
        assert!(s.advance(4).is_empty());
        assert_eq!(s.advance(1), vec![1]);
    }

    #[test]
    fn cancel_removes_matching_entries() {
        let mut s = Schedule::new();
        s.after(10, 1);
        s.after(10, 2);
        s.cancel_where(|a| *a == 1);
        assert_eq!(s.advance(10), vec![2]);
    }
}

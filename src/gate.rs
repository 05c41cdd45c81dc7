// StrideSense — Stability Gate
//
// Debounces the instantaneous classification stream: a new activity level is
// committed only once the entire history buffer agrees on it. At 100 Hz with
// the default 70-deep buffer that is a ~0.7 s worst-case commit latency.

use crate::events::ActivityLevel;

pub struct StabilityGate {
    history: Vec<ActivityLevel>,
    cap: usize,
    head: usize,
    committed: ActivityLevel,
}

impl StabilityGate {
    pub fn new(capacity: usize, initial: ActivityLevel) -> Self {
        // A zero-capacity ring would index an empty Vec in `observe`.
        debug_assert!(capacity > 0, "stability gate capacity must be nonzero");
        Self {
            history: Vec::with_capacity(capacity),
            cap: capacity,
            head: 0,
            committed: initial,
        }
    }

    /// Record one instantaneous classification.
    ///
    /// Returns `true` only when this observation commits a level change:
    /// the history is at full capacity, every entry equals `instant`, and
    /// `instant` differs from the current committed level.
    pub fn observe(&mut self, instant: ActivityLevel) -> bool {
        if self.history.len() < self.cap {
            self.history.push(instant);
        } else {
            self.history[self.head] = instant;
            self.head = (self.head + 1) % self.cap;
        }

        if self.history.len() == self.cap
            && self.history.iter().all(|a| *a == instant)
            && instant != self.committed
        {
            self.committed = instant;
            return true;
        }
        false
    }

    pub fn committed(&self) -> ActivityLevel {
        self.committed
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ActivityLevel::*;

    #[test]
    fn commits_only_after_full_agreement() {
        let mut gate = StabilityGate::new(70, Still);

        // 69 agreeing observations: buffer not yet full, no commit.
        for _ in 0..69 {
            assert!(!gate.observe(BriskWalk));
            assert_eq!(gate.committed(), Still);
        }

        // The 70th fills the buffer with unanimous agreement.
        assert!(gate.observe(BriskWalk));
        assert_eq!(gate.committed(), BriskWalk);
    }

    #[test]
    fn no_change_reported_when_level_matches_committed() {
        let mut gate = StabilityGate::new(70, Still);
        for _ in 0..200 {
            assert!(!gate.observe(Still));
        }
        assert_eq!(gate.committed(), Still);
    }

    #[test]
    fn single_disagreeing_observation_resets_streak() {
        let mut gate = StabilityGate::new(70, Still);

        for _ in 0..35 {
            assert!(!gate.observe(BriskWalk));
        }
        // One outlier mid-run poisons the buffer for the next 70 entries.
        assert!(!gate.observe(Running));
        for _ in 0..69 {
            assert!(!gate.observe(BriskWalk));
            assert_eq!(gate.committed(), Still);
        }
        // 70 fresh consecutive agreeing observations commit.
        assert!(gate.observe(BriskWalk));
        assert_eq!(gate.committed(), BriskWalk);
    }

    #[test]
    fn change_fires_exactly_once_per_transition() {
        let mut gate = StabilityGate::new(70, Still);
        let mut changes = 0;
        for _ in 0..300 {
            if gate.observe(Running) {
                changes += 1;
            }
        }
        assert_eq!(changes, 1);
        assert_eq!(gate.committed(), Running);
    }

    #[test]
    #[should_panic(expected = "capacity must be nonzero")]
    fn zero_capacity_gate_is_rejected() {
        StabilityGate::new(0, Still);
    }

    #[test]
    fn transitions_follow_repeated_agreement() {
        let mut gate = StabilityGate::new(5, Still);
        for _ in 0..5 {
            gate.observe(LightWalk);
        }
        assert_eq!(gate.committed(), LightWalk);
        for _ in 0..5 {
            gate.observe(Still);
        }
        assert_eq!(gate.committed(), Still);
    }
}

use std::sync::{Condvar, Mutex};

/// A reusable all-or-nothing rendezvous. Each participant calls
/// `wait(expected)`; the call returns once `expected` arrivals have
/// registered since the last release. The counter resets on release,
/// so the same barrier serves arbitrarily many rounds.
///
/// The expected count may change between cycles as trains retire. If
/// participants disagree within one cycle (one of them announced a
/// freshly shrunk count while another still carries the stale value),
/// the smallest announced count decides the release. The shrink winner
/// always announces the shrunk value and always participates, so the
/// barrier never waits for arrivals that will not come.
pub struct Barrier {
    state: Mutex<BarrierState>,
    cv: Condvar,
}

struct BarrierState {
    arrived: usize,
    /// Smallest expected count announced in the current cycle.
    expected: usize,
    /// Incremented on every release, so a waiter woken late can never
    /// consume an arrival belonging to the next cycle.
    generation: usize,
}

impl Barrier {
    pub fn new() -> Barrier {
        Barrier {
            state: Mutex::new(BarrierState {
                arrived: 0,
                expected: usize::MAX,
                generation: 0,
            }),
            cv: Condvar::new(),
        }
    }

    pub fn wait(&self, expected: usize) {
        let mut state = self.state.lock().unwrap();
        state.arrived += 1;
        if expected < state.expected {
            state.expected = expected;
        }
        if state.arrived >= state.expected {
            state.arrived = 0;
            state.expected = usize::MAX;
            state.generation = state.generation.wrapping_add(1);
            self.cv.notify_all();
        } else {
            let generation = state.generation;
            let _released = self
                .cv
                .wait_while(state, |s| s.generation == generation)
                .unwrap();
        }
    }
}

impl Default for Barrier {
    fn default() -> Barrier {
        Barrier::new()
    }
}

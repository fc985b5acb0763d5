use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared per-round bookkeeping: how many trains the barrier should
/// expect, how many finished since the count was last adjusted, and
/// which round's adjustment has already been applied.
///
/// At the start of every round each agent races `try_shrink`; the
/// compare-and-exchange on the round tag guarantees exactly one winner
/// per round, so the finisher count can never be subtracted twice.
pub struct RoundState {
    expected: AtomicUsize,
    finished: AtomicUsize,
    /// Tag of the last round whose shrink was applied. Starts one
    /// below the first round tag (wrapping), so round 0 has a winner
    /// like every other round.
    shrunk_round: AtomicUsize,
}

impl RoundState {
    pub fn new(active: usize) -> RoundState {
        RoundState {
            expected: AtomicUsize::new(active),
            finished: AtomicUsize::new(0),
            shrunk_round: AtomicUsize::new(0usize.wrapping_sub(1)),
        }
    }

    /// The number of participants the barrier should currently expect.
    pub fn expected(&self) -> usize {
        self.expected.load(Ordering::SeqCst)
    }

    /// Called exactly once by a train that has completed its final
    /// segment. The count is folded into `expected` by the next
    /// round's shrink winner.
    pub fn record_finished(&self) {
        self.finished.fetch_add(1, Ordering::SeqCst);
    }

    /// Race to apply round `round`'s shrink. Returns true for the one
    /// caller per round that wins; the winner retires every train that
    /// finished in the previous round from the expected count.
    pub fn try_shrink(&self, round: usize) -> bool {
        let previous = round.wrapping_sub(1);
        if self
            .shrunk_round
            .compare_exchange(previous, round, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }
        let retired = self.finished.swap(0, Ordering::SeqCst);
        if retired > 0 {
            let was = self.expected.fetch_sub(retired, Ordering::SeqCst);
            debug!(
                "round {}: retiring {} finished train(s), {} still running",
                round,
                retired,
                was - retired
            );
        }
        true
    }
}

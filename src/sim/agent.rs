use super::{SimulationCore, Train};
use crate::output::{EventSink, TrainLogEvent};
use std::sync::Arc;

/// Drives one train over its route, one crossing attempt per
/// timestep, in lock-step with every other agent.
///
/// Each round: race for the round's shrink, attempt the current
/// segment, then rendezvous twice on the barrier. The barrier pair is
/// the timestep boundary; no agent starts round t+1 before every
/// agent has closed round t, so a finish recorded in round t is
/// always visible to round t+1's shrink winner.
pub struct TrainAgent {
    train: Train,
    core: Arc<SimulationCore>,
    sink: Arc<dyn EventSink>,
}

impl TrainAgent {
    pub fn new(train: Train, core: Arc<SimulationCore>, sink: Arc<dyn EventSink>) -> TrainAgent {
        TrainAgent {
            train: train,
            core: core,
            sink: sink,
        }
    }

    pub fn run(self) {
        let core = &self.core;

        // Opening rendezvous: no crossing attempt happens until every
        // agent thread is up.
        core.barrier.wait(core.round.expected());

        let mut timestep = 0;
        let mut at = 0;
        while at < self.train.route.len() {
            core.round.try_shrink(timestep);

            // The occupancy guard is kept until the first barrier of
            // the round, i.e. the end of this timestep. A segment
            // crossed this timestep stays taken for the rest of it
            // and is free again by the time the next round's attempts
            // begin.
            let crossing = match core.registry.try_acquire(self.train.route[at]) {
                Some(occupancy) => {
                    self.sink.record(TrainLogEvent::Moving {
                        time: timestep,
                        train: self.train.label.clone(),
                        from: self.train.stations[at],
                        to: self.train.stations[at + 1],
                    });
                    at += 1;
                    Some(occupancy)
                }
                None => {
                    self.sink.record(TrainLogEvent::Waiting {
                        time: timestep,
                        train: self.train.label.clone(),
                        at: self.train.stations[at],
                    });
                    None
                }
            };

            if at == self.train.route.len() {
                core.round.record_finished();
            }

            timestep += 1;
            let expected = core.round.expected();
            core.barrier.wait(expected);
            drop(crossing);
            core.barrier.wait(expected);
        }
    }
}

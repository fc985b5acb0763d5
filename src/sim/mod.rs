pub mod agent;
pub mod run;

use crate::network::{StationId, TrackId, TrackRegistry};
use crate::sync::{Barrier, RoundState};
use smallvec::SmallVec;

/// A train ready to run: the stations it visits in order, the
/// resolved track for each hop, and its display label. The label is
/// fixed at construction and is presentation only.
#[derive(Debug)]
pub struct Train {
    pub label: String,
    pub stations: Vec<StationId>,
    pub route: SmallVec<[TrackId; 8]>,
}

/// Everything the train agents share: the track arena, the timestep
/// barrier and the round bookkeeping.
pub struct SimulationCore {
    pub registry: TrackRegistry,
    pub barrier: Barrier,
    pub round: RoundState,
}

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

pub type StationId = u32;
pub type TrackId = usize;

/// One piece of shared track between two stations. The segment between
/// stations a and b is the same segment as the one between b and a, so
/// the pair is normalized to (min, max) on construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Segment(StationId, StationId);

impl Segment {
    pub fn new(a: StationId, b: StationId) -> Segment {
        if a <= b {
            Segment(a, b)
        } else {
            Segment(b, a)
        }
    }

    pub fn endpoints(&self) -> (StationId, StationId) {
        (self.0, self.1)
    }
}

/// Exclusive occupancy rights to one segment. The lock is only ever
/// taken non-blocking, and only for the duration of the crossing
/// decision itself, not across timesteps.
#[derive(Debug)]
pub struct Track {
    pub segment: Segment,
    lock: Mutex<()>,
}

/// The fixed set of unique tracks. Tracks are stored in a pre-sized
/// arena and addressed by stable index, so no lock ever moves after
/// construction.
#[derive(Debug)]
pub struct TrackRegistry {
    tracks: Vec<Track>,
    index: HashMap<Segment, TrackId>,
}

impl TrackRegistry {
    /// Builds the registry from every segment appearing in any route.
    /// Duplicates collapse onto the first occurrence.
    pub fn new<I: IntoIterator<Item = Segment>>(segments: I) -> TrackRegistry {
        let mut tracks = Vec::new();
        let mut index = HashMap::new();
        for segment in segments {
            if !index.contains_key(&segment) {
                index.insert(segment, tracks.len());
                tracks.push(Track {
                    segment: segment,
                    lock: Mutex::new(()),
                });
            }
        }
        TrackRegistry {
            tracks: tracks,
            index: index,
        }
    }

    /// Lookup by segment value. Trains and tracks are constructed
    /// independently, so identity comparison is not an option.
    pub fn resolve(&self, segment: Segment) -> Option<TrackId> {
        self.index.get(&segment).cloned()
    }

    pub fn track(&self, id: TrackId) -> &Track {
        &self.tracks[id]
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Non-blocking acquisition of a track's occupancy lock. Returns
    /// the guard on success; the lock is released when the guard is
    /// dropped. A contender that gets None simply re-attempts on the
    /// next timestep. A poisoned lock counts as occupied.
    pub fn try_acquire(&self, id: TrackId) -> Option<MutexGuard<()>> {
        self.tracks[id].lock.try_lock().ok()
    }
}

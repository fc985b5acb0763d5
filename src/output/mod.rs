use crate::network::StationId;
use std::fmt;
use std::sync::Mutex;

pub type Timestep = usize;

/// One observation from one train in one timestep. Recording an event
/// has no effect on the simulation itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainLogEvent {
    Moving {
        time: Timestep,
        train: String,
        from: StationId,
        to: StationId,
    },
    Waiting {
        time: Timestep,
        train: String,
        at: StationId,
    },
}

impl TrainLogEvent {
    pub fn time(&self) -> Timestep {
        match *self {
            TrainLogEvent::Moving { time, .. } => time,
            TrainLogEvent::Waiting { time, .. } => time,
        }
    }

    pub fn train(&self) -> &str {
        match *self {
            TrainLogEvent::Moving { ref train, .. } => train,
            TrainLogEvent::Waiting { ref train, .. } => train,
        }
    }
}

impl fmt::Display for TrainLogEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TrainLogEvent::Moving {
                time,
                ref train,
                from,
                to,
            } => write!(
                f,
                "At time step {}: Train {} is moving from station {} to station {}",
                time, train, from, to
            ),
            TrainLogEvent::Waiting {
                time,
                ref train,
                at,
            } => write!(
                f,
                "At time step {}: Train {} is waiting at station {}",
                time, train, at
            ),
        }
    }
}

/// Where train events end up. The simulation runs one thread per
/// train, so a sink must serialize recording internally.
pub trait EventSink: Send + Sync {
    fn record(&self, event: TrainLogEvent);
}

/// Writes each event as one line on standard output. The lock keeps
/// lines from different trains from interleaving.
pub struct ConsoleSink {
    lock: Mutex<()>,
}

impl ConsoleSink {
    pub fn new() -> ConsoleSink {
        ConsoleSink {
            lock: Mutex::new(()),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> ConsoleSink {
        ConsoleSink::new()
    }
}

impl EventSink for ConsoleSink {
    fn record(&self, event: TrainLogEvent) {
        let _output = self.lock.lock().unwrap();
        println!("{}", event);
    }
}

/// Collects events in memory, in recording order.
pub struct MemorySink {
    events: Mutex<Vec<TrainLogEvent>>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn take(&self) -> Vec<TrainLogEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::replace(&mut *events, Vec::new())
    }
}

impl Default for MemorySink {
    fn default() -> MemorySink {
        MemorySink::new()
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: TrainLogEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_lines_match_the_report_format() {
        let moving = TrainLogEvent::Moving {
            time: 3,
            train: "A".to_string(),
            from: 1,
            to: 2,
        };
        assert_eq!(
            moving.to_string(),
            "At time step 3: Train A is moving from station 1 to station 2"
        );

        let waiting = TrainLogEvent::Waiting {
            time: 0,
            train: "B".to_string(),
            at: 7,
        };
        assert_eq!(
            waiting.to_string(),
            "At time step 0: Train B is waiting at station 7"
        );
    }

    #[test]
    fn memory_sink_keeps_recording_order() {
        let sink = MemorySink::new();
        sink.record(TrainLogEvent::Waiting {
            time: 0,
            train: "A".to_string(),
            at: 1,
        });
        sink.record(TrainLogEvent::Waiting {
            time: 1,
            train: "A".to_string(),
            at: 1,
        });
        let events = sink.take();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].time(), 0);
        assert_eq!(events[1].time(), 1);
        assert!(sink.take().is_empty());
    }
}

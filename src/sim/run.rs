use super::agent::TrainAgent;
use super::{SimulationCore, Train};
use crate::input::scenario::Scenario;
use crate::network::TrackRegistry;
use crate::output::EventSink;
use crate::sync::{Barrier, RoundState};
use crate::AppResult;
use failure::format_err;
use log::info;
use std::sync::Arc;
use std::thread;

/// Builds the track arena and one agent thread per train, runs the
/// simulation to completion and joins every thread.
pub fn run_simulation(scenario: &Scenario, sink: Arc<dyn EventSink>) -> AppResult<()> {
    // Every distinct segment across all routes gets exactly one
    // track. The registry is sized here, once; tracks never move
    // after this point.
    let registry = TrackRegistry::new(scenario.trains.iter().flat_map(|t| t.segments()));

    let trains: Vec<Train> = scenario
        .trains
        .iter()
        .map(|spec| Train {
            label: spec.label.clone(),
            stations: spec.stations.clone(),
            route: spec
                .segments()
                .map(|s| {
                    registry
                        .resolve(s)
                        .expect("route segment missing from registry")
                })
                .collect(),
        })
        .collect();

    info!(
        "starting simulation: {} trains over {} tracks",
        trains.len(),
        registry.len()
    );

    let core = Arc::new(SimulationCore {
        registry: registry,
        barrier: Barrier::new(),
        round: RoundState::new(trains.len()),
    });

    let mut handles = Vec::new();
    for train in trains {
        let name = format!("train-{}", train.label);
        let agent = TrainAgent::new(train, core.clone(), sink.clone());
        let handle = thread::Builder::new()
            .name(name)
            .spawn(move || agent.run())?;
        handles.push(handle);
    }

    for handle in handles {
        handle
            .join()
            .map_err(|_e| format_err!("a train thread panicked"))?;
    }

    info!("simulation finished");
    Ok(())
}

use railstep::*;
use std::path::PathBuf;
use std::sync::Arc;
use structopt::StructOpt;

/// Railstep -- lock-step railway simulation
#[derive(StructOpt, Debug)]
#[structopt(name = "railstep")]
struct Opt {
    /// Verbose mode (-v, -vv)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Scenario file: a header line "numTrains numStations" followed
    /// by one "routeLength station_0 ... station_k" line per train
    #[structopt(parse(from_os_str), default_value = "data.txt")]
    scenario: PathBuf,
}

fn run(opt: &Opt) -> AppResult<()> {
    let scenario = get_scenario(&opt.scenario)?;
    if opt.verbose >= 1 {
        println!("Scenario: {} stations", scenario.num_stations);
        println!("Trains:");
        for t in &scenario.trains {
            println!("  - {:?}", t);
        }
    }

    let sink = Arc::new(output::ConsoleSink::new());
    sim::run::run_simulation(&scenario, sink)?;
    Ok(())
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();
    match run(&opt) {
        Ok(()) => {}
        Err(e) => {
            println!("Error:\n{}", e.as_fail());
            std::process::exit(1);
        }
    }
}

pub mod input;
pub mod network;
pub mod output;
pub mod sim;
pub mod sync;

use std::path::Path;

pub type AppResult<T> = Result<T, failure::Error>;

pub fn read_file(f: &Path) -> AppResult<String> {
    use std::fs::File;
    use std::io::prelude::*;
    use std::io::BufReader;

    let file = File::open(f)?;
    let mut file = BufReader::new(&file);
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn get_scenario(f: &Path) -> AppResult<input::scenario::Scenario> {
    let contents = read_file(f)?;
    let scenario = input::scenario::parse_scenario(&contents)?;
    Ok(scenario)
}

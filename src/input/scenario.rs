use crate::network::{Segment, StationId};
use failure_derive::Fail;
use log::debug;

/// A parsed scenario file: the station count from the header plus one
/// entry per train line.
#[derive(Debug)]
pub struct Scenario {
    pub num_stations: u32,
    pub trains: Vec<TrainSpec>,
}

/// One train as given in the input: its display label and the ordered
/// stations it visits. The route is the segment between each pair of
/// consecutive stations.
#[derive(Debug)]
pub struct TrainSpec {
    pub label: String,
    pub stations: Vec<StationId>,
}

impl TrainSpec {
    pub fn segments<'a>(&'a self) -> impl Iterator<Item = Segment> + 'a {
        self.stations.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    pub fn route_len(&self) -> usize {
        self.stations.len() - 1
    }
}

#[derive(Debug, Fail)]
pub enum ParseError {
    #[fail(display = "missing header line with train and station counts")]
    MissingHeader,
    #[fail(display = "line {}: invalid number \"{}\"", _0, _1)]
    NumberError(usize, String),
    #[fail(display = "line {}: a train needs at least two stations", _0)]
    RouteTooShort(usize),
    #[fail(display = "line {}: station {} out of range, scenario has {} stations", _0, _1, _2)]
    StationOutOfRange(usize, StationId, u32),
    #[fail(display = "expected {} train lines, found {}", _0, _1)]
    TrainCountMismatch(usize, usize),
}

fn number(lineno: usize, token: &str) -> Result<u32, ParseError> {
    token
        .parse::<u32>()
        .map_err(|_e| ParseError::NumberError(lineno, token.to_string()))
}

/// Parses the scenario format: a header line `numTrains numStations`
/// followed by one line per train, `routeLength station_0 ... station_k`.
///
/// The declared route length is read but the route itself is derived
/// from however many station tokens the line carries. Any malformed
/// line is a fatal parse error; there is no partial loading.
pub fn parse_scenario(input: &str) -> Result<Scenario, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|&(_i, l)| !l.trim().is_empty());

    let (header_no, header) = lines.next().ok_or(ParseError::MissingHeader)?;
    let mut header_tokens = header.split_whitespace();
    let num_trains = match header_tokens.next() {
        Some(t) => number(header_no, t)? as usize,
        None => return Err(ParseError::MissingHeader),
    };
    let num_stations = match header_tokens.next() {
        Some(t) => number(header_no, t)?,
        None => return Err(ParseError::MissingHeader),
    };

    let mut trains = Vec::new();
    for (lineno, line) in lines {
        let mut tokens = line.split_whitespace();
        let declared_len = match tokens.next() {
            Some(t) => number(lineno, t)? as usize,
            None => return Err(ParseError::RouteTooShort(lineno)),
        };

        let mut stations = Vec::new();
        for token in tokens {
            let station = number(lineno, token)?;
            if station >= num_stations {
                return Err(ParseError::StationOutOfRange(lineno, station, num_stations));
            }
            stations.push(station);
        }
        if stations.len() < 2 {
            return Err(ParseError::RouteTooShort(lineno));
        }
        if declared_len != stations.len() - 1 {
            debug!(
                "line {}: declared route length {} but {} stations follow",
                lineno,
                declared_len,
                stations.len()
            );
        }

        trains.push(TrainSpec {
            label: train_label(trains.len()),
            stations: stations,
        });
    }

    if trains.len() != num_trains {
        return Err(ParseError::TrainCountMismatch(num_trains, trains.len()));
    }

    Ok(Scenario {
        num_stations: num_stations,
        trains: trains,
    })
}

/// Display label for the train at a given ordinal: A..Z, then AA, AB
/// and so on.
pub fn train_label(ordinal: usize) -> String {
    let mut n = ordinal;
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
        n -= 1;
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_wellformed_scenario() {
        let scenario = parse_scenario("2 4\n3 0 1 2 3\n1 2 3\n").unwrap();
        assert_eq!(scenario.num_stations, 4);
        assert_eq!(scenario.trains.len(), 2);
        assert_eq!(scenario.trains[0].label, "A");
        assert_eq!(scenario.trains[0].stations, vec![0, 1, 2, 3]);
        assert_eq!(scenario.trains[0].route_len(), 3);
        assert_eq!(scenario.trains[1].label, "B");
        assert_eq!(scenario.trains[1].stations, vec![2, 3]);

        let segments: Vec<_> = scenario.trains[0].segments().collect();
        assert_eq!(
            segments,
            vec![Segment::new(0, 1), Segment::new(1, 2), Segment::new(2, 3)]
        );
    }

    #[test]
    fn declared_route_length_is_not_trusted() {
        // The line claims 7 hops but carries 3 stations; the parsed
        // route has 2 hops.
        let scenario = parse_scenario("1 3\n7 0 1 2\n").unwrap();
        assert_eq!(scenario.trains[0].route_len(), 2);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let scenario = parse_scenario("\n1 2\n\n1 0 1\n\n").unwrap();
        assert_eq!(scenario.trains.len(), 1);
    }

    #[test]
    fn rejects_empty_input() {
        match parse_scenario("") {
            Err(ParseError::MissingHeader) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_tokens() {
        match parse_scenario("1 2\n1 0 x\n") {
            Err(ParseError::NumberError(2, ref t)) if t == "x" => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_single_station_routes() {
        match parse_scenario("1 2\n0 1\n") {
            Err(ParseError::RouteTooShort(2)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_stations() {
        match parse_scenario("1 2\n1 0 5\n") {
            Err(ParseError::StationOutOfRange(2, 5, 2)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_train_count_mismatch() {
        match parse_scenario("2 3\n1 0 1\n") {
            Err(ParseError::TrainCountMismatch(2, 1)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn labels_extend_past_the_alphabet() {
        assert_eq!(train_label(0), "A");
        assert_eq!(train_label(25), "Z");
        assert_eq!(train_label(26), "AA");
        assert_eq!(train_label(27), "AB");
    }
}

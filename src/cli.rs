use clap::Parser;
use std::fmt;
use tracing::debug;

use crate::error::HaversineError;
use crate::format::significant;
use crate::geo::{self, Coordinate, DistanceResult};

pub const USAGE: &str = "Usage: haversine lat1 lon1 lat2 lon2";

const ARG_NAMES: [&str; 4] = ["lat1", "lon1", "lat2", "lon2"];
const COORDINATE_DIGITS: usize = 9;
const DISTANCE_DIGITS: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "haversine", version)]
#[command(
    about = "Great-circle distance between two lat/lon points, in miles and kilometers.",
    long_about = None
)]
pub struct Cli {
    /// lat1 lon1 lat2 lon2, in decimal degrees. Flags must come before these.
    #[arg(value_name = "DEGREES", allow_hyphen_values = true)]
    pub coords: Vec<String>,

    /// Enable debug logging to stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

fn parse_degrees(name: &'static str, raw: &str) -> Result<f64, HaversineError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|source| HaversineError::InvalidNumber {
            name,
            value: raw.to_string(),
            source,
        })?;
    if !value.is_finite() {
        return Err(HaversineError::NonFinite {
            name,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Parses `lat1 lon1 lat2 lon2` into two coordinates.
pub fn parse_coordinates(args: &[String]) -> Result<(Coordinate, Coordinate), HaversineError> {
    if args.len() != ARG_NAMES.len() {
        return Err(HaversineError::Usage { found: args.len() });
    }
    let mut degrees = [0.0_f64; 4];
    for ((slot, name), raw) in degrees.iter_mut().zip(ARG_NAMES).zip(args) {
        *slot = parse_degrees(name, raw)?;
    }
    debug!(?degrees, "parsed coordinates");
    Ok((
        Coordinate::from((degrees[0], degrees[1])),
        Coordinate::from((degrees[2], degrees[3])),
    ))
}

/// Everything printed for one successful invocation.
#[derive(Debug)]
pub struct Report {
    pub from: Coordinate,
    pub to: Coordinate,
    pub distance: DistanceResult,
}

impl Report {
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self {
            from,
            to,
            distance: geo::distance(from, to),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Calculating distance between ({},{}) and ({},{})",
            significant(self.from.lat, COORDINATE_DIGITS),
            significant(self.from.lon, COORDINATE_DIGITS),
            significant(self.to.lat, COORDINATE_DIGITS),
            significant(self.to.lon, COORDINATE_DIGITS),
        )?;
        writeln!(f, "Distance:")?;
        writeln!(f, "  {} miles", significant(self.distance.miles, DISTANCE_DIGITS))?;
        writeln!(
            f,
            "  {} kilometers",
            significant(self.distance.kilometers, DISTANCE_DIGITS)
        )
    }
}

pub fn run(cli: &Cli) -> Result<Report, HaversineError> {
    let (from, to) = parse_coordinates(&cli.coords)?;
    let report = Report::new(from, to);
    debug!(
        miles = report.distance.miles,
        kilometers = report.distance.kilometers,
        "computed distance"
    );
    Ok(report)
}

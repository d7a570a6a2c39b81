use tracing::debug;

/// Spherical Earth radius, miles.
pub const RADIUS_EARTH_MILES: f64 = 3963.0;
/// Spherical Earth radius, kilometers.
pub const RADIUS_EARTH_KM: f64 = 6378.0;

/// A point on the surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn to_radians(self) -> RadianCoordinate {
        RadianCoordinate {
            lat: self.lat.to_radians(),
            lon: self.lon.to_radians(),
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(pair: (f64, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

/// The same point, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadianCoordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Distance between two points in both unit systems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceResult {
    pub miles: f64,
    pub kilometers: f64,
}

/// Square root of the haversine term, clamped to the domain of `asin`.
pub fn haversine_term(a: Coordinate, b: Coordinate) -> f64 {
    let (a, b) = (a.to_radians(), b.to_radians());
    let dlat = a.lat - b.lat;
    let dlon = a.lon - b.lon;
    let sdlat = (dlat / 2.0).sin().powi(2);
    let sdlon = (dlon / 2.0).sin().powi(2);
    // Rounding can leave the radicand a hair below zero for out-of-range angles.
    let t = (sdlat + a.lat.cos() * b.lat.cos() * sdlon).max(0.0).sqrt();
    debug!(?a, ?b, sdlat, sdlon, t, "haversine term");
    clamp_to_asin_domain(t)
}

fn clamp_to_asin_domain(t: f64) -> f64 {
    let clamped = t.clamp(-1.0, 1.0);
    if clamped != t {
        debug!(t, clamped, "clamped haversine term");
    }
    clamped
}

/// Distance between `a` and `b` in miles and kilometers.
pub fn distance(a: Coordinate, b: Coordinate) -> DistanceResult {
    let arc = 2.0 * haversine_term(a, b).asin();
    DistanceResult {
        miles: RADIUS_EARTH_MILES * arc,
        kilometers: RADIUS_EARTH_KM * arc,
    }
}

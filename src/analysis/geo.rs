use crate::db::Database;
use crate::error::{CtaError, ReportError};
use crate::models::NearbyStation;

/// Latitudes accepted for a radius search.
pub const LATITUDE_RANGE: (f64, f64) = (40.0, 43.0);
/// Longitudes accepted for a radius search.
pub const LONGITUDE_RANGE: (f64, f64) = (-88.0, -87.0);

const MILES_PER_DEGREE_LATITUDE: f64 = 69.0;
const MILES_PER_DEGREE_LONGITUDE: f64 = 51.0;

/// Geographic extent of the background map as `[lon_min, lon_max, lat_min, lat_max]`.
pub const MAP_EXTENT: [f64; 4] = [-87.9277, -87.5569, 41.7012, 42.0868];

pub fn parse_coordinate(input: &str) -> Result<f64, ReportError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ReportError::InvalidNumber)
}

pub fn validate_latitude(latitude: f64) -> Result<f64, ReportError> {
    let (min, max) = LATITUDE_RANGE;
    if (min..=max).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(ReportError::LatitudeOutOfBounds)
    }
}

pub fn validate_longitude(longitude: f64) -> Result<f64, ReportError> {
    let (min, max) = LONGITUDE_RANGE;
    if (min..=max).contains(&longitude) {
        Ok(longitude)
    } else {
        Err(ReportError::LongitudeOutOfBounds)
    }
}

/// Rectangle approximating a one-mile radius, bounds rounded to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_lower: f64,
    pub lat_upper: f64,
    pub lon_lower: f64,
    pub lon_upper: f64,
}

impl BoundingBox {
    pub fn around(latitude: f64, longitude: f64) -> Self {
        let lat_delta = 1.0 / MILES_PER_DEGREE_LATITUDE;
        let lon_delta = 1.0 / MILES_PER_DEGREE_LONGITUDE;
        BoundingBox {
            lat_lower: round3(latitude - lat_delta),
            lat_upper: round3(latitude + lat_delta),
            lon_lower: round3(longitude - lon_delta),
            lon_upper: round3(longitude + lon_delta),
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyStations {
    pub latitude: f64,
    pub longitude: f64,
    pub bounds: BoundingBox,
    pub stations: Vec<NearbyStation>,
}

/// Stations with a stop within roughly a mile of the point.
///
/// The point must already have passed [`validate_latitude`] and [`validate_longitude`].
pub fn nearby_stations(
    db: &Database,
    latitude: f64,
    longitude: f64,
) -> Result<NearbyStations, CtaError> {
    let bounds = BoundingBox::around(latitude, longitude);
    let stations = db.stations_in_box(&bounds)?;
    if stations.is_empty() {
        return Err(ReportError::NoStationsFound.into());
    }
    Ok(NearbyStations {
        latitude,
        longitude,
        bounds,
        stations,
    })
}

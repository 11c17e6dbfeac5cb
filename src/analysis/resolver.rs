use tracing::debug;

use crate::db::Database;
use crate::error::{CtaError, ReportError};
use crate::models::Station;

/// Outcome of resolving a station name pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    None,
    One(Station),
    /// More than one station matched; holds the match count
    Many(usize),
}

impl Resolution {
    /// Classify a list of matches.
    pub fn from_matches(mut matches: Vec<Station>) -> Self {
        match matches.len() {
            0 => Resolution::None,
            1 => Resolution::One(matches.remove(0)),
            n => Resolution::Many(n),
        }
    }

    /// The unique station, or the user-facing reason there isn't one.
    pub fn into_station(self) -> Result<Station, ReportError> {
        match self {
            Resolution::One(station) => Ok(station),
            Resolution::None => Err(ReportError::NoStationFound),
            Resolution::Many(_) => Err(ReportError::MultipleStationsFound),
        }
    }
}

/// All stations matching a `LIKE` pattern (`_` and `%` wildcards), ordered by name.
pub fn search_stations(db: &Database, pattern: &str) -> Result<Vec<Station>, CtaError> {
    db.stations_like(pattern)
}

pub fn resolve(db: &Database, pattern: &str) -> Result<Resolution, CtaError> {
    let resolution = Resolution::from_matches(search_stations(db, pattern)?);
    debug!(pattern, ?resolution, "resolved station pattern");
    Ok(resolution)
}

/// Resolve a pattern that must match exactly one station.
pub fn resolve_unique(db: &Database, pattern: &str) -> Result<Station, CtaError> {
    Ok(resolve(db, pattern)?.into_station()?)
}

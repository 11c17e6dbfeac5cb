use crate::db::Database;
use crate::error::{CtaError, ReportError};
use crate::models::{StopCount, StopListing};
use crate::visualization::percentage;

/// Check that a line with this color exists (case-insensitive).
pub fn find_line(db: &Database, color: &str) -> Result<(), CtaError> {
    if db.line_exists(color.trim())? {
        Ok(())
    } else {
        Err(ReportError::NoSuchLine.into())
    }
}

/// Stops served by one line in one direction.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStops {
    pub color: String,
    pub direction: String,
    pub stops: Vec<StopListing>,
}

pub fn stops_on_line(db: &Database, color: &str, direction: &str) -> Result<LineStops, CtaError> {
    let color = color.trim();
    let direction = direction.trim();
    let stops = db.stops_on_line(color, direction)?;
    if stops.is_empty() {
        return Err(ReportError::NoStopsInDirection.into());
    }
    Ok(LineStops {
        color: color.to_string(),
        direction: direction.to_string(),
        stops,
    })
}

/// Stop counts per (color, direction) against the network-wide stop count.
#[derive(Debug, Clone, PartialEq)]
pub struct StopCountSummary {
    pub counts: Vec<StopCount>,
    pub total_stops: i64,
}

impl StopCountSummary {
    pub fn share(&self, count: &StopCount) -> f64 {
        percentage(count.count, self.total_stops)
    }
}

pub fn stop_count_summary(db: &Database) -> Result<StopCountSummary, CtaError> {
    let counts = db.stop_counts()?;
    let total_stops = db.total_stops()?;
    Ok(StopCountSummary {
        counts,
        total_stops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixture::sample_database;
    use crate::models::Direction;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_find_line() {
        let db = sample_database();
        assert!(find_line(&db, " Red ").is_ok());
        let err = find_line(&db, "Purple").unwrap_err();
        assert!(matches!(err, CtaError::Report(ReportError::NoSuchLine)));
    }

    #[test]
    fn test_stops_on_line_sorted_by_name() {
        let db = sample_database();
        let found = stops_on_line(&db, "brown", "w").unwrap();
        assert_eq!(found.stops.len(), 1);
        assert_eq!(found.stops[0].name, "State/Lake (Loop-Inner)");
        assert!(!found.stops[0].accessible);
    }

    #[test]
    fn test_stops_on_line_wrong_direction() {
        let db = sample_database();
        let err = stops_on_line(&db, "Blue", "E").unwrap_err();
        assert!(matches!(
            err,
            CtaError::Report(ReportError::NoStopsInDirection)
        ));
    }

    #[test]
    fn test_stop_count_summary() {
        let db = sample_database();
        let summary = stop_count_summary(&db).unwrap();
        assert_eq!(summary.total_stops, 6);
        assert_eq!(summary.counts.len(), 6);
        assert_eq!(summary.counts[0].color, "Blue");
        assert_eq!(summary.counts[0].direction, Direction::North);
        assert_eq!(summary.counts[5].color, "Red");
        assert_eq!(summary.counts[5].direction, Direction::South);
        assert_approx_eq!(summary.share(&summary.counts[0]), 100.0 / 6.0, 1e-9);
    }
}

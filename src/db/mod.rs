//! Read-only access to the CTA ridership SQLite database.
//!
//! Schema:
//! - `Stations(Station_ID, Station_Name)`
//! - `Stops(Stop_ID, Station_ID, Stop_Name, Direction, ADA, Latitude, Longitude)`
//! - `Lines(Line_ID, Color)` joined to stops through `StopDetails(Stop_ID, Line_ID)`
//! - `Ridership(Station_ID, Ride_Date, Type_Of_Day, Num_Riders)`

mod queries;

#[cfg(test)]
pub(crate) mod fixture;

use std::cell::Cell;
use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use tracing::{debug, info};

use crate::analysis::BoundingBox;
use crate::error::CtaError;
use crate::models::{
    DailyTotal, DayType, Direction, GeneralStats, MonthTotal, NearbyStation, Station,
    StationRidership, StopCount, StopListing, YearTotal,
};

pub use queries::Query;

/// A single connection held for the lifetime of the session.
pub struct Database {
    conn: Connection,
    executed: Cell<usize>,
}

impl Database {
    /// Open an existing database file read-only.
    pub fn open(path: &Path) -> Result<Self, CtaError> {
        if !path.exists() {
            return Err(CtaError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("database not found: {}", path.display()),
            )));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!(path = %path.display(), "opened ridership database");
        Ok(Self::from_connection(conn))
    }

    /// Wrap an already-open connection (used for in-memory stores).
    pub fn from_connection(conn: Connection) -> Self {
        Database {
            conn,
            executed: Cell::new(0),
        }
    }

    /// Number of statements executed so far.
    pub fn queries_executed(&self) -> usize {
        self.executed.get()
    }

    fn record(&self, query: Query) -> &'static str {
        self.executed.set(self.executed.get() + 1);
        debug!(?query, "executing query");
        query.sql()
    }

    fn scalar(&self, query: Query) -> Result<i64, CtaError> {
        let sql = self.record(query);
        Ok(self.conn.query_row(sql, [], |row| row.get(0))?)
    }

    fn optional_text(&self, query: Query) -> Result<Option<String>, CtaError> {
        let sql = self.record(query);
        Ok(self
            .conn
            .query_row(sql, [], |row| row.get::<_, Option<String>>(0))
            .optional()?
            .flatten())
    }

    pub fn general_stats(&self) -> Result<GeneralStats, CtaError> {
        Ok(GeneralStats {
            stations: self.scalar(Query::CountStations)?,
            stops: self.scalar(Query::CountStops)?,
            ride_entries: self.scalar(Query::CountRideEntries)?,
            first_date: self.optional_text(Query::FirstRideDate)?,
            last_date: self.optional_text(Query::LastRideDate)?,
            total_riders: self.scalar(Query::TotalRiders)?,
        })
    }

    /// Stations whose name matches a `LIKE` pattern, ordered by name.
    pub fn stations_like(&self, pattern: &str) -> Result<Vec<Station>, CtaError> {
        let mut stmt = self.conn.prepare_cached(self.record(Query::StationsLike))?;
        let rows = stmt.query_map([pattern], |row| {
            Ok(Station {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        let collected = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(collected)
    }

    /// Riders at the station with exactly this name, optionally limited to one day type.
    ///
    /// Returns `None` when no matching records exist.
    pub fn station_riders(
        &self,
        name: &str,
        day_type: Option<DayType>,
    ) -> Result<Option<i64>, CtaError> {
        let sum: Option<i64> = match day_type {
            Some(day) => {
                let sql = self.record(Query::StationRidersByDayType);
                self.conn
                    .query_row(sql, params![name, day.code()], |row| row.get(0))?
            }
            None => {
                let sql = self.record(Query::StationRidersTotal);
                self.conn.query_row(sql, [name], |row| row.get(0))?
            }
        };
        Ok(sum)
    }

    pub fn weekday_riders_by_station(&self) -> Result<Vec<StationRidership>, CtaError> {
        let mut stmt = self
            .conn
            .prepare_cached(self.record(Query::WeekdayRidersByStation))?;
        let rows = stmt.query_map([], |row| {
            Ok(StationRidership {
                name: row.get(0)?,
                riders: row.get(1)?,
            })
        })?;
        let collected = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(collected)
    }

    pub fn weekday_riders_total(&self) -> Result<i64, CtaError> {
        self.scalar(Query::WeekdayRidersTotal)
    }

    /// Whether a line with this color exists (case-insensitive).
    pub fn line_exists(&self, color: &str) -> Result<bool, CtaError> {
        let sql = self.record(Query::LineByColor);
        let found = self
            .conn
            .query_row(sql, [color.to_lowercase()], |row| row.get::<_, i64>(0))
            .optional()?;
        Ok(found.is_some())
    }

    /// Stops served by a line in a direction, ordered by stop name.
    ///
    /// Both `color` and `direction` are matched case-insensitively.
    pub fn stops_on_line(
        &self,
        color: &str,
        direction: &str,
    ) -> Result<Vec<StopListing>, CtaError> {
        let mut stmt = self
            .conn
            .prepare_cached(self.record(Query::StopsByLineAndDirection))?;
        let rows = stmt.query_map(
            params![color.to_lowercase(), direction.to_lowercase()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            },
        )?;

        let mut stops = Vec::new();
        for row in rows {
            let (name, direction, ada) = row?;
            stops.push(StopListing {
                name,
                direction: direction.parse::<Direction>()?,
                accessible: ada != 0,
            });
        }
        Ok(stops)
    }

    pub fn stop_counts(&self) -> Result<Vec<StopCount>, CtaError> {
        let mut stmt = self
            .conn
            .prepare_cached(self.record(Query::StopCountsByColorAndDirection))?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?;

        let mut counts = Vec::new();
        for row in rows {
            let (color, direction, count) = row?;
            counts.push(StopCount {
                color,
                direction: direction.parse::<Direction>()?,
                count,
            });
        }
        Ok(counts)
    }

    pub fn total_stops(&self) -> Result<i64, CtaError> {
        self.scalar(Query::CountStops)
    }

    pub fn yearly_riders(&self, station_name: &str) -> Result<Vec<YearTotal>, CtaError> {
        let mut stmt = self.conn.prepare_cached(self.record(Query::YearlyRiders))?;
        let rows = stmt.query_map([station_name], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut years = Vec::new();
        for row in rows {
            let (year, riders) = row?;
            years.push(YearTotal {
                year: parse_number(&year, "year")?,
                riders,
            });
        }
        Ok(years)
    }

    pub fn monthly_riders(
        &self,
        station_name: &str,
        year: &str,
    ) -> Result<Vec<MonthTotal>, CtaError> {
        let mut stmt = self.conn.prepare_cached(self.record(Query::MonthlyRiders))?;
        let rows = stmt.query_map(params![station_name, year], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?;

        let mut months = Vec::new();
        for row in rows {
            let (month, label, riders) = row?;
            months.push(MonthTotal {
                month: parse_number(&month, "month")?,
                label,
                riders,
            });
        }
        Ok(months)
    }

    pub fn daily_riders(&self, station_id: i64, year: &str) -> Result<Vec<DailyTotal>, CtaError> {
        let mut stmt = self.conn.prepare_cached(self.record(Query::DailyRiders))?;
        let rows = stmt.query_map(params![station_id, year], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut days = Vec::new();
        for row in rows {
            let (date, riders) = row?;
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|e| CtaError::Parse(format!("Invalid ride date '{date}': {e}")))?;
            days.push(DailyTotal { date, riders });
        }
        Ok(days)
    }

    /// Distinct stations with a stop inside the box, ordered by name.
    pub fn stations_in_box(&self, bounds: &BoundingBox) -> Result<Vec<NearbyStation>, CtaError> {
        let mut stmt = self.conn.prepare_cached(self.record(Query::StationsInBox))?;
        let rows = stmt.query_map(
            params![
                bounds.lat_lower,
                bounds.lat_upper,
                bounds.lon_lower,
                bounds.lon_upper
            ],
            |row| {
                Ok(NearbyStation {
                    name: row.get(0)?,
                    latitude: row.get(1)?,
                    longitude: row.get(2)?,
                })
            },
        )?;
        let collected = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(collected)
    }
}

fn parse_number<T: std::str::FromStr>(text: &str, what: &str) -> Result<T, CtaError> {
    text.parse::<T>()
        .map_err(|_| CtaError::Parse(format!("Invalid {what} '{text}'")))
}

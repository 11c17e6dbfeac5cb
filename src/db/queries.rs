//! Fixed SQL templates for every query the reports run.
//!
//! User-supplied values are only ever passed as bound `?` parameters.

/// One entry per distinct statement issued against the ridership store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    CountStations,
    CountStops,
    CountRideEntries,
    FirstRideDate,
    LastRideDate,
    TotalRiders,
    /// `?1` = LIKE pattern
    StationsLike,
    /// `?1` = exact station name, `?2` = day type code
    StationRidersByDayType,
    /// `?1` = exact station name
    StationRidersTotal,
    WeekdayRidersByStation,
    WeekdayRidersTotal,
    /// `?1` = lowercased color
    LineByColor,
    /// `?1` = lowercased color, `?2` = lowercased direction
    StopsByLineAndDirection,
    StopCountsByColorAndDirection,
    /// `?1` = exact station name
    YearlyRiders,
    /// `?1` = exact station name, `?2` = four-digit year
    MonthlyRiders,
    /// `?1` = station id, `?2` = four-digit year
    DailyRiders,
    /// `?1..?4` = lat lower, lat upper, lon lower, lon upper
    StationsInBox,
}

impl Query {
    pub fn sql(self) -> &'static str {
        match self {
            Query::CountStations => "SELECT COUNT(*) FROM Stations",
            Query::CountStops => "SELECT COUNT(*) FROM Stops",
            Query::CountRideEntries => "SELECT COUNT(*) FROM Ridership",
            Query::FirstRideDate => {
                "SELECT strftime('%Y-%m-%d', Ride_Date) FROM Ridership \
                 ORDER BY Ride_Date ASC LIMIT 1"
            }
            Query::LastRideDate => {
                "SELECT strftime('%Y-%m-%d', Ride_Date) FROM Ridership \
                 ORDER BY Ride_Date DESC LIMIT 1"
            }
            Query::TotalRiders => "SELECT COALESCE(SUM(Num_Riders), 0) FROM Ridership",
            Query::StationsLike => {
                "SELECT DISTINCT Station_ID, Station_Name FROM Stations \
                 WHERE Station_Name LIKE ?1 ORDER BY Station_Name ASC"
            }
            Query::StationRidersByDayType => {
                "SELECT SUM(Ridership.Num_Riders) FROM Stations \
                 JOIN Ridership ON Ridership.Station_ID = Stations.Station_ID \
                 WHERE Stations.Station_Name = ?1 AND Ridership.Type_Of_Day = ?2"
            }
            Query::StationRidersTotal => {
                "SELECT SUM(Ridership.Num_Riders) FROM Stations \
                 JOIN Ridership ON Ridership.Station_ID = Stations.Station_ID \
                 WHERE Stations.Station_Name = ?1"
            }
            Query::WeekdayRidersByStation => {
                "SELECT Stations.Station_Name, SUM(Ridership.Num_Riders) AS Total_Riders \
                 FROM Stations JOIN Ridership ON Stations.Station_ID = Ridership.Station_ID \
                 WHERE Ridership.Type_Of_Day = 'W' \
                 GROUP BY Stations.Station_Name ORDER BY Total_Riders DESC"
            }
            Query::WeekdayRidersTotal => {
                "SELECT COALESCE(SUM(Num_Riders), 0) FROM Ridership WHERE Type_Of_Day = 'W'"
            }
            Query::LineByColor => "SELECT Line_ID FROM Lines WHERE LOWER(Color) = ?1",
            Query::StopsByLineAndDirection => {
                "SELECT Stops.Stop_Name, Stops.Direction, Stops.ADA FROM Stops \
                 JOIN StopDetails ON Stops.Stop_ID = StopDetails.Stop_ID \
                 JOIN Lines ON StopDetails.Line_ID = Lines.Line_ID \
                 WHERE LOWER(Lines.Color) = ?1 AND LOWER(Stops.Direction) = ?2 \
                 ORDER BY Stops.Stop_Name ASC"
            }
            Query::StopCountsByColorAndDirection => {
                "SELECT Lines.Color, Stops.Direction, COUNT(*) AS Stops_Count FROM Lines \
                 JOIN StopDetails ON Lines.Line_ID = StopDetails.Line_ID \
                 JOIN Stops ON StopDetails.Stop_ID = Stops.Stop_ID \
                 GROUP BY Lines.Color, Stops.Direction \
                 ORDER BY Lines.Color ASC, Stops.Direction ASC"
            }
            Query::YearlyRiders => {
                "SELECT strftime('%Y', Ride_Date) AS Year, SUM(Num_Riders) AS Total_Riders \
                 FROM Stations JOIN Ridership ON Stations.Station_ID = Ridership.Station_ID \
                 WHERE Station_Name = ?1 GROUP BY Year ORDER BY Year ASC"
            }
            Query::MonthlyRiders => {
                "SELECT strftime('%m', Ride_Date) AS Month, strftime('%m/%Y', Ride_Date), \
                 SUM(Num_Riders) FROM Stations \
                 JOIN Ridership ON Stations.Station_ID = Ridership.Station_ID \
                 WHERE Station_Name = ?1 AND strftime('%Y', Ride_Date) = ?2 \
                 GROUP BY Month ORDER BY Month ASC"
            }
            Query::DailyRiders => {
                "SELECT strftime('%Y-%m-%d', Ride_Date) AS Day, SUM(Num_Riders) \
                 FROM Ridership WHERE Station_ID = ?1 AND strftime('%Y', Ride_Date) = ?2 \
                 GROUP BY Day ORDER BY Day ASC"
            }
            Query::StationsInBox => {
                "SELECT DISTINCT Stations.Station_Name, Stops.Latitude, Stops.Longitude \
                 FROM Stops JOIN Stations ON Stations.Station_ID = Stops.Station_ID \
                 WHERE ?1 <= Stops.Latitude AND Stops.Latitude <= ?2 \
                 AND ?3 <= Stops.Longitude AND Stops.Longitude <= ?4 \
                 ORDER BY Stations.Station_Name ASC"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Query; 18] = [
        Query::CountStations,
        Query::CountStops,
        Query::CountRideEntries,
        Query::FirstRideDate,
        Query::LastRideDate,
        Query::TotalRiders,
        Query::StationsLike,
        Query::StationRidersByDayType,
        Query::StationRidersTotal,
        Query::WeekdayRidersByStation,
        Query::WeekdayRidersTotal,
        Query::LineByColor,
        Query::StopsByLineAndDirection,
        Query::StopCountsByColorAndDirection,
        Query::YearlyRiders,
        Query::MonthlyRiders,
        Query::DailyRiders,
        Query::StationsInBox,
    ];

    #[test]
    fn test_every_template_prepares_against_schema() {
        let conn = crate::db::fixture::schema_only();
        for query in ALL {
            assert!(
                conn.prepare(query.sql()).is_ok(),
                "{query:?} failed to prepare"
            );
        }
    }

    #[test]
    fn test_templates_are_read_only() {
        for query in ALL {
            let sql = query.sql().to_uppercase();
            assert!(sql.trim_start().starts_with("SELECT"), "{query:?}");
            for verb in ["INSERT", "UPDATE", "DELETE", "DROP"] {
                assert!(!sql.contains(verb), "{query:?} contains {verb}");
            }
        }
    }
}

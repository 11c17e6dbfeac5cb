mod resolver;
mod ridership;
mod stops;
mod geo;

pub use resolver::{resolve, resolve_unique, search_stations, Resolution};
pub use ridership::{
    daily_comparison, monthly_ridership, ridership_breakdown, weekday_ranking,
    yearly_ridership, DailyComparison, MonthlyRidership, RidershipBreakdown, StationDays,
    WeekdayRanking, YearlyRidership,
};
pub use stops::{find_line, stop_count_summary, stops_on_line, LineStops, StopCountSummary};
pub use geo::{
    nearby_stations, parse_coordinate, validate_latitude, validate_longitude, BoundingBox,
    NearbyStations, LATITUDE_RANGE, LONGITUDE_RANGE, MAP_EXTENT,
};

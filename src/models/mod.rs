mod station;
mod stop;
mod ridership;

pub use station::{NearbyStation, Station};
pub use stop::{Direction, StopCount, StopListing};
pub use ridership::{
    DailyTotal, DayType, GeneralStats, MonthTotal, StationRidership, YearTotal,
};

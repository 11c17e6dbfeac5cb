use chrono::Datelike;

use crate::db::Database;
use crate::error::{CtaError, ReportError};
use crate::models::{DailyTotal, DayType, MonthTotal, Station, StationRidership, YearTotal};
use crate::visualization::percentage;

/// Ridership at one station split by day type.
#[derive(Debug, Clone, PartialEq)]
pub struct RidershipBreakdown {
    pub station_name: String,
    pub weekday: i64,
    pub saturday: i64,
    pub sunday_holiday: i64,
    pub total: i64,
}

impl RidershipBreakdown {
    /// Each day type with its rider count and percentage of the station total.
    pub fn shares(&self) -> [(DayType, i64, f64); 3] {
        [
            (DayType::Weekday, self.weekday),
            (DayType::Saturday, self.saturday),
            (DayType::SundayHoliday, self.sunday_holiday),
        ]
        .map(|(day, riders)| (day, riders, percentage(riders, self.total)))
    }
}

/// Look up a station by exact name and total its riders per day type.
pub fn ridership_breakdown(db: &Database, name: &str) -> Result<RidershipBreakdown, CtaError> {
    let Some(weekday) = db.station_riders(name, Some(DayType::Weekday))? else {
        return Err(ReportError::NoData.into());
    };
    let saturday = db.station_riders(name, Some(DayType::Saturday))?;
    let sunday_holiday = db.station_riders(name, Some(DayType::SundayHoliday))?;
    let total = db.station_riders(name, None)?;

    Ok(RidershipBreakdown {
        station_name: name.to_string(),
        weekday,
        saturday: saturday.unwrap_or(0),
        sunday_holiday: sunday_holiday.unwrap_or(0),
        total: total.unwrap_or(0),
    })
}

/// Weekday riders per station, busiest first.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayRanking {
    pub stations: Vec<StationRidership>,
    /// Weekday riders across the whole network
    pub total: i64,
}

impl WeekdayRanking {
    pub fn share(&self, station: &StationRidership) -> f64 {
        percentage(station.riders, self.total)
    }
}

pub fn weekday_ranking(db: &Database) -> Result<WeekdayRanking, CtaError> {
    let stations = db.weekday_riders_by_station()?;
    let total = db.weekday_riders_total()?;
    Ok(WeekdayRanking { stations, total })
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearlyRidership {
    pub station: Station,
    pub years: Vec<YearTotal>,
}

pub fn yearly_ridership(db: &Database, station: Station) -> Result<YearlyRidership, CtaError> {
    let years = db.yearly_riders(&station.name)?;
    Ok(YearlyRidership { station, years })
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRidership {
    pub station: Station,
    pub year: String,
    pub months: Vec<MonthTotal>,
}

pub fn monthly_ridership(
    db: &Database,
    station: Station,
    year: &str,
) -> Result<MonthlyRidership, CtaError> {
    let months = db.monthly_riders(&station.name, year)?;
    Ok(MonthlyRidership {
        station,
        year: year.to_string(),
        months,
    })
}

/// Daily totals for one station over one year.
#[derive(Debug, Clone, PartialEq)]
pub struct StationDays {
    pub station: Station,
    pub days: Vec<DailyTotal>,
}

impl StationDays {
    /// The first and last `n` days; every day once if there are no more than `2n`.
    pub fn head_and_tail(&self, n: usize) -> Vec<&DailyTotal> {
        if self.days.len() <= 2 * n {
            return self.days.iter().collect();
        }
        self.days[..n]
            .iter()
            .chain(&self.days[self.days.len() - n..])
            .collect()
    }

    /// Riders keyed by day of year, so stations with missing dates still line up.
    pub fn by_day_of_year(&self) -> Vec<(f64, f64)> {
        self.days
            .iter()
            .map(|d| (d.date.ordinal() as f64, d.riders as f64))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyComparison {
    pub year: String,
    pub first: StationDays,
    pub second: StationDays,
}

pub fn daily_comparison(
    db: &Database,
    year: &str,
    first: Station,
    second: Station,
) -> Result<DailyComparison, CtaError> {
    let first_days = db.daily_riders(first.id, year)?;
    let second_days = db.daily_riders(second.id, year)?;
    Ok(DailyComparison {
        year: year.to_string(),
        first: StationDays {
            station: first,
            days: first_days,
        },
        second: StationDays {
            station: second,
            days: second_days,
        },
    })
}

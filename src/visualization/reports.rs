//! Plain-text rendering of each report.
//!
//! Every function returns the report body with one `\n` per line.

use crate::analysis::{
    DailyComparison, LineStops, MonthlyRidership, NearbyStations, RidershipBreakdown,
    StationDays, StopCountSummary, WeekdayRanking, YearlyRidership,
};
use crate::models::{GeneralStats, Station};

use super::format::{format_percent, group_thousands, trim_coordinate};

const DAILY_PREVIEW_DAYS: usize = 5;

pub fn format_general_stats(stats: &GeneralStats) -> String {
    let date_range = match (&stats.first_date, &stats.last_date) {
        (Some(first), Some(last)) => format!("{first} - {last}"),
        _ => "n/a".to_string(),
    };

    let mut output = String::from("General Statistics:\n");
    output.push_str(&format!(
        "  # of stations: {}\n",
        group_thousands(stats.stations)
    ));
    output.push_str(&format!("  # of stops: {}\n", group_thousands(stats.stops)));
    output.push_str(&format!(
        "  # of ride entries: {}\n",
        group_thousands(stats.ride_entries)
    ));
    output.push_str(&format!("  date range: {date_range}\n"));
    output.push_str(&format!(
        "  Total ridership: {}\n",
        group_thousands(stats.total_riders)
    ));
    output
}

pub fn format_station_matches(stations: &[Station]) -> String {
    stations.iter().map(|s| format!("{s}\n")).collect()
}

pub fn format_ridership_breakdown(breakdown: &RidershipBreakdown) -> String {
    let mut output = format!(
        " Percentage of ridership for the {} station: \n",
        breakdown.station_name
    );
    for (day_type, riders, share) in breakdown.shares() {
        output.push_str(&format!(
            "  {day_type} ridership: {} ({})\n",
            group_thousands(riders),
            format_percent(share)
        ));
    }
    output.push_str(&format!(
        "  Total ridership: {}\n",
        group_thousands(breakdown.total)
    ));
    output
}

pub fn format_weekday_ranking(ranking: &WeekdayRanking) -> String {
    let mut output = String::from("Ridership on Weekdays for Each Station\n");
    for station in &ranking.stations {
        output.push_str(&format!(
            "{} : {} ({})\n",
            station.name,
            group_thousands(station.riders),
            format_percent(ranking.share(station))
        ));
    }
    output
}

pub fn format_line_stops(line: &LineStops) -> String {
    line.stops
        .iter()
        .map(|stop| {
            let access = if stop.accessible {
                "handicap accessible"
            } else {
                "not handicap accessible"
            };
            format!("{} : direction = {} ({access})\n", stop.name, stop.direction)
        })
        .collect()
}

pub fn format_stop_counts(summary: &StopCountSummary) -> String {
    let mut output = String::from("Number of Stops For Each Color By Direction\n");
    for count in &summary.counts {
        output.push_str(&format!(
            "{} going {} : {} ({})\n",
            count.color,
            count.direction,
            count.count,
            format_percent(summary.share(count))
        ));
    }
    output
}

pub fn format_yearly_ridership(yearly: &YearlyRidership) -> String {
    let mut output = format!("Yearly Ridership at {}\n", yearly.station.name);
    for year in &yearly.years {
        output.push_str(&format!(
            "{} : {}\n",
            year.year,
            group_thousands(year.riders)
        ));
    }
    output
}

pub fn format_monthly_ridership(monthly: &MonthlyRidership) -> String {
    let mut output = format!(
        "Monthly Ridership at {} for {}\n",
        monthly.station.name, monthly.year
    );
    for month in &monthly.months {
        output.push_str(&format!(
            "{} : {}\n",
            month.label,
            group_thousands(month.riders)
        ));
    }
    output
}

fn format_station_days(position: usize, series: &StationDays) -> String {
    let mut output = format!(
        "Station {position}: {} {}\n",
        series.station.id, series.station.name
    );
    for day in series.head_and_tail(DAILY_PREVIEW_DAYS) {
        output.push_str(&format!("{} {}\n", day.date.format("%Y-%m-%d"), day.riders));
    }
    output
}

pub fn format_daily_comparison(comparison: &DailyComparison) -> String {
    let mut output = format_station_days(1, &comparison.first);
    output.push_str(&format_station_days(2, &comparison.second));
    output
}

pub fn format_nearby_stations(nearby: &NearbyStations) -> String {
    let mut output = String::from("\nList of Stations Within a Mile\n");
    for station in &nearby.stations {
        output.push_str(&format!(
            "{} : ({}, {})\n",
            station.name,
            trim_coordinate(station.latitude),
            trim_coordinate(station.longitude)
        ));
    }
    output
}

mod format;
mod reports;
mod tables;
mod charts;

pub use format::{format_percent, group_thousands, percentage, trim_coordinate};
pub use reports::{
    format_daily_comparison, format_general_stats, format_line_stops, format_monthly_ridership,
    format_nearby_stations, format_ridership_breakdown, format_station_matches,
    format_stop_counts, format_weekday_ranking, format_yearly_ridership,
};
pub use tables::{format_general_stats_table, print_general_stats_table};
pub use charts::{
    daily_comparison_chart, monthly_chart, nearby_chart, yearly_chart, ChartKind, ChartRenderer,
    ChartSpec, Series, TextChartRenderer,
};

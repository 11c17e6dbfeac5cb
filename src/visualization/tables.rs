use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::models::GeneralStats;

use super::format::group_thousands;

/// Format the network-wide statistics as a table.
pub fn format_general_stats_table(stats: &GeneralStats) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "General Statistics".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);

    table.add_row(vec![
        Cell::new("Stations"),
        Cell::new(group_thousands(stats.stations)),
    ]);
    table.add_row(vec![
        Cell::new("Stops"),
        Cell::new(group_thousands(stats.stops)),
    ]);
    table.add_row(vec![
        Cell::new("Ride entries"),
        Cell::new(group_thousands(stats.ride_entries)),
    ]);
    table.add_row(vec![
        Cell::new("First ride date"),
        Cell::new(stats.first_date.as_deref().unwrap_or("n/a")),
    ]);
    table.add_row(vec![
        Cell::new("Last ride date"),
        Cell::new(stats.last_date.as_deref().unwrap_or("n/a")),
    ]);
    table.add_row(vec![
        Cell::new("Total ridership"),
        Cell::new(group_thousands(stats.total_riders)),
    ]);

    output.push_str(&format!("{table}\n"));
    output
}

/// Print the network-wide statistics table.
pub fn print_general_stats_table(stats: &GeneralStats) {
    print!("{}", format_general_stats_table(stats));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> GeneralStats {
        GeneralStats {
            stations: 147,
            stops: 302,
            ride_entries: 1_070_894,
            first_date: Some("2001-01-01".to_string()),
            last_date: Some("2021-07-31".to_string()),
            total_riders: 3_377_404_512,
        }
    }

    #[test]
    fn test_format_general_stats_table_contains_metrics() {
        let output = format_general_stats_table(&sample_stats());
        assert!(output.contains("General Statistics"));
        assert!(output.contains("Stations"));
        assert!(output.contains("Ride entries"));
        assert!(output.contains("Total ridership"));
    }

    #[test]
    fn test_format_general_stats_table_groups_values() {
        let output = format_general_stats_table(&sample_stats());
        assert!(output.contains("1,070,894"));
        assert!(output.contains("3,377,404,512"));
        assert!(output.contains("2021-07-31"));
    }

    #[test]
    fn test_format_general_stats_table_without_dates() {
        let mut stats = sample_stats();
        stats.first_date = None;
        stats.last_date = None;
        assert!(format_general_stats_table(&stats).contains("n/a"));
    }
}

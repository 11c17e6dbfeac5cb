//! Interactive menu loop and report dispatcher.
//!
//! A [`Session`] reads answers from any `BufRead` and writes report text to any
//! `Write`, so the whole dialogue can be driven from tests without a terminal.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::analysis::{
    daily_comparison, find_line, monthly_ridership, nearby_stations, parse_coordinate,
    resolve_unique, ridership_breakdown, search_stations, stop_count_summary, stops_on_line,
    validate_latitude, validate_longitude, weekday_ranking, yearly_ridership,
};
use crate::db::Database;
use crate::error::{CtaError, ReportError};
use crate::menu::{MenuCommand, ReportId};
use crate::visualization::{
    daily_comparison_chart, format_daily_comparison, format_general_stats, format_line_stops,
    format_monthly_ridership, format_nearby_stations, format_ridership_breakdown,
    format_station_matches, format_stop_counts, format_weekday_ranking, format_yearly_ridership,
    monthly_chart, nearby_chart, yearly_chart, ChartRenderer, ChartSpec,
};

pub const WELCOME: &str = "** Welcome to CTA L analysis app **";
pub const MENU_PROMPT: &str = "Please enter a command (1-9, x to exit): ";
pub const PLOT_PROMPT: &str = "Plot? (y/n) ";

const STATION_PATTERN_PROMPT: &str = "Enter a station name (wildcards _ and %): ";

/// Text produced by one report, plus the chart it can offer.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutput {
    pub text: String,
    pub chart: Option<ChartSpec>,
}

impl ReportOutput {
    fn text(text: String) -> Self {
        ReportOutput { text, chart: None }
    }

    fn with_chart(text: String, chart: ChartSpec) -> Self {
        ReportOutput {
            text,
            chart: Some(chart),
        }
    }
}

pub struct Session<'a, R, W> {
    db: &'a Database,
    renderer: &'a dyn ChartRenderer,
    map_image: Option<PathBuf>,
    input: R,
    output: W,
    at_eof: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(db: &'a Database, renderer: &'a dyn ChartRenderer, input: R, output: W) -> Self {
        Session {
            db,
            renderer,
            map_image: None,
            input,
            output,
            at_eof: false,
        }
    }

    pub fn with_map_image(mut self, map_image: Option<PathBuf>) -> Self {
        self.map_image = map_image;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show a prompt and read one line of input; empty once input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<String, CtaError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.at_eof = true;
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Print the banner and statistics, then serve menu commands until `x` or end of input.
    pub fn run(&mut self) -> Result<(), CtaError> {
        writeln!(self.output, "{WELCOME}")?;
        writeln!(self.output)?;
        let stats = self.db.general_stats()?;
        writeln!(self.output, "{}", format_general_stats(&stats))?;

        loop {
            let line = self.prompt(MENU_PROMPT)?;
            if self.at_eof && line.is_empty() {
                writeln!(self.output)?;
                break;
            }
            match line.parse::<MenuCommand>() {
                Ok(MenuCommand::Exit) => break,
                Ok(MenuCommand::Report(report)) => self.dispatch(report)?,
                Err(err) => writeln!(self.output, "{err}\n")?,
            }
        }
        Ok(())
    }

    /// Run one report and print its outcome; report-level failures are not returned.
    pub fn dispatch(&mut self, report: ReportId) -> Result<(), CtaError> {
        info!(report = report.number(), "running report");
        if report.reads_input() {
            writeln!(self.output)?;
        }

        match self.run_report(report) {
            Ok(output) => self.finish(output),
            Err(CtaError::Report(err)) => {
                writeln!(self.output, "{err}\n")?;
                Ok(())
            }
            Err(err @ (CtaError::Database(_) | CtaError::Parse(_) | CtaError::Validation(_))) => {
                warn!(report = report.number(), error = %err, "report failed");
                writeln!(self.output, "**Query failed: {err}\n")?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn finish(&mut self, output: ReportOutput) -> Result<(), CtaError> {
        write!(self.output, "{}", output.text)?;
        writeln!(self.output)?;

        if let Some(chart) = output.chart {
            let answer = self.prompt(PLOT_PROMPT)?;
            writeln!(self.output)?;
            if answer.trim() == "y" {
                self.renderer.render(&chart, &mut self.output)?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }

    fn run_report(&mut self, report: ReportId) -> Result<ReportOutput, CtaError> {
        match report {
            ReportId::NameSearch => self.name_search(),
            ReportId::RidershipBreakdown => self.ridership_breakdown(),
            ReportId::WeekdayRanking => {
                let ranking = weekday_ranking(self.db)?;
                Ok(ReportOutput::text(format_weekday_ranking(&ranking)))
            }
            ReportId::LineStops => self.line_stops(),
            ReportId::StopCounts => {
                let summary = stop_count_summary(self.db)?;
                Ok(ReportOutput::text(format_stop_counts(&summary)))
            }
            ReportId::YearlyRidership => self.yearly_ridership(),
            ReportId::MonthlyRidership => self.monthly_ridership(),
            ReportId::DailyComparison => self.daily_comparison(),
            ReportId::NearbyStations => self.nearby_stations(),
        }
    }

    fn name_search(&mut self) -> Result<ReportOutput, CtaError> {
        let pattern = self.prompt("Enter partial station name (wildcards _ and %): ")?;
        let stations = search_stations(self.db, &pattern)?;
        if stations.is_empty() {
            return Err(ReportError::NoStationsFound.into());
        }
        Ok(ReportOutput::text(format_station_matches(&stations)))
    }

    fn ridership_breakdown(&mut self) -> Result<ReportOutput, CtaError> {
        let name = self.prompt("Enter the name of the station you would like to analyze: ")?;
        let breakdown = ridership_breakdown(self.db, &name)?;
        Ok(ReportOutput::text(format_ridership_breakdown(&breakdown)))
    }

    fn line_stops(&mut self) -> Result<ReportOutput, CtaError> {
        let color = self.prompt("Enter a line color (e.g. Red or Yellow): ")?;
        find_line(self.db, &color)?;
        let direction = self.prompt(" Enter a direction (N/S/W/E): ")?;
        let line = stops_on_line(self.db, &color, &direction)?;
        Ok(ReportOutput::text(format_line_stops(&line)))
    }

    fn yearly_ridership(&mut self) -> Result<ReportOutput, CtaError> {
        let pattern = self.prompt(STATION_PATTERN_PROMPT)?;
        let station = resolve_unique(self.db, &pattern)?;
        let yearly = yearly_ridership(self.db, station)?;
        Ok(ReportOutput::with_chart(
            format_yearly_ridership(&yearly),
            yearly_chart(&yearly),
        ))
    }

    fn monthly_ridership(&mut self) -> Result<ReportOutput, CtaError> {
        let pattern = self.prompt(STATION_PATTERN_PROMPT)?;
        let station = resolve_unique(self.db, &pattern)?;
        let year = self.prompt(" Enter a year: ")?;
        let monthly = monthly_ridership(self.db, station, year.trim())?;
        Ok(ReportOutput::with_chart(
            format_monthly_ridership(&monthly),
            monthly_chart(&monthly),
        ))
    }

    fn daily_comparison(&mut self) -> Result<ReportOutput, CtaError> {
        let year = self.prompt("Year to compare against? ")?;
        writeln!(self.output)?;
        let first_pattern = self.prompt("Enter station 1 (wildcards _ and %): ")?;
        let first = resolve_unique(self.db, &first_pattern)?;
        writeln!(self.output)?;
        let second_pattern = self.prompt("Enter station 2 (wildcards _ and %): ")?;
        let second = resolve_unique(self.db, &second_pattern)?;

        let comparison = daily_comparison(self.db, year.trim(), first, second)?;
        Ok(ReportOutput::with_chart(
            format_daily_comparison(&comparison),
            daily_comparison_chart(&comparison),
        ))
    }

    fn nearby_stations(&mut self) -> Result<ReportOutput, CtaError> {
        let latitude = self.prompt("Enter a latitude: ")?;
        let latitude = validate_latitude(parse_coordinate(&latitude)?)?;
        let longitude = self.prompt("Enter a longitude: ")?;
        let longitude = validate_longitude(parse_coordinate(&longitude)?)?;

        let nearby = nearby_stations(self.db, latitude, longitude)?;
        let chart = nearby_chart(&nearby, self.map_image.as_deref());
        Ok(ReportOutput::with_chart(
            format_nearby_stations(&nearby),
            chart,
        ))
    }
}

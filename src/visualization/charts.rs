use std::io::Write;
use std::path::{Path, PathBuf};

use colored::{Color, Colorize};
use tracing::warn;

use crate::analysis::{DailyComparison, MonthlyRidership, NearbyStations, YearlyRidership, MAP_EXTENT};
use crate::error::CtaError;

use super::format::{group_thousands, trim_coordinate};

const SERIES_GLYPHS: [char; 6] = ['*', 'o', '+', 'x', '#', '@'];
const SERIES_COLORS: [Color; 6] = [
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Red,
    Color::Magenta,
    Color::Cyan,
];
const POINT_MARKERS: &str = "123456789abcdefghijklmnopqrstuvwxyz";
const Y_LABEL_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Scatter,
}

/// A labeled series of `(x, y)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    /// Per-point annotations; empty when the points are unlabeled
    pub point_labels: Vec<String>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Series {
            label: label.into(),
            points,
            point_labels: Vec::new(),
        }
    }
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
    pub series: Vec<Series>,
    /// Fixed `[x_min, x_max, y_min, y_max]`; derived from the data when absent
    pub extent: Option<[f64; 4]>,
    pub background: Option<PathBuf>,
}

/// Draws a chart description to an output stream.
pub trait ChartRenderer {
    fn render(&self, chart: &ChartSpec, out: &mut dyn Write) -> Result<(), CtaError>;
}

/// Renders charts as character grids for the terminal.
#[derive(Debug, Clone)]
pub struct TextChartRenderer {
    pub width: usize,
    pub height: usize,
    pub color: bool,
}

impl Default for TextChartRenderer {
    fn default() -> Self {
        TextChartRenderer {
            width: 72,
            height: 20,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    fn of(chart: &ChartSpec) -> Self {
        if let Some([x_min, x_max, y_min, y_max]) = chart.extent {
            return Bounds {
                x_min,
                x_max,
                y_min,
                y_max,
            };
        }

        let mut bounds = Bounds {
            x_min: f64::MAX,
            x_max: f64::MIN,
            y_min: f64::MAX,
            y_max: f64::MIN,
        };
        for (x, y) in chart.series.iter().flat_map(|s| s.points.iter()) {
            bounds.x_min = bounds.x_min.min(*x);
            bounds.x_max = bounds.x_max.max(*x);
            bounds.y_min = bounds.y_min.min(*y);
            bounds.y_max = bounds.y_max.max(*y);
        }

        if bounds.x_min > bounds.x_max {
            bounds.x_min = 0.0;
            bounds.x_max = 1.0;
        }
        if bounds.y_min > bounds.y_max {
            bounds.y_min = 0.0;
            bounds.y_max = 1.0;
        }
        if bounds.x_min >= bounds.x_max {
            bounds.x_max = bounds.x_min + 1.0;
        }
        if bounds.y_min >= bounds.y_max {
            bounds.y_max = bounds.y_min + 1.0;
        }
        bounds
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Mark {
    glyph: char,
    series: usize,
}

impl TextChartRenderer {
    fn column(&self, bounds: &Bounds, x: f64) -> usize {
        let t = (x - bounds.x_min) / (bounds.x_max - bounds.x_min);
        ((t * (self.width - 1) as f64).round() as usize).min(self.width - 1)
    }

    fn row(&self, bounds: &Bounds, y: f64) -> usize {
        let t = (y - bounds.y_min) / (bounds.y_max - bounds.y_min);
        let from_bottom = ((t * (self.height - 1) as f64).round() as usize).min(self.height - 1);
        self.height - 1 - from_bottom
    }

    fn plot(&self, chart: &ChartSpec, bounds: &Bounds) -> Vec<Vec<Option<Mark>>> {
        let mut grid = vec![vec![None; self.width]; self.height];
        let mut marker_index = 0;

        for (series_index, series) in chart.series.iter().enumerate() {
            let glyph = SERIES_GLYPHS[series_index % SERIES_GLYPHS.len()];
            let visible: Vec<(f64, f64)> = series
                .points
                .iter()
                .copied()
                .filter(|(x, y)| bounds.contains(*x, *y))
                .collect();

            if chart.kind == ChartKind::Line {
                for pair in visible.windows(2) {
                    self.connect(&mut grid, bounds, pair[0], pair[1], glyph, series_index);
                }
            }

            for (x, y) in &visible {
                let glyph = if series.point_labels.is_empty() {
                    glyph
                } else {
                    let marker = POINT_MARKERS.chars().nth(marker_index).unwrap_or(glyph);
                    marker_index += 1;
                    marker
                };
                grid[self.row(bounds, *y)][self.column(bounds, *x)] = Some(Mark {
                    glyph,
                    series: series_index,
                });
            }
        }
        grid
    }

    /// Fill the columns between two consecutive points of a line series.
    fn connect(
        &self,
        grid: &mut [Vec<Option<Mark>>],
        bounds: &Bounds,
        from: (f64, f64),
        to: (f64, f64),
        glyph: char,
        series: usize,
    ) {
        let (c0, c1) = (self.column(bounds, from.0), self.column(bounds, to.0));
        let (r0, r1) = (self.row(bounds, from.1) as f64, self.row(bounds, to.1) as f64);
        let (start, end) = (c0.min(c1), c0.max(c1));
        for col in start..=end {
            let t = if c1 == c0 {
                0.0
            } else {
                (col as f64 - c0 as f64) / (c1 as f64 - c0 as f64)
            };
            let row = (r0 + (r1 - r0) * t).round() as usize;
            let cell = &mut grid[row.min(self.height - 1)][col];
            if cell.is_none() {
                *cell = Some(Mark { glyph, series });
            }
        }
    }

    fn paint(&self, mark: Mark) -> String {
        let glyph = mark.glyph.to_string();
        if self.color {
            glyph
                .color(SERIES_COLORS[mark.series % SERIES_COLORS.len()])
                .to_string()
        } else {
            glyph
        }
    }
}

impl ChartRenderer for TextChartRenderer {
    fn render(&self, chart: &ChartSpec, out: &mut dyn Write) -> Result<(), CtaError> {
        if self.width < 2 || self.height < 2 {
            return Err(CtaError::Validation(format!(
                "chart area {}x{} is too small",
                self.width, self.height
            )));
        }

        if self.color {
            writeln!(out, "{}", chart.title.bold())?;
        } else {
            writeln!(out, "{}", chart.title)?;
        }
        if let Some(path) = &chart.background {
            if path.exists() {
                writeln!(out, "map: {}", path.display())?;
            } else {
                warn!(path = %path.display(), "background map image not found");
            }
        }
        writeln!(out, "{}", chart.y_label)?;

        let bounds = Bounds::of(chart);
        let grid = self.plot(chart, &bounds);
        let middle = self.height / 2;

        for (r, cells) in grid.iter().enumerate() {
            let label = if r == 0 {
                format_axis_value(bounds.y_max)
            } else if r == self.height - 1 {
                format_axis_value(bounds.y_min)
            } else if r == middle {
                format_axis_value((bounds.y_min + bounds.y_max) / 2.0)
            } else {
                String::new()
            };
            let line: String = cells
                .iter()
                .map(|cell| match cell {
                    Some(mark) => self.paint(*mark),
                    None => " ".to_string(),
                })
                .collect();
            writeln!(out, "{label:>Y_LABEL_WIDTH$} |{}", line.trim_end())?;
        }

        writeln!(out, "{:>Y_LABEL_WIDTH$} +{}", "", "-".repeat(self.width))?;
        let x_min = trim_coordinate(bounds.x_min);
        let x_max = trim_coordinate(bounds.x_max);
        let gap = self.width.saturating_sub(x_min.len() + x_max.len());
        writeln!(
            out,
            "{:>Y_LABEL_WIDTH$}  {x_min}{}{x_max}",
            "",
            " ".repeat(gap)
        )?;
        writeln!(out, "{:>Y_LABEL_WIDTH$}  {}", "", chart.x_label)?;

        if chart.series.len() > 1 {
            for (i, series) in chart.series.iter().enumerate() {
                let mark = Mark {
                    glyph: SERIES_GLYPHS[i % SERIES_GLYPHS.len()],
                    series: i,
                };
                writeln!(out, "  {} {}", self.paint(mark), series.label)?;
            }
        }

        let mut marker_index = 0;
        for (i, series) in chart.series.iter().enumerate() {
            for (label, (x, y)) in series.point_labels.iter().zip(&series.points) {
                if !bounds.contains(*x, *y) {
                    continue;
                }
                if let Some(marker) = POINT_MARKERS.chars().nth(marker_index) {
                    let mark = Mark {
                        glyph: marker,
                        series: i,
                    };
                    writeln!(out, "  [{}] {label}", self.paint(mark))?;
                }
                marker_index += 1;
            }
        }
        Ok(())
    }
}

/// Axis label text; large values are grouped, small ones keep their decimals.
fn format_axis_value(value: f64) -> String {
    if value.abs() >= 1000.0 {
        group_thousands(value.round() as i64)
    } else {
        trim_coordinate((value * 100.0).round() / 100.0)
    }
}

pub fn yearly_chart(yearly: &YearlyRidership) -> ChartSpec {
    let points = yearly
        .years
        .iter()
        .map(|y| (y.year as f64, y.riders as f64))
        .collect();
    ChartSpec {
        title: format!("Yearly Ridership At {} Station", yearly.station.name),
        x_label: "Year".to_string(),
        y_label: "Number of Riders".to_string(),
        kind: ChartKind::Line,
        series: vec![Series::new(yearly.station.name.clone(), points)],
        extent: None,
        background: None,
    }
}

pub fn monthly_chart(monthly: &MonthlyRidership) -> ChartSpec {
    let points = monthly
        .months
        .iter()
        .map(|m| (m.month as f64, m.riders as f64))
        .collect();
    ChartSpec {
        title: format!(
            "Monthly Ridership At {} Station ({})",
            monthly.station.name, monthly.year
        ),
        x_label: "Month".to_string(),
        y_label: "Number of Riders".to_string(),
        kind: ChartKind::Line,
        series: vec![Series::new(monthly.station.name.clone(), points)],
        extent: None,
        background: None,
    }
}

/// Both stations plotted against day of year.
pub fn daily_comparison_chart(comparison: &DailyComparison) -> ChartSpec {
    ChartSpec {
        title: format!("Ridership Each Day of {}", comparison.year),
        x_label: "Day".to_string(),
        y_label: "Number of Riders".to_string(),
        kind: ChartKind::Line,
        series: vec![
            Series::new(
                comparison.first.station.name.clone(),
                comparison.first.by_day_of_year(),
            ),
            Series::new(
                comparison.second.station.name.clone(),
                comparison.second.by_day_of_year(),
            ),
        ],
        extent: None,
        background: None,
    }
}

/// Station markers over the fixed map extent; x is longitude, y is latitude.
pub fn nearby_chart(nearby: &NearbyStations, background: Option<&Path>) -> ChartSpec {
    let series = Series {
        label: "Stations".to_string(),
        points: nearby
            .stations
            .iter()
            .map(|s| (s.longitude, s.latitude))
            .collect(),
        point_labels: nearby.stations.iter().map(|s| s.name.clone()).collect(),
    };
    ChartSpec {
        title: "Stations Near You".to_string(),
        x_label: "Longitude".to_string(),
        y_label: "Latitude".to_string(),
        kind: ChartKind::Scatter,
        series: vec![series],
        extent: Some(MAP_EXTENT),
        background: background.map(Path::to_path_buf),
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CtaError;
use crate::visualization::TextChartRenderer;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "cta-analyzer.toml";

const MIN_CHART_WIDTH: usize = 20;
const MIN_CHART_HEIGHT: usize = 5;

/// Settings for the text chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    /// Plot area width in columns
    pub width: usize,
    /// Plot area height in rows
    pub height: usize,
    pub color: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 72,
            height: 20,
            color: true,
        }
    }
}

/// Application configuration, read from TOML and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Path to the ridership SQLite database
    pub database: PathBuf,
    /// Background image for the station map
    pub map_image: Option<PathBuf>,
    pub chart: ChartSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("CTA2_L_daily_ridership.db"),
            map_image: Some(PathBuf::from("chicago.png")),
            chart: ChartSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, CtaError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, CtaError> {
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    /// Load an explicit config file, else the default file if present, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, CtaError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn with_overrides(
        mut self,
        database: Option<PathBuf>,
        map_image: Option<PathBuf>,
        no_color: bool,
    ) -> Self {
        if let Some(database) = database {
            self.database = database;
        }
        if let Some(map_image) = map_image {
            self.map_image = Some(map_image);
        }
        if no_color {
            self.chart.color = false;
        }
        self
    }

    pub fn validate(&self) -> Result<(), CtaError> {
        if self.chart.width < MIN_CHART_WIDTH {
            return Err(CtaError::Validation(format!(
                "chart width must be at least {MIN_CHART_WIDTH}, got {}",
                self.chart.width
            )));
        }
        if self.chart.height < MIN_CHART_HEIGHT {
            return Err(CtaError::Validation(format!(
                "chart height must be at least {MIN_CHART_HEIGHT}, got {}",
                self.chart.height
            )));
        }
        Ok(())
    }

    pub fn renderer(&self) -> TextChartRenderer {
        TextChartRenderer {
            width: self.chart.width,
            height: self.chart.height,
            color: self.chart.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.database, PathBuf::from("CTA2_L_daily_ridership.db"));
        assert_eq!(config.map_image, Some(PathBuf::from("chicago.png")));
        assert_eq!(config.chart.width, 72);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str("database = \"other.db\"\n").unwrap();
        assert_eq!(config.database, PathBuf::from("other.db"));
        assert_eq!(config.chart, ChartSettings::default());
    }

    #[test]
    fn test_chart_section() {
        let config =
            AppConfig::from_toml_str("[chart]\nwidth = 40\nheight = 10\ncolor = false\n").unwrap();
        let renderer = config.renderer();
        assert_eq!(renderer.width, 40);
        assert_eq!(renderer.height, 10);
        assert!(!renderer.color);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AppConfig::from_toml_str("databse = \"typo.db\"\n").unwrap_err();
        assert!(matches!(err, CtaError::Config(_)));
    }

    #[test]
    fn test_small_chart_rejected() {
        let err = AppConfig::from_toml_str("[chart]\nwidth = 5\n").unwrap_err();
        assert!(matches!(err, CtaError::Validation(_)));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default().with_overrides(
            Some(PathBuf::from("cli.db")),
            Some(PathBuf::from("map.png")),
            true,
        );
        assert_eq!(config.database, PathBuf::from("cli.db"));
        assert_eq!(config.map_image, Some(PathBuf::from("map.png")));
        assert!(!config.chart.color);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "map_image = \"loop.png\"\n").unwrap();
        let config = AppConfig::discover(Some(&path)).unwrap();
        assert_eq!(config.map_image, Some(PathBuf::from("loop.png")));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/cta.toml")).unwrap_err();
        assert!(matches!(err, CtaError::Io(_)));
    }
}

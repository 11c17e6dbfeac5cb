pub mod analysis;
pub mod config;
pub mod db;
pub mod error;
pub mod menu;
pub mod models;
pub mod session;
pub mod visualization;

pub use analysis::{resolve, Resolution};
pub use config::AppConfig;
pub use db::Database;
pub use error::{CtaError, ReportError};
pub use menu::{MenuCommand, ReportId};
pub use models::{DayType, Direction, GeneralStats, Station};
pub use session::{ReportOutput, Session};
pub use visualization::{ChartRenderer, ChartSpec, TextChartRenderer};

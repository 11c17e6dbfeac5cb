use thiserror::Error;

/// Errors that can occur while loading configuration or querying the store.
#[derive(Error, Debug)]
pub enum CtaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Report(#[from] ReportError),
}

/// Non-fatal outcomes that end a single report invocation.
///
/// The `Display` text is the literal message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error("**No stations found...")]
    NoStationsFound,

    #[error("**No station found...")]
    NoStationFound,

    #[error("**Multiple stations found...")]
    MultipleStationsFound,

    #[error(" **No data found...")]
    NoData,

    #[error(" **No such line...")]
    NoSuchLine,

    #[error(" **That line does not run in the direction chosen...")]
    NoStopsInDirection,

    #[error("**Latitude entered is out of bounds...")]
    LatitudeOutOfBounds,

    #[error("**Longitude entered is out of bounds...")]
    LongitudeOutOfBounds,

    #[error("**Invalid number entered...")]
    InvalidNumber,

    #[error("**Error, unknown command, try again...")]
    UnknownCommand,
}

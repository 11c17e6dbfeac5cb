use chrono::NaiveDate;

/// Classification of a ridership record by the kind of day it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayType {
    Weekday,
    Saturday,
    SundayHoliday,
}

impl DayType {
    /// Code stored in `Ridership.Type_Of_Day`.
    pub fn code(self) -> &'static str {
        match self {
            DayType::Weekday => "W",
            DayType::Saturday => "A",
            DayType::SundayHoliday => "U",
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::SundayHoliday => write!(f, "Sunday/holiday"),
        }
    }
}

impl std::str::FromStr for DayType {
    type Err = crate::error::CtaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "W" => Ok(DayType::Weekday),
            "A" => Ok(DayType::Saturday),
            "U" => Ok(DayType::SundayHoliday),
            _ => Err(crate::error::CtaError::Parse(format!(
                "Unknown day type: '{s}'"
            ))),
        }
    }
}

/// Summed riders for one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRidership {
    pub name: String,
    pub riders: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTotal {
    pub year: i32,
    pub riders: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    /// Month number (1-12)
    pub month: u32,
    /// Display label in `MM/YYYY` form
    pub label: String,
    pub riders: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub riders: i64,
}

/// Whole-network counts shown when the tool starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralStats {
    pub stations: i64,
    pub stops: i64,
    pub ride_entries: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub total_riders: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_codes() {
        assert_eq!(DayType::Weekday.code(), "W");
        assert_eq!(DayType::Saturday.code(), "A");
        assert_eq!(DayType::SundayHoliday.code(), "U");
    }

    #[test]
    fn test_day_type_from_str() {
        assert_eq!("W".parse::<DayType>().unwrap(), DayType::Weekday);
        assert_eq!("U".parse::<DayType>().unwrap(), DayType::SundayHoliday);
        assert!("X".parse::<DayType>().is_err());
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(DayType::SundayHoliday.to_string(), "Sunday/holiday");
    }
}

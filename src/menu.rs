use crate::error::ReportError;

/// The nine canned analyses, numbered as they appear in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportId {
    NameSearch = 1,
    RidershipBreakdown = 2,
    WeekdayRanking = 3,
    LineStops = 4,
    StopCounts = 5,
    YearlyRidership = 6,
    MonthlyRidership = 7,
    DailyComparison = 8,
    NearbyStations = 9,
}

impl ReportId {
    pub const ALL: [ReportId; 9] = [
        ReportId::NameSearch,
        ReportId::RidershipBreakdown,
        ReportId::WeekdayRanking,
        ReportId::LineStops,
        ReportId::StopCounts,
        ReportId::YearlyRidership,
        ReportId::MonthlyRidership,
        ReportId::DailyComparison,
        ReportId::NearbyStations,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.number() == number)
    }

    /// Whether the report asks the user for parameters before running.
    pub fn reads_input(self) -> bool {
        !matches!(self, ReportId::WeekdayRanking | ReportId::StopCounts)
    }
}

/// A parsed line of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Report(ReportId),
    Exit,
}

impl std::str::FromStr for MenuCommand {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "x" {
            return Ok(MenuCommand::Exit);
        }
        s.parse::<u8>()
            .ok()
            .filter(|_| s.len() == 1)
            .and_then(ReportId::from_number)
            .map(MenuCommand::Report)
            .ok_or(ReportError::UnknownCommand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_maps_to_a_report() {
        for n in 1..=9u8 {
            let command: MenuCommand = n.to_string().parse().unwrap();
            match command {
                MenuCommand::Report(report) => assert_eq!(report.number(), n),
                MenuCommand::Exit => panic!("{n} parsed as exit"),
            }
        }
    }

    #[test]
    fn test_exit_command() {
        assert_eq!("x".parse::<MenuCommand>().unwrap(), MenuCommand::Exit);
        assert_eq!(" x\n".parse::<MenuCommand>().unwrap(), MenuCommand::Exit);
    }

    #[test]
    fn test_unknown_commands() {
        for input in ["0", "10", "X", "", "quit", "+5", "٣"] {
            assert_eq!(
                input.parse::<MenuCommand>().unwrap_err(),
                ReportError::UnknownCommand,
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_reads_input() {
        assert!(ReportId::NameSearch.reads_input());
        assert!(!ReportId::WeekdayRanking.reads_input());
        assert!(!ReportId::StopCounts.reads_input());
        assert!(ReportId::NearbyStations.reads_input());
    }
}

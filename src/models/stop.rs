/// Direction of travel served by a stop platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Single-character code used by the `Stops.Direction` column.
    pub fn code(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Direction {
    type Err = crate::error::CtaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => Err(crate::error::CtaError::Parse(format!(
                "Unknown direction: '{s}'"
            ))),
        }
    }
}

/// A stop on a given line and direction.
#[derive(Debug, Clone, PartialEq)]
pub struct StopListing {
    pub name: String,
    pub direction: Direction,
    /// ADA accessibility flag
    pub accessible: bool,
}

/// Number of stops served by a line color in one direction.
#[derive(Debug, Clone, PartialEq)]
pub struct StopCount {
    pub color: String,
    pub direction: Direction,
    pub count: i64,
}

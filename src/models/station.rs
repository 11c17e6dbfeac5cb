/// A station as stored in the `Stations` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: i64,
    pub name: String,
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.id, self.name)
    }
}

/// A station with a stop inside a geographic search box.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyStation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_display() {
        let station = Station {
            id: 40380,
            name: "Clark/Lake".to_string(),
        };
        assert_eq!(station.to_string(), "40380 : Clark/Lake");
    }
}

use std::fmt;

/// Coarse geographic grouping of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Europe,
    NorthAmerica,
    SouthAmerica,
    Asia,
    Oceania,
    Other,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Asia => "Asia",
            Region::Oceania => "Oceania",
            Region::Other => "Other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive lookup. Countries outside the table are `Other`.
pub fn region_for_country(country: &str) -> Region {
    match country {
        "Finland" | "Germany" | "France" | "UK" => Region::Europe,
        "USA" | "Canada" => Region::NorthAmerica,
        "Brazil" => Region::SouthAmerica,
        "India" | "Japan" => Region::Asia,
        "Australia" => Region::Oceania,
        _ => Region::Other,
    }
}

//! The user record and header column resolution.

/// Parsed age for a value that is not a decimal integer.
pub const UNPARSEABLE_AGE: i32 = -1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserRecord {
    pub name: String,
    pub age: String,
    pub country: String,
}

impl UserRecord {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            country: country.into(),
        }
    }

    pub fn parsed_age(&self) -> i32 {
        parse_age(&self.age)
    }
}

pub fn parse_age(raw: &str) -> i32 {
    raw.parse::<i32>().unwrap_or(UNPARSEABLE_AGE)
}

/// Positions of the known columns within a header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnPositions {
    pub name: Option<usize>,
    pub age: Option<usize>,
    pub country: Option<usize>,
}

impl ColumnPositions {
    pub fn from_headers(headers: &[String]) -> Self {
        let find = |key: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(key))
        };
        Self {
            name: find("name"),
            age: find("age"),
            country: find("country"),
        }
    }

    pub fn record_from_row(&self, row: &[String]) -> UserRecord {
        let cell = |position: Option<usize>| {
            position
                .and_then(|idx| row.get(idx))
                .cloned()
                .unwrap_or_default()
        };
        UserRecord {
            name: cell(self.name),
            age: cell(self.age),
            country: cell(self.country),
        }
    }
}

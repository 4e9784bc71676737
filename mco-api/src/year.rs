use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar year, the only request parameter of the data API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    pub const fn new(year: i32) -> Self {
        Year(year)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Year(year)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(Year)
    }
}

/// Inclusive bounds for the year selector.
///
/// Defaults to the span of the MOPITT record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub first: Year,
    pub last: Year,
}

impl YearRange {
    pub const MOPITT: YearRange = YearRange {
        first: Year(2000),
        last: Year(2024),
    };

    pub fn contains(&self, year: Year) -> bool {
        year >= self.first && year <= self.last
    }

    /// Clamp a year into the range, used to keep a slider value in bounds.
    pub fn clamp(&self, year: Year) -> Year {
        Year(year.0.clamp(self.first.0, self.last.0))
    }
}

impl Default for YearRange {
    fn default() -> Self {
        YearRange::MOPITT
    }
}

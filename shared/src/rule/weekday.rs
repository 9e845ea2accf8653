//! Weekday symbols used by `DIA_SEMANA` conditions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of week as stored in `condicao_json.dias`
///
/// Declaration order (MON..SUN) is the order toggles are rendered and
/// the order `dias` is emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All weekdays in declaration order
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Wire symbol ("MON", "TUE", ...)
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Mon => "MON",
            Self::Tue => "TUE",
            Self::Wed => "WED",
            Self::Thu => "THU",
            Self::Fri => "FRI",
            Self::Sat => "SAT",
            Self::Sun => "SUN",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unrecognized weekday symbol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown weekday symbol: {0}")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.symbol() == s)
            .ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Mon,
            chrono::Weekday::Tue => Self::Tue,
            chrono::Weekday::Wed => Self::Wed,
            chrono::Weekday::Thu => Self::Thu,
            chrono::Weekday::Fri => Self::Fri,
            chrono::Weekday::Sat => Self::Sat,
            chrono::Weekday::Sun => Self::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_matches_serde() {
        for day in Weekday::ALL {
            let json = serde_json::to_string(&day).unwrap();
            assert_eq!(json, format!("\"{}\"", day.symbol()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("FRI".parse::<Weekday>().unwrap(), Weekday::Fri);
        assert!("fri".parse::<Weekday>().is_err());
        assert!("FRIDAY".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sun);
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Mon);
    }
}

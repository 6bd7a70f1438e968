use std::fmt;
use std::str::FromStr;

/// Which most-popular ranking to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    Viewed,
    Shared,
}

impl PathType {
    pub const ALL: [PathType; 2] = [PathType::Viewed, PathType::Shared];

    /// Path segment used in the request URL.
    pub fn wire_value(&self) -> &'static str {
        match self {
            PathType::Viewed => "viewed",
            PathType::Shared => "shared",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PathType::Viewed => "Most Viewed",
            PathType::Shared => "Most Shared",
        }
    }
}

impl Default for PathType {
    fn default() -> Self {
        PathType::Viewed
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

impl FromStr for PathType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "viewed" => Ok(PathType::Viewed),
            "shared" => Ok(PathType::Shared),
            other => Err(format!("Unknown path type: {other} (expected viewed or shared)")),
        }
    }
}

/// Lookback window for the ranking, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    /// Day count as the API spells it in the URL.
    pub fn wire_value(&self) -> &'static str {
        match self {
            Period::Day => "1",
            Period::Week => "7",
            Period::Month => "30",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Period::Day => "Today",
            Period::Week => "This Week",
            Period::Month => "This Month",
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Week
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "day" => Ok(Period::Day),
            "7" | "week" => Ok(Period::Week),
            "30" | "month" => Ok(Period::Month),
            other => Err(format!("Unknown period: {other} (expected 1, 7 or 30)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_type_wire_values() {
        assert_eq!(PathType::Viewed.wire_value(), "viewed");
        assert_eq!(PathType::Shared.wire_value(), "shared");
        assert_eq!(PathType::default(), PathType::Viewed);
    }

    #[test]
    fn period_wire_values() {
        assert_eq!(Period::Day.wire_value(), "1");
        assert_eq!(Period::Week.wire_value(), "7");
        assert_eq!(Period::Month.wire_value(), "30");
        assert_eq!(Period::default(), Period::Week);
    }

    #[test]
    fn titles_differ_from_wire_values() {
        for path_type in PathType::ALL {
            assert_ne!(path_type.title(), path_type.wire_value());
        }
        for period in Period::ALL {
            assert_ne!(period.title(), period.wire_value());
        }
    }

    #[test]
    fn parse_from_cli_spellings() {
        assert_eq!("viewed".parse::<PathType>().unwrap(), PathType::Viewed);
        assert_eq!("Shared".parse::<PathType>().unwrap(), PathType::Shared);
        assert_eq!("7".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("month".parse::<Period>().unwrap(), Period::Month);
        assert!("yearly".parse::<Period>().is_err());
        assert!("liked".parse::<PathType>().is_err());
    }
}

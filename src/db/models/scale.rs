use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Time-bucket width for chart data.
///
/// Chart points are stored pre-aggregated per scale; the gateway only
/// selects which series to read. The accepted tokens are exactly
/// `5m 30m 1h 4h 1d 1w`; anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Scale {
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    /// The default when the caller omits the scale parameter.
    #[default]
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid scale '{0}', expected one of 5m 30m 1h 4h 1d 1w")]
pub struct InvalidScale(pub String);

impl Scale {
    /// Resolve a raw query token: empty means "use the default",
    /// a known token selects that bucket, anything else is invalid.
    pub fn resolve(raw: &str) -> Result<Scale, InvalidScale> {
        if raw.is_empty() {
            return Ok(Scale::default());
        }
        raw.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::FiveMinutes => "5m",
            Scale::ThirtyMinutes => "30m",
            Scale::OneHour => "1h",
            Scale::FourHours => "4h",
            Scale::OneDay => "1d",
            Scale::OneWeek => "1w",
        }
    }
}

impl FromStr for Scale {
    type Err = InvalidScale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5m" => Ok(Scale::FiveMinutes),
            "30m" => Ok(Scale::ThirtyMinutes),
            "1h" => Ok(Scale::OneHour),
            "4h" => Ok(Scale::FourHours),
            "1d" => Ok(Scale::OneDay),
            "1w" => Ok(Scale::OneWeek),
            other => Err(InvalidScale(other.to_string())),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_resolves_to_default() {
        assert_eq!(Scale::resolve(""), Ok(Scale::OneHour));
        assert_eq!(Scale::resolve("").unwrap(), Scale::default());
    }

    #[test]
    fn test_every_member_token_resolves() {
        for (token, scale) in [
            ("5m", Scale::FiveMinutes),
            ("30m", Scale::ThirtyMinutes),
            ("1h", Scale::OneHour),
            ("4h", Scale::FourHours),
            ("1d", Scale::OneDay),
            ("1w", Scale::OneWeek),
        ] {
            assert_eq!(Scale::resolve(token), Ok(scale));
            assert_eq!(scale.as_str(), token);
        }
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        assert_eq!(Scale::resolve("2h"), Err(InvalidScale("2h".to_string())));
        assert_eq!(Scale::resolve("1H"), Err(InvalidScale("1H".to_string())));
    }

    #[test]
    fn test_serializes_as_token() {
        let json = serde_json::to_string(&Scale::FiveMinutes).unwrap();
        assert_eq!(json, "\"5m\"");
    }
}

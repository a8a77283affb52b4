use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Wall-clock time of day stored as minutes since midnight.
///
/// Slot rules only ever compare times within a single clinic day, so an
/// integer minute count gives a total order with no timezone or DST
/// handling anywhere in the engine. Parsing from `"HH:MM"` happens once at
/// the boundary; everything past serde works on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid time of day {0:?}, expected \"HH:MM\" in 24-hour format")]
pub struct ParseTimeOfDayError(String);

impl TimeOfDay {
    /// Builds a time of day, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(u16::from(hour) * 60 + u16::from(minute)))
        } else {
            None
        }
    }

    pub fn minutes_since_midnight(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeOfDayError(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;

        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        let t: TimeOfDay = "08:05".parse().unwrap();
        assert_eq!(t.minutes_since_midnight(), 485);
        assert_eq!(t.hour(), 8);
        assert_eq!(t.minute(), 5);

        let midnight: TimeOfDay = "00:00".parse().unwrap();
        assert_eq!(midnight.minutes_since_midnight(), 0);

        let last: TimeOfDay = "23:59".parse().unwrap();
        assert_eq!(last.minutes_since_midnight(), 1439);
    }

    #[test]
    fn rejects_malformed_times() {
        assert!("25:99".parse::<TimeOfDay>().is_err());
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("12h30".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
        assert!("-1:00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(TimeOfDay::new(9, 5).unwrap().to_string(), "09:05");
        assert_eq!(TimeOfDay::new(20, 30).unwrap().to_string(), "20:30");
    }

    #[test]
    fn orders_by_minute_of_day() {
        let a: TimeOfDay = "09:59".parse().unwrap();
        let b: TimeOfDay = "10:00".parse().unwrap();
        assert!(a < b);
        assert!(b <= b);
    }

    #[test]
    fn round_trips_through_json() {
        let t: TimeOfDay = "14:30".parse().unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"14:30\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}

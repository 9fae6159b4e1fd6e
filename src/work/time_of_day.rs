use crate::error::{CalcError, Field};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// A wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parse `HH:MM` on a 24-hour clock.
    pub fn parse(field: Field, text: &str) -> Result<Self, CalcError> {
        let (hour, minute) = super::split_hh_mm(field, text)?;
        Self::new(hour, minute).ok_or_else(|| CalcError::MalformedInput {
            field,
            value: text.to_string(),
            reason: "not a valid time of day".to_string(),
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Pin this time to `date`, seconds zeroed.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        // hour/minute are range-checked on construction
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default();
        date.and_time(time)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_valid_time() {
        let time = TimeOfDay::parse(Field::LoginTime, "09:30").unwrap();
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 30);
        assert_eq!(time.to_string(), "09:30");
    }

    #[test]
    fn test_parse_rejects_hour_out_of_range() {
        let err = TimeOfDay::parse(Field::LastLoginTime, "25:00").unwrap_err();
        assert!(matches!(
            err,
            CalcError::MalformedInput {
                field: Field::LastLoginTime,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_minute_out_of_range() {
        assert!(TimeOfDay::parse(Field::LoginTime, "10:60").is_err());
    }

    #[test]
    fn test_on_zeroes_seconds() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let instant = TimeOfDay::new(23, 59).unwrap().on(date);
        assert_eq!(instant.date(), date);
        assert_eq!(instant.hour(), 23);
        assert_eq!(instant.minute(), 59);
        assert_eq!(instant.second(), 0);
        assert_eq!(instant.nanosecond(), 0);
    }
}

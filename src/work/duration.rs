use crate::error::{CalcError, Field};
use std::fmt;

/// A non-negative span of work written as `HH:MM`.
///
/// Minutes above 59 are accepted as typed ("1:90" is 150 minutes); only the
/// total matters to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationHM {
    pub hours: u32,
    pub minutes: u32,
}

impl DurationHM {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    pub fn parse(field: Field, text: &str) -> Result<Self, CalcError> {
        let (hours, minutes) = super::split_hh_mm(field, text)?;
        Ok(Self { hours, minutes })
    }

    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }
}

impl fmt::Display for DurationHM {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Render a minute count as `"<h>h <m>m"`, always showing both parts.
pub fn format_remaining(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

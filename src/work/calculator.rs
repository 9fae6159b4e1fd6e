//! Logout time calculator.
//!
//! Given when the user logged in, how long they must work, how long they have
//! already worked and when they last logged back in, predict the time they can
//! log out and classify how far through the day they are.
//!
//! Everything here is a pure function of its inputs; the reference date used to
//! anchor the last login is passed in by the caller.

use super::duration::{DurationHM, format_remaining};
use super::time_of_day::TimeOfDay;
use crate::error::{CalcError, Field};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of a logout time once the required hours are met.
pub const DONE_MARKER: &str = "You can log out now ✅";

/// Format of the predicted logout time, e.g. `05:30 PM`.
pub const LOGOUT_FORMAT: &str = "%I:%M %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationInput {
    pub login_time: TimeOfDay,
    pub required: DurationHM,
    pub effective: DurationHM,
    pub last_login_time: TimeOfDay,
}

impl CalculationInput {
    /// Validate the four text fields as typed on the form.
    ///
    /// Emptiness is checked for every field before any parsing, so a blank
    /// field is reported as missing even when an earlier one is malformed.
    pub fn from_text(
        login_time: &str,
        required: &str,
        effective: &str,
        last_login_time: &str,
    ) -> Result<Self, CalcError> {
        let fields = [login_time, required, effective, last_login_time];
        if let Some((field, _)) = Field::ALL
            .iter()
            .zip(fields)
            .find(|(_, text)| text.trim().is_empty())
        {
            return Err(CalcError::MissingInput { field: *field });
        }

        Ok(Self {
            login_time: TimeOfDay::parse(Field::LoginTime, login_time)?,
            required: DurationHM::parse(Field::RequiredHours, required)?,
            effective: DurationHM::parse(Field::EffectiveHours, effective)?,
            last_login_time: TimeOfDay::parse(Field::LastLoginTime, last_login_time)?,
        })
    }
}

/// How far through the working day the user is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum StatusTier {
    /// More than half of the required time is still to go.
    Ahead = 1,
    /// Half or less remains, but not done yet.
    Halfway = 2,
    Done = 3,
}

impl StatusTier {
    /// Tier for a pending day. `remaining` must be positive.
    pub fn for_pending(remaining: i64, required: i64) -> Self {
        // remaining > required / 2, without losing the half minute
        if remaining * 2 > required {
            StatusTier::Ahead
        } else {
            StatusTier::Halfway
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl From<StatusTier> for u8 {
    fn from(tier: StatusTier) -> u8 {
        tier.number()
    }
}

impl TryFrom<u8> for StatusTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(StatusTier::Ahead),
            2 => Ok(StatusTier::Halfway),
            3 => Ok(StatusTier::Done),
            other => Err(format!("unknown status tier {}", other)),
        }
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub remaining_minutes: i64,
    pub remaining_label: String,
    pub logout_label: String,
    pub status_tier: StatusTier,
    /// Predicted logout instant; absent once the day is done.
    pub logout_at: Option<NaiveDateTime>,
}

impl CalculationResult {
    pub fn is_done(&self) -> bool {
        self.status_tier == StatusTier::Done
    }
}

/// Predict the logout time for `input`, anchoring the last login on `today`.
pub fn calculate(
    input: &CalculationInput,
    today: NaiveDate,
) -> Result<CalculationResult, CalcError> {
    let required = input.required.total_minutes();
    let remaining = required - input.effective.total_minutes();

    if remaining <= 0 {
        return Ok(CalculationResult {
            remaining_minutes: 0,
            remaining_label: format_remaining(0),
            logout_label: DONE_MARKER.to_string(),
            status_tier: StatusTier::Done,
            logout_at: None,
        });
    }

    let last_login = input.last_login_time.on(today);
    let logout = Duration::try_minutes(remaining)
        .and_then(|delta| last_login.checked_add_signed(delta))
        .ok_or_else(|| CalcError::MalformedInput {
            field: Field::RequiredHours,
            value: input.required.to_string(),
            reason: "logout time is out of range".to_string(),
        })?;

    Ok(CalculationResult {
        remaining_minutes: remaining,
        remaining_label: format_remaining(remaining),
        logout_label: logout.format(LOGOUT_FORMAT).to_string(),
        status_tier: StatusTier::for_pending(remaining, required),
        logout_at: Some(logout),
    })
}

/// Validate the raw form text and calculate in one step.
pub fn calculate_text(
    login_time: &str,
    required: &str,
    effective: &str,
    last_login_time: &str,
    today: NaiveDate,
) -> Result<CalculationResult, CalcError> {
    let input = CalculationInput::from_text(login_time, required, effective, last_login_time)?;
    calculate(&input, today)
}

//! The work-hours form: four text fields and the result last shown for them.

use crate::error::{CalcError, Field};
use crate::work::calculator::{self, CalculationResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_REQUIRED_HOURS: &str = "07:45";

/// Whether the form is currently showing a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub login_time: String,
    #[serde(default = "default_required_hours")]
    pub required_hours: String,
    #[serde(default)]
    pub effective_hours: String,
    #[serde(default)]
    pub last_login_time: String,
    #[serde(default)]
    pub result: Option<CalculationResult>,
}

fn default_required_hours() -> String {
    DEFAULT_REQUIRED_HOURS.to_string()
}

impl Default for Form {
    fn default() -> Self {
        Self::with_required(DEFAULT_REQUIRED_HOURS)
    }
}

impl Form {
    /// An idle form with `required_hours` pre-filled.
    pub fn with_required(required_hours: &str) -> Self {
        Self {
            login_time: String::new(),
            required_hours: required_hours.to_string(),
            effective_hours: String::new(),
            last_login_time: String::new(),
            result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.result.is_some() {
            Phase::Resolved
        } else {
            Phase::Idle
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::LoginTime => &self.login_time,
            Field::RequiredHours => &self.required_hours,
            Field::EffectiveHours => &self.effective_hours,
            Field::LastLoginTime => &self.last_login_time,
        }
    }

    /// Edit one field. The result on display stays until the next calculate or clear.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::LoginTime => self.login_time = value,
            Field::RequiredHours => self.required_hours = value,
            Field::EffectiveHours => self.effective_hours = value,
            Field::LastLoginTime => self.last_login_time = value,
        }
    }

    /// Run the calculator over the current fields.
    ///
    /// On failure nothing changes: a previous result stays on display.
    pub fn calculate(&mut self, today: NaiveDate) -> Result<&CalculationResult, CalcError> {
        let result = calculator::calculate_text(
            &self.login_time,
            &self.required_hours,
            &self.effective_hours,
            &self.last_login_time,
            today,
        )?;
        Ok(self.result.insert(result))
    }

    /// Back to an idle form with `required_hours` reset to `default_required`.
    pub fn clear(&mut self, default_required: &str) {
        *self = Self::with_required(default_required);
    }
}

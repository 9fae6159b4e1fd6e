use std::fmt;
use thiserror::Error;

/// The four form fields, in the order they appear on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Field {
    LoginTime,
    RequiredHours,
    EffectiveHours,
    LastLoginTime,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::LoginTime,
        Field::RequiredHours,
        Field::EffectiveHours,
        Field::LastLoginTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::LoginTime => "login time",
            Field::RequiredHours => "required hours",
            Field::EffectiveHours => "effective hours",
            Field::LastLoginTime => "last login time",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a calculation was refused. Both kinds are recoverable by fixing the input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Please fill all the fields correctly. (missing: {field})")]
    MissingInput { field: Field },

    #[error("Please fill all the fields correctly. ({field} '{value}': {reason})")]
    MalformedInput {
        field: Field,
        value: String,
        reason: String,
    },
}

impl CalcError {
    pub fn field(&self) -> Field {
        match self {
            CalcError::MissingInput { field } | CalcError::MalformedInput { field, .. } => *field,
        }
    }
}

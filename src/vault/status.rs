//! Operation status shown to the user after every vault call.

use std::fmt;

use crate::errors::CredVaultError;

/// The outcome of the last operation, as the presentation layer shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Generating,
    Submitted,
    Viewing,
    FieldsMissing,
    Failed(String),
}

/// Display tone used to style a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Primary,
    Danger,
}

impl Status {
    /// Map an error from any vault operation to the status it produces.
    pub fn from_error(err: &CredVaultError) -> Self {
        match err {
            CredVaultError::Validation(_) => Status::FieldsMissing,
            other => Status::Failed(other.to_string()),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Status::Idle => Tone::Neutral,
            Status::Generating => Tone::Info,
            Status::Submitted => Tone::Success,
            Status::Viewing => Tone::Primary,
            Status::FieldsMissing | Status::Failed(_) => Tone::Danger,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.tone() == Tone::Danger
    }

    /// The bare message, without the `Status: ` prefix.
    pub fn message(&self) -> String {
        match self {
            Status::Idle => "Idle...".into(),
            Status::Generating => "Generating...".into(),
            Status::Submitted => "Submitted...".into(),
            Status::Viewing => "Viewing...".into(),
            Status::FieldsMissing => "All fields must be filled...".into(),
            Status::Failed(reason) => format!("Failed: {reason}"),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}", self.message())
    }
}

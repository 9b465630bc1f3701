//! User-visible outcomes of session transitions.

use crate::core::policy::Requirement;
use crate::session::action::SelectionError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    SecretSaved,
    SecretRejected { unmet: Vec<Requirement> },
    LineBreakRejected,
    LoginSucceeded,
    IncorrectPassword,
    NoCredential,
    InvalidInput(String),
    InvalidChoice(i64),
    StoreFailure(String),
    Goodbye,
}

impl Report {
    /// Whether the report describes a failed or refused operation.
    pub fn is_failure(&self) -> bool {
        !matches!(
            self,
            Report::SecretSaved | Report::LoginSucceeded | Report::Goodbye
        )
    }
}

impl From<SelectionError> for Report {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::InputFormat(input) => Report::InvalidInput(input),
            SelectionError::UnknownChoice(n) => Report::InvalidChoice(n),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::SecretSaved => write!(f, "Password saved."),
            Report::SecretRejected { unmet } => {
                let needs: Vec<String> = unmet.iter().map(|r| r.to_string()).collect();
                write!(
                    f,
                    "Password does not meet the requirements (needs {}).",
                    needs.join(", ")
                )
            }
            Report::LineBreakRejected => {
                write!(f, "Password must not contain line breaks.")
            }
            Report::LoginSucceeded => write!(f, "Login successful."),
            Report::IncorrectPassword => write!(f, "Incorrect password."),
            Report::NoCredential => {
                write!(f, "No password is set. Choose option 2 to set one.")
            }
            Report::InvalidInput(_) => write!(f, "Invalid input. Enter a menu number."),
            Report::InvalidChoice(n) => write!(f, "Invalid choice {}. Try again.", n),
            Report::StoreFailure(msg) => write!(f, "Error: {}", msg),
            Report::Goodbye => write!(f, "Exiting."),
        }
    }
}

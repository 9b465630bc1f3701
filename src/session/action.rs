use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    SetPassword,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("expected a menu number, got {0:?}")]
    InputFormat(String),

    #[error("no menu option {0}")]
    UnknownChoice(i64),
}

impl Action {
    /// Menu entries in display order.
    pub const MENU: [Action; 3] = [Action::Login, Action::SetPassword, Action::Exit];

    pub fn number(self) -> i64 {
        match self {
            Action::Login => 1,
            Action::SetPassword => 2,
            Action::Exit => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Login => "Log in",
            Action::SetPassword => "Set a new password",
            Action::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Result<Self, SelectionError> {
        let trimmed = input.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| SelectionError::InputFormat(trimmed.to_string()))?;
        Self::MENU
            .into_iter()
            .find(|a| a.number() == number)
            .ok_or(SelectionError::UnknownChoice(number))
    }
}

impl FromStr for Action {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

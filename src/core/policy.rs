//! Password complexity policy.

use crate::constants;
use std::fmt;

/// A single complexity rule a candidate can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::MinLength => {
                write!(f, "at least {} characters", constants::MIN_SECRET_LENGTH)
            }
            Requirement::Lowercase => write!(f, "a lowercase letter"),
            Requirement::Uppercase => write!(f, "an uppercase letter"),
            Requirement::Digit => write!(f, "a digit"),
            Requirement::Special => {
                let set: String = constants::SPECIAL_CHARS.iter().collect();
                write!(f, "one of {}", set)
            }
        }
    }
}

/// Returns true iff `candidate` satisfies every rule.
pub fn validate(candidate: &str) -> bool {
    unmet_requirements(candidate).is_empty()
}

/// Lists the rules `candidate` fails, in a stable order.
///
/// Characters outside the four classes still count toward length.
pub fn unmet_requirements(candidate: &str) -> Vec<Requirement> {
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in candidate.chars() {
        if c.is_ascii_digit() {
            has_digit = true;
        } else if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if constants::SPECIAL_CHARS.contains(&c) {
            has_special = true;
        }
    }

    let mut unmet = Vec::new();
    if candidate.chars().count() < constants::MIN_SECRET_LENGTH {
        unmet.push(Requirement::MinLength);
    }
    if !has_lower {
        unmet.push(Requirement::Lowercase);
    }
    if !has_upper {
        unmet.push(Requirement::Uppercase);
    }
    if !has_digit {
        unmet.push(Requirement::Digit);
    }
    if !has_special {
        unmet.push(Requirement::Special);
    }
    unmet
}

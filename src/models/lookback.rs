use std::{fmt, num::IntErrorKind};

use serde::{Deserialize, Serialize};

/// Number of trailing daily observations a change is measured over.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Lookback(usize);

impl Lookback {
    pub const MIN: usize = 1;
    // Roughly one year of trading days
    pub const MAX: usize = 252;
    pub const DEFAULT: Lookback = Lookback(5);

    pub fn new(days: usize) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&days).then_some(Self(days))
    }

    pub fn days(&self) -> usize {
        self.0
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for Lookback {
    type Error = String;

    fn try_from(days: usize) -> Result<Self, Self::Error> {
        Lookback::new(days).ok_or_else(|| {
            format!(
                "lookback must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                days
            )
        })
    }
}

impl From<Lookback> for usize {
    fn from(lookback: Lookback) -> Self {
        lookback.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LookbackInput {
    pub lookback: Lookback,
    pub notice: Option<String>,
}

/// Validates free-text lookback input, falling back to the default with a
/// user-facing notice when it is unusable.
pub fn parse_lookback(input: &str) -> LookbackInput {
    let out_of_range = || LookbackInput {
        lookback: Lookback::DEFAULT,
        notice: Some(format!(
            "Please enter a valid comparison range between {} and {}.",
            Lookback::MIN,
            Lookback::MAX
        )),
    };

    match input.trim().parse::<i64>() {
        Ok(days) => match usize::try_from(days).ok().and_then(Lookback::new) {
            Some(lookback) => LookbackInput {
                lookback,
                notice: None,
            },
            None => out_of_range(),
        },
        // Still a whole number, just too large to hold
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            out_of_range()
        }
        Err(_) => LookbackInput {
            lookback: Lookback::DEFAULT,
            notice: Some(String::from("Invalid input. Please enter a number.")),
        },
    }
}

//! Track durations written as `minutes:seconds`

use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("duration '{0}' has no ':' separator")]
    MissingSeparator(String),

    #[error("duration '{input}' has {parts} ':'-separated parts, expected 2")]
    WrongPartCount { input: String, parts: usize },

    #[error("duration '{input}' has a non-integer part '{part}'")]
    InvalidNumber { input: String, part: String },
}

/// Parses `minutes:seconds` into its two components.
///
/// Only the shape is checked here: any unsigned integers are accepted, so
/// `"99:99"` parses fine. Strict `mm:ss` input validation is
/// [`is_valid_duration`].
pub fn parse_duration(input: &str) -> Result<(u32, u32), DurationParseError> {
    let parts: Vec<&str> = input.split(':').collect();
    match parts.as_slice() {
        [_] => Err(DurationParseError::MissingSeparator(input.to_string())),
        [minutes, seconds] => Ok((parse_part(input, minutes)?, parse_part(input, seconds)?)),
        _ => Err(DurationParseError::WrongPartCount {
            input: input.to_string(),
            parts: parts.len(),
        }),
    }
}

fn parse_part(input: &str, part: &str) -> Result<u32, DurationParseError> {
    part.parse::<u32>()
        .map_err(|_| DurationParseError::InvalidNumber {
            input: input.to_string(),
            part: part.to_string(),
        })
}

/// Checks the input format: 1-2 digits, a colon, exactly 2 digits.
pub fn is_valid_duration(input: &str) -> bool {
    let Some((minutes, seconds)) = input.split_once(':') else {
        return false;
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    (1..=2).contains(&minutes.len())
        && seconds.len() == 2
        && all_digits(minutes)
        && all_digits(seconds)
}

/// Running total of durations, kept normalized so that `seconds < 60`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TotalDuration {
    pub minutes: u64,
    pub seconds: u64,
}

impl TotalDuration {
    pub fn add(&mut self, minutes: u32, seconds: u32) {
        self.minutes += u64::from(minutes);
        self.seconds += u64::from(seconds);

        if self.seconds >= 60 {
            self.minutes += self.seconds / 60;
            self.seconds %= 60;
        }
    }

    pub fn as_seconds(&self) -> u64 {
        self.minutes * 60 + self.seconds
    }
}

impl Display for TotalDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} minutes and {} seconds", self.minutes, self.seconds)
    }
}

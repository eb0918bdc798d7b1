//! Retry and empty-text policies for clipboard writes

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use super::error::InvalidEmptyTextPolicy;

/// Default number of attempts per write strategy
pub const DEFAULT_RETRIES: u32 = 10;

/// Default pause between attempts
pub const DEFAULT_COOLDOWN_MS: u64 = 100;

/// Bounded retry schedule: `attempts` tries with `cooldown` between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    cooldown: Duration,
}

impl RetryPolicy {
    /// Create a policy. At least one attempt is always made.
    pub fn new(attempts: u32, cooldown: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            cooldown,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRIES, Duration::from_millis(DEFAULT_COOLDOWN_MS))
    }
}

/// What publishing an empty string does to the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyTextPolicy {
    /// Empty the clipboard, leaving no text format present
    #[default]
    Clear,
    /// Store a zero-length text entry
    SetEmpty,
}

impl EmptyTextPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::SetEmpty => "set-empty",
        }
    }
}

impl fmt::Display for EmptyTextPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmptyTextPolicy {
    type Err = InvalidEmptyTextPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" => Ok(Self::Clear),
            "set-empty" | "set_empty" => Ok(Self::SetEmpty),
            _ => Err(InvalidEmptyTextPolicy {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_ten_by_hundred_ms() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.attempts(), 10);
        assert_eq!(policy.cooldown(), Duration::from_millis(100));
    }

    #[test]
    fn zero_attempts_is_clamped_to_one() {
        let policy = RetryPolicy::new(0, Duration::from_millis(5));
        assert_eq!(policy.attempts(), 1);
        assert_eq!(policy.cooldown(), Duration::from_millis(5));
    }

    #[test]
    fn empty_policy_parses() {
        assert_eq!("clear".parse::<EmptyTextPolicy>().unwrap(), EmptyTextPolicy::Clear);
        assert_eq!("Set-Empty".parse::<EmptyTextPolicy>().unwrap(), EmptyTextPolicy::SetEmpty);
        assert_eq!("set_empty".parse::<EmptyTextPolicy>().unwrap(), EmptyTextPolicy::SetEmpty);
    }

    #[test]
    fn empty_policy_rejects_unknown() {
        let err = "wipe".parse::<EmptyTextPolicy>().unwrap_err();
        assert!(err.to_string().contains("wipe"));
    }

    #[test]
    fn empty_policy_display_round_trips() {
        for policy in [EmptyTextPolicy::Clear, EmptyTextPolicy::SetEmpty] {
            assert_eq!(policy.to_string().parse::<EmptyTextPolicy>().unwrap(), policy);
        }
    }
}

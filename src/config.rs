use tbs::{CheckingPolicy, Money, Result};

use std::env;

use log::LevelFilter;
use simple_logger::SimpleLogger;
use thiserror::Error;

pub const OVERDRAFT_LIMIT_VAR: &str = "BANK_OVERDRAFT_LIMIT";
pub const MAX_WITHDRAWALS_VAR: &str = "BANK_MAX_WITHDRAWALS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {0}: {1:?}")]
    InvalidValue(&'static str, String),
}

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

/// Policy for new checking accounts, with defaults overridden from the environment
pub fn checking_policy() -> Result<CheckingPolicy> {
    let policy = parse_checking_policy(
        env::var(OVERDRAFT_LIMIT_VAR).ok(),
        env::var(MAX_WITHDRAWALS_VAR).ok(),
    )?;

    log::debug!("Using checking policy: {policy:?}");

    return Ok(policy);
}

fn parse_checking_policy(
    overdraft_limit: Option<String>,
    max_withdrawals: Option<String>,
) -> Result<CheckingPolicy> {
    let mut policy = CheckingPolicy::default();

    if let Some(value) = overdraft_limit {
        let limit = Money::parse(&value)
            .ok()
            .filter(|limit| !limit.is_negative())
            .ok_or(ConfigError::InvalidValue(OVERDRAFT_LIMIT_VAR, value))?;

        policy.overdraft_limit = limit;
    }

    if let Some(value) = max_withdrawals {
        policy.max_withdrawals = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(MAX_WITHDRAWALS_VAR, value))?;
    }

    return Ok(policy);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let policy = parse_checking_policy(None, None).unwrap();

        assert_eq!(policy, CheckingPolicy::default());
    }

    #[test]
    fn overrides() {
        let policy =
            parse_checking_policy(Some("1000.50".to_string()), Some("10".to_string())).unwrap();

        assert_eq!(
            policy,
            CheckingPolicy {
                overdraft_limit: Money(1000_50),
                max_withdrawals: 10,
            }
        );
    }

    #[test]
    fn invalid_values() {
        assert!(parse_checking_policy(Some("lots".to_string()), None).is_err());
        assert!(parse_checking_policy(Some("-1".to_string()), None).is_err());
        assert!(parse_checking_policy(None, Some("-3".to_string())).is_err());
        assert!(parse_checking_policy(None, Some("three".to_string())).is_err());
    }
}

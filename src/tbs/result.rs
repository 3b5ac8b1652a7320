use crate::BankError;

/// Convenience type to make error mapping cleaner
pub type Result<T = ()> = anyhow::Result<T>;

/// Result of an operation on the account model
pub type BankResult<T = ()> = std::result::Result<T, BankError>;

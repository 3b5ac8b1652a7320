use crate::ids::AccountNumber;
use crate::money::MoneyError;
use crate::Money;

use thiserror::Error;

/// Expected, recoverable rejections of a banking operation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BankError {
    #[error("Insufficient funds: requested R$ {requested}, available R$ {available}")]
    InsufficientFunds { requested: Money, available: Money },

    #[error("Invalid amount: R$ {0} must be greater than zero")]
    InvalidAmount(Money),

    #[error("Withdrawal limit exceeded: at most {0} withdrawals allowed")]
    WithdrawalLimitExceeded(usize),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    #[error("Account already exists: {0}")]
    DuplicateAccount(AccountNumber),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

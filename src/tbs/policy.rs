use crate::{BankError, BankResult, History, Money, TransactionKind};

pub const DEFAULT_OVERDRAFT_LIMIT: Money = Money(500_00);
pub const DEFAULT_MAX_WITHDRAWALS: usize = 3;

/// Overdraft allowance and withdrawal cap of a checking account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingPolicy {
    pub overdraft_limit: Money,
    pub max_withdrawals: usize,
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self {
            overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
            max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
        }
    }
}

/// Decides whether a withdrawal may go ahead. Chosen when the account is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalPolicy {
    /// Balance can never go below zero
    Basic,

    /// Balance can go down to `-overdraft_limit`, with a lifetime cap on withdrawals
    Checking(CheckingPolicy),
}

impl WithdrawalPolicy {
    fn allowance(&self) -> Money {
        match self {
            Self::Basic => Money::ZERO,
            Self::Checking(policy) => policy.overdraft_limit,
        }
    }

    /// Funds that can still be withdrawn from `balance`, saturating at `Money::MAX`
    pub fn available(&self, balance: Money) -> Money {
        Money(balance.0.saturating_add(self.allowance().0))
    }

    /// Assumes `amount` has already been checked to be positive
    pub fn check_withdrawal(&self, amount: Money, balance: Money, history: &History) -> BankResult {
        // widened so that balance + allowance cannot overflow
        let available = i128::from(balance.0) + i128::from(self.allowance().0);

        if i128::from(amount.0) > available {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.available(balance),
            });
        }

        if let Self::Checking(policy) = self {
            // the cap never resets
            if history.count(TransactionKind::Withdrawal) >= policy.max_withdrawals {
                return Err(BankError::WithdrawalLimitExceeded(policy.max_withdrawals));
            }
        }

        Ok(())
    }
}

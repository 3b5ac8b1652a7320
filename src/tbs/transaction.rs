use crate::clock::Clock;
use crate::{Account, BankResult, Money};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        };

        write!(f, "{label}")
    }
}

/// A requested movement of money on a single account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Money),
    Withdrawal(Money),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Deposit(_) => TransactionKind::Deposit,
            Self::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Deposit(amount) | Self::Withdrawal(amount) => *amount,
        }
    }

    /// Runs the matching account operation. The account records the entry in its history
    /// only when the operation succeeds.
    pub fn apply(&self, account: &mut Account, clock: &dyn Clock) -> BankResult {
        log::debug!("Applying {self:?} to account {}", account.number());

        match *self {
            Self::Deposit(amount) => account.deposit(amount, clock),
            Self::Withdrawal(amount) => account.withdraw(amount, clock),
        }
    }
}

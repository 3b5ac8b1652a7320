use crate::clock::Clock;
use crate::ids::{AccountNumber, NationalId};
use crate::{
    BankError, BankResult, CheckingPolicy, History, Money, Transaction, TransactionKind,
    WithdrawalPolicy,
};

use std::fmt;

pub const BRANCH_CODE: &str = "0001";

/// A single account held by a client. Every successful deposit or withdrawal lands in its
/// history; rejected ones leave both balance and history untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    branch: &'static str,
    balance: Money,
    holder: NationalId,
    history: History,
    policy: WithdrawalPolicy,
}

impl Account {
    pub fn new(holder: NationalId, number: AccountNumber, policy: WithdrawalPolicy) -> Self {
        Self {
            number,
            branch: BRANCH_CODE,
            balance: Money::ZERO,
            holder,
            history: History::new(),
            policy,
        }
    }

    pub fn new_basic(holder: NationalId, number: AccountNumber) -> Self {
        Self::new(holder, number, WithdrawalPolicy::Basic)
    }

    pub fn new_checking(holder: NationalId, number: AccountNumber, policy: CheckingPolicy) -> Self {
        Self::new(holder, number, WithdrawalPolicy::Checking(policy))
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn branch(&self) -> &str {
        self.branch
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn holder(&self) -> &NationalId {
        &self.holder
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn policy(&self) -> &WithdrawalPolicy {
        &self.policy
    }

    pub fn deposit(&mut self, amount: Money, clock: &dyn Clock) -> BankResult {
        ensure_positive(amount)?;

        self.record(Transaction::Deposit(amount), clock)
    }

    pub fn withdraw(&mut self, amount: Money, clock: &dyn Clock) -> BankResult {
        ensure_positive(amount)?;

        self.policy
            .check_withdrawal(amount, self.balance, &self.history)?;

        self.record(Transaction::Withdrawal(amount), clock)
    }

    /// Withdraws from this account, then deposits into `destination`. The destination balance is
    /// checked for overflow first, so a rejected transfer moves nothing.
    pub fn transfer(
        &mut self,
        amount: Money,
        destination: &mut Account,
        clock: &dyn Clock,
    ) -> BankResult {
        destination.balance.plus(amount)?;

        self.withdraw(amount, clock)?;
        destination.deposit(amount, clock)?;

        log::debug!(
            "Transferred {amount} from account {} to account {}",
            self.number,
            destination.number
        );

        Ok(())
    }

    fn record(&mut self, transaction: Transaction, clock: &dyn Clock) -> BankResult {
        match transaction {
            Transaction::Deposit(amount) => self.balance.add(&amount)?,
            Transaction::Withdrawal(amount) => self.balance.sub(&amount)?,
        }

        let index = self.history.append(&transaction, clock.now());

        log::debug!(
            "Recorded {transaction:?} at history index {index} of account {}, balance now {}",
            self.number,
            self.balance
        );

        Ok(())
    }
}

fn ensure_positive(amount: Money) -> BankResult {
    if !amount.is_positive() {
        return Err(BankError::InvalidAmount(amount));
    }

    Ok(())
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Account {}:", self.number)?;
        writeln!(f, "Branch: {}", self.branch)?;
        writeln!(f, "Balance: R$ {}", self.balance)?;

        if let WithdrawalPolicy::Checking(policy) = self.policy {
            writeln!(f, "Overdraft limit: R$ {}", policy.overdraft_limit)?;
            writeln!(
                f,
                "Withdrawals: {} of {}",
                self.history.count(TransactionKind::Withdrawal),
                policy.max_withdrawals
            )?;
        }

        writeln!(f, "Holder ID: {}", self.holder)
    }
}

use crate::clock::Clock;
use crate::ids::{AccountNumber, NationalId};
use crate::{Account, BankError, BankResult, CheckingPolicy, Money, Transaction};

use std::fmt;

/// Personal data captured when the client is registered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientProfile {
    pub name: String,
    pub national_id: NationalId,
    pub birth_date: String,
    pub address: String,
}

/// The bank's only client and the accounts it owns, in the order they were opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    profile: ClientProfile,
    accounts: Vec<Account>,
}

impl Client {
    pub fn new(profile: ClientProfile) -> Self {
        Self {
            profile,
            accounts: vec![],
        }
    }

    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn add_account(&mut self, account: Account) -> BankResult<&mut Account> {
        if self.position(account.number()).is_some() {
            return Err(BankError::DuplicateAccount(account.number().clone()));
        }

        log::debug!("Adding account {} for client {}", account.number(), self.profile.national_id);

        self.accounts.push(account);

        let index = self.accounts.len() - 1;
        Ok(&mut self.accounts[index])
    }

    pub fn open_checking_account(
        &mut self,
        number: AccountNumber,
        policy: CheckingPolicy,
    ) -> BankResult<&mut Account> {
        let account = Account::new_checking(self.profile.national_id.clone(), number, policy);

        self.add_account(account)
    }

    pub fn find(&self, number: &AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    pub fn find_mut(&mut self, number: &AccountNumber) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
    }

    /// Applies a deposit or withdrawal without the caller having to know which one it is
    pub fn perform_transaction(
        &mut self,
        number: &AccountNumber,
        transaction: &Transaction,
        clock: &dyn Clock,
    ) -> BankResult<Money> {
        let account = self
            .find_mut(number)
            .ok_or_else(|| BankError::AccountNotFound(number.clone()))?;

        transaction.apply(account, clock)?;

        Ok(account.balance())
    }

    /// Both accounts are looked up before any money moves. A transfer to the same account is
    /// a withdrawal immediately followed by a deposit of the same amount.
    pub fn transfer(
        &mut self,
        source: &AccountNumber,
        destination: &AccountNumber,
        amount: Money,
        clock: &dyn Clock,
    ) -> BankResult {
        let source_idx = self
            .position(source)
            .ok_or_else(|| BankError::AccountNotFound(source.clone()))?;
        let destination_idx = self
            .position(destination)
            .ok_or_else(|| BankError::AccountNotFound(destination.clone()))?;

        if source_idx == destination_idx {
            let account = &mut self.accounts[source_idx];
            account.withdraw(amount, clock)?;
            return account.deposit(amount, clock);
        }

        let (source, destination) = pair_mut(&mut self.accounts, source_idx, destination_idx);

        source.transfer(amount, destination, clock)
    }

    fn position(&self, number: &AccountNumber) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.number() == number)
    }
}

/// Mutable references to two distinct elements
fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    if first < second {
        let (left, right) = items.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Client details:")?;
        writeln!(f, "Name: {}", self.profile.name)?;
        writeln!(f, "National ID: {}", self.profile.national_id)?;
        writeln!(f, "Birth date: {}", self.profile.birth_date)?;
        writeln!(f, "Address: {}", self.profile.address)?;
        writeln!(f, "Accounts:")?;

        for account in &self.accounts {
            writeln!(f)?;
            write!(f, "{account}")?;
        }

        Ok(())
    }
}

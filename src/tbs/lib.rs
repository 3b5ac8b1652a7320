mod account;
mod account_report;
mod bank;
pub mod clock;
mod client;
pub mod command;
mod error;
mod history;
pub mod ids;
pub mod input;
mod money;
mod policy;
mod result;
mod transaction;

pub use account::{Account, BRANCH_CODE};
pub use account_report::AccountReport;
pub use bank::Bank;
pub use client::{Client, ClientProfile};
pub use error::BankError;
pub use history::{History, HistoryEntry, TIMESTAMP_FORMAT};
pub use money::{Money, MoneyError};
pub use policy::{CheckingPolicy, WithdrawalPolicy, DEFAULT_MAX_WITHDRAWALS, DEFAULT_OVERDRAFT_LIMIT};
pub use result::{BankResult, Result};
pub use transaction::{Transaction, TransactionKind};

/// Builds a bank for `profile` that records history with the system clock
pub fn build_bank(profile: ClientProfile, policy: CheckingPolicy) -> Bank {
    let client = Client::new(profile);

    Bank::new(client, Box::new(clock::SystemClock), policy)
}

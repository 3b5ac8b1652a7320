use crate::{Account, TransactionKind};

use serde::{Deserialize, Serialize};

/// One row of the end-of-script report
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    pub account: String,
    pub branch: String,
    pub balance: String,
    pub withdrawals: usize,
    pub entries: usize,
}

impl From<&Account> for AccountReport {
    fn from(account: &Account) -> Self {
        Self {
            account: account.number().to_string(),
            branch: account.branch().to_string(),
            balance: account.balance().to_string(),
            withdrawals: account.history().count(TransactionKind::Withdrawal),
            entries: account.history().len(),
        }
    }
}

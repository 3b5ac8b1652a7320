use crate::ids::AccountNumber;
use crate::Money;

use std::fmt;

/// Everything a user can ask the bank to do, with already-parsed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ShowClient,
    OpenAccount {
        number: AccountNumber,
    },
    Deposit {
        account: AccountNumber,
        amount: Money,
    },
    Withdraw {
        account: AccountNumber,
        amount: Money,
    },
    Transfer {
        source: AccountNumber,
        destination: AccountNumber,
        amount: Money,
    },
    ShowAccounts,
    Exit,
}

/// Result of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ClientDetails(String),
    AccountOpened(AccountNumber),
    Deposited {
        account: AccountNumber,
        amount: Money,
        balance: Money,
    },
    Withdrawn {
        account: AccountNumber,
        amount: Money,
        balance: Money,
    },
    Transferred {
        source: AccountNumber,
        destination: AccountNumber,
        amount: Money,
    },
    Accounts(String),
    Exit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ClientDetails(details) => write!(f, "{details}"),
            Self::AccountOpened(number) => writeln!(f, "Account {number} created successfully."),
            Self::Deposited {
                account,
                amount,
                balance,
            } => writeln!(
                f,
                "Deposit of R$ {amount} into account {account} completed. Balance: R$ {balance}"
            ),
            Self::Withdrawn {
                account,
                amount,
                balance,
            } => writeln!(
                f,
                "Withdrawal of R$ {amount} from account {account} completed. Balance: R$ {balance}"
            ),
            Self::Transferred {
                source,
                destination,
                amount,
            } => writeln!(
                f,
                "Transfer of R$ {amount} from account {source} to account {destination} completed."
            ),
            Self::Accounts(statement) => write!(f, "{statement}"),
            Self::Exit => writeln!(f, "Exiting... Goodbye!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Outcome::AccountOpened(AccountNumber::from("7")).to_string(),
            "Account 7 created successfully.\n"
        );
        assert_eq!(
            Outcome::Withdrawn {
                account: AccountNumber::from("7"),
                amount: Money(300_00),
                balance: Money(-300_00),
            }
            .to_string(),
            "Withdrawal of R$ 300.00 from account 7 completed. Balance: R$ -300.00\n"
        );
        assert_eq!(
            Outcome::Transferred {
                source: AccountNumber::from("1"),
                destination: AccountNumber::from("2"),
                amount: Money(5),
            }
            .to_string(),
            "Transfer of R$ 0.05 from account 1 to account 2 completed.\n"
        );
    }
}

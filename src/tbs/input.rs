use crate::command::Command;
use crate::ids::AccountNumber;
use crate::Money;
use crate::Result;

use serde::Deserialize;

use thiserror::Error;

/// Represents a script row that a CSV record would deserialize into
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InputCommand {
    pub command: InputCommandType,
    pub account: String,
    pub destination: Option<String>,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputCommandType {
    Open,
    Deposit,
    Withdraw,
    Transfer,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input command: account value missing: {0:?}")]
    NoAccount(InputCommand),

    #[error("Error parsing input command: amount value missing: {0:?}")]
    NoAmount(InputCommand),

    #[error("Error parsing input command: destination value missing from transfer: {0:?}")]
    NoDestination(InputCommand),
}

impl InputCommand {
    pub fn parse_command(self) -> Result<Command> {
        if self.account.trim().is_empty() {
            Err(InputParseError::NoAccount(self.clone()))?;
        }

        let command = match self.command {
            InputCommandType::Open => Command::OpenAccount {
                number: AccountNumber::from(self.account.as_str()),
            },
            InputCommandType::Deposit => Command::Deposit {
                amount: self.parse_amount()?,
                account: AccountNumber::from(self.account),
            },
            InputCommandType::Withdraw => Command::Withdraw {
                amount: self.parse_amount()?,
                account: AccountNumber::from(self.account),
            },
            InputCommandType::Transfer => {
                let destination = self
                    .destination
                    .clone()
                    .filter(|destination| !destination.trim().is_empty())
                    .ok_or_else(|| InputParseError::NoDestination(self.clone()))?;

                Command::Transfer {
                    amount: self.parse_amount()?,
                    source: AccountNumber::from(self.account),
                    destination: AccountNumber::from(destination),
                }
            }
        };

        Ok(command)
    }

    fn parse_amount(&self) -> Result<Money> {
        let amount = self
            .amount
            .as_deref()
            .filter(|amount| !amount.trim().is_empty())
            .ok_or_else(|| InputParseError::NoAmount(self.clone()))?;

        Ok(Money::parse(amount)?)
    }
}

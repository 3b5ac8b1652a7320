use tbs::command::{Command, Outcome};
use tbs::ids::{AccountNumber, NationalId};
use tbs::{Bank, ClientProfile, Money, Result};

use std::io::{BufRead, Write};

/// A parsed amount, or a message for the user
type AmountInput = std::result::Result<Money, String>;

const RULE: &str = "========================================";

const MENU: &str = "Menu:
1. Show client details
2. Create new account
3. Deposit
4. Withdraw
5. Transfer
6. Show all accounts and transactions
7. Exit";

/// Line-oriented interactive menu on top of a `Bank`
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks for the client's personal data. `None` if input ends first.
    pub fn read_profile(&mut self) -> Result<Option<ClientProfile>> {
        writeln!(self.output, "{RULE}\nWelcome to the Bank\n{RULE}")?;

        let name = match self.prompt("Client name: ")? {
            Some(name) => name,
            None => return Ok(None),
        };
        let national_id = match self.prompt("Client national ID: ")? {
            Some(national_id) => national_id,
            None => return Ok(None),
        };
        let birth_date = match self.prompt("Client birth date (DD/MM/YYYY): ")? {
            Some(birth_date) => birth_date,
            None => return Ok(None),
        };
        let address = match self.prompt("Client address: ")? {
            Some(address) => address,
            None => return Ok(None),
        };

        Ok(Some(ClientProfile {
            name,
            national_id: NationalId::from(national_id.as_str()),
            birth_date,
            address,
        }))
    }

    /// Runs the menu until the user exits or input ends
    pub fn run(&mut self, bank: &mut Bank) -> Result {
        loop {
            writeln!(self.output, "\n{RULE}\n{MENU}\n{RULE}")?;

            let option = match self.prompt("Choose an option: ")? {
                Some(option) => option,
                None => break,
            };

            let command = match self.read_command(&option)? {
                Prompted::Command(command) => command,
                Prompted::Invalid(message) => {
                    writeln!(self.output, "\n{message}")?;
                    continue;
                }
                Prompted::EndOfInput => break,
            };

            match bank.execute(command) {
                Ok(Outcome::Exit) => {
                    writeln!(self.output, "\n{RULE}\n{}{RULE}", Outcome::Exit)?;
                    return Ok(());
                }
                Ok(outcome) => write!(self.output, "\n{outcome}")?,
                Err(e) => {
                    log::warn!("{e}");
                    writeln!(self.output, "\nOperation rejected: {e}")?;
                }
            }
        }

        log::debug!("Input ended, leaving menu");

        Ok(())
    }

    fn read_command(&mut self, option: &str) -> Result<Prompted> {
        let prompted = match option {
            "1" => Prompted::Command(Command::ShowClient),
            "2" => match self.prompt_account("New account number: ")? {
                Some(number) => Prompted::Command(Command::OpenAccount { number }),
                None => Prompted::EndOfInput,
            },
            "3" => {
                let account = self.prompt_account("Account number for deposit: ")?;
                let amount = self.prompt_amount("Deposit amount: ")?;

                match (account, amount) {
                    (Some(account), Some(Ok(amount))) => {
                        Prompted::Command(Command::Deposit { account, amount })
                    }
                    (Some(_), Some(Err(message))) => Prompted::Invalid(message),
                    _ => Prompted::EndOfInput,
                }
            }
            "4" => {
                let account = self.prompt_account("Account number for withdrawal: ")?;
                let amount = self.prompt_amount("Withdrawal amount: ")?;

                match (account, amount) {
                    (Some(account), Some(Ok(amount))) => {
                        Prompted::Command(Command::Withdraw { account, amount })
                    }
                    (Some(_), Some(Err(message))) => Prompted::Invalid(message),
                    _ => Prompted::EndOfInput,
                }
            }
            "5" => {
                let source = self.prompt_account("Source account number: ")?;
                let destination = self.prompt_account("Destination account number: ")?;
                let amount = self.prompt_amount("Transfer amount: ")?;

                match (source, destination, amount) {
                    (Some(source), Some(destination), Some(Ok(amount))) => {
                        Prompted::Command(Command::Transfer {
                            source,
                            destination,
                            amount,
                        })
                    }
                    (Some(_), Some(_), Some(Err(message))) => Prompted::Invalid(message),
                    _ => Prompted::EndOfInput,
                }
            }
            "6" => Prompted::Command(Command::ShowAccounts),
            "7" => Prompted::Command(Command::Exit),
            _ => Prompted::Invalid("Invalid option. Please try again.".to_string()),
        };

        Ok(prompted)
    }

    fn prompt_account(&mut self, message: &str) -> Result<Option<AccountNumber>> {
        Ok(self.prompt(message)?.map(AccountNumber::from))
    }

    fn prompt_amount(&mut self, message: &str) -> Result<Option<AmountInput>> {
        let amount = self.prompt(message)?.map(|amount| {
            Money::parse(&amount).map_err(|e| format!("Invalid amount: {e}"))
        });

        Ok(amount)
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}

enum Prompted {
    Command(Command),
    Invalid(String),
    EndOfInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    use tbs::clock::FixedClock;
    use tbs::{CheckingPolicy, Client};

    use chrono::NaiveDate;

    fn build_bank() -> Bank {
        let clock = FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .and_then(|date| date.and_hms_opt(9, 30, 0))
                .unwrap(),
        );

        Bank::new(
            Client::new(ClientProfile::default()),
            Box::new(clock),
            CheckingPolicy::default(),
        )
    }

    fn run_session(script: &str) -> (Bank, String) {
        let mut bank = build_bank();
        let mut output = vec![];

        Shell::new(script.as_bytes(), &mut output)
            .run(&mut bank)
            .unwrap();

        (bank, String::from_utf8(output).unwrap())
    }

    #[test]
    fn read_profile() {
        let mut output = vec![];
        let mut shell = Shell::new(
            "Ana Souza\n123.456.789-00\n01/02/1990\nRua A, 10\n".as_bytes(),
            &mut output,
        );

        assert_eq!(
            shell.read_profile().unwrap(),
            Some(ClientProfile {
                name: "Ana Souza".to_string(),
                national_id: NationalId::from("123.456.789-00"),
                birth_date: "01/02/1990".to_string(),
                address: "Rua A, 10".to_string(),
            })
        );
    }

    #[test]
    fn read_profile_end_of_input() {
        let mut output = vec![];
        let mut shell = Shell::new("Ana Souza\n".as_bytes(), &mut output);

        assert_eq!(shell.read_profile().unwrap(), None);
    }

    #[test]
    fn deposit_withdraw_and_exit() {
        let (bank, output) = run_session("2\n1001\n3\n1001\n100\n4\n1001\n50\n7\n");

        let account = &bank.client().accounts()[0];
        assert_eq!(account.balance(), Money(50_00));
        assert_eq!(account.history().len(), 2);

        assert!(output.contains("Account 1001 created successfully."));
        assert!(output.contains("Deposit of R$ 100.00 into account 1001 completed."));
        assert!(output.contains("Withdrawal of R$ 50.00 from account 1001 completed."));
        assert!(output.contains("Exiting... Goodbye!"));
    }

    #[test]
    fn rejections_are_reported() {
        let (bank, output) = run_session("3\n9\n10\n2\n1\n4\n1\n600\n3\n1\nabc\n9\n");

        assert_eq!(bank.client().accounts()[0].balance(), Money::ZERO);
        assert!(output.contains("Operation rejected: Account not found: 9"));
        assert!(output.contains("Operation rejected: Insufficient funds"));
        assert!(output.contains("Invalid amount: Money parse error"));
        assert!(output.contains("Invalid option. Please try again."));
    }

    #[test]
    fn transfer_and_show_accounts() {
        let (bank, output) = run_session("2\n1\n2\n2\n5\n1\n2\n25.5\n6\n7\n");

        let accounts = bank.client().accounts();
        assert_eq!(accounts[0].balance(), Money(-25_50));
        assert_eq!(accounts[1].balance(), Money(25_50));

        assert!(output.contains("Transfer of R$ 25.50 from account 1 to account 2 completed."));
        assert!(output.contains("Kind: Withdrawal, Amount: R$ 25.50, Date: 15/01/2024 09:30:00"));
        assert!(output.contains("Kind: Deposit, Amount: R$ 25.50, Date: 15/01/2024 09:30:00"));
    }

    #[test]
    fn end_of_input_leaves_menu() {
        let (bank, output) = run_session("2\n");

        assert!(bank.client().accounts().is_empty());
        assert!(!output.contains("Exiting"));
    }
}

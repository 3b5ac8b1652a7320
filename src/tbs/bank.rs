use crate::clock::Clock;
use crate::command::{Command, Outcome};
use crate::ids::AccountNumber;
use crate::{BankResult, CheckingPolicy, Client, Money, Transaction};

/// Executes commands against the client's accounts
pub struct Bank {
    client: Client,
    clock: Box<dyn Clock>,
    policy: CheckingPolicy,
}

impl Bank {
    /// `policy` applies to every account opened through `Command::OpenAccount`
    pub fn new(client: Client, clock: Box<dyn Clock>, policy: CheckingPolicy) -> Self {
        Self {
            client,
            clock,
            policy,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn execute(&mut self, command: Command) -> BankResult<Outcome> {
        log::debug!("Executing command: {command:?}");

        let outcome = match command {
            Command::ShowClient => Outcome::ClientDetails(self.client.to_string()),
            Command::OpenAccount { number } => self.open_account(number)?,
            Command::Deposit { account, amount } => self.deposit(account, amount)?,
            Command::Withdraw { account, amount } => self.withdraw(account, amount)?,
            Command::Transfer {
                source,
                destination,
                amount,
            } => self.transfer(source, destination, amount)?,
            Command::ShowAccounts => Outcome::Accounts(self.statement()),
            Command::Exit => Outcome::Exit,
        };

        log::debug!("Command outcome: {outcome:?}");

        Ok(outcome)
    }

    pub fn take(self) -> Client {
        self.client
    }

    fn open_account(&mut self, number: AccountNumber) -> BankResult<Outcome> {
        let account = self.client.open_checking_account(number, self.policy)?;

        Ok(Outcome::AccountOpened(account.number().clone()))
    }

    fn deposit(&mut self, account: AccountNumber, amount: Money) -> BankResult<Outcome> {
        let balance = self.client.perform_transaction(
            &account,
            &Transaction::Deposit(amount),
            self.clock.as_ref(),
        )?;

        Ok(Outcome::Deposited {
            account,
            amount,
            balance,
        })
    }

    fn withdraw(&mut self, account: AccountNumber, amount: Money) -> BankResult<Outcome> {
        let balance = self.client.perform_transaction(
            &account,
            &Transaction::Withdrawal(amount),
            self.clock.as_ref(),
        )?;

        Ok(Outcome::Withdrawn {
            account,
            amount,
            balance,
        })
    }

    fn transfer(
        &mut self,
        source: AccountNumber,
        destination: AccountNumber,
        amount: Money,
    ) -> BankResult<Outcome> {
        self.client
            .transfer(&source, &destination, amount, self.clock.as_ref())?;

        Ok(Outcome::Transferred {
            source,
            destination,
            amount,
        })
    }

    /// Every account followed by its full history
    fn statement(&self) -> String {
        let accounts = self.client.accounts();

        if accounts.is_empty() {
            return "No accounts found.\n".to_string();
        }

        let details: String = accounts
            .iter()
            .map(|account| format!("\n{account}{}", account.history()))
            .collect();

        format!("All accounts and transactions:\n{details}")
    }
}

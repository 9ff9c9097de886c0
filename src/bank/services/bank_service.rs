use crate::accounts_iterator::AccountsIterator;
use crate::clock::Clock;
use crate::config::BankConfig;
use crate::ids::{AccountNumber, TaxId};
use crate::models::{Account, AccountKind, Client, Holder};
use crate::statement::Statement;
use crate::Money;
use crate::Result;
use crate::Transaction;

use chrono::NaiveDate;
use thiserror::Error;

pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BankError {
    #[error("Client not found: {0}")]
    ClientNotFound(TaxId),

    #[error("A client with tax id {0} already exists")]
    DuplicateClient(TaxId),

    #[error("Client {0} has no account")]
    NoAccount(TaxId),

    #[error("Invalid birth date \"{0}\", expected dd-mm-yyyy")]
    InvalidBirthDate(String),

    #[error("No account numbers left after {0}")]
    AccountNumbersExhausted(AccountNumber),
}

/// Registration data for a new client
#[derive(Debug, Clone)]
pub struct NewClient {
    pub tax_id: TaxId,
    pub name: String,
    pub birth_date: String,
    pub address: String,
}

/// In-memory bank: every client, their accounts and the account numbering
pub struct Bank {
    config: BankConfig,
    clock: Box<dyn Clock>,
    clients: Vec<Client>,
    next_account_number: AccountNumber,
}

impl Bank {
    pub fn new(config: BankConfig, clock: Box<dyn Clock>) -> Self {
        let next_account_number = config.first_account_number;

        return Self {
            config,
            clock,
            clients: vec![],
            next_account_number,
        };
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn find_client(&self, tax_id: &TaxId) -> Option<&Client> {
        self.clients.iter().find(|client| client.tax_id() == tax_id)
    }

    pub fn create_client(&mut self, new_client: NewClient) -> Result<&Client> {
        if self.find_client(&new_client.tax_id).is_some() {
            Err(BankError::DuplicateClient(new_client.tax_id.clone()))?
        }

        let birth_date =
            NaiveDate::parse_from_str(new_client.birth_date.trim(), BIRTH_DATE_FORMAT)
                .map_err(|_| BankError::InvalidBirthDate(new_client.birth_date.clone()))?;

        let client = Client::new(
            new_client.tax_id,
            new_client.name.trim(),
            birth_date,
            new_client.address.trim(),
            self.config.daily_transaction_cap,
        );

        log::debug!("Registered client {}", client.tax_id());

        self.clients.push(client);

        let index = self.clients.len() - 1;
        return Ok(&self.clients[index]);
    }

    /// Opens a current account for the client; numbers are only consumed on success
    pub fn open_account(&mut self, tax_id: &TaxId) -> Result<AccountNumber> {
        let number = self.next_account_number;
        let following = number
            .next()
            .ok_or(BankError::AccountNumbersExhausted(number));
        let branch = self.config.branch.clone();
        let limits = self.config.current_account_limits();

        let client = self.find_client_mut(tax_id)?;
        let following = following?;

        let account = Account::new(
            number,
            branch,
            Holder::new(client.tax_id().clone(), client.name()),
            AccountKind::Current(limits),
        );
        client.add_account(account);

        self.next_account_number = following;

        return Ok(number);
    }

    pub fn deposit(&mut self, tax_id: &TaxId, amount: Money) -> Result {
        self.submit_to_primary_account(tax_id, Transaction::deposit(amount))
    }

    pub fn withdraw(&mut self, tax_id: &TaxId, amount: Money) -> Result {
        self.submit_to_primary_account(tax_id, Transaction::withdrawal(amount))
    }

    pub fn statement(&self, tax_id: &TaxId) -> Result<Statement> {
        let client = self
            .find_client(tax_id)
            .ok_or_else(|| BankError::ClientNotFound(tax_id.clone()))?;

        let account = client
            .primary_account()
            .ok_or_else(|| BankError::NoAccount(tax_id.clone()))?;

        return Ok(Statement::for_account(account));
    }

    /// Every account in the bank, in creation order
    pub fn accounts(&self) -> AccountsIterator<'_> {
        let mut accounts: Vec<&Account> = self
            .clients
            .iter()
            .flat_map(|client| client.accounts().iter())
            .collect();

        accounts.sort_by_key(|account| account.number());

        AccountsIterator::new(accounts)
    }

    fn submit_to_primary_account(&mut self, tax_id: &TaxId, transaction: Transaction) -> Result {
        let clients = &mut self.clients;
        let clock = self.clock.as_ref();

        let client = clients
            .iter_mut()
            .find(|client| client.tax_id() == tax_id)
            .ok_or_else(|| BankError::ClientNotFound(tax_id.clone()))?;

        let number = client
            .primary_account()
            .map(Account::number)
            .ok_or_else(|| BankError::NoAccount(tax_id.clone()))?;

        log::debug!("Submitting {transaction:?} to account {number} of client {tax_id}");

        client.submit(number, &transaction, clock)?;

        return Ok(());
    }

    fn find_client_mut(&mut self, tax_id: &TaxId) -> Result<&mut Client> {
        let client = self
            .clients
            .iter_mut()
            .find(|client| client.tax_id() == tax_id)
            .ok_or_else(|| BankError::ClientNotFound(tax_id.clone()))?;

        return Ok(client);
    }
}

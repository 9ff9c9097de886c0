use super::Account;

use crate::clock::Clock;
use crate::ids::{AccountNumber, TaxId};
use crate::Result;
use crate::Transaction;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClientError {
    #[error("Daily transaction cap of {cap} reached for account {account}")]
    DailyTransactionCapExceeded { account: AccountNumber, cap: usize },

    #[error("Account {1} does not belong to client {0}")]
    AccountNotFound(TaxId, AccountNumber),
}

/// An individual (pessoa física) holding zero or more accounts
#[derive(Debug, Clone)]
pub struct Client {
    tax_id: TaxId,
    name: String,
    birth_date: NaiveDate,
    address: String,
    daily_transaction_cap: usize,
    accounts: Vec<Account>,
}

impl Client {
    pub fn new(
        tax_id: TaxId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        address: impl Into<String>,
        daily_transaction_cap: usize,
    ) -> Self {
        return Self {
            tax_id,
            name: name.into(),
            birth_date,
            address: address.into(),
            daily_transaction_cap,
            accounts: vec![],
        };
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// First account opened by the client, the one console operations act on
    pub fn primary_account(&self) -> Option<&Account> {
        self.accounts.first()
    }

    pub fn add_account(&mut self, account: Account) {
        log::debug!("Adding account {} to client {}", account.number(), self.tax_id);

        self.accounts.push(account);
    }

    /// Submits a transaction to one of the client's accounts.
    ///
    /// The daily cap only looks at entries recorded today in the target account's
    /// history, and applies on top of the account's own withdrawal rules.
    pub fn submit(
        &mut self,
        number: AccountNumber,
        transaction: &Transaction,
        clock: &dyn Clock,
    ) -> Result {
        let cap = self.daily_transaction_cap;

        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or_else(|| ClientError::AccountNotFound(self.tax_id.clone(), number))?;

        let today = account.history().entries_for_today(clock).count();
        log::debug!("Account {number} has {today} transactions today (cap {cap})");

        if today >= cap {
            Err(ClientError::DailyTransactionCapExceeded {
                account: number,
                cap,
            })?
        }

        transaction.apply(account, clock)?;

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::clock::FixedClock;
    use crate::models::{AccountError, AccountKind, CurrentAccountLimits, Holder};
    use crate::Money;

    use chrono::Duration;

    const SOME_NUMBER: AccountNumber = AccountNumber(1001);
    const OTHER_NUMBER: AccountNumber = AccountNumber(1002);

    const SOME_AMOUNT: Money = Money::from_whole(100);

    fn build_clock() -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 2, 29)
                .and_then(|date| date.and_hms_opt(10, 0, 0))
                .unwrap(),
        )
    }

    fn build_client() -> Client {
        let tax_id = TaxId::new("98765432100");

        let mut client = Client::new(
            tax_id.clone(),
            "João Souza",
            NaiveDate::from_ymd_opt(1990, 4, 1).unwrap(),
            "Rua A, 10 - Centro - Recife/PE",
            2,
        );

        for number in [SOME_NUMBER, OTHER_NUMBER] {
            client.add_account(Account::new(
                number,
                "0001",
                Holder::new(tax_id.clone(), "João Souza"),
                AccountKind::Current(CurrentAccountLimits {
                    withdrawal_limit: Money::from_whole(500),
                    withdrawal_count_limit: 3,
                }),
            ));
        }

        client
    }

    #[test]
    fn add_account_keeps_creation_order() {
        let client = build_client();

        let numbers: Vec<_> = client.accounts().iter().map(Account::number).collect();

        assert_eq!(numbers, vec![SOME_NUMBER, OTHER_NUMBER]);
        assert_eq!(client.primary_account().map(Account::number), Some(SOME_NUMBER));
    }

    #[test]
    fn submit() {
        let clock = build_clock();
        let mut client = build_client();

        client
            .submit(SOME_NUMBER, &Transaction::deposit(SOME_AMOUNT), &clock)
            .unwrap();

        assert_eq!(client.accounts()[0].balance(), SOME_AMOUNT);
        assert_eq!(client.accounts()[1].balance(), Money::ZERO);
    }

    #[test]
    fn submit_rejects_third_transaction_of_the_day() {
        let clock = build_clock();
        let mut client = build_client();

        client
            .submit(SOME_NUMBER, &Transaction::deposit(SOME_AMOUNT), &clock)
            .unwrap();
        client
            .submit(SOME_NUMBER, &Transaction::withdrawal(Money::from_whole(10)), &clock)
            .unwrap();

        let err = client
            .submit(SOME_NUMBER, &Transaction::deposit(SOME_AMOUNT), &clock)
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ClientError>(),
            Some(&ClientError::DailyTransactionCapExceeded {
                account: SOME_NUMBER,
                cap: 2,
            })
        );
        assert_eq!(client.accounts()[0].balance(), Money::from_whole(90));
        assert_eq!(client.accounts()[0].history().len(), 2);

        // cap is tracked per account
        client
            .submit(OTHER_NUMBER, &Transaction::deposit(SOME_AMOUNT), &clock)
            .unwrap();

        clock.advance(Duration::days(1));
        client
            .submit(SOME_NUMBER, &Transaction::deposit(SOME_AMOUNT), &clock)
            .unwrap();
        assert_eq!(client.accounts()[0].balance(), Money::from_whole(190));
    }

    #[test]
    fn failed_transactions_do_not_count_towards_cap() {
        let clock = build_clock();
        let mut client = build_client();

        for _ in 0..3 {
            let err = client
                .submit(SOME_NUMBER, &Transaction::withdrawal(SOME_AMOUNT), &clock)
                .unwrap_err();
            assert!(err.downcast_ref::<AccountError>().is_some());
        }

        client
            .submit(SOME_NUMBER, &Transaction::deposit(SOME_AMOUNT), &clock)
            .unwrap();
        client
            .submit(SOME_NUMBER, &Transaction::withdrawal(SOME_AMOUNT), &clock)
            .unwrap();

        assert_eq!(client.accounts()[0].balance(), Money::ZERO);
    }

    #[test]
    fn submit_to_unknown_account() {
        let clock = build_clock();
        let mut client = build_client();

        let err = client
            .submit(AccountNumber(7), &Transaction::deposit(SOME_AMOUNT), &clock)
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ClientError>(),
            Some(&ClientError::AccountNotFound(
                TaxId::new("98765432100"),
                AccountNumber(7)
            ))
        );
    }
}

pub mod accounts_iterator;
pub mod clock;
pub mod config;
pub mod history;
pub mod ids;
pub mod models;
mod money;
mod result;
pub mod services;
pub mod statement;
mod transaction;

pub use money::{Money, MoneyError};
pub use result::Result;
pub use transaction::{Transaction, TransactionKind};

use clock::SystemClock;
use config::BankConfig;

pub fn build_bank() -> services::Bank {
    let config = BankConfig::default();
    let bank = services::Bank::new(config, Box::new(SystemClock));

    return bank;
}

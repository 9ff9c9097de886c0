use crate::clock::Clock;
use crate::models::Account;
use crate::Money;
use crate::Result;

use std::fmt;

/// Transaction represents a requested change to an account's balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
        };
    }
}

impl Transaction {
    pub fn deposit(amount: Money) -> Self {
        Self::Deposit { amount }
    }

    pub fn withdrawal(amount: Money) -> Self {
        Self::Withdrawal { amount }
    }

    pub fn amount(&self) -> Money {
        return match self {
            Self::Deposit { amount } | Self::Withdrawal { amount } => *amount,
        };
    }

    pub fn kind(&self) -> TransactionKind {
        return match self {
            Self::Deposit { .. } => TransactionKind::Deposit,
            Self::Withdrawal { .. } => TransactionKind::Withdrawal,
        };
    }

    /// Applies the transaction to the account balance, recording it in the account
    /// history only once the balance change went through.
    pub fn apply(&self, account: &mut Account, clock: &dyn Clock) -> Result {
        match self {
            Self::Deposit { amount } => account.deposit(*amount)?,
            Self::Withdrawal { amount } => account.withdraw(*amount)?,
        }

        account.history_mut().record(self, clock);

        log::debug!("Applied {self:?} to account {}", account.number());

        return Ok(());
    }
}

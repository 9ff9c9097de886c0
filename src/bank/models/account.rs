use crate::history::History;
use crate::ids::{AccountNumber, TaxId};
use crate::Money;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    #[error("Insufficient funds: cannot withdraw R$ {requested} with a balance of R$ {balance}")]
    InsufficientFunds { requested: Money, balance: Money },

    #[error("Withdrawal of R$ {requested} exceeds the limit of R$ {limit}")]
    LimitExceeded { requested: Money, limit: Money },

    #[error("Number of withdrawals exceeded: limit is {limit}")]
    WithdrawalCountExceeded { limit: usize },

    #[error("Balance overflow while depositing R$ {0}")]
    BalanceOverflow(Money),
}

/// Back-reference to the client owning an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holder {
    pub tax_id: TaxId,
    pub name: String,
}

impl Holder {
    pub fn new(tax_id: TaxId, name: impl Into<String>) -> Self {
        return Self {
            tax_id,
            name: name.into(),
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentAccountLimits {
    pub withdrawal_limit: Money,
    pub withdrawal_count_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Basic,
    Current(CurrentAccountLimits),
}

#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    branch: String,
    holder: Holder,
    balance: Money,
    history: History,
    kind: AccountKind,
}

impl Account {
    pub fn new(
        number: AccountNumber,
        branch: impl Into<String>,
        holder: Holder,
        kind: AccountKind,
    ) -> Self {
        return Self {
            number,
            branch: branch.into(),
            holder,
            balance: Money::ZERO,
            history: History::new(),
            kind,
        };
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn holder(&self) -> &Holder {
        &self.holder
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Withdrawals still allowed on a current account, `None` for basic accounts
    pub fn withdrawals_left(&self) -> Option<usize> {
        return match self.kind {
            AccountKind::Basic => None,
            AccountKind::Current(limits) => Some(
                limits
                    .withdrawal_count_limit
                    .saturating_sub(self.history.withdrawal_count()),
            ),
        };
    }

    pub fn deposit(&mut self, amount: Money) -> Result {
        if !amount.is_positive() {
            Err(AccountError::InvalidAmount(amount))?
        }

        self.balance = self
            .balance
            .checked_add(&amount)
            .map_err(|_| AccountError::BalanceOverflow(amount))?;

        return Ok(());
    }

    pub fn withdraw(&mut self, amount: Money) -> Result {
        if let AccountKind::Current(limits) = self.kind {
            if amount > limits.withdrawal_limit {
                Err(AccountError::LimitExceeded {
                    requested: amount,
                    limit: limits.withdrawal_limit,
                })?
            }

            // counts withdrawals over the whole history, not only today's
            if self.history.withdrawal_count() >= limits.withdrawal_count_limit {
                Err(AccountError::WithdrawalCountExceeded {
                    limit: limits.withdrawal_count_limit,
                })?
            }
        }

        if !amount.is_positive() {
            Err(AccountError::InvalidAmount(amount))?
        }

        if amount > self.balance {
            Err(AccountError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            })?
        }

        self.balance = self.balance.checked_sub(&amount)?;

        return Ok(());
    }
}

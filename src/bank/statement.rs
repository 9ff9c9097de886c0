use crate::history::HistoryEntry;
use crate::ids::AccountNumber;
use crate::models::{Account, AccountKind};
use crate::Money;

use std::fmt;

/// Point-in-time statement (extrato) of one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub number: AccountNumber,
    pub entries: Vec<HistoryEntry>,
    pub balance: Money,
    pub withdrawal_limit: Option<Money>,
    pub withdrawals_left: Option<usize>,
}

impl Statement {
    pub fn for_account(account: &Account) -> Self {
        let withdrawal_limit = match account.kind() {
            AccountKind::Basic => None,
            AccountKind::Current(limits) => Some(limits.withdrawal_limit),
        };

        return Self {
            number: account.number(),
            entries: account.history().entries().cloned().collect(),
            balance: account.balance(),
            withdrawal_limit,
            withdrawals_left: account.withdrawals_left(),
        };
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.entries.is_empty() {
            writeln!(f, "No transactions were recorded.")?;
        }

        for entry in self.entries.iter() {
            writeln!(
                f,
                "{}:\tR$ {}\tDate: {}",
                entry.kind,
                entry.amount,
                entry.formatted_timestamp()
            )?;
        }

        write!(f, "\nBalance:\tR$ {}", self.balance)?;

        if let Some(limit) = self.withdrawal_limit {
            write!(f, "\nWithdrawal limit:\tR$ {limit}")?;
        }

        if let Some(left) = self.withdrawals_left {
            write!(f, "\nWithdrawals left:\t{left}")?;
        }

        return Ok(());
    }
}

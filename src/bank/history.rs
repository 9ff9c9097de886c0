use crate::clock::Clock;
use crate::{Money, Transaction, TransactionKind};

use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A transaction that was applied to an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: NaiveDateTime,
}

impl HistoryEntry {
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Represents a WORM (Write Once, Read Many) log of the transactions applied to one account
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, transaction: &Transaction, clock: &dyn Clock) -> usize {
        let index = self.entries.len();

        self.entries.push(HistoryEntry {
            kind: transaction.kind(),
            amount: transaction.amount(),
            timestamp: clock.now(),
        });

        index
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub fn entries_for_today<'a>(
        &'a self,
        clock: &dyn Clock,
    ) -> impl Iterator<Item = &'a HistoryEntry> + 'a {
        let today = clock.today();

        self.entries()
            .filter(move |entry| entry.timestamp.date() == today)
    }

    /// Counts every withdrawal ever recorded, regardless of its date
    pub fn withdrawal_count(&self) -> usize {
        self.entries()
            .filter(|entry| entry.kind == TransactionKind::Withdrawal)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

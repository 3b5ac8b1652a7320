use crate::{Money, Transaction, TransactionKind};

use std::fmt;

use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A recorded transaction. Never changes after being appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    kind: TransactionKind,
    amount: Money,
    recorded_at: NaiveDateTime,
}

impl HistoryEntry {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn recorded_at(&self) -> NaiveDateTime {
        self.recorded_at
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Kind: {}, Amount: R$ {}, Date: {}",
            self.kind,
            self.amount,
            self.recorded_at.format(TIMESTAMP_FORMAT)
        )
    }
}

/// Represents a WORM (Write Once, Read Many) log of one account's transactions, oldest first
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, transaction: &Transaction, recorded_at: NaiveDateTime) -> usize {
        let index = self.entries.len();

        self.entries.push(HistoryEntry {
            kind: transaction.kind(),
            amount: transaction.amount(),
            recorded_at,
        });

        index
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn count(&self, kind: TransactionKind) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No transactions recorded.");
        }

        writeln!(f, "Transaction history:")?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }

        Ok(())
    }
}

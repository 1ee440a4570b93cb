use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Processing status of a transaction
///
/// Any status may follow any other; there are no transition restrictions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Unauthorized,
    Successful,
    Failed,
    Aborted,
}

/// A single transfer record: who sent what to whom, and how it ended up.
///
/// The id is fixed at construction. Status is the only field that changes
/// afterwards, via [`Transaction::change_status`]; once a record is handed
/// to a store, that happens through the store's status-change operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    id: u32,
    status: TransactionStatus,
    sender: String,
    receiver: String,
    amount: Decimal,
}

impl Transaction {
    /// Create a new transaction record
    pub fn new(
        id: u32,
        status: TransactionStatus,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            id,
            status,
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Replace the status; always succeeds
    pub fn change_status(&mut self, new_status: TransactionStatus) {
        self.status = new_status;
    }
}

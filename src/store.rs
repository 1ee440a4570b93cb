use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{ChainblockError, Result};
use crate::models::{Transaction, TransactionStatus};

/// In-memory transaction store
///
/// Holds at most one transaction per id; the map itself is unordered and
/// every query computes its ordering at read time. Queries hand out
/// references, never ownership.
pub struct Chainblock {
    /// Map of transaction ID to record
    transactions: HashMap<u32, Transaction>,
}

impl Chainblock {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            transactions: HashMap::new(),
        }
    }

    /// Number of distinct transactions currently held
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Insert a transaction unless its id is already taken
    ///
    /// The first record wins: a later insert with an id already present is
    /// silently discarded, not treated as an upsert.
    pub fn add(&mut self, transaction: Transaction) {
        self.transactions
            .entry(transaction.id())
            .or_insert(transaction);
    }

    /// Membership test by the transaction's id
    pub fn contains(&self, transaction: &Transaction) -> bool {
        self.contains_id(transaction.id())
    }

    /// Membership test by id
    pub fn contains_id(&self, id: u32) -> bool {
        self.transactions.contains_key(&id)
    }

    /// Set the status of the stored record with the given id
    ///
    /// Any status may follow any other; the transition itself cannot fail.
    pub fn change_status(&mut self, id: u32, new_status: TransactionStatus) -> Result<()> {
        let transaction = self
            .transactions
            .get_mut(&id)
            .ok_or_else(|| ChainblockError::NotFound(format!("transaction id {}", id)))?;

        transaction.change_status(new_status);
        Ok(())
    }

    /// Delete the entry with the given id, returning the removed record
    pub fn remove_by_id(&mut self, id: u32) -> Result<Transaction> {
        self.transactions
            .remove(&id)
            .ok_or_else(|| ChainblockError::NotFound(format!("transaction id {}", id)))
    }

    /// Look up a transaction by id
    pub fn get_by_id(&self, id: u32) -> Result<&Transaction> {
        self.transactions
            .get(&id)
            .ok_or_else(|| ChainblockError::NotFound(format!("transaction id {}", id)))
    }

    /// All transactions with the given status, newest id first
    pub fn get_by_status(&self, status: TransactionStatus) -> Result<Vec<&Transaction>> {
        let mut matches: Vec<&Transaction> = self
            .transactions
            .values()
            .filter(|tx| tx.status() == status)
            .collect();

        if matches.is_empty() {
            return Err(ChainblockError::NotFound(format!("status {:?}", status)));
        }

        matches.sort_by(|a, b| b.id().cmp(&a.id()));
        Ok(matches)
    }

    /// Sender names of all transactions with the given status, in id order
    ///
    /// Duplicates are retained: a sender appears once per matching record.
    pub fn senders_with_status(&self, status: TransactionStatus) -> Result<Vec<&str>> {
        let matches = self.with_status_by_id(status)?;
        Ok(matches.into_iter().map(|tx| tx.sender()).collect())
    }

    /// Receiver names of all transactions with the given status, in id order
    ///
    /// Duplicates are retained, as for [`Chainblock::senders_with_status`].
    pub fn receivers_with_status(&self, status: TransactionStatus) -> Result<Vec<&str>> {
        let matches = self.with_status_by_id(status)?;
        Ok(matches.into_iter().map(|tx| tx.receiver()).collect())
    }

    /// Every transaction, largest amount first; equal amounts order by id
    pub fn all_ordered_by_amount(&self) -> Vec<&Transaction> {
        let mut all: Vec<&Transaction> = self.transactions.values().collect();
        all.sort_by(|a, b| Self::amount_desc_then_id(a, b));
        all
    }

    /// Transactions from the given sender, largest amount first
    pub fn get_by_sender(&self, sender: &str) -> Result<Vec<&Transaction>> {
        let mut matches: Vec<&Transaction> = self
            .transactions
            .values()
            .filter(|tx| tx.sender() == sender)
            .collect();

        if matches.is_empty() {
            return Err(ChainblockError::NotFound(format!("sender {}", sender)));
        }

        matches.sort_by(|a, b| Self::amount_desc_then_id(a, b));
        Ok(matches)
    }

    /// Transactions to the given receiver, smallest amount first, ties by id
    pub fn get_by_receiver(&self, receiver: &str) -> Result<Vec<&Transaction>> {
        let mut matches: Vec<&Transaction> = self
            .transactions
            .values()
            .filter(|tx| tx.receiver() == receiver)
            .collect();

        if matches.is_empty() {
            return Err(ChainblockError::NotFound(format!("receiver {}", receiver)));
        }

        matches.sort_by(|a, b| Self::amount_asc_then_id(a, b));
        Ok(matches)
    }

    /// Transactions with the given status whose amount is at most the cap,
    /// largest amount first
    ///
    /// Returns an empty collection when nothing matches; unlike the
    /// status/sender/receiver queries this is never an error.
    pub fn get_by_status_and_max_amount(
        &self,
        status: TransactionStatus,
        max_amount: Decimal,
    ) -> Vec<&Transaction> {
        let mut matches: Vec<&Transaction> = self
            .transactions
            .values()
            .filter(|tx| tx.status() == status && tx.amount() <= max_amount)
            .collect();

        matches.sort_by(|a, b| Self::amount_desc_then_id(a, b));
        matches
    }

    /// Transactions from the given sender strictly above the minimum amount,
    /// largest amount first
    ///
    /// An unknown sender and a known sender with nothing above the bound
    /// fail the same way.
    pub fn get_by_sender_and_min_amount(
        &self,
        sender: &str,
        min_amount: Decimal,
    ) -> Result<Vec<&Transaction>> {
        let mut matches: Vec<&Transaction> = self
            .transactions
            .values()
            .filter(|tx| tx.sender() == sender && tx.amount() > min_amount)
            .collect();

        if matches.is_empty() {
            return Err(ChainblockError::NotFound(format!("sender {}", sender)));
        }

        matches.sort_by(|a, b| Self::amount_desc_then_id(a, b));
        Ok(matches)
    }

    /// Transactions to the given receiver with amount in `[lo, hi]`,
    /// smallest amount first, ties by id
    ///
    /// Bounds are inclusive. An unknown receiver and a known receiver with
    /// no amount in range fail the same way.
    pub fn get_by_receiver_in_range(
        &self,
        receiver: &str,
        lo: Decimal,
        hi: Decimal,
    ) -> Result<Vec<&Transaction>> {
        let mut matches: Vec<&Transaction> = self
            .transactions
            .values()
            .filter(|tx| tx.receiver() == receiver && (lo..=hi).contains(&tx.amount()))
            .collect();

        if matches.is_empty() {
            return Err(ChainblockError::NotFound(format!("receiver {}", receiver)));
        }

        matches.sort_by(|a, b| Self::amount_asc_then_id(a, b));
        Ok(matches)
    }

    /// All transactions with amount in `[lo, hi]`, smallest amount first
    ///
    /// Bounds are inclusive. Returns an empty collection when nothing
    /// matches; never an error.
    pub fn get_all_in_range(&self, lo: Decimal, hi: Decimal) -> Vec<&Transaction> {
        let mut matches: Vec<&Transaction> = self
            .transactions
            .values()
            .filter(|tx| (lo..=hi).contains(&tx.amount()))
            .collect();

        matches.sort_by(|a, b| Self::amount_asc_then_id(a, b));
        matches
    }

    /// Visit every held transaction exactly once, in no particular order
    ///
    /// The traversal is lazy and each call starts a fresh one.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.values()
    }

    /// Matches for a status, sorted ascending by id; NotFound when empty
    fn with_status_by_id(&self, status: TransactionStatus) -> Result<Vec<&Transaction>> {
        let mut matches: Vec<&Transaction> = self
            .transactions
            .values()
            .filter(|tx| tx.status() == status)
            .collect();

        if matches.is_empty() {
            return Err(ChainblockError::NotFound(format!("status {:?}", status)));
        }

        matches.sort_by_key(|tx| tx.id());
        Ok(matches)
    }

    fn amount_desc_then_id(a: &Transaction, b: &Transaction) -> std::cmp::Ordering {
        b.amount()
            .cmp(&a.amount())
            .then_with(|| a.id().cmp(&b.id()))
    }

    fn amount_asc_then_id(a: &Transaction, b: &Transaction) -> std::cmp::Ordering {
        a.amount()
            .cmp(&b.amount())
            .then_with(|| a.id().cmp(&b.id()))
    }
}

impl Default for Chainblock {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Chainblock {
    type Item = &'a Transaction;
    type IntoIter = std::collections::hash_map::Values<'a, u32, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.values()
    }
}

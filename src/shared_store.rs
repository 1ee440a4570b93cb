use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{Transaction, TransactionStatus};
use crate::store::Chainblock;

/// Thread-safe handle around a [`Chainblock`]
///
/// The store itself is single-threaded by design; concurrent callers go
/// through this wrapper, which puts the whole store behind one async
/// `RwLock` (many readers or one writer). Queries take the read lock and
/// return owned clones, mutations take the write lock.
///
/// # Example
///
/// ```no_run
/// use chainblock::models::{Transaction, TransactionStatus};
/// use chainblock::shared_store::SharedChainblock;
/// use rust_decimal_macros::dec;
///
/// #[tokio::main]
/// async fn main() {
///     let store = SharedChainblock::new();
///
///     // Clone handle for sharing across tasks
///     let handle = store.clone_handle();
///
///     tokio::spawn(async move {
///         let tx = Transaction::new(
///             1,
///             TransactionStatus::Unauthorized,
///             "alice",
///             "bob",
///             dec!(100.0),
///         );
///         handle.add(tx).await;
///     });
/// }
/// ```
pub struct SharedChainblock {
    inner: Arc<RwLock<Chainblock>>,
}

impl SharedChainblock {
    /// Create a handle to a new empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Chainblock::new())),
        }
    }

    /// Clone handle for sharing across tasks
    ///
    /// Cheap (clones one `Arc`); both handles address the same store.
    pub fn clone_handle(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }

    /// Insert a transaction unless its id is already taken
    pub async fn add(&self, transaction: Transaction) {
        self.inner.write().await.add(transaction);
    }

    /// Number of distinct transactions currently held
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Membership test by id
    pub async fn contains_id(&self, id: u32) -> bool {
        self.inner.read().await.contains_id(id)
    }

    /// Set the status of the stored record with the given id
    pub async fn change_status(&self, id: u32, new_status: TransactionStatus) -> Result<()> {
        self.inner.write().await.change_status(id, new_status)
    }

    /// Delete the entry with the given id, returning the removed record
    pub async fn remove_by_id(&self, id: u32) -> Result<Transaction> {
        self.inner.write().await.remove_by_id(id)
    }

    /// Look up a transaction by id, returning an owned copy
    pub async fn get_by_id(&self, id: u32) -> Result<Transaction> {
        self.inner.read().await.get_by_id(id).cloned()
    }

    /// All transactions with the given status, newest id first, as owned copies
    pub async fn get_by_status(&self, status: TransactionStatus) -> Result<Vec<Transaction>> {
        self.inner
            .read()
            .await
            .get_by_status(status)
            .map(|matches| matches.into_iter().cloned().collect())
    }

    /// Owned copies of every held transaction, sorted by id
    pub async fn snapshot(&self) -> Vec<Transaction> {
        let store = self.inner.read().await;

        let mut all: Vec<Transaction> = store.iter().cloned().collect();
        // Sort by id for deterministic output
        all.sort_by_key(|tx| tx.id());
        all
    }
}

impl Default for SharedChainblock {
    fn default() -> Self {
        Self::new()
    }
}

// SharedChainblock is Send + Sync: Arc and RwLock are, and Chainblock holds
// only owned data. Handles can move freely across tokio tasks.

pub mod error;
pub mod models;
pub mod shared_store;
pub mod store;

pub use error::{ChainblockError, Result};
pub use models::{Transaction, TransactionStatus};
pub use shared_store::SharedChainblock;
pub use store::Chainblock;

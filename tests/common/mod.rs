use chainblock::models::{Transaction, TransactionStatus};
use chainblock::Chainblock;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Helper to create a transaction with all fields
pub fn make_transaction(
    id: u32,
    status: TransactionStatus,
    sender: &str,
    receiver: &str,
    amount: Decimal,
) -> Transaction {
    Transaction::new(id, status, sender, receiver, amount)
}

/// Helper to create an unauthorized transaction with placeholder parties
pub fn make_unauthorized(id: u32, amount: Decimal) -> Transaction {
    make_transaction(
        id,
        TransactionStatus::Unauthorized,
        "From_Test",
        "To_Test",
        amount,
    )
}

/// Build a store holding `count` distinct unauthorized transactions
pub fn fill_chainblock(count: u32) -> Chainblock {
    let mut chainblock = Chainblock::new();

    for i in 0..count {
        chainblock.add(Transaction::new(
            1997 + i,
            TransactionStatus::Unauthorized,
            format!("From_Test{}", i),
            format!("To_Test{}", i),
            dec!(100) + Decimal::from(i),
        ));
    }

    chainblock
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_transaction() {
        let tx = make_transaction(
            1948,
            TransactionStatus::Successful,
            "From_Test",
            "To_Test",
            dec!(50.25),
        );

        assert_eq!(tx.id(), 1948);
        assert_eq!(tx.status(), TransactionStatus::Successful);
        assert_eq!(tx.sender(), "From_Test");
        assert_eq!(tx.receiver(), "To_Test");
        assert_eq!(tx.amount(), dec!(50.25));
    }

    #[test]
    fn test_fill_chainblock() {
        let chainblock = fill_chainblock(10);

        assert_eq!(chainblock.len(), 10);
        assert!(chainblock.contains_id(1997));
        assert!(chainblock.contains_id(2006));
        assert!(!chainblock.contains_id(2007));
    }
}

use super::aggregate::Transaction;
use serde::{Deserialize, Serialize};

/// Wire shape of the transactions list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
    /// Account balance after the latest entry.
    pub balance: f64,
}

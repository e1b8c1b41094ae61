use crate::enums::TransactionType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for the transaction aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub Uuid);

impl TransactionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TransactionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// One recorded financial event.
///
/// Owned and validated by the transaction service; declared here so the
/// client type-checks against the same shape it receives on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Always positive; direction comes from the type.
    pub amount: f64,

    pub category: String,
    pub subcategory: Option<String>,
    pub date: NaiveDate,

    /// Account balance after this entry, computed by the service.
    pub balance: f64,
}

impl Transaction {
    /// Amount with its sign applied: outflows count against the balance.
    pub fn signed_amount(&self) -> f64 {
        if self.transaction_type.is_outflow() {
            -self.amount
        } else {
            self.amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_string_round_trip() {
        let id = TransactionId::new_v4();
        assert_eq!(TransactionId::from_string(&id.as_string()), Ok(id));
        assert!(TransactionId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn signed_amount_follows_type_direction() {
        let mut tx = Transaction {
            id: TransactionId::new_v4(),
            transaction_type: TransactionType::Income,
            amount: 120.0,
            category: "Salary".to_string(),
            subcategory: None,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            balance: 120.0,
        };
        assert_eq!(tx.signed_amount(), 120.0);

        tx.transaction_type = TransactionType::Expense;
        assert_eq!(tx.signed_amount(), -120.0);
    }

    #[test]
    fn wire_shape_uses_type_field_and_rejects_unknown_categories() {
        let json = r#"{
            "id": "7f8a6f2e-5f34-4a5c-9c8b-2c7d6e1a0b3f",
            "type": "Expense",
            "amount": 42.5,
            "category": "Food",
            "subcategory": "Groceries",
            "date": "2025-03-15",
            "balance": 957.5
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.transaction_type, TransactionType::Expense);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());

        let bad = json.replace("Expense", "Rent");
        assert!(serde_json::from_str::<Transaction>(&bad).is_err());
    }
}

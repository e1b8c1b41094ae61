use crate::enums::TransactionType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields a caller supplies to create a transaction. The service assigns
/// the id and the running balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionData {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub category: String,
    pub subcategory: Option<String>,
    pub date: NaiveDate,
}

impl CreateTransactionData {
    /// Client-side pre-flight check mirroring the service contract.
    /// The service remains the authority.
    pub fn validate(&self) -> Result<(), String> {
        if !self.amount.is_finite() {
            return Err("Amount must be a number".to_string());
        }
        if self.amount <= 0.0 {
            return Err("Amount must be greater than zero".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Category cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CreateTransactionData {
        CreateTransactionData {
            transaction_type: TransactionType::Expense,
            amount: 19.99,
            category: "Transport".to_string(),
            subcategory: Some("Fuel".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        }
    }

    #[test]
    fn valid_data_passes() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut data = sample();
        data.amount = 0.0;
        assert!(data.validate().is_err());

        data.amount = -5.0;
        assert!(data.validate().is_err());

        data.amount = f64::NAN;
        assert!(data.validate().is_err());
    }

    #[test]
    fn blank_category_is_rejected() {
        let mut data = sample();
        data.category = "   ".to_string();
        assert!(data.validate().is_err());
    }
}

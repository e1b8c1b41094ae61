use serde::{Deserialize, Serialize};

/// Categories a ledger entry can carry. Closed set: the service rejects
/// anything outside it, and so does deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Expense,
    Income,
    Saving,
    Investment,
}

impl TransactionType {
    /// Stable lowercase code, used for CSS classes and form values.
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
            TransactionType::Saving => "saving",
            TransactionType::Investment => "investment",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionType::Expense => "Expense",
            TransactionType::Income => "Income",
            TransactionType::Saving => "Saving",
            TransactionType::Investment => "Investment",
        }
    }

    /// All types, in presentation order.
    pub fn all() -> [TransactionType; 4] {
        [
            TransactionType::Expense,
            TransactionType::Income,
            TransactionType::Saving,
            TransactionType::Investment,
        ]
    }

    /// Parse from a lowercase code.
    pub fn from_code(code: &str) -> Result<Self, String> {
        match code {
            "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            "saving" => Ok(TransactionType::Saving),
            "investment" => Ok(TransactionType::Investment),
            _ => Err(format!("Unknown transaction type: {}", code)),
        }
    }

    /// Whether the amount counts against the available balance.
    /// Only income adds to it; savings and investments move money out.
    pub fn is_outflow(&self) -> bool {
        !matches!(self, TransactionType::Income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_every_known_code() {
        for t in TransactionType::all() {
            assert_eq!(TransactionType::from_code(t.code()), Ok(t));
        }
    }

    #[test]
    fn from_code_rejects_out_of_set_values() {
        assert!(TransactionType::from_code("rent").is_err());
        assert!(TransactionType::from_code("Expense").is_err());
        assert!(TransactionType::from_code("").is_err());
    }

    #[test]
    fn deserialization_rejects_out_of_set_values() {
        let parsed: Result<TransactionType, _> = serde_json::from_str("\"Groceries\"");
        assert!(parsed.is_err());

        let ok: TransactionType = serde_json::from_str("\"Saving\"").unwrap();
        assert_eq!(ok, TransactionType::Saving);
    }

    #[test]
    fn income_is_the_only_inflow() {
        let inflows: Vec<_> = TransactionType::all()
            .into_iter()
            .filter(|t| !t.is_outflow())
            .collect();
        assert_eq!(inflows, vec![TransactionType::Income]);
    }
}

use contracts::domain::transaction::Transaction;
use contracts::enums::FilterPeriod;
use leptos::prelude::*;

/// View state of the transactions list.
#[derive(Clone, Debug)]
pub struct TransactionsListState {
    /// Entries currently visible after filtering and sorting.
    pub items: Vec<Transaction>,
    pub period: FilterPeriod,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for TransactionsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            period: FilterPeriod::All,
            search_query: String::new(),
            sort_field: "date".to_string(),
            sort_ascending: false,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<TransactionsListState> {
    RwSignal::new(TransactionsListState::default())
}

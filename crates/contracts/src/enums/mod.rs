pub mod filter_period;
pub mod transaction_type;

pub use filter_period::FilterPeriod;
pub use transaction_type::TransactionType;

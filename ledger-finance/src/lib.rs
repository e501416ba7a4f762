//! ledger-finance: monthly aggregation, analytics, CSV export and the
//! end-to-end statement pipeline

pub mod analytics;
pub mod export;
pub mod monthly;
pub mod pipeline;

pub use analytics::calculate_analytics;
pub use export::{export_transactions_csv, write_transactions_csv};
pub use monthly::analyze_monthly;
pub use pipeline::{process_outcome, process_pages};

//! ledger-ingest: statement text (OCR + text layer, one string per page) to
//! layout, account fields and transaction rows.

pub mod amount;
pub mod date;
pub mod description;
pub mod disambiguate;
pub mod fields;
pub mod layout;
pub mod segment;

pub use amount::{AmountScanner, parse_amount};
pub use date::{FixedDateRecognizer, find_template_date};
pub use disambiguate::{AmountTriple, disambiguate};
pub use fields::extract_account_info;
pub use layout::{classify_layout, detect_language, detect_layout};
pub use segment::{LtrSegmenter, RtlSegmenter, ScanState, Segmenter, TransactionSegmenter};

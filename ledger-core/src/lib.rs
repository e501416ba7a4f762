//! ledger-core: statement data model, extractor configuration and errors

pub mod config;
pub mod error;
pub mod report;
pub mod statement;

pub use config::{DateTemplate, ExtractorConfig, LabelDictionary};
pub use error::{ExtractError, Result};
pub use report::{AnalyticsSummary, FrontendSummary, MonthlyStats, StatementOutcome, StatementReport};
pub use statement::{
    AccountField, AccountInfo, AmountFormat, Direction, Language, LayoutContext, Transaction,
};

//! Document-level failures. Anything finer-grained (a line without a date,
//! a label that is missing) is a skipped row, not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Could not extract text from PDF")]
    NoPages,

    #[error("layout classification needs at least 2 pages, got {pages}")]
    LayoutUnavailable { pages: usize },

    #[error("layout classification needs 3 lines on page 2, got {lines}")]
    SecondPageTooShort { lines: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stage failures, such as a pattern that does not compile
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExtractError {
    /// Both page-count and page-shape failures mean no layout could be decided.
    pub fn is_layout_failure(&self) -> bool {
        matches!(
            self,
            ExtractError::LayoutUnavailable { .. } | ExtractError::SecondPageTooShort { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;

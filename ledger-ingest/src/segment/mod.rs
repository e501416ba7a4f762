//! Transaction segmentation: page texts in, accepted ledger rows out.
//!
//! Two strategies share the contract and the acceptance rules:
//!   - [`LtrSegmenter`]: date first, then amounts in the following window
//!   - [`RtlSegmenter`]: three stacked amounts first, then the date below them

mod ltr;
mod rtl;

pub use ltr::LtrSegmenter;
pub use rtl::RtlSegmenter;

use anyhow::Result;
use chrono::NaiveDate;

use ledger_core::{AmountFormat, Direction, ExtractorConfig, LayoutContext, Transaction};

pub trait TransactionSegmenter {
    fn segment(&self, pages: &[&str]) -> Vec<Transaction>;
}

/// Accumulator threaded through a scan
#[derive(Debug, Default)]
pub struct ScanState {
    /// Date of the last row the line scanner accepted
    pub last_date: Option<NaiveDate>,
    pub accepted: Vec<Transaction>,
}

impl ScanState {
    /// Append `candidate` unless it moves no money, has no description, or
    /// repeats the previous accepted row. Returns whether it was kept.
    pub fn accept(&mut self, candidate: Transaction) -> bool {
        if candidate.is_zero() {
            tracing::debug!(date = %candidate.date, "rejected: no debit or credit");
            return false;
        }
        if candidate.description.trim().is_empty() {
            tracing::debug!(date = %candidate.date, "rejected: empty description");
            return false;
        }
        if let Some(prev) = self.accepted.last() {
            if candidate.is_duplicate_of(prev) {
                tracing::debug!(date = %candidate.date, description = %candidate.description, "duplicate row dropped");
                return false;
            }
        }
        self.accepted.push(candidate);
        true
    }
}

/// Page text split into raw lines
pub(crate) fn page_lines(page: &str) -> Vec<&str> {
    page.split('\n').collect()
}

/// Segmentation strategy chosen once per document from its layout.
///
/// Alternate-format amounts are untagged and only the line scanner can pair
/// them, so alternate documents go to [`LtrSegmenter`] whatever their direction.
#[derive(Debug, Clone)]
pub enum Segmenter<'c> {
    Ltr(LtrSegmenter<'c>),
    Rtl(RtlSegmenter<'c>),
}

impl<'c> Segmenter<'c> {
    pub fn for_layout(layout: &LayoutContext, config: &'c ExtractorConfig) -> Result<Self> {
        Ok(match (layout.direction, layout.amount_format) {
            (Direction::Ltr, format) | (Direction::Rtl, format @ AmountFormat::Alternate) => {
                Segmenter::Ltr(LtrSegmenter::new(config, format)?)
            }
            (Direction::Rtl, AmountFormat::Standard) => Segmenter::Rtl(RtlSegmenter::new(config)?),
        })
    }
}

impl TransactionSegmenter for Segmenter<'_> {
    fn segment(&self, pages: &[&str]) -> Vec<Transaction> {
        match self {
            Segmenter::Ltr(s) => s.segment(pages),
            Segmenter::Rtl(s) => s.segment(pages),
        }
    }
}

//! Amount-led scanning for right-to-left tables.
//!
//! RTL text layers come out column by column, so one row reads as three
//! stacked amount cells followed by the details and the date:
//!   1,500.00 SAR        <- balance
//!   0.00 SAR            <- credit
//!   250.00 SAR          <- debit
//!   شراء نقاط البيع
//!   2024/06/17

use anyhow::Result;

use ledger_core::{Direction, ExtractorConfig, Transaction};

use super::{ScanState, TransactionSegmenter, page_lines};
use crate::amount::AmountScanner;
use crate::date::FixedDateRecognizer;
use crate::description::rtl_description;
use crate::disambiguate::disambiguate;

/// Lines (including the first) searched for the three amount cells
const AMOUNT_SEARCH_LINES: usize = 3;
const AMOUNT_CELLS: usize = 3;

#[derive(Debug, Clone)]
pub struct RtlSegmenter<'c> {
    config: &'c ExtractorConfig,
    amounts: AmountScanner,
    dates: FixedDateRecognizer,
}

impl<'c> RtlSegmenter<'c> {
    pub fn new(config: &'c ExtractorConfig) -> Result<Self> {
        Ok(Self {
            config,
            amounts: AmountScanner::new(config)?,
            dates: FixedDateRecognizer::new()?,
        })
    }

    fn scan_page(&self, mut state: ScanState, page: &str) -> ScanState {
        let lines = page_lines(page);

        for (i, raw) in lines.iter().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let Some(first) = self.amounts.single_tagged(line) else {
                continue;
            };

            let mut cells = vec![first];
            let cell_end = (i + AMOUNT_SEARCH_LINES).min(lines.len());
            for next in lines[i + 1..cell_end].iter().map(|l| l.trim()) {
                if cells.len() == AMOUNT_CELLS {
                    break;
                }
                if let Some(amount) = self.amounts.single_tagged(next) {
                    cells.push(amount);
                }
            }
            if cells.len() != AMOUNT_CELLS {
                continue;
            }

            if let Some(candidate) = self.candidate(&lines, i, &cells) {
                state.accept(candidate);
            }
        }

        state
    }

    /// Date, amounts and description for the row whose first cell is `lines[start]`.
    fn candidate(&self, lines: &[&str], start: usize, cells: &[f64]) -> Option<Transaction> {
        let search_end = (start + self.config.rtl_date_search_lines).min(lines.len());

        let date = lines[start..search_end]
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .find_map(|l| self.dates.find(l));
        let Some(date) = date else {
            tracing::debug!(line = start, "rejected: no date below amount cells");
            return None;
        };

        let triple = disambiguate(cells, Direction::Rtl)?;
        if triple.is_zero() {
            return None;
        }

        // An empty description is left for ScanState::accept to reject.
        let window_end = (start + self.config.window()).min(lines.len());
        let description =
            rtl_description(&lines[start..window_end], &self.config.currency_symbols, date.text);

        Some(Transaction::new(date.date, description, triple.debit, triple.credit, triple.balance))
    }
}

impl TransactionSegmenter for RtlSegmenter<'_> {
    fn segment(&self, pages: &[&str]) -> Vec<Transaction> {
        pages
            .iter()
            .fold(ScanState::default(), |state, page| self.scan_page(state, page))
            .accepted
    }
}

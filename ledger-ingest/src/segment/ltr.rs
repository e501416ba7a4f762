//! Date-led scanning for left-to-right tables.
//!
//! Expected text after PDF-to-text (one row, wrapped over several lines):
//!   2024/06/17   POS PURCHASE
//!   JARIR BOOKSTORE RIYADH
//!   100.00 SAR   0.00 SAR   1,400.00 SAR

use anyhow::Result;
use chrono::NaiveDate;

use ledger_core::{AmountFormat, Direction, ExtractorConfig, Transaction};

use super::{ScanState, TransactionSegmenter, page_lines};
use crate::amount::{AmountScanner, has_monetary_evidence};
use crate::date::find_template_date;
use crate::description::ltr_description;
use crate::disambiguate::{disambiguate, reorder_alternate_pair};

#[derive(Debug, Clone)]
pub struct LtrSegmenter<'c> {
    config: &'c ExtractorConfig,
    format: AmountFormat,
    amounts: AmountScanner,
}

impl<'c> LtrSegmenter<'c> {
    pub fn new(config: &'c ExtractorConfig, format: AmountFormat) -> Result<Self> {
        Ok(Self {
            config,
            format,
            amounts: AmountScanner::new(config)?,
        })
    }

    /// Dates must not go backwards relative to the last accepted row.
    fn scan_page(&self, mut state: ScanState, page: &str) -> ScanState {
        let lines = page_lines(page);

        for (i, raw) in lines.iter().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let Some(date) = find_template_date(line, &self.config.date_templates) else {
                continue;
            };
            if state.last_date.is_some_and(|last| date < last) {
                continue;
            }

            let end = (i + self.config.window()).min(lines.len());
            let window = &lines[i..end];
            let joined = window.join(" ");
            if !has_monetary_evidence(&joined, &self.config.currency_symbols) {
                continue;
            }

            if let Some(candidate) = self.candidate(date, window, &joined) {
                if state.accept(candidate) {
                    state.last_date = Some(date);
                }
            }
        }

        state
    }

    /// Resolve amounts and description for the row starting at `window[0]`.
    fn candidate(&self, date: NaiveDate, window: &[&str], joined: &str) -> Option<Transaction> {
        let (amounts, texts): (Vec<f64>, Vec<&str>) = match self.format {
            AmountFormat::Standard => self
                .amounts
                .currency_tagged(joined)
                .iter()
                .map(|t| (t.value, t.text))
                .unzip(),
            AmountFormat::Alternate => {
                let (a, b) = self
                    .amounts
                    .closest_decimal_pair(joined, self.config.proximity_chars)?;
                (reorder_alternate_pair(a.value, b.value), vec![a.text, b.text])
            }
        };

        let triple = disambiguate(&amounts, Direction::Ltr)?;
        if triple.is_zero() {
            tracing::debug!(%date, "rejected: no debit or credit");
            return None;
        }

        let description = ltr_description(window, &texts, &self.config.currency_symbols);
        Some(Transaction::new(date, description, triple.debit, triple.credit, triple.balance))
    }
}

impl TransactionSegmenter for LtrSegmenter<'_> {
    fn segment(&self, pages: &[&str]) -> Vec<Transaction> {
        pages
            .iter()
            .fold(ScanState::default(), |state, page| self.scan_page(state, page))
            .accepted
    }
}

//! End-to-end statement processing: page texts in, report out.
//!
//! Pure and deterministic; the same pages and config always give the same
//! report, so callers may retry freely.

use ledger_core::{ExtractError, ExtractorConfig, StatementOutcome, StatementReport};
use ledger_ingest::{Segmenter, TransactionSegmenter, detect_layout, extract_account_info};

use crate::analytics::calculate_analytics;
use crate::monthly::analyze_monthly;

/// Run every stage over `pages` (page 1 first).
///
/// Fails only when there are no pages or the layout cannot be classified;
/// anything that merely does not parse is left out of the report.
pub fn process_pages<S: AsRef<str>>(
    pages: &[S],
    config: &ExtractorConfig,
) -> Result<StatementReport, ExtractError> {
    let texts: Vec<&str> = pages.iter().map(|p| p.as_ref()).collect();
    let Some(first) = texts.first() else {
        return Err(ExtractError::NoPages);
    };

    let layout = detect_layout(&texts)?;
    tracing::info!(
        direction = ?layout.direction,
        amount_format = ?layout.amount_format,
        language = ?layout.language,
        pages = texts.len(),
        "layout classified"
    );

    let account_info = extract_account_info(first, layout.language, layout.amount_format, config)?;

    let transactions = Segmenter::for_layout(&layout, config)?.segment(&texts);
    tracing::info!(count = transactions.len(), "transactions extracted");

    let monthly_analysis = analyze_monthly(&transactions, &config.international_marker);
    let analytics = calculate_analytics(&monthly_analysis);

    Ok(StatementReport {
        layout,
        account_info,
        total_transactions: transactions.len(),
        transactions,
        monthly_analysis,
        pages_processed: texts.len(),
        analytics,
    })
}

/// [`process_pages`] folded into the serialisable success-or-`{error}` shape.
pub fn process_outcome<S: AsRef<str>>(pages: &[S], config: &ExtractorConfig) -> StatementOutcome {
    match process_pages(pages, config) {
        Ok(report) => StatementOutcome::Report(Box::new(report)),
        Err(e) => {
            tracing::warn!(error = %e, "statement extraction failed");
            StatementOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

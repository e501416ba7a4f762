//! CSV export of the extracted ledger.

use anyhow::{Context, Result};
use ledger_core::Transaction;
use std::io::Write;
use std::path::Path;

/// Write `date,description,debit,credit,balance` rows with a header.
pub fn write_transactions_csv<W: Write>(writer: W, transactions: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for txn in transactions {
        wtr.serialize(txn)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_transactions_csv(path: impl AsRef<Path>, transactions: &[Transaction]) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())
        .with_context(|| format!("creating {}", path.as_ref().display()))?;
    write_transactions_csv(file, transactions)
}

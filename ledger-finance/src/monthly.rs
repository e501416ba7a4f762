//! Per-month statistics over the accepted ledger.

use ledger_core::{MonthlyStats, Transaction};
use std::collections::BTreeMap;

/// Group by `YYYY-MM` and summarise each month.
///
/// Rows are date-sorted inside a month (stable, so same-day rows keep
/// extraction order). A row tagged with `international_marker` counts as
/// inward when it has a credit and outward when it has a debit; a row with
/// both counts twice.
pub fn analyze_monthly(
    transactions: &[Transaction],
    international_marker: &str,
) -> BTreeMap<String, MonthlyStats> {
    let mut groups: BTreeMap<String, Vec<&Transaction>> = BTreeMap::new();
    for txn in transactions {
        groups.entry(txn.year_month()).or_default().push(txn);
    }

    groups
        .into_iter()
        .map(|(month, mut items)| {
            items.sort_by_key(|t| t.date);
            (month, month_stats(&items, international_marker))
        })
        .collect()
}

fn month_stats(items: &[&Transaction], marker: &str) -> MonthlyStats {
    let mut stats = MonthlyStats::default();
    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return stats;
    };

    for t in items {
        stats.count += 1;
        stats.total_debit += t.debit;
        stats.total_credit += t.credit;

        if !marker.is_empty() && t.description.contains(marker) {
            if t.credit > 0.0 {
                stats.international_inward_count += 1;
                stats.international_inward_total += t.credit;
            }
            if t.debit > 0.0 {
                stats.international_outward_count += 1;
                stats.international_outward_total += t.debit;
            }
        }
    }

    stats.opening_balance = first.balance_before();
    stats.closing_balance = last.balance;
    stats.minimum_balance = items.iter().map(|t| t.balance).fold(f64::INFINITY, f64::min);
    stats.net_change = stats.total_credit - stats.total_debit.abs();
    stats.fluctuation = if stats.opening_balance != 0.0 {
        stats.net_change / stats.opening_balance * 100.0
    } else {
        0.0
    };

    stats
}

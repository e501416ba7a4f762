//! Whole-statement analytics derived from the monthly table.

use ledger_core::{AnalyticsSummary, MonthlyStats};
use std::collections::BTreeMap;

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Sample standard deviation over mean of the monthly net change. Zero with
/// fewer than two months or a zero mean.
pub fn cash_flow_stability(net_changes: &[f64]) -> f64 {
    if net_changes.len() < 2 {
        return 0.0;
    }
    let m = mean(net_changes);
    if m == 0.0 {
        return 0.0;
    }
    let variance =
        net_changes.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (net_changes.len() - 1) as f64;
    variance.sqrt() / m
}

/// Reduce monthly statistics to one summary. Overdraft figures are always 0.
pub fn calculate_analytics(monthly: &BTreeMap<String, MonthlyStats>) -> AnalyticsSummary {
    if monthly.is_empty() {
        return AnalyticsSummary::default();
    }

    let months: Vec<&MonthlyStats> = monthly.values().collect();
    let fluctuations: Vec<f64> = months.iter().map(|m| m.fluctuation).collect();
    let net_changes: Vec<f64> = months.iter().map(|m| m.net_change).collect();
    let inflows: Vec<f64> = months.iter().map(|m| m.total_credit).collect();
    let outflows: Vec<f64> = months.iter().map(|m| m.total_debit.abs()).collect();

    AnalyticsSummary {
        average_fluctuation: mean(&fluctuations),
        net_cash_flow_stability: cash_flow_stability(&net_changes),
        total_foreign_transactions: months.iter().map(|m| m.international_inward_count).sum(),
        total_foreign_amount: months.iter().map(|m| m.international_inward_total).sum(),
        sum_total_inflow: inflows.iter().sum(),
        sum_total_outflow: outflows.iter().sum(),
        avg_total_inflow: mean(&inflows),
        avg_total_outflow: mean(&outflows),
        overdraft_frequency: 0,
        overdraft_total_days: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(credit: f64, debit: f64, fluctuation: f64, inward: usize, inward_total: f64) -> MonthlyStats {
        MonthlyStats {
            total_credit: credit,
            total_debit: debit,
            net_change: credit - debit.abs(),
            fluctuation,
            international_inward_count: inward,
            international_inward_total: inward_total,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_is_zero_filled() {
        assert_eq!(calculate_analytics(&BTreeMap::new()), AnalyticsSummary::default());
    }

    #[test]
    fn test_two_months() {
        let mut monthly = BTreeMap::new();
        monthly.insert("2024-06".to_string(), month(1000.0, 400.0, 10.0, 1, 300.0));
        monthly.insert("2024-07".to_string(), month(800.0, 600.0, -4.0, 2, 150.0));

        let a = calculate_analytics(&monthly);
        assert_eq!(a.average_fluctuation, 3.0);
        assert_eq!(a.sum_total_inflow, 1800.0);
        assert_eq!(a.sum_total_outflow, 1000.0);
        assert_eq!(a.avg_total_inflow, 900.0);
        assert_eq!(a.avg_total_outflow, 500.0);
        assert_eq!(a.total_foreign_transactions, 3);
        assert_eq!(a.total_foreign_amount, 450.0);
        assert_eq!(a.overdraft_frequency, 0);
        assert_eq!(a.overdraft_total_days, 0);

        // net changes 600 and 200: mean 400, sample stdev 282.84...
        assert!((a.net_cash_flow_stability - 0.7071067811865476).abs() < 1e-9);
    }

    #[test]
    fn test_stability_edge_cases() {
        assert_eq!(cash_flow_stability(&[]), 0.0);
        assert_eq!(cash_flow_stability(&[500.0]), 0.0);
        assert_eq!(cash_flow_stability(&[100.0, -100.0]), 0.0);
    }
}

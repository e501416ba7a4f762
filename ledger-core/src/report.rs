//! Aggregate results handed back to the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::statement::{AccountInfo, LayoutContext, Transaction};

/// Per-month statistics, keyed by `YYYY-MM` in [`StatementReport::monthly_analysis`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlyStats {
    pub count: usize,
    pub total_debit: f64,
    pub total_credit: f64,
    /// Balance before the month's first transaction
    pub opening_balance: f64,
    pub closing_balance: f64,
    pub minimum_balance: f64,
    /// `total_credit - |total_debit|`
    pub net_change: f64,
    /// Net change as a percentage of the opening balance, 0 when that is 0
    pub fluctuation: f64,
    pub international_inward_count: usize,
    pub international_outward_count: usize,
    pub international_inward_total: f64,
    pub international_outward_total: f64,
}

/// Whole-document summary. Every field is always present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSummary {
    pub average_fluctuation: f64,
    pub net_cash_flow_stability: f64,
    pub total_foreign_transactions: usize,
    pub total_foreign_amount: f64,
    pub sum_total_inflow: f64,
    pub sum_total_outflow: f64,
    pub avg_total_inflow: f64,
    pub avg_total_outflow: f64,
    /// Reserved; overdraft detection is not implemented.
    pub overdraft_frequency: u32,
    /// Reserved; overdraft detection is not implemented.
    pub overdraft_total_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatementReport {
    pub layout: LayoutContext,
    pub account_info: AccountInfo,
    pub total_transactions: usize,
    pub transactions: Vec<Transaction>,
    pub monthly_analysis: BTreeMap<String, MonthlyStats>,
    pub pages_processed: usize,
    pub analytics: AnalyticsSummary,
}

/// The compact record the reporting UI lists per upload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrontendSummary {
    pub customer_name: String,
    pub account_number: String,
    pub iban_number: String,
    pub financial_period: String,
    pub opening_balance: f64,
    pub closing_balance: f64,
    pub pages_processed: usize,
    pub total_transactions: usize,
}

/// Either a full report or `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StatementOutcome {
    Report(Box<StatementReport>),
    Failed { error: String },
}

impl StatementOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, StatementOutcome::Failed { .. })
    }
}

fn or_na(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("N/A")
}

fn amount_or_na(v: Option<f64>) -> String {
    v.map(|a| format!("{a:.2}")).unwrap_or_else(|| "N/A".to_string())
}

impl StatementReport {
    pub fn frontend_summary(&self) -> FrontendSummary {
        let info = &self.account_info;
        FrontendSummary {
            customer_name: info.customer_name.clone().unwrap_or_default(),
            account_number: info.account_number.clone().unwrap_or_default(),
            iban_number: info.iban_number.clone().unwrap_or_default(),
            financial_period: info.financial_period.clone().unwrap_or_default(),
            opening_balance: info.opening_balance.unwrap_or(0.0),
            closing_balance: info.closing_balance.unwrap_or(0.0),
            pages_processed: self.pages_processed,
            total_transactions: self.total_transactions,
        }
    }

    /// Human-readable summary: account fields, counts, then one block per month.
    pub fn render_summary(&self) -> String {
        let info = &self.account_info;
        let mut out = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(out, "Customer Name: {}", or_na(&info.customer_name));
        let _ = writeln!(out, "City: {}", or_na(&info.city));
        let _ = writeln!(out, "Account Number: {}", or_na(&info.account_number));
        let _ = writeln!(out, "IBAN Number: {}", or_na(&info.iban_number));
        let _ = writeln!(out, "Opening Balance: {}", amount_or_na(info.opening_balance));
        let _ = writeln!(out, "Closing Balance: {}", amount_or_na(info.closing_balance));
        let _ = writeln!(out, "Financial Period: {}", or_na(&info.financial_period));
        let _ = writeln!(out);
        let _ = writeln!(out, "Pages Processed: {}", self.pages_processed);
        let _ = writeln!(out, "Total Transactions: {}", self.total_transactions);

        if !self.monthly_analysis.is_empty() {
            let _ = writeln!(out, "\nMONTHLY ANALYSIS:");
            let _ = writeln!(out, "{}", "-".repeat(30));
            for (month, s) in &self.monthly_analysis {
                let _ = writeln!(out, "\n{month}:");
                let _ = writeln!(out, "  Transaction Count: {}", s.count);
                let _ = writeln!(out, "  Total Credits: {:.2}", s.total_credit);
                let _ = writeln!(out, "  Total Debits: {:.2}", s.total_debit);
                let _ = writeln!(out, "  Opening Balance: {:.2}", s.opening_balance);
                let _ = writeln!(out, "  Closing Balance: {:.2}", s.closing_balance);
                let _ = writeln!(out, "  Minimum Balance: {:.2}", s.minimum_balance);
                let _ = writeln!(
                    out,
                    "  International Inward: {} transactions, Total: {:.2}",
                    s.international_inward_count, s.international_inward_total
                );
                let _ = writeln!(
                    out,
                    "  International Outward: {} transactions, Total: {:.2}",
                    s.international_outward_count, s.international_outward_total
                );
            }
        }

        out
    }
}

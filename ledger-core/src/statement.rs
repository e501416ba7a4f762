//! Statement record types: account identity, ledger rows and the layout
//! facts every extraction stage reads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reading direction of the transaction table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    #[serde(rename = "ltr")]
    Ltr,
    #[serde(rename = "rtl")]
    Rtl,
}

/// How amounts are laid out inside a transaction block
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AmountFormat {
    /// Amounts carry a currency tag and sit in fixed column order.
    #[serde(rename = "standard")]
    Standard,
    /// Untagged amounts ordered by sign/proximity heuristics.
    #[serde(rename = "alternate")]
    Alternate,
}

/// Label dictionary used for field extraction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    #[serde(rename = "arabic")]
    Arabic,
    #[serde(rename = "english")]
    English,
}

/// Document-level layout facts, derived once and never mutated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutContext {
    pub direction: Direction,
    pub amount_format: AmountFormat,
    pub language: Language,
}

/// Account identity fields found on the first page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AccountField {
    CustomerName,
    City,
    AccountNumber,
    IbanNumber,
    OpeningBalance,
    ClosingBalance,
    FinancialPeriod,
    // Table header labels. Not part of AccountInfo but kept in the dictionaries.
    Date,
    Debit,
    Credit,
    Balance,
}

impl AccountField {
    /// The seven fields pulled into [`AccountInfo`], in extraction order.
    pub const ACCOUNT: [AccountField; 7] = [
        AccountField::CustomerName,
        AccountField::City,
        AccountField::AccountNumber,
        AccountField::IbanNumber,
        AccountField::OpeningBalance,
        AccountField::ClosingBalance,
        AccountField::FinancialPeriod,
    ];

    /// Whether the captured value goes through the amount parser
    pub fn is_amount(&self) -> bool {
        matches!(self, AccountField::OpeningBalance | AccountField::ClosingBalance)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountField::CustomerName => "customer_name",
            AccountField::City => "city",
            AccountField::AccountNumber => "account_number",
            AccountField::IbanNumber => "iban_number",
            AccountField::OpeningBalance => "opening_balance",
            AccountField::ClosingBalance => "closing_balance",
            AccountField::FinancialPeriod => "financial_period",
            AccountField::Date => "date",
            AccountField::Debit => "debit",
            AccountField::Credit => "credit",
            AccountField::Balance => "balance",
        }
    }
}

impl fmt::Display for AccountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account identity, every field optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AccountInfo {
    pub customer_name: Option<String>,
    pub city: Option<String>,
    pub account_number: Option<String>,
    pub iban_number: Option<String>,
    pub opening_balance: Option<f64>,
    pub closing_balance: Option<f64>,
    pub financial_period: Option<String>,
}

impl AccountInfo {
    /// Store a captured text value. Balance fields are ignored here; use
    /// [`AccountInfo::set_amount`] for those.
    pub fn set_text(&mut self, field: AccountField, value: String) {
        match field {
            AccountField::CustomerName => self.customer_name = Some(value),
            AccountField::City => self.city = Some(value),
            AccountField::AccountNumber => self.account_number = Some(value),
            AccountField::IbanNumber => self.iban_number = Some(value),
            AccountField::FinancialPeriod => self.financial_period = Some(value),
            _ => {}
        }
    }

    pub fn set_amount(&mut self, field: AccountField, value: Option<f64>) {
        match field {
            AccountField::OpeningBalance => self.opening_balance = value,
            AccountField::ClosingBalance => self.closing_balance = value,
            _ => {}
        }
    }
}

/// One accepted ledger row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Booking date (YYYY-MM-DD)
    pub date: NaiveDate,
    pub description: String,
    /// Money out, non-negative
    pub debit: f64,
    /// Money in, non-negative
    pub credit: f64,
    /// Running balance after this row
    pub balance: f64,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, debit: f64, credit: f64, balance: f64) -> Self {
        Self {
            date,
            description: description.into(),
            debit: debit.abs(),
            credit: credit.abs(),
            balance,
        }
    }

    /// True when neither side moved money; such rows are never accepted.
    pub fn is_zero(&self) -> bool {
        self.debit == 0.0 && self.credit == 0.0
    }

    /// Same date, same description and a balance within one cent.
    pub fn is_duplicate_of(&self, prev: &Transaction) -> bool {
        self.date == prev.date
            && self.description == prev.description
            && (prev.balance - self.balance).abs() < 0.01
    }

    /// Balance before this row was booked
    pub fn balance_before(&self) -> f64 {
        self.balance - self.credit + self.debit
    }

    /// `YYYY-MM` grouping key
    pub fn year_month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

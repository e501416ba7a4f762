//! Extractor configuration: label dictionaries, date templates, currency
//! markers and window sizes. Every field has a default, so a config file
//! only needs the keys it overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{ExtractError, Result};
use crate::statement::{AccountField, Language};

/// One `{separators, year/month/day position}` date layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateTemplate {
    pub separators: Vec<char>,
    pub year_position: usize,
    pub month_position: usize,
    pub day_position: usize,
}

impl DateTemplate {
    pub fn new(year_position: usize, month_position: usize, day_position: usize) -> Self {
        Self {
            separators: vec!['/', '-'],
            year_position,
            month_position,
            day_position,
        }
    }
}

/// Field -> ordered label variants, per language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelDictionary {
    pub english: BTreeMap<AccountField, Vec<String>>,
    pub arabic: BTreeMap<AccountField, Vec<String>>,
}

impl LabelDictionary {
    /// Labels to try for `field`, most specific first. Empty if unknown.
    pub fn labels(&self, language: Language, field: AccountField) -> &[String] {
        let table = match language {
            Language::English => &self.english,
            Language::Arabic => &self.arabic,
        };
        table.get(&field).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

fn table(entries: &[(AccountField, &[&str])]) -> BTreeMap<AccountField, Vec<String>> {
    entries
        .iter()
        .map(|(field, labels)| (*field, labels.iter().map(|s| s.to_string()).collect()))
        .collect()
}

impl Default for LabelDictionary {
    fn default() -> Self {
        use AccountField::*;
        Self {
            english: table(&[
                (CustomerName, &["Customer Name", "Account Holder"]),
                (City, &["City"]),
                (AccountNumber, &["Account Number"]),
                (IbanNumber, &["IBAN Number", "IBAN"]),
                (OpeningBalance, &["Opening Balance"]),
                (ClosingBalance, &["Closing Balance"]),
                (FinancialPeriod, &["On The Period", "Period"]),
                (Date, &["Date"]),
                (Debit, &["Debit"]),
                (Credit, &["Credit"]),
                (Balance, &["Balance"]),
            ]),
            arabic: table(&[
                (CustomerName, &["اسم العميل", "اسم المعميل"]),
                (City, &["المدينة", "مدينة"]),
                (AccountNumber, &["رقم الحساب", "رقم حساب"]),
                (IbanNumber, &["رقم الآيبان", "رقم آيبان", "IBAN"]),
                (OpeningBalance, &["رصيد الحساب الافتتاحي", "الرصيد الافتتاحي"]),
                (ClosingBalance, &["رصيد الإقفال", "الرصيد الإقفالي"]),
                (FinancialPeriod, &["خلال الفترة", "الفترة المالية"]),
                (Date, &["التاريخ", "تاريخ"]),
                (Debit, &["مدين", "خصم"]),
                (Credit, &["دائن", "ايداع"]),
                (Balance, &["الرصيد", "رصيد"]),
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Context window size after a recognised date
    pub search_lines_after: usize,
    pub currency_symbols: Vec<String>,
    /// Characters kept by the amount parser
    pub clean_chars: Vec<char>,
    pub date_templates: Vec<DateTemplate>,
    pub labels: LabelDictionary,
    /// Description substring tagging cross-border transfers
    pub international_marker: String,
    /// Max gap between two alternate-format amounts to count as a pair
    pub proximity_chars: usize,
    /// How far the RTL scanner looks for a date after the first amount line
    pub rtl_date_search_lines: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            search_lines_after: 10,
            currency_symbols: ["SAR", "SR", "ريال", "ر.س"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            clean_chars: "0123456789.,-".chars().collect(),
            date_templates: vec![DateTemplate::new(0, 1, 2), DateTemplate::new(2, 1, 0)],
            labels: LabelDictionary::default(),
            international_marker: "IPS".to_string(),
            proximity_chars: 50,
            rtl_date_search_lines: 50,
        }
    }
}

impl ExtractorConfig {
    /// Read a config file. `.toml` files are parsed as TOML, anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

        if is_toml {
            toml::from_str(&raw).map_err(|e| ExtractError::Config(format!("{}: {e}", path.display())))
        } else {
            serde_json::from_str(&raw)
                .map_err(|e| ExtractError::Config(format!("{}: {e}", path.display())))
        }
    }

    /// Like [`ExtractorConfig::load`], but a missing or broken file falls
    /// back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(cfg) => {
                tracing::info!(path = %path.display(), "configuration loaded");
                cfg
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    /// Write this configuration as a pretty JSON template.
    pub fn save_template(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExtractError::Config(format!("serialize config: {e}")))?;
        fs::write(path, json)?;
        tracing::info!(path = %path.display(), "configuration template saved");
        Ok(())
    }

    /// Context window length, never below one line.
    pub fn window(&self) -> usize {
        self.search_lines_after.max(1)
    }
}

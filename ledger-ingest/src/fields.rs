//! Account identity fields from page-1 text.
//!
//! Each field has an ordered list of label variants per language. The first
//! label that occurs wins; its value runs from after the label (and any
//! `:`/whitespace) to the end of the line.

use anyhow::Result;
use regex::Regex;

use ledger_core::{AccountField, AccountInfo, AmountFormat, ExtractorConfig, Language};

use crate::amount::parse_amount;

fn label_pattern(label: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"(?i){}\s*[:\s]*([^\n\r]+)", regex::escape(label)))?)
}

/// Value for one field, or `None` when no label variant occurs.
///
/// With the alternate amount format the second occurrence is used when there
/// is one, since the first usually belongs to a template header.
pub fn extract_field(
    text: &str,
    field: AccountField,
    language: Language,
    format: AmountFormat,
    config: &ExtractorConfig,
) -> Result<Option<String>> {
    for label in config.labels.labels(language, field) {
        let re = label_pattern(label)?;
        let values: Vec<&str> = re
            .captures_iter(text)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();

        let picked = match (format, values.as_slice()) {
            (_, []) => continue,
            (AmountFormat::Alternate, [_, second, ..]) => *second,
            (_, [first, ..]) => *first,
        };

        let value = picked.split_whitespace().collect::<Vec<_>>().join(" ");
        return Ok((!value.is_empty()).then_some(value));
    }
    Ok(None)
}

/// All seven account fields. Balances go through the amount parser; a
/// balance that does not parse is left empty.
pub fn extract_account_info(
    text: &str,
    language: Language,
    format: AmountFormat,
    config: &ExtractorConfig,
) -> Result<AccountInfo> {
    let mut info = AccountInfo::default();

    for field in AccountField::ACCOUNT {
        let Some(value) = extract_field(text, field, language, format, config)? else {
            continue;
        };
        if field.is_amount() {
            info.set_amount(field, parse_amount(&value, &config.clean_chars));
        } else {
            info.set_text(field, value);
        }
    }

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH_PAGE: &str = r#"
ACME BANK
Customer Name: John   Smith
City : Riyadh
Account Number 1234567890
IBAN Number: SA03 8000 0000 6080 1016 7519
Opening Balance: 12,500.75 SAR
Closing Balance: n/a
On The Period 01/06/2024 - 30/06/2024
"#;

    #[test]
    fn test_english_fields() {
        let cfg = ExtractorConfig::default();
        let info = extract_account_info(ENGLISH_PAGE, Language::English, AmountFormat::Standard, &cfg).unwrap();
        assert_eq!(info.customer_name.as_deref(), Some("John Smith"));
        assert_eq!(info.city.as_deref(), Some("Riyadh"));
        assert_eq!(info.account_number.as_deref(), Some("1234567890"));
        assert_eq!(info.iban_number.as_deref(), Some("SA03 8000 0000 6080 1016 7519"));
        assert_eq!(info.opening_balance, Some(12500.75));
        assert_eq!(info.closing_balance, None);
        assert_eq!(info.financial_period.as_deref(), Some("01/06/2024 - 30/06/2024"));
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let cfg = ExtractorConfig::default();
        let v = extract_field("ACCOUNT NUMBER: 42", AccountField::AccountNumber, Language::English, AmountFormat::Standard, &cfg).unwrap();
        assert_eq!(v.as_deref(), Some("42"));
    }

    #[test]
    fn test_alternate_format_prefers_second_occurrence() {
        let cfg = ExtractorConfig::default();
        let text = "اسم العميل: الاسم\nاسم العميل: شركة الأفق\n";
        let standard = extract_field(text, AccountField::CustomerName, Language::Arabic, AmountFormat::Standard, &cfg).unwrap();
        let alternate = extract_field(text, AccountField::CustomerName, Language::Arabic, AmountFormat::Alternate, &cfg).unwrap();
        assert_eq!(standard.as_deref(), Some("الاسم"));
        assert_eq!(alternate.as_deref(), Some("شركة الأفق"));

        let single = "اسم العميل: شركة الأفق\n";
        let v = extract_field(single, AccountField::CustomerName, Language::Arabic, AmountFormat::Alternate, &cfg).unwrap();
        assert_eq!(v.as_deref(), Some("شركة الأفق"));
    }

    #[test]
    fn test_fallback_label_variant() {
        let cfg = ExtractorConfig::default();
        let v = extract_field("Account Holder: Jane Roe", AccountField::CustomerName, Language::English, AmountFormat::Standard, &cfg).unwrap();
        assert_eq!(v.as_deref(), Some("Jane Roe"));
    }

    #[test]
    fn test_missing_label_is_absent() {
        let cfg = ExtractorConfig::default();
        let info = extract_account_info("nothing useful here", Language::English, AmountFormat::Standard, &cfg).unwrap();
        assert_eq!(info, AccountInfo::default());
    }
}

use chrono::NaiveDate;
use ledger_core::{
    AmountFormat, Direction, ExtractError, ExtractorConfig, Language, StatementOutcome,
};
use ledger_finance::{process_outcome, process_pages, write_transactions_csv};
use ledger_ingest::layout::TRANSACTION_DATE_MARKER;
use std::path::PathBuf;

fn fixture_pages(name: &str) -> Vec<String> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("fixtures")
        .join(name);
    ["page1.txt", "page2.txt"]
        .iter()
        .map(|f| std::fs::read_to_string(dir.join(f)).unwrap())
        .collect()
}

#[test]
fn test_single_row_english_statement() {
    let pages = vec![
        "Customer Name: TEST\n".to_string(),
        "BANK\nStatement\nDate Description Debit Credit Balance\n2024/06/17 CARD PAYMENT\nGROCERY STORE\n100.00 SAR 0.00 SAR 500.00 SAR\n".to_string(),
    ];
    let report = process_pages(&pages, &ExtractorConfig::default()).unwrap();

    assert_eq!(report.total_transactions, 1);
    let t = &report.transactions[0];
    assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 6, 17).unwrap());
    assert_eq!((t.debit, t.credit, t.balance), (100.0, 0.0, 500.0));
    assert_eq!(t.description, "CARD PAYMENT GROCERY STORE");
}

#[test]
fn test_english_fixture() {
    let pages = fixture_pages("statement_en");
    let report = process_pages(&pages, &ExtractorConfig::default()).unwrap();

    assert_eq!(report.layout.direction, Direction::Ltr);
    assert_eq!(report.layout.amount_format, AmountFormat::Standard);
    assert_eq!(report.layout.language, Language::English);
    assert_eq!(report.pages_processed, 2);

    let info = &report.account_info;
    assert_eq!(info.customer_name.as_deref(), Some("ACME TRADING"));
    assert_eq!(info.city.as_deref(), Some("RIYADH"));
    assert_eq!(info.account_number.as_deref(), Some("1234567890"));
    assert_eq!(info.iban_number.as_deref(), Some("SA0380000000608010167519"));
    assert_eq!(info.opening_balance, Some(600.0));
    assert_eq!(info.closing_balance, Some(500.0));
    assert_eq!(info.financial_period.as_deref(), Some("2024/06/01 - 2024/06/30"));

    // The period line on page 1 has a date but no amounts after it.
    assert_eq!(report.total_transactions, 1);
    assert_eq!(report.transactions[0].description, "POS PURCHASE JARIR BOOKSTORE");

    let june = &report.monthly_analysis["2024-06"];
    assert_eq!(june.count, 1);
    assert_eq!(june.opening_balance, 600.0);
    assert_eq!(june.closing_balance, 500.0);
    assert_eq!(june.net_change, -100.0);

    assert_eq!(report.analytics.sum_total_outflow, 100.0);
    assert_eq!(report.analytics.net_cash_flow_stability, 0.0);

    let summary = report.frontend_summary();
    assert_eq!(summary.customer_name, "ACME TRADING");
    assert_eq!(summary.total_transactions, 1);
    assert!(report.render_summary().contains("2024-06:"));
}

#[test]
fn test_arabic_fixture() {
    let pages = fixture_pages("statement_ar");
    let report = process_pages(&pages, &ExtractorConfig::default()).unwrap();

    assert_eq!(report.layout.direction, Direction::Rtl);
    assert_eq!(report.layout.language, Language::Arabic);
    assert_eq!(report.account_info.customer_name.as_deref(), Some("شركة الريان"));
    assert_eq!(report.account_info.account_number.as_deref(), Some("1234567890"));

    assert_eq!(report.total_transactions, 2);
    let t = &report.transactions;
    assert_eq!((t[0].debit, t[0].credit, t[0].balance), (250.0, 0.0, 1500.0));
    assert_eq!((t[1].debit, t[1].credit, t[1].balance), (0.0, 5000.0, 6500.0));

    let june = &report.monthly_analysis["2024-06"];
    assert_eq!(june.opening_balance, 1750.0);
    assert_eq!(june.closing_balance, 6500.0);
    assert_eq!(june.minimum_balance, 1500.0);
    assert_eq!(june.international_inward_count, 1);
    assert_eq!(june.international_inward_total, 5000.0);

    assert_eq!(report.analytics.total_foreign_transactions, 1);
    assert_eq!(report.analytics.total_foreign_amount, 5000.0);
}

#[test]
fn test_alternate_amount_format() {
    let pages = vec![
        "اسم العميل: الاسم\nاسم العميل: شركة الأفق\n".to_string(),
        format!("كشف حساب\nصفحة 2\n{TRANSACTION_DATE_MARKER} ﺍﻟﻮﺻﻒ\n17/06/2024 تحويل صادر\n-20.00 30.00\n"),
    ];
    let report = process_pages(&pages, &ExtractorConfig::default()).unwrap();

    assert_eq!(report.layout.direction, Direction::Ltr);
    assert_eq!(report.layout.amount_format, AmountFormat::Alternate);
    assert_eq!(report.layout.language, Language::Arabic);
    // The first occurrence is the template header.
    assert_eq!(report.account_info.customer_name.as_deref(), Some("شركة الأفق"));

    assert_eq!(report.total_transactions, 1);
    let t = &report.transactions[0];
    assert_eq!(t.description, "تحويل صادر");
    assert_eq!((t.debit, t.credit, t.balance), (20.0, 0.0, 30.0));
}

#[test]
fn test_processing_is_repeatable() {
    let pages = fixture_pages("statement_ar");
    let cfg = ExtractorConfig::default();
    assert_eq!(
        process_pages(&pages, &cfg).unwrap(),
        process_pages(&pages, &cfg).unwrap()
    );
}

#[test]
fn test_no_pages() {
    let pages: Vec<String> = Vec::new();
    let err = process_pages(&pages, &ExtractorConfig::default()).unwrap_err();
    assert!(matches!(err, ExtractError::NoPages));

    let outcome = process_outcome(&pages, &ExtractorConfig::default());
    assert!(outcome.is_error());
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Could not extract text from PDF" }));
}

#[test]
fn test_layout_failures() {
    let cfg = ExtractorConfig::default();

    let err = process_pages(&["only page"], &cfg).unwrap_err();
    assert!(matches!(err, ExtractError::LayoutUnavailable { pages: 1 }));

    let err = process_pages(&["cover", "one\ntwo"], &cfg).unwrap_err();
    assert!(matches!(err, ExtractError::SecondPageTooShort { lines: 2 }));
    assert!(err.is_layout_failure());
}

#[test]
fn test_report_json_shape() {
    let pages = fixture_pages("statement_en");
    let outcome = process_outcome(&pages, &ExtractorConfig::default());
    assert!(!outcome.is_error());

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["layout"]["direction"], "ltr");
    assert_eq!(json["total_transactions"], 1);
    assert_eq!(json["transactions"][0]["date"], "2024-06-17");
    assert_eq!(json["monthly_analysis"]["2024-06"]["count"], 1);
    assert_eq!(json["analytics"]["overdraft_frequency"], 0);
    assert_eq!(json["pages_processed"], 2);
}

#[test]
fn test_csv_export_of_report() {
    let pages = fixture_pages("statement_ar");
    let report = process_pages(&pages, &ExtractorConfig::default()).unwrap();

    let mut buf = Vec::new();
    write_transactions_csv(&mut buf, &report.transactions).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().nth(2).unwrap().starts_with("2024-06-18,"));
}

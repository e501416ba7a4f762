//! Description text for a transaction candidate.

use crate::date::is_date_shaped;

const MAX_LTR_DESCRIPTION: usize = 100;
const MAX_LTR_PARTS: usize = 3;
const RTL_AMOUNT_LINES: usize = 3;

fn longest_first<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut v: Vec<&str> = items.into_iter().filter(|s| !s.is_empty()).collect();
    v.sort_by_key(|s| std::cmp::Reverse(s.len()));
    v.dedup();
    v
}

/// Window lines with amounts, date-shaped words and currency markers
/// stripped; the first three non-empty results joined and cut to 100 chars.
pub fn ltr_description(window: &[&str], amount_texts: &[&str], currency_symbols: &[String]) -> String {
    let amounts = longest_first(amount_texts.iter().copied());
    let currencies = longest_first(currency_symbols.iter().map(|s| s.as_str()));

    let parts: Vec<String> = window
        .iter()
        .filter_map(|line| {
            let mut clean = line.to_string();
            for a in &amounts {
                clean = clean.replace(a, "");
            }
            clean = clean
                .split_whitespace()
                .filter(|w| !is_date_shaped(w))
                .collect::<Vec<_>>()
                .join(" ");
            for c in &currencies {
                clean = clean.replace(c, "");
            }
            let clean = clean.split_whitespace().collect::<Vec<_>>().join(" ");
            (!clean.is_empty()).then_some(clean)
        })
        .take(MAX_LTR_PARTS)
        .collect();

    parts.join(" ").chars().take(MAX_LTR_DESCRIPTION).collect()
}

/// Skip the first three currency-bearing lines, then take every line up to
/// and including the one holding `date_text`.
pub fn rtl_description(window: &[&str], currency_symbols: &[String], date_text: &str) -> String {
    let has_currency = |line: &str| {
        currency_symbols
            .iter()
            .any(|c| !c.is_empty() && line.contains(c.as_str()))
    };

    let mut skipped = 0;
    let mut lines = Vec::new();

    for line in window {
        if skipped < RTL_AMOUNT_LINES && has_currency(line) {
            skipped += 1;
            continue;
        }
        if skipped < RTL_AMOUNT_LINES {
            continue;
        }
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line);
        }
        if line.contains(date_text) {
            break;
        }
    }

    lines.join(" ")
}

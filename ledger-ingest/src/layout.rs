//! Layout and language classification.
//!
//! Layout is read off the table header, which sits on the third line of the
//! second page:
//!   Date   Description   Debit   Credit   Balance      -> LTR, standard
//!   ﺗﺎﺭﻳﺦ ﺍﻟﻌﻤﻠﻴﺔ ...                                  -> LTR, alternate
//!   anything else                                      -> RTL

use ledger_core::{AmountFormat, Direction, ExtractError, Language, LayoutContext};

/// English table-header marker
pub const DATE_MARKER: &str = "Date";

/// "Transaction date" as Arabic presentation forms, the way some PDF text
/// layers emit it. Marks the alternate amount format.
pub const TRANSACTION_DATE_MARKER: &str =
    "\u{FE97}\u{FE8E}\u{FEAD}\u{FEF3}\u{FEA6} \u{FE8D}\u{FEDF}\u{FECC}\u{FEE4}\u{FEE0}\u{FEF4}\u{FE94}";

const HEADER_LINE: usize = 2;

/// Decide direction and amount format from the second page's header line.
///
/// Either date label marks an LTR table. The presentation-form one also
/// selects the alternate amount format, so it yields `(Ltr, Alternate)`.
pub fn classify_layout<S: AsRef<str>>(pages: &[S]) -> Result<(Direction, AmountFormat), ExtractError> {
    let Some(second) = pages.get(1) else {
        return Err(ExtractError::LayoutUnavailable { pages: pages.len() });
    };

    let lines: Vec<&str> = second.as_ref().split('\n').collect();
    let Some(header) = lines.get(HEADER_LINE).map(|l| l.trim()) else {
        return Err(ExtractError::SecondPageTooShort { lines: lines.len() });
    };

    let alternate = header.contains(TRANSACTION_DATE_MARKER);
    let direction = if alternate || header.contains(DATE_MARKER) {
        Direction::Ltr
    } else {
        Direction::Rtl
    };
    let format = if alternate {
        AmountFormat::Alternate
    } else {
        AmountFormat::Standard
    };

    Ok((direction, format))
}

/// Arabic-block characters against ASCII letters; ties go to English.
pub fn detect_language(text: &str) -> Language {
    let (arabic, latin) = text.chars().fold((0usize, 0usize), |(ar, la), c| match c {
        '\u{0600}'..='\u{06FF}' => (ar + 1, la),
        c if c.is_ascii_alphabetic() => (ar, la + 1),
        _ => (ar, la),
    });

    if arabic > latin {
        Language::Arabic
    } else {
        Language::English
    }
}

/// Full layout context: header classification plus page-1 language.
pub fn detect_layout<S: AsRef<str>>(pages: &[S]) -> Result<LayoutContext, ExtractError> {
    let first = pages.first().ok_or(ExtractError::NoPages)?;
    let (direction, amount_format) = classify_layout(pages)?;
    Ok(LayoutContext {
        direction,
        amount_format,
        language: detect_language(first.as_ref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page2(header: &str) -> String {
        format!("BANK STATEMENT\nPage 2 of 3\n{header}\n2024/06/17 ...")
    }

    #[test]
    fn test_english_header_is_ltr_standard() {
        let pages = vec!["cover".to_string(), page2("  Date  Description  Debit  Credit  Balance")];
        assert_eq!(classify_layout(&pages).unwrap(), (Direction::Ltr, AmountFormat::Standard));
    }

    #[test]
    fn test_presentation_form_header_is_alternate() {
        let header = format!("{TRANSACTION_DATE_MARKER} ﺍﻟﻮﺻﻒ");
        let pages = vec!["cover".to_string(), page2(&header)];
        assert_eq!(classify_layout(&pages).unwrap(), (Direction::Ltr, AmountFormat::Alternate));
    }

    #[test]
    fn test_other_header_is_rtl() {
        let pages = vec!["cover".to_string(), page2("الرصيد دائن مدين البيان التاريخ")];
        assert_eq!(classify_layout(&pages).unwrap(), (Direction::Rtl, AmountFormat::Standard));
    }

    #[test]
    fn test_needs_two_pages() {
        let err = classify_layout(&["only page"]).unwrap_err();
        assert!(matches!(err, ExtractError::LayoutUnavailable { pages: 1 }));
        assert!(err.is_layout_failure());
    }

    #[test]
    fn test_short_second_page() {
        let err = classify_layout(&["cover", "one\ntwo"]).unwrap_err();
        assert!(matches!(err, ExtractError::SecondPageTooShort { lines: 2 }));
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language("كشف حساب Bank"), Language::Arabic);
        assert_eq!(detect_language("Account Statement رقم"), Language::English);
        assert_eq!(detect_language("ab اب"), Language::English);
        assert_eq!(detect_language(""), Language::English);
    }

    #[test]
    fn test_detect_layout_no_pages() {
        let pages: Vec<String> = Vec::new();
        assert!(matches!(detect_layout(&pages), Err(ExtractError::NoPages)));
    }
}

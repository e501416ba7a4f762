//! Amount recognition: the cleaning parser plus the three token shapes the
//! segmenters look for (currency-tagged, strict RTL column cell, bare decimal).

use anyhow::Result;
use regex::Regex;

use ledger_core::ExtractorConfig;

/// Strip everything but `clean_chars`, drop thousands separators, parse.
/// Empty or malformed input yields `None`.
pub fn parse_amount(raw: &str, clean_chars: &[char]) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| clean_chars.contains(c) && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// A currency marker anywhere, or a bare token of 3+ digits once `, . -` are dropped.
pub fn has_monetary_evidence(text: &str, currency_symbols: &[String]) -> bool {
    if currency_symbols
        .iter()
        .any(|c| !c.is_empty() && text.contains(c.as_str()))
    {
        return true;
    }

    text.split_whitespace().any(|word| {
        let digits: String = word
            .chars()
            .filter(|c| !matches!(c, ',' | '.' | '-'))
            .collect();
        digits.len() >= 3 && digits.chars().all(|c| c.is_ascii_digit())
    })
}

/// A recognised amount and where it sits in the scanned text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountToken<'t> {
    pub value: f64,
    /// Numeric part as printed, without currency marker
    pub text: &'t str,
    pub start: usize,
    pub end: usize,
}

/// Regex alternation of the currency markers, longest first.
fn currency_alternation(symbols: &[String]) -> Option<String> {
    let mut syms: Vec<&str> = symbols
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .collect();
    if syms.is_empty() {
        return None;
    }
    syms.sort_by_key(|s| std::cmp::Reverse(s.len()));
    Some(
        syms.iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|"),
    )
}

/// Compiled amount patterns for one configuration
#[derive(Debug, Clone)]
pub struct AmountScanner {
    /// `1,234.5 SAR` style: any digit/comma run, optional decimals
    tagged: Option<Regex>,
    /// `25,631.50 SAR` style: grouped thousands, exactly two decimals
    strict_tagged: Option<Regex>,
    /// `-1,234.56`: decimal point required, no currency
    decimal: Regex,
    clean_chars: Vec<char>,
}

impl AmountScanner {
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        let (tagged, strict_tagged) = match currency_alternation(&config.currency_symbols) {
            Some(cur) => (
                Some(Regex::new(&format!(r"([0-9,]+\.?[0-9]*)\s*(?:{cur})"))?),
                Some(Regex::new(&format!(
                    r"([0-9]{{1,3}}(?:,[0-9]{{3}})*(?:\.[0-9]{{2}})?)\s*(?:{cur})"
                ))?),
            ),
            None => (None, None),
        };

        Ok(Self {
            tagged,
            strict_tagged,
            decimal: Regex::new(r"-?[0-9]{1,3}(?:,[0-9]{3})*\.[0-9]+")?,
            clean_chars: config.clean_chars.clone(),
        })
    }

    pub fn parse(&self, raw: &str) -> Option<f64> {
        parse_amount(raw, &self.clean_chars)
    }

    /// Every currency-tagged amount in `text`, in order. Tokens that do not
    /// parse (a lone comma, say) are skipped.
    pub fn currency_tagged<'t>(&self, text: &'t str) -> Vec<AmountToken<'t>> {
        let Some(re) = &self.tagged else {
            return Vec::new();
        };
        re.captures_iter(text)
            .filter_map(|caps| {
                let m = caps.get(1)?;
                Some(AmountToken {
                    value: self.parse(m.as_str())?,
                    text: m.as_str(),
                    start: m.start(),
                    end: m.end(),
                })
            })
            .collect()
    }

    /// First strictly formatted currency-tagged amount on a single line.
    pub fn single_tagged(&self, line: &str) -> Option<f64> {
        let caps = self.strict_tagged.as_ref()?.captures(line)?;
        self.parse(caps.get(1)?.as_str())
    }

    /// Decimal-bearing numbers not glued to other digits on either side.
    pub fn decimal_tokens<'t>(&self, text: &'t str) -> Vec<AmountToken<'t>> {
        let mut out = Vec::new();
        let mut pos = 0;

        while let Some(m) = self.decimal.find_at(text, pos) {
            let clear_before = text[..m.start()]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_ascii_digit());
            let clear_after = text[m.end()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_ascii_digit());

            if clear_before && clear_after {
                if let Some(value) = self.parse(m.as_str()) {
                    out.push(AmountToken {
                        value,
                        text: m.as_str(),
                        start: m.start(),
                        end: m.end(),
                    });
                }
                pos = m.end();
            } else {
                // Matches always start on an ASCII byte ('-' or a digit).
                pos = m.start() + 1;
            }
        }

        out
    }

    /// The first two consecutive decimal tokens at most `max_gap` characters
    /// apart, or the first two overall when no pair is that close.
    pub fn closest_decimal_pair<'t>(
        &self,
        text: &'t str,
        max_gap: usize,
    ) -> Option<(AmountToken<'t>, AmountToken<'t>)> {
        let tokens = self.decimal_tokens(text);
        if tokens.len() < 2 {
            return None;
        }

        let close = tokens
            .windows(2)
            .find(|w| text[w[0].end..w[1].start].chars().count() <= max_gap);

        match close {
            Some(w) => Some((w[0], w[1])),
            None => Some((tokens[0], tokens[1])),
        }
    }
}

//! Date recognition.
//!
//! Two recognisers:
//!   - template: `2024/06/17`, `17-06-2024`, ... driven by [`DateTemplate`]s (LTR tables)
//!   - fixed: literal `YYYY/MM/DD` only (RTL tables)

use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;

use ledger_core::DateTemplate;

fn date_from_parts(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1900..=2100).contains(&year) || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn apply_template(token: &str, template: &DateTemplate) -> Option<NaiveDate> {
    for sep in &template.separators {
        if !token.contains(*sep) {
            continue;
        }
        let parts: Vec<&str> = token.split(*sep).collect();
        if parts.len() != 3 {
            continue;
        }
        let year = parts.get(template.year_position)?.parse().ok();
        let month = parts.get(template.month_position)?.parse().ok();
        let day = parts.get(template.day_position)?.parse().ok();
        if let (Some(y), Some(m), Some(d)) = (year, month, day) {
            if let Some(date) = date_from_parts(y, m, d) {
                return Some(date);
            }
        }
    }
    None
}

/// First token on `line` that one of `templates` accepts as a real date.
pub fn find_template_date(line: &str, templates: &[DateTemplate]) -> Option<NaiveDate> {
    line.split_whitespace()
        .map(|tok| tok.trim_matches(|c: char| !c.is_ascii_digit()))
        .filter(|tok| !tok.is_empty())
        .find_map(|tok| templates.iter().find_map(|t| apply_template(tok, t)))
}

/// `12/05/2024`-like word: three all-digit parts split on `/` or `-`.
pub fn is_date_shaped(word: &str) -> bool {
    if !word.contains(['/', '-']) {
        return false;
    }
    let normalized = word.replace('/', "-");
    let parts: Vec<&str> = normalized.split('-').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

/// A fixed-format date plus the text it was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMatch<'t> {
    pub date: NaiveDate,
    pub text: &'t str,
}

#[derive(Debug, Clone)]
pub struct FixedDateRecognizer {
    re: Regex,
}

impl FixedDateRecognizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re: Regex::new(r"([0-9]{4})/([0-9]{2})/([0-9]{2})")?,
        })
    }

    /// First `YYYY/MM/DD` on the line that is a real calendar date.
    pub fn find<'t>(&self, line: &'t str) -> Option<DateMatch<'t>> {
        self.re.captures_iter(line).find_map(|caps| {
            let whole = caps.get(0)?;
            let date = date_from_parts(
                caps[1].parse().ok()?,
                caps[2].parse().ok()?,
                caps[3].parse().ok()?,
            )?;
            Some(DateMatch {
                date,
                text: whole.as_str(),
            })
        })
    }
}

//! Date-token detection.
//!
//! Report and competition titles embed dates as `DD.MM.YYYY` (sometimes with
//! `-` or `/`), while users ask for "18 января" or "18 ianuarie". Detection
//! collects a day, a month, and a year from the query words and synthesizes
//! the zero-padded tokens that appear in stored titles. The tokens are added
//! to the keyword set alongside the ordinary tokens.
//!
//! Each field is captured at most once and the first match wins. No calendar
//! validation is done: day 31 with month 11 is accepted.

use crate::months::month_number;

/// Lowest accepted year.
const MIN_YEAR: u32 = 1900;
/// Highest accepted year.
const MAX_YEAR: u32 = 2100;

/// Day, month, and year captured from query words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateParts {
    /// Day of month (1-31).
    pub day: Option<u32>,
    /// Month number (1-12).
    pub month: Option<u32>,
    /// Four-digit year (1900-2100).
    pub year: Option<u32>,
}

impl DateParts {
    /// Collects date parts from lowercase words, first match per field.
    pub fn scan<S: AsRef<str>>(words: &[S]) -> Self {
        let mut parts = Self::default();
        for word in words {
            parts.absorb(word.as_ref().trim());
        }
        parts
    }

    /// Folds one word into the captured fields.
    fn absorb(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        if let Some(n) = numeric_value(word)
            && self.absorb_number(n)
        {
            return;
        }

        let bare = word.trim_matches(|c: char| !c.is_alphanumeric());
        if self.month.is_none()
            && let Some(m) = month_number(bare)
        {
            self.month = Some(m);
            return;
        }

        if word.contains(['.', '-', '/']) {
            self.absorb_composite(word);
        }
    }

    /// Assigns a bare number to the first free field it fits.
    ///
    /// Returns true if the number was consumed.
    fn absorb_number(&mut self, n: u32) -> bool {
        if is_year(n) && self.year.is_none() {
            self.year = Some(n);
            return true;
        }
        if is_day(n) && self.day.is_none() {
            self.day = Some(n);
            return true;
        }
        if is_month(n) && self.month.is_none() {
            self.month = Some(n);
            return true;
        }
        false
    }

    /// Reads a `D.M[.Y]`, `D-M[-Y]`, or `D/M[/Y]` composite date.
    fn absorb_composite(&mut self, word: &str) {
        let parts = split_date_parts(word);
        if parts.len() < 2 {
            return;
        }

        if self.day.is_none()
            && let Ok(d) = parts[0].parse::<u32>()
            && is_day(d)
        {
            self.day = Some(d);
        }
        if self.month.is_none()
            && let Ok(m) = parts[1].parse::<u32>()
            && is_month(m)
        {
            self.month = Some(m);
        }
        if self.year.is_none()
            && let Some(y) = parts.get(2).and_then(|p| p.parse::<u32>().ok())
            && is_year(y)
        {
            self.year = Some(y);
        }
    }

    /// Renders the synthesized date tokens.
    ///
    /// Emits nothing unless both day and month are known.
    pub fn tokens(&self) -> Vec<String> {
        let (Some(day), Some(month)) = (self.day, self.month) else {
            return Vec::new();
        };

        let dd = format!("{day:02}");
        let mm = format!("{month:02}");
        let mut tokens = vec![
            format!("{dd}.{mm}"),
            format!("{dd}-{mm}"),
            format!("{dd}/{mm}"),
        ];

        if let Some(year) = self.year {
            let yyyy = format!("{year:04}");
            tokens.push(format!("{dd}.{mm}.{yyyy}"));
            tokens.push(format!("{dd}-{mm}-{yyyy}"));
            tokens.push(format!("{dd}/{mm}/{yyyy}"));
        }

        tokens
    }
}

/// Detects date expressions in lowercase query words and returns the
/// synthesized date tokens.
pub fn detect_date_tokens<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    DateParts::scan(words).tokens()
}

/// Reads the ASCII digits of a word as a number.
///
/// "18-е" reads as 18 and "2026г" as 2026. Returns `None` when the word has no
/// digits or the digits overflow.
fn numeric_value(word: &str) -> Option<u32> {
    let digits: String = word.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Normalizes `-` and `/` to `.` and splits into non-empty parts.
fn split_date_parts(word: &str) -> Vec<&str> {
    word.split(['.', '-', '/'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Returns true for a plausible day of month.
fn is_day(n: u32) -> bool {
    (1..=31).contains(&n)
}

/// Returns true for a plausible month number.
fn is_month(n: u32) -> bool {
    (1..=12).contains(&n)
}

/// Returns true for a plausible four-digit year.
fn is_year(n: u32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&n)
}

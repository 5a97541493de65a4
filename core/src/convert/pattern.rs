//! Date patterns in the classic letter syntax, compiled to chrono strftime.
//!
//! | Letters | Meaning | strftime |
//! |---|---|---|
//! | `yyyy`, `yy` | year, two-digit year | `%Y`, `%y` |
//! | `M`/`MM`, `MMM`, `MMMM` | month number, abbreviated, full name | `%m`, `%b`, `%B` |
//! | `d`/`dd` | day of month | `%d` |
//! | `H`/`HH`, `h`/`hh` | hour 0-23, hour 1-12 | `%H`, `%I` |
//! | `m`/`mm`, `s`/`ss` | minute, second | `%M`, `%S` |
//! | `S`..`SSSSSSSSS` | fraction of second | `%3f`, `%6f`, `%9f` |
//! | `a` | AM/PM marker | `%p` |
//! | `E`..`EEE`, `EEEE` | weekday abbreviated, full | `%a`, `%A` |
//! | `z`, `Z`, `X` | UTC offset | `%z` |
//!
//! Text between single quotes is literal, and `''` is a single quote. A
//! pattern containing `%` is already strftime and is used as is.

use chrono::format::{self, ParseError, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unterminated quote in date pattern [{0}]")]
    UnterminatedQuote(String),
    #[error("unsupported letter '{letter}' in date pattern [{pattern}]")]
    UnsupportedLetter { letter: char, pattern: String },
}

/// The result of parsing text against a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    /// The text carried a UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// Wall-clock fields only; the caller picks the zone.
    Local(NaiveDateTime),
}

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    strftime: String,
}

impl DatePattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.contains('%') {
            return Ok(Self {
                strftime: pattern.to_string(),
            });
        }
        translate(pattern).map(|strftime| Self { strftime })
    }

    #[must_use]
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Parse the whole of `text`.
    ///
    /// Missing date fields default to 1970-01-01 and missing time fields to
    /// midnight. Fields present in the text always win.
    pub fn parse(&self, text: &str) -> Result<ParsedDate, ParseError> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, text, StrftimeItems::new(&self.strftime))?;

        // set_* rejects a value that differs from one already parsed; that
        // rejection is what keeps the parsed field.
        if parsed.to_naive_date().is_err() {
            let _ = parsed.set_year(1970);
            let _ = parsed.set_month(1);
            let _ = parsed.set_day(1);
        }
        if parsed.to_naive_time().is_err() {
            let _ = parsed.set_hour(0);
            let _ = parsed.set_minute(0);
            let _ = parsed.set_second(0);
        }

        if let Ok(zoned) = parsed.to_datetime() {
            return Ok(ParsedDate::Zoned(zoned));
        }
        let date = parsed.to_naive_date()?;
        let time = parsed.to_naive_time()?;
        Ok(ParsedDate::Local(date.and_time(time)))
    }
}

fn translate(pattern: &str) -> Result<String, PatternError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            i = copy_quoted(&chars, i, &mut out)
                .ok_or_else(|| PatternError::UnterminatedQuote(pattern.to_string()))?;
            continue;
        }
        if !c.is_ascii_alphabetic() {
            out.push(c);
            i += 1;
            continue;
        }
        let run = chars[i..].iter().take_while(|&&n| n == c).count();
        let spec = match (c, run) {
            ('y', 2) => "%y",
            ('y', _) => "%Y",
            ('M' | 'L', 1 | 2) => "%m",
            ('M' | 'L', 3) => "%b",
            ('M' | 'L', _) => "%B",
            ('d', _) => "%d",
            ('H', _) => "%H",
            ('h', _) => "%I",
            ('m', _) => "%M",
            ('s', _) => "%S",
            ('S', 1..=3) => "%3f",
            ('S', 4..=6) => "%6f",
            ('S', _) => "%9f",
            ('a', _) => "%p",
            ('E', 1..=3) => "%a",
            ('E', _) => "%A",
            ('z' | 'Z' | 'X', _) => "%z",
            _ => {
                return Err(PatternError::UnsupportedLetter {
                    letter: c,
                    pattern: pattern.to_string(),
                });
            }
        };
        out.push_str(spec);
        i += run;
    }
    Ok(out)
}

/// Copy the quoted section starting at `start` and return the index after
/// its closing quote. `''` is an escaped quote, inside or outside a section.
fn copy_quoted(chars: &[char], start: usize, out: &mut String) -> Option<usize> {
    if chars.get(start + 1) == Some(&'\'') {
        out.push('\'');
        return Some(start + 2);
    }
    let mut i = start + 1;
    loop {
        match chars.get(i)? {
            '\'' if chars.get(i + 1) == Some(&'\'') => {
                out.push('\'');
                i += 2;
            }
            '\'' => return Some(i + 1),
            c => {
                out.push(*c);
                i += 1;
            }
        }
    }
}

//! Named resources: charsets, time zones and locales.
//!
//! These are simple name-to-object lookups. Each `parse`/`for_name` returns
//! `None` when the name is not recognised.

use std::fmt;

use chrono::{FixedOffset, Offset, Utc};

/// Character encodings supported for text to byte-sequence conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    #[default]
    Utf8,
    UsAscii,
    Iso8859_1,
    Utf16Be,
    Utf16Le,
    /// Big-endian with a leading byte-order mark.
    Utf16,
}

impl Charset {
    /// Case-insensitive lookup by canonical name or common alias.
    #[must_use]
    pub fn for_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        let charset = match normalized.as_str() {
            "utf-8" | "utf8" => Charset::Utf8,
            "us-ascii" | "ascii" | "iso646-us" => Charset::UsAscii,
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" | "l1" => Charset::Iso8859_1,
            "utf-16be" | "utf16be" => Charset::Utf16Be,
            "utf-16le" | "utf16le" => Charset::Utf16Le,
            "utf-16" | "utf16" => Charset::Utf16,
            _ => return None,
        };
        Some(charset)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::UsAscii => "US-ASCII",
            Charset::Iso8859_1 => "ISO-8859-1",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Utf16 => "UTF-16",
        }
    }

    /// Encode `text`, failing on the first character the charset cannot map.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, UnmappableChar> {
        match self {
            Charset::Utf8 => Ok(text.as_bytes().to_vec()),
            Charset::UsAscii => encode_single_byte(text, 0x7f, self),
            Charset::Iso8859_1 => encode_single_byte(text, 0xff, self),
            Charset::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            Charset::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Charset::Utf16 => {
                let mut out = vec![0xfe, 0xff];
                out.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
                Ok(out)
            }
        }
    }
}

fn encode_single_byte(text: &str, max: u32, charset: Charset) -> Result<Vec<u8>, UnmappableChar> {
    text.chars()
        .map(|c| {
            let code = u32::from(c);
            if code <= max {
                Ok(code as u8)
            } else {
                Err(UnmappableChar { ch: c, charset })
            }
        })
        .collect()
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("character {ch:?} cannot be encoded in {charset}")]
pub struct UnmappableChar {
    pub ch: char,
    pub charset: Charset,
}

/// A time zone identified by a fixed UTC offset or the system zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneId {
    System,
    Fixed(FixedOffset),
}

impl TimeZoneId {
    /// Greenwich: the zone unknown names fall back to.
    #[must_use]
    pub fn gmt() -> Self {
        TimeZoneId::Fixed(Utc.fix())
    }

    /// Recognises `UTC`, `GMT`, `Z`, `local`/`system`, and offsets written as
    /// `GMT+8`, `UTC-05:30`, `+0800` or `+08:00`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        let upper = name.to_ascii_uppercase();
        match upper.as_str() {
            "UTC" | "GMT" | "Z" | "UT" => return Some(Self::gmt()),
            "LOCAL" | "SYSTEM" => return Some(TimeZoneId::System),
            _ => {}
        }
        let offset = upper
            .strip_prefix("GMT")
            .or_else(|| upper.strip_prefix("UTC"))
            .unwrap_or(&upper);
        parse_offset(offset).map(TimeZoneId::Fixed)
    }
}

fn parse_offset(text: &str) -> Option<FixedOffset> {
    let (sign, rest) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() > 2 => rest.split_at(rest.len() - 2),
        None => (rest, "0"),
    };
    if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneId::System => f.write_str("system"),
            TimeZoneId::Fixed(offset) if offset.local_minus_utc() == 0 => f.write_str("GMT"),
            TimeZoneId::Fixed(offset) => write!(f, "GMT{offset}"),
        }
    }
}

/// A locale tag: language, optional country and variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: Option<String>,
    variant: Option<String>,
}

impl Locale {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            country: None,
            variant: None,
        }
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into().to_ascii_uppercase());
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Splits `lang[_COUNTRY[_variant]]` on underscores. Extra segments stay
    /// in the variant.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }
        let mut parts = tag.splitn(3, '_');
        let language = parts.next()?;
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let mut locale = Locale::new(language);
        if let Some(country) = parts.next().filter(|c| !c.is_empty()) {
            locale = locale.with_country(country);
        }
        if let Some(variant) = parts.next().filter(|v| !v.is_empty()) {
            locale = locale.with_variant(variant);
        }
        Some(locale)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    #[must_use]
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(country) = &self.country {
            write!(f, "_{country}")?;
        }
        if let Some(variant) = &self.variant {
            write!(f, "_{variant}")?;
        }
        Ok(())
    }
}

//! Name resolution for charsets, time zones and locales.

use recast_types::{Charset, Locale, TimeZoneId};
use thiserror::Error;

/// Looks a named resource up, or reports that the name is unknown.
pub trait NameResolver {
    type Resource;

    /// What the resolver looks up, for error messages.
    const KIND: &'static str;

    fn resolve(&self, name: &str) -> Option<Self::Resource>;

    /// Like [`NameResolver::resolve`], with empty and unknown names told apart.
    fn require(&self, name: &str) -> Result<Self::Resource, ResolveError> {
        if name.trim().is_empty() {
            return Err(ResolveError::Empty(Self::KIND));
        }
        self.resolve(name).ok_or_else(|| ResolveError::Unknown {
            kind: Self::KIND,
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("the {0} name is empty")]
    Empty(&'static str),
    #[error("unknown {kind}: {name}")]
    Unknown { kind: &'static str, name: String },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Charsets;

impl NameResolver for Charsets {
    type Resource = Charset;
    const KIND: &'static str = "charset";

    fn resolve(&self, name: &str) -> Option<Charset> {
        Charset::for_name(name)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeZones;

impl NameResolver for TimeZones {
    type Resource = TimeZoneId;
    const KIND: &'static str = "time zone";

    fn resolve(&self, name: &str) -> Option<TimeZoneId> {
        TimeZoneId::parse(name)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Locales;

impl NameResolver for Locales {
    type Resource = Locale;
    const KIND: &'static str = "locale";

    fn resolve(&self, name: &str) -> Option<Locale> {
        Locale::parse(name)
    }
}

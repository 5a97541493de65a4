//! Charset, time zone and locale lookups.

use recast_core::{Caster, ResolveError};
use recast_types::{Charset, Locale, TimeZoneId};

#[test]
fn charsets() {
    assert_eq!(Caster::to_charset("ISO-8859-1"), Ok(Charset::Iso8859_1));
    assert_eq!(Caster::to_charset("utf_16le"), Ok(Charset::Utf16Le));
    assert_eq!(Caster::to_charset(""), Err(ResolveError::Empty("charset")));
    assert_eq!(
        Caster::to_charset("x-unknown").unwrap_err().to_string(),
        "unknown charset: x-unknown"
    );
    assert_eq!(Caster::to_charset_or("x-unknown", Charset::UsAscii), Charset::UsAscii);
}

#[test]
fn unknown_time_zone_is_gmt() {
    assert_eq!(Caster::to_time_zone("Mars/Olympus"), Ok(TimeZoneId::gmt()));
    assert_eq!(Caster::to_time_zone("UTC"), Ok(TimeZoneId::gmt()));
    assert!(Caster::to_time_zone("GMT+8").is_ok_and(|tz| tz != TimeZoneId::gmt()));
}

/// Region IDs are not in the zone table.
#[test]
fn region_ids_resolve_to_gmt() {
    assert_eq!(Caster::to_time_zone("America/New_York"), Ok(TimeZoneId::gmt()));
    assert_eq!(
        Caster::to_time_zone_or("America/New_York", TimeZoneId::System),
        TimeZoneId::gmt()
    );
}

#[test]
fn empty_time_zone() {
    assert_eq!(Caster::to_time_zone(""), Err(ResolveError::Empty("time zone")));
    assert_eq!(
        Caster::to_time_zone_or(" ", TimeZoneId::System),
        TimeZoneId::System
    );
    assert_eq!(
        Caster::to_time_zone_or("nowhere", TimeZoneId::System),
        TimeZoneId::gmt()
    );
}

#[test]
fn locales() {
    let fallback = Locale::new("en");
    let locale = Caster::to_locale_or("pt_BR", fallback.clone());
    assert_eq!(locale.language(), "pt");
    assert_eq!(locale.country(), Some("BR"));
    assert_eq!(Caster::to_locale_or("", fallback.clone()), fallback);
    assert_eq!(Caster::to_locale_or("12_34", fallback.clone()), fallback);
}

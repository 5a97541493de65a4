use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use recast_types::{CastError, DateKind, Temporal, Value, ValueKind};

use super::pattern::{DatePattern, ParsedDate};
use super::{ConvertTo, Converter, unsupported};
use crate::numeric;

/// Instants from dates, calendars, temporals, epoch milliseconds and text.
///
/// Text is parsed with `pattern`. Wall-clock values without an offset are
/// read in the system zone.
#[derive(Debug, Clone, Copy)]
pub struct DateConverter<'a> {
    pattern: &'a str,
}

impl<'a> DateConverter<'a> {
    #[must_use]
    pub fn new(pattern: &'a str) -> Self {
        Self { pattern }
    }

    fn parse_text(&self, text: &str) -> Result<DateTime<Utc>, CastError> {
        let failure = || CastError::new(ValueKind::Text, DateKind::Generic);
        let pattern = DatePattern::compile(self.pattern).map_err(|e| failure().with_cause(e))?;
        match pattern.parse(text) {
            Ok(ParsedDate::Zoned(zoned)) => Ok(zoned.with_timezone(&Utc)),
            Ok(ParsedDate::Local(naive)) => Ok(anchor_local(naive)),
            Err(e) => Err(failure()
                .with_message(format!(
                    "the string [{text}] does not match the pattern [{}]",
                    self.pattern
                ))
                .with_cause(e)),
        }
    }
}

impl Converter for DateConverter<'_> {
    type Output = DateTime<Utc>;

    fn convert(&self, value: &Value) -> Result<Option<DateTime<Utc>>, CastError> {
        let instant = match value {
            Value::Null => return Ok(None),
            Value::Date(date) => *date,
            Value::Calendar(calendar) => calendar.with_timezone(&Utc),
            Value::Text(text) => self.parse_text(text)?,
            Value::Number(n) => {
                let millis = numeric::truncated_long(n);
                DateTime::from_timestamp_millis(millis).ok_or_else(|| {
                    CastError::new(n.width(), DateKind::Generic)
                        .with_message(format!("{millis} ms is outside the supported date range"))
                })?
            }
            Value::Temporal(temporal) => instant_of(temporal),
            other => return Err(unsupported(other, DateKind::Generic)),
        };
        Ok(Some(instant))
    }
}

/// Projects the instant onto the system zone for the date-only, time-only and
/// timestamp kinds.
impl ConvertTo<DateKind> for DateConverter<'_> {
    type Output = Temporal;

    fn convert_to(&self, value: &Value, kind: &DateKind) -> Result<Option<Temporal>, CastError> {
        let Some(instant) = self.convert(value)? else {
            return Ok(None);
        };
        let local = instant.with_timezone(&Local);
        let projected = match kind {
            DateKind::Generic => Temporal::Instant(instant),
            DateKind::DateOnly => Temporal::LocalDate(local.date_naive()),
            DateKind::TimeOnly => Temporal::LocalTime(local.time()),
            DateKind::Timestamp => Temporal::LocalDateTime(local.naive_local()),
        };
        Ok(Some(projected))
    }
}

/// The instant a temporal value denotes.
///
/// Dates without a time are read as the start of that day and times without
/// a date as that time today.
#[must_use]
pub fn instant_of(temporal: &Temporal) -> DateTime<Utc> {
    match *temporal {
        Temporal::Instant(instant) => instant,
        Temporal::Offset(zoned) => zoned.with_timezone(&Utc),
        Temporal::LocalDateTime(naive) => anchor_local(naive),
        Temporal::LocalDate(date) => anchor_local(date.and_time(NaiveTime::MIN)),
        Temporal::LocalTime(time) => anchor_local(Local::now().date_naive().and_time(time)),
        Temporal::OffsetTime(time, offset) => {
            let today = Utc::now().with_timezone(&offset).date_naive();
            anchor_fixed(today.and_time(time), offset)
        }
    }
}

fn anchor_fixed(naive: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    Utc.from_utc_datetime(&(naive - offset))
}

/// Read wall-clock fields in the system zone. An ambiguous time takes the
/// earlier instant; a time skipped by a transition takes the offset in effect
/// after it.
fn anchor_local(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(local) | LocalResult::Ambiguous(local, _) => local.with_timezone(&Utc),
        LocalResult::None => anchor_fixed(naive, Local.offset_from_utc_datetime(&naive).fix()),
    }
}

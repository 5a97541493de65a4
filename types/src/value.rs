//! Dynamically typed source values.

use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc,
};
use num_bigint::BigInt;

use crate::enums::EnumValue;
use crate::lob::{BinaryHandle, BinaryStream, TextHandle};
use crate::shape::NumericWidth;

/// An input value whose type is only known at runtime.
///
/// Conversions borrow values and never mutate them. The one exception is
/// [`Value::Stream`], whose reader is consumed by the first drain.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Char(char),
    Text(String),
    Number(Number),
    Bytes(Vec<u8>),
    /// An ordered sequence or collection of values.
    Array(Vec<Value>),
    Enum(EnumValue),
    /// An instant; the "already a date" case.
    Date(DateTime<Utc>),
    /// A calendar record: wall-clock fields in the system zone.
    Calendar(DateTime<Local>),
    Temporal(Temporal),
    TextObject(TextHandle),
    BinaryObject(BinaryHandle),
    Stream(BinaryStream),
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Char(_) => ValueKind::Char,
            Value::Text(_) => ValueKind::Text,
            Value::Number(n) => ValueKind::Number(n.width()),
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Array(_) => ValueKind::Array,
            Value::Enum(_) => ValueKind::Enum,
            Value::Date(_) => ValueKind::Date,
            Value::Calendar(_) => ValueKind::Calendar,
            Value::Temporal(t) => ValueKind::Temporal(t.kind()),
            Value::TextObject(_) => ValueKind::TextObject,
            Value::BinaryObject(_) => ValueKind::BinaryObject,
            Value::Stream(_) => ValueKind::Stream,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// The default text form of a value.
///
/// Arrays render as `[a, b]`, byte sequences as lowercase hex with a `0x`
/// prefix, enums as their display label and instants as RFC 3339.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bytes(bytes) => {
                f.write_str("0x")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Enum(e) => write!(f, "{e}"),
            Value::Date(d) => f.write_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::Calendar(c) => f.write_str(&c.to_rfc3339_opts(SecondsFormat::Millis, false)),
            Value::Temporal(t) => write!(f, "{t}"),
            Value::TextObject(_) => f.write_str("<text object>"),
            Value::BinaryObject(_) => f.write_str("<binary object>"),
            Value::Stream(_) => f.write_str("<binary stream>"),
        }
    }
}

/// A numeric value in one of the supported widths.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    BigInt(BigInt),
    Decimal(BigDecimal),
}

impl Number {
    #[must_use]
    pub const fn width(&self) -> NumericWidth {
        match self {
            Number::Byte(_) => NumericWidth::Byte,
            Number::Short(_) => NumericWidth::Short,
            Number::Int(_) => NumericWidth::Int32,
            Number::Long(_) => NumericWidth::Int64,
            Number::Float(_) => NumericWidth::Float32,
            Number::Double(_) => NumericWidth::Float64,
            Number::BigInt(_) => NumericWidth::BigInteger,
            Number::Decimal(_) => NumericWidth::BigDecimal,
        }
    }
}

/// Floats keep a trailing `.0` when integral so `1.0` never reads as an integer.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Byte(v) => write!(f, "{v}"),
            Number::Short(v) => write!(f, "{v}"),
            Number::Int(v) => write!(f, "{v}"),
            Number::Long(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v:?}"),
            Number::Double(v) => write!(f, "{v:?}"),
            Number::BigInt(v) => write!(f, "{v}"),
            Number::Decimal(v) => write!(f, "{v}"),
        }
    }
}

/// Date/time values that have no canonical instant until normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    Instant(DateTime<Utc>),
    Offset(DateTime<FixedOffset>),
    LocalDateTime(NaiveDateTime),
    LocalDate(NaiveDate),
    LocalTime(NaiveTime),
    OffsetTime(NaiveTime, FixedOffset),
}

impl Temporal {
    #[must_use]
    pub const fn kind(&self) -> TemporalKind {
        match self {
            Temporal::Instant(_) => TemporalKind::Instant,
            Temporal::Offset(_) => TemporalKind::Offset,
            Temporal::LocalDateTime(_) => TemporalKind::LocalDateTime,
            Temporal::LocalDate(_) => TemporalKind::LocalDate,
            Temporal::LocalTime(_) => TemporalKind::LocalTime,
            Temporal::OffsetTime(..) => TemporalKind::OffsetTime,
        }
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temporal::Instant(d) => f.write_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Temporal::Offset(d) => f.write_str(&d.to_rfc3339_opts(SecondsFormat::Millis, false)),
            Temporal::LocalDateTime(d) => write!(f, "{}", d.format("%Y-%m-%dT%H:%M:%S%.3f")),
            Temporal::LocalDate(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Temporal::LocalTime(t) => write!(f, "{}", t.format("%H:%M:%S%.3f")),
            Temporal::OffsetTime(t, offset) => {
                write!(f, "{}{offset}", t.format("%H:%M:%S%.3f"))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    Instant,
    Offset,
    LocalDateTime,
    LocalDate,
    LocalTime,
    OffsetTime,
}

/// The concrete shape of a source value, used in failure reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Char,
    Text,
    Number(NumericWidth),
    Bytes,
    Array,
    Enum,
    Date,
    Calendar,
    Temporal(TemporalKind),
    TextObject,
    BinaryObject,
    Stream,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Boolean",
            ValueKind::Char => "Character",
            ValueKind::Text => "Text",
            ValueKind::Number(width) => width.as_str(),
            ValueKind::Bytes => "ByteSequence",
            ValueKind::Array => "Array",
            ValueKind::Enum => "Enum",
            ValueKind::Date => "DateTime",
            ValueKind::Calendar => "Calendar",
            ValueKind::Temporal(TemporalKind::Instant) => "Instant",
            ValueKind::Temporal(TemporalKind::Offset) => "OffsetDateTime",
            ValueKind::Temporal(TemporalKind::LocalDateTime) => "LocalDateTime",
            ValueKind::Temporal(TemporalKind::LocalDate) => "LocalDate",
            ValueKind::Temporal(TemporalKind::LocalTime) => "LocalTime",
            ValueKind::Temporal(TemporalKind::OffsetTime) => "OffsetTime",
            ValueKind::TextObject => "TextObject",
            ValueKind::BinaryObject => "BinaryObject",
            ValueKind::Stream => "BinaryStream",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Conversions into Value
// ============================================================================

macro_rules! value_from_number {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Number {
                fn from(v: $t) -> Self {
                    Number::$variant(v)
                }
            }

            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Number(Number::$variant(v))
                }
            }
        )*
    };
}

value_from_number!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    BigInt => BigInt,
    BigDecimal => Decimal,
);

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Value::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<EnumValue> for Value {
    fn from(v: EnumValue) -> Self {
        Value::Enum(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Local>> for Value {
    fn from(v: DateTime<Local>) -> Self {
        Value::Calendar(v)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Value::Temporal(Temporal::Offset(v))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Temporal(Temporal::LocalDateTime(v))
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Temporal(Temporal::LocalDate(v))
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Value::Temporal(Temporal::LocalTime(v))
    }
}

impl From<Temporal> for Value {
    fn from(v: Temporal) -> Self {
        Value::Temporal(v)
    }
}

impl From<TextHandle> for Value {
    fn from(v: TextHandle) -> Self {
        Value::TextObject(v)
    }
}

impl From<BinaryHandle> for Value {
    fn from(v: BinaryHandle) -> Self {
        Value::BinaryObject(v)
    }
}

impl From<BinaryStream> for Value {
    fn from(v: BinaryStream) -> Self {
        Value::Stream(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

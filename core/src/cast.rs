//! The dispatch facade.
//!
//! Every target shape has a strict entry point returning
//! `Result<Option<T>, CastError>` (`Ok(None)` for a null source) and a
//! defaulted `*_or` entry point that returns the caller's default instead of
//! failing. Boolean, character and fixed-width numeric shapes also have a
//! `*_value` form that defaults to the shape's zero value.
//!
//! Defaulted forms contain panics as well as errors, so they never unwind
//! into the caller.

use std::panic::{self, AssertUnwindSafe};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use recast_types::{
    BigDecimal, BigInt, CastEnum, CastError, CastOptions, Charset, DateKind, EnumType, EnumValue,
    Locale, Number, NumericWidth, Shape, Temporal, TimeZoneId, Value, ValueKind,
};

use crate::convert::{
    BooleanConverter, BytesConverter, CharacterConverter, ConvertTo, Converter, DateConverter,
    EnumConverter, NumberConverter, TextConverter,
};
use crate::resolve::{Charsets, Locales, NameResolver, ResolveError, TimeZones};

/// Run a strict conversion, substituting `default` for a failure, a null
/// result or a panic.
fn or_default<T>(strict: impl FnOnce() -> Result<Option<T>, CastError>, default: T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(strict)) {
        Ok(Ok(Some(value))) => value,
        _ => default,
    }
}

/// Converts values between shapes under a fixed set of [`CastOptions`].
///
/// A `Caster` holds no mutable state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Caster {
    options: CastOptions,
}

macro_rules! numeric_entry_points {
    ($($width:ident => $variant:ident: $t:ty, $strict:ident, $or:ident $(, $value:ident = $zero:expr)?;)*) => {
        $(
            #[doc = concat!("Convert to `", stringify!($t), "` through the numeric policy.")]
            pub fn $strict(&self, value: &Value) -> Result<Option<$t>, CastError> {
                match NumberConverter.convert_to(value, &NumericWidth::$width)? {
                    Some(Number::$variant(n)) => Ok(Some(n)),
                    Some(other) => Err(CastError::new(other.width(), NumericWidth::$width)),
                    None => Ok(None),
                }
            }

            #[must_use]
            pub fn $or(&self, value: &Value, default: $t) -> $t {
                or_default(|| self.$strict(value), default)
            }

            $(
                #[must_use]
                pub fn $value(&self, value: &Value) -> $t {
                    self.$or(value, $zero)
                }
            )?
        )*
    };
}

macro_rules! date_entry_points {
    ($($kind:ident => $variant:ident: $t:ty, $strict:ident, $with:ident, $or:ident;)*) => {
        $(
            #[doc = concat!("Convert to `", stringify!($t), "` in the system zone, parsing text with the configured pattern.")]
            pub fn $strict(&self, value: &Value) -> Result<Option<$t>, CastError> {
                self.$with(value, "")
            }

            /// Like the strict form, parsing text with `pattern`. An empty
            /// pattern means the configured one.
            pub fn $with(&self, value: &Value, pattern: &str) -> Result<Option<$t>, CastError> {
                match DateConverter::new(self.pattern_or_default(pattern))
                    .convert_to(value, &DateKind::$kind)?
                {
                    Some(Temporal::$variant(v)) => Ok(Some(v)),
                    Some(other) => Err(CastError::new(
                        ValueKind::Temporal(other.kind()),
                        DateKind::$kind,
                    )),
                    None => Ok(None),
                }
            }

            #[must_use]
            pub fn $or(&self, value: &Value, default: $t) -> $t {
                or_default(|| self.$strict(value), default)
            }
        )*
    };
}

impl Caster {
    #[must_use]
    pub fn new(options: CastOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &CastOptions {
        &self.options
    }

    fn pattern_or_default<'a>(&'a self, pattern: &'a str) -> &'a str {
        if pattern.is_empty() {
            self.options.date_pattern()
        } else {
            pattern
        }
    }

    fn bytes_converter(&self) -> BytesConverter {
        BytesConverter::new(self.options.charset())
    }

    // ------------------------------------------------------------------------
    // Boolean, character, text
    // ------------------------------------------------------------------------

    pub fn to_bool(&self, value: &Value) -> Result<Option<bool>, CastError> {
        BooleanConverter.convert(value)
    }

    #[must_use]
    pub fn to_bool_or(&self, value: &Value, default: bool) -> bool {
        or_default(|| self.to_bool(value), default)
    }

    #[must_use]
    pub fn to_bool_value(&self, value: &Value) -> bool {
        self.to_bool_or(value, false)
    }

    pub fn to_char(&self, value: &Value) -> Result<Option<char>, CastError> {
        CharacterConverter.convert(value)
    }

    #[must_use]
    pub fn to_char_or(&self, value: &Value, default: char) -> char {
        or_default(|| self.to_char(value), default)
    }

    #[must_use]
    pub fn to_char_value(&self, value: &Value) -> char {
        self.to_char_or(value, '\0')
    }

    pub fn to_str(&self, value: &Value) -> Result<Option<String>, CastError> {
        TextConverter.convert(value)
    }

    #[must_use]
    pub fn to_str_or(&self, value: &Value, default: impl Into<String>) -> String {
        let default = default.into();
        or_default(|| self.to_str(value), default)
    }

    // ------------------------------------------------------------------------
    // Numbers
    // ------------------------------------------------------------------------

    numeric_entry_points! {
        Byte => Byte: i8, to_byte, to_byte_or, to_byte_value = 0;
        Short => Short: i16, to_short, to_short_or, to_short_value = 0;
        Int32 => Int: i32, to_int, to_int_or, to_int_value = 0;
        Int64 => Long: i64, to_long, to_long_or, to_long_value = 0;
        Float32 => Float: f32, to_float, to_float_or, to_float_value = 0.0;
        Float64 => Double: f64, to_double, to_double_or, to_double_value = 0.0;
        BigInteger => BigInt: BigInt, to_big_integer, to_big_integer_or;
        BigDecimal => Decimal: BigDecimal, to_big_decimal, to_big_decimal_or;
    }

    /// Convert to a number of whatever width the source suggests. Text is
    /// always read as a 64-bit float.
    pub fn to_number(&self, value: &Value) -> Result<Option<Number>, CastError> {
        NumberConverter.convert(value)
    }

    #[must_use]
    pub fn to_number_or(&self, value: &Value, default: Number) -> Number {
        or_default(|| self.to_number(value), default)
    }

    // ------------------------------------------------------------------------
    // Byte sequences
    // ------------------------------------------------------------------------

    /// Text is encoded in the configured charset.
    pub fn to_bytes(&self, value: &Value) -> Result<Option<Vec<u8>>, CastError> {
        self.bytes_converter().convert(value)
    }

    #[must_use]
    pub fn to_bytes_or(&self, value: &Value, default: Vec<u8>) -> Vec<u8> {
        or_default(|| self.to_bytes(value), default)
    }

    // ------------------------------------------------------------------------
    // Dates
    // ------------------------------------------------------------------------

    /// Convert to an instant, parsing text with the configured pattern.
    pub fn to_date(&self, value: &Value) -> Result<Option<DateTime<Utc>>, CastError> {
        self.to_date_with(value, "")
    }

    /// Convert to an instant, parsing text with `pattern`. An empty pattern
    /// means the configured one.
    pub fn to_date_with(
        &self,
        value: &Value,
        pattern: &str,
    ) -> Result<Option<DateTime<Utc>>, CastError> {
        DateConverter::new(self.pattern_or_default(pattern)).convert(value)
    }

    #[must_use]
    pub fn to_date_or(&self, value: &Value, default: DateTime<Utc>) -> DateTime<Utc> {
        or_default(|| self.to_date(value), default)
    }

    #[must_use]
    pub fn to_date_with_or(
        &self,
        value: &Value,
        pattern: &str,
        default: DateTime<Utc>,
    ) -> DateTime<Utc> {
        or_default(|| self.to_date_with(value, pattern), default)
    }

    date_entry_points! {
        DateOnly => LocalDate: NaiveDate, to_local_date, to_local_date_with, to_local_date_or;
        TimeOnly => LocalTime: NaiveTime, to_local_time, to_local_time_with, to_local_time_or;
        Timestamp => LocalDateTime: NaiveDateTime, to_timestamp, to_timestamp_with, to_timestamp_or;
    }

    // ------------------------------------------------------------------------
    // Enums
    // ------------------------------------------------------------------------

    pub fn to_enum(&self, value: &Value, ty: &EnumType) -> Result<Option<EnumValue>, CastError> {
        EnumConverter.convert_to(value, ty)
    }

    #[must_use]
    pub fn to_enum_or(&self, value: &Value, ty: &EnumType, default: EnumValue) -> EnumValue {
        or_default(|| self.to_enum(value, ty), default)
    }

    /// Convert to a native enum through its [`CastEnum`] descriptor.
    pub fn to_variant<E: CastEnum>(&self, value: &Value) -> Result<Option<E>, CastError> {
        let ty = E::enum_type();
        let Some(variant) = self.to_enum(value, &ty)? else {
            return Ok(None);
        };
        E::from_ordinal(variant.ordinal()).map(Some).ok_or_else(|| {
            CastError::new(value.kind(), Shape::Enum(ty.clone())).with_message(format!(
                "{ty} declares no variant at ordinal {}",
                variant.ordinal()
            ))
        })
    }

    #[must_use]
    pub fn to_variant_or<E: CastEnum>(&self, value: &Value, default: E) -> E {
        or_default(|| self.to_variant(value), default)
    }

    // ------------------------------------------------------------------------
    // Arrays
    // ------------------------------------------------------------------------

    /// Convert every element of an array to `element`, keeping nulls.
    ///
    /// Fails on the first element that cannot be converted, including an
    /// element the element shape has no route for.
    pub fn to_array(&self, value: &Value, element: &Shape) -> Result<Option<Vec<Value>>, CastError> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Null => Ok(Value::Null),
                    item => self
                        .try_convert(item, element)?
                        .ok_or_else(|| CastError::new(item.kind(), element)),
                })
                .collect::<Result<Vec<_>, CastError>>()
                .map(Some),
            other => Err(CastError::new(other.kind(), Shape::array_of(element.clone()))),
        }
    }

    #[must_use]
    pub fn to_array_or(&self, value: &Value, element: &Shape, default: Vec<Value>) -> Vec<Value> {
        or_default(|| self.to_array(value, element), default)
    }

    // ------------------------------------------------------------------------
    // Named resources
    // ------------------------------------------------------------------------

    /// Resolve a charset name, failing on an empty or unknown name.
    pub fn to_charset(name: &str) -> Result<Charset, ResolveError> {
        Charsets.require(name)
    }

    #[must_use]
    pub fn to_charset_or(name: &str, default: Charset) -> Charset {
        Charsets.resolve(name).unwrap_or(default)
    }

    /// Resolve a time zone name. Unknown names resolve to GMT; only an empty
    /// name fails.
    ///
    /// Only fixed offsets and the system zone are known. Region IDs such as
    /// `America/New_York` are not resolved and so also give GMT.
    pub fn to_time_zone(name: &str) -> Result<TimeZoneId, ResolveError> {
        match TimeZones.require(name) {
            Err(ResolveError::Unknown { .. }) => Ok(TimeZoneId::gmt()),
            other => other,
        }
    }

    /// Like [`Caster::to_time_zone`], with `default` for an empty name. A
    /// region ID gives GMT, not `default`.
    #[must_use]
    pub fn to_time_zone_or(name: &str, default: TimeZoneId) -> TimeZoneId {
        if name.trim().is_empty() {
            return default;
        }
        TimeZones.resolve(name).unwrap_or_else(TimeZoneId::gmt)
    }

    #[must_use]
    pub fn to_locale_or(name: &str, default: Locale) -> Locale {
        Locales.resolve(name).unwrap_or(default)
    }

    // ------------------------------------------------------------------------
    // Generic dispatch
    // ------------------------------------------------------------------------

    /// Convert `value` to `shape`, routing by the shape's tag.
    ///
    /// A null source gives the shape's zero value, and a source that already
    /// has the shape is returned as is. An array shape with a non-array
    /// source gives `Ok(None)`.
    pub fn try_convert(&self, value: &Value, shape: &Shape) -> Result<Option<Value>, CastError> {
        if value.is_null() {
            tracing::trace!(%shape, "null source, using zero value");
            return Ok(shape.zero_value());
        }
        if shape.accepts(value) {
            tracing::trace!(%shape, "source already has target shape");
            return Ok(Some(value.clone()));
        }
        tracing::trace!(from = %value.kind(), to = %shape, "routing conversion");

        let converted = match shape {
            Shape::Boolean => self.to_bool(value)?.map(Value::Bool),
            Shape::Character => self.to_char(value)?.map(Value::Char),
            Shape::Text => self.to_str(value)?.map(Value::Text),
            Shape::Number(width) => NumberConverter.convert_to(value, width)?.map(Value::Number),
            Shape::ByteSequence => self.to_bytes(value)?.map(Value::Bytes),
            Shape::DateTime(DateKind::Generic) => self.to_date(value)?.map(Value::Date),
            Shape::DateTime(kind) => DateConverter::new(self.options.date_pattern())
                .convert_to(value, kind)?
                .map(Value::Temporal),
            Shape::Enum(ty) => self.to_enum(value, ty)?.map(Value::Enum),
            Shape::Array(element) => match value {
                Value::Array(_) => self.to_array(value, element)?.map(Value::Array),
                _ => {
                    tracing::trace!(from = %value.kind(), to = %shape, "no route");
                    None
                }
            },
        };
        Ok(converted)
    }

    /// [`Caster::try_convert`] with every failure mapped to `None`. Never
    /// fails and never panics.
    #[must_use]
    pub fn convert(&self, value: &Value, shape: &Shape) -> Option<Value> {
        panic::catch_unwind(AssertUnwindSafe(|| self.try_convert(value, shape)))
            .ok()
            .and_then(Result::ok)
            .flatten()
    }
}

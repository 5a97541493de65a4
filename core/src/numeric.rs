//! Numeric policy: narrowing between widths and parsing numeric literals.
//!
//! Narrowing to a fixed width is best effort. Integers keep their low-order
//! bits, floats saturate at the 32-bit range before truncating to a smaller
//! width (64-bit for `Int64`), and nothing fails on overflow.
//!
//! Arbitrary-precision decimals are the exception. A decimal whose scale lies
//! in [-100, 100] truncates like any other source. Outside that range the
//! conversion must be exact, and fails if the value has a fractional part or
//! does not fit the target width.

use std::cmp::Ordering;
use std::error::Error as StdError;
use std::ops::RangeInclusive;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use recast_types::{CastError, Number, NumericWidth, ValueKind};

/// Decimal scales that narrow lossily. Anything outside must convert exactly.
const LOSSY_SCALE: RangeInclusive<i64> = -100..=100;

/// Radix applied to the digits after a leading `0` in big-integer literals.
///
/// Nine, not eight. Existing data was written against this rule, so it is kept
/// until someone confirms the literals were meant to be octal.
pub const LEADING_ZERO_RADIX: u32 = 9;

/// Convert `value` to `width`, returning it unchanged if it already has that width.
pub fn narrow(value: &Number, width: NumericWidth) -> Result<Number, CastError> {
    if value.width() == width {
        return Ok(value.clone());
    }
    let narrowed = match width {
        NumericWidth::Byte => Number::Byte(integral_bits(value, width)? as i8),
        NumericWidth::Short => Number::Short(integral_bits(value, width)? as i16),
        NumericWidth::Int32 => Number::Int(integral_bits(value, width)? as i32),
        NumericWidth::Int64 => Number::Long(integral_bits(value, width)?),
        NumericWidth::Float32 => Number::Float(f32_value(value)),
        NumericWidth::Float64 => Number::Double(f64_value(value)),
        NumericWidth::BigInteger => Number::BigInt(big_integer_value(value)),
        NumericWidth::BigDecimal => Number::Decimal(big_decimal_value(value)?),
    };
    Ok(narrowed)
}

/// [`narrow`] to `Short`, unwrapped.
pub fn short_value(value: &Number) -> Result<i16, CastError> {
    integral_bits(value, NumericWidth::Short).map(|bits| bits as i16)
}

/// The low 64 bits of `value` truncated toward zero, with no scale check.
///
/// Epoch milliseconds are read this way: a decimal of any scale gives a
/// timestamp.
#[must_use]
pub fn truncated_long(value: &Number) -> i64 {
    match value {
        Number::Decimal(v) => decimal_low_bits(v),
        other => lossy_bits(other, NumericWidth::Int64),
    }
}

/// An integer whose low-order bits are the narrowed value for `width`.
fn integral_bits(value: &Number, width: NumericWidth) -> Result<i64, CastError> {
    match value {
        Number::Decimal(v) => decimal_bits(v, width),
        other => Ok(lossy_bits(other, width)),
    }
}

fn lossy_bits(value: &Number, width: NumericWidth) -> i64 {
    let wide = width == NumericWidth::Int64;
    match value {
        Number::Byte(v) => i64::from(*v),
        Number::Short(v) => i64::from(*v),
        Number::Int(v) => i64::from(*v),
        Number::Long(v) => *v,
        Number::Float(v) if wide => *v as i64,
        Number::Float(v) => i64::from(*v as i32),
        Number::Double(v) if wide => *v as i64,
        Number::Double(v) => i64::from(*v as i32),
        Number::BigInt(v) => low_bits(v),
        Number::Decimal(v) => decimal_low_bits(v),
    }
}

/// `10^k` is a multiple of `2^64` once `k >= 64`, so those low bits are zero.
fn decimal_low_bits(value: &BigDecimal) -> i64 {
    let (digits, scale) = value.as_bigint_and_exponent();
    if scale <= -64 {
        return 0;
    }
    low_bits(&truncate(&digits, scale))
}

fn decimal_bits(value: &BigDecimal, width: NumericWidth) -> Result<i64, CastError> {
    let (digits, scale) = value.as_bigint_and_exponent();
    if LOSSY_SCALE.contains(&scale) {
        return Ok(decimal_low_bits(value));
    }
    exact_integer(&digits, scale)
        .filter(|v| fits(*v, width))
        .ok_or_else(|| {
            CastError::new(NumericWidth::BigDecimal, width).with_message(format!(
                "a value with scale {scale} has no exact {width} representation"
            ))
        })
}

fn fits(value: i64, width: NumericWidth) -> bool {
    match width {
        NumericWidth::Byte => i8::try_from(value).is_ok(),
        NumericWidth::Short => i16::try_from(value).is_ok(),
        NumericWidth::Int32 => i32::try_from(value).is_ok(),
        _ => true,
    }
}

/// `digits * 10^-scale` as an `i64`, if it is an integer in range.
fn exact_integer(digits: &BigInt, scale: i64) -> Option<i64> {
    if digits.is_zero() {
        return Some(0);
    }
    match scale.cmp(&0) {
        Ordering::Equal => digits.to_i64(),
        // 10^19 already exceeds i64
        Ordering::Less => {
            let exp = u32::try_from(scale.unsigned_abs()).ok().filter(|e| *e <= 18)?;
            (digits * pow10(exp)).to_i64()
        }
        Ordering::Greater => {
            // 0 < |value| < 1
            if scale.unsigned_abs() > digits.bits() {
                return None;
            }
            let divisor = pow10(u32::try_from(scale).ok()?);
            if !(digits % &divisor).is_zero() {
                return None;
            }
            (digits / divisor).to_i64()
        }
    }
}

/// `digits * 10^-scale` truncated toward zero.
fn truncate(digits: &BigInt, scale: i64) -> BigInt {
    match scale.cmp(&0) {
        Ordering::Equal => digits.clone(),
        Ordering::Less => digits * pow10(u32::try_from(scale.unsigned_abs()).unwrap_or(u32::MAX)),
        Ordering::Greater if scale.unsigned_abs() > digits.bits() => BigInt::zero(),
        Ordering::Greater => u32::try_from(scale).map_or_else(|_| BigInt::zero(), |s| digits / pow10(s)),
    }
}

fn truncate_decimal(value: &BigDecimal) -> BigInt {
    let (digits, scale) = value.as_bigint_and_exponent();
    truncate(&digits, scale)
}

fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

/// The low 64 bits of a two's-complement integer.
fn low_bits(value: &BigInt) -> i64 {
    let bytes = value.to_signed_bytes_le();
    let fill = if value.is_negative() { 0xff } else { 0x00 };
    let mut buf = [fill; 8];
    let n = bytes.len().min(8);
    buf[..n].copy_from_slice(&bytes[..n]);
    i64::from_le_bytes(buf)
}

fn signed_infinity(negative: bool) -> f64 {
    if negative {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

fn f64_value(value: &Number) -> f64 {
    match value {
        Number::Byte(v) => f64::from(*v),
        Number::Short(v) => f64::from(*v),
        Number::Int(v) => f64::from(*v),
        Number::Long(v) => *v as f64,
        Number::Float(v) => f64::from(*v),
        Number::Double(v) => *v,
        Number::BigInt(v) => v.to_f64().unwrap_or_else(|| signed_infinity(v.is_negative())),
        Number::Decimal(v) => v.to_f64().unwrap_or_else(|| signed_infinity(v.is_negative())),
    }
}

fn f32_value(value: &Number) -> f32 {
    match value {
        Number::Byte(v) => f32::from(*v),
        Number::Short(v) => f32::from(*v),
        Number::Int(v) => *v as f32,
        Number::Long(v) => *v as f32,
        Number::Float(v) => *v,
        Number::Double(v) => *v as f32,
        Number::BigInt(_) | Number::Decimal(_) => f64_value(value) as f32,
    }
}

fn big_integer_value(value: &Number) -> BigInt {
    match value {
        Number::BigInt(v) => v.clone(),
        Number::Decimal(v) => truncate_decimal(v),
        Number::Float(v) => BigInt::from(*v as i64),
        Number::Double(v) => BigInt::from(*v as i64),
        Number::Byte(v) => BigInt::from(*v),
        Number::Short(v) => BigInt::from(*v),
        Number::Int(v) => BigInt::from(*v),
        Number::Long(v) => BigInt::from(*v),
    }
}

/// Goes through the default text form, so `0.1f64` becomes exactly `0.1`.
fn big_decimal_value(value: &Number) -> Result<BigDecimal, CastError> {
    match value {
        Number::Decimal(v) => Ok(v.clone()),
        Number::Float(_) | Number::Double(_) => {
            let text = value.to_string();
            BigDecimal::from_str(&text).map_err(|e| {
                CastError::new(value.width(), NumericWidth::BigDecimal)
                    .with_message(format!("{text} has no decimal representation"))
                    .with_cause(e)
            })
        }
        other => Ok(BigDecimal::new(big_integer_value(other), 0)),
    }
}

// ============================================================================
// Literal parsing
// ============================================================================

/// Parse `text` as a literal of `width`.
///
/// A hexadecimal literal (`0x1F`, `0X1F`, `#1F`, optionally preceded by `-`)
/// is decoded as a signed value and must fit the width. Anything else is
/// parsed as a decimal literal: integer syntax for integral widths, decimal
/// or float syntax otherwise. Big integers additionally read a leading `0`
/// as a [`LEADING_ZERO_RADIX`] prefix; a signed literal never starts with
/// `0`, so `-010` is plain decimal.
pub fn parse_text(text: &str, width: NumericWidth) -> Result<Number, CastError> {
    if let Some((negative, digits)) = split_hex_prefix(text) {
        return decode_hex(text, negative, digits, width);
    }
    match width {
        NumericWidth::Byte => parse_with(text, text, width, Number::Byte),
        NumericWidth::Short => parse_with(text, text, width, Number::Short),
        NumericWidth::Int32 => parse_with(text, text, width, Number::Int),
        NumericWidth::Int64 => parse_with(text, text, width, Number::Long),
        NumericWidth::Float32 => parse_float(text, width, Number::Float),
        NumericWidth::Float64 => parse_float(text, width, Number::Double),
        NumericWidth::BigInteger => parse_big_integer(text),
        NumericWidth::BigDecimal => parse_with(text, text, width, Number::Decimal),
    }
}

fn malformed(text: &str, width: NumericWidth) -> CastError {
    CastError::new(ValueKind::Text, width)
        .with_message(format!("the value [{text}] is not a valid {width} literal"))
}

fn parse_with<T>(
    text: &str,
    literal: &str,
    width: NumericWidth,
    wrap: fn(T) -> Number,
) -> Result<Number, CastError>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    literal
        .parse::<T>()
        .map(wrap)
        .map_err(|e| malformed(text, width).with_cause(e))
}

/// Whether a trimmed float literal uses an accepted spelling. Of the named
/// values only `Infinity` and `NaN` are accepted, optionally signed; the
/// lowercase `inf`, `infinity` and `nan` forms are not.
#[must_use]
pub fn is_float_spelling(literal: &str) -> bool {
    let unsigned = literal
        .strip_prefix('-')
        .or_else(|| literal.strip_prefix('+'))
        .unwrap_or(literal);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return matches!(unsigned, "Infinity" | "NaN");
    }
    true
}

fn parse_float<T>(
    text: &str,
    width: NumericWidth,
    wrap: fn(T) -> Number,
) -> Result<Number, CastError>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    let literal = text.trim();
    if !is_float_spelling(literal) {
        return Err(malformed(text, width));
    }
    parse_with(text, literal, width, wrap)
}

/// `Some((negative, digits))` when `text` carries a hex prefix.
fn split_hex_prefix(text: &str) -> Option<(bool, &str)> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .or_else(|| rest.strip_prefix('#'))?;
    Some((negative, digits))
}

fn decode_hex(
    text: &str,
    negative: bool,
    digits: &str,
    width: NumericWidth,
) -> Result<Number, CastError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed(text, width));
    }
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| malformed(text, width))?;
    let value = if negative { -magnitude } else { magnitude };
    let out_of_range = || {
        CastError::new(ValueKind::Text, width)
            .with_message(format!("the value [{text}] is out of {width} range"))
    };
    let number = match width {
        NumericWidth::Byte => Number::Byte(i8::try_from(&value).map_err(|_| out_of_range())?),
        NumericWidth::Short => Number::Short(i16::try_from(&value).map_err(|_| out_of_range())?),
        NumericWidth::Int32 => Number::Int(i32::try_from(&value).map_err(|_| out_of_range())?),
        NumericWidth::Int64 => Number::Long(i64::try_from(&value).map_err(|_| out_of_range())?),
        NumericWidth::Float32 => Number::Float(f64_value(&Number::BigInt(value)) as f32),
        NumericWidth::Float64 => Number::Double(f64_value(&Number::BigInt(value))),
        NumericWidth::BigInteger => Number::BigInt(value),
        NumericWidth::BigDecimal => Number::Decimal(BigDecimal::new(value, 0)),
    };
    Ok(number)
}

fn parse_big_integer(text: &str) -> Result<Number, CastError> {
    let width = NumericWidth::BigInteger;
    // Only an unsigned literal can start with the radix prefix
    let (radix, body) = match text.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => (LEADING_ZERO_RADIX, rest),
        _ => (10, text),
    };
    let (negative, digits) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body.strip_prefix('+').unwrap_or(body)),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(malformed(text, width));
    }
    let magnitude =
        BigInt::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| malformed(text, width))?;
    Ok(Number::BigInt(if negative { -magnitude } else { magnitude }))
}
